use sea_orm::{ConnAcquireErr, DbErr, SqlErr};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistrarError>;

/// Error taxonomy for the whole operation surface.
///
/// Every failure is surfaced; reads return `Ok(vec![])` for "no rows" and an
/// error only when the query itself failed.
#[derive(Debug, Error)]
pub enum RegistrarError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("duplicate record: {0}")]
    UniqueViolation(String),

    #[error("dangling reference: {0}")]
    ForeignKeyViolation(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("operation timed out")]
    Timeout,

    #[error("database error: {0}")]
    Db(DbErr),
}

impl RegistrarError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }
}

impl From<DbErr> for RegistrarError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::UniqueViolation(detail),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                Self::ForeignKeyViolation(detail)
            }
            _ => match err {
                DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => Self::Timeout,
                other => Self::Db(other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_timeout_maps_to_timeout() {
        let err: RegistrarError = DbErr::ConnectionAcquire(ConnAcquireErr::Timeout).into();
        assert!(matches!(err, RegistrarError::Timeout));
    }

    #[test]
    fn other_db_errors_pass_through() {
        let err: RegistrarError = DbErr::Custom("boom".to_owned()).into();
        assert!(matches!(err, RegistrarError::Db(_)));
    }
}
