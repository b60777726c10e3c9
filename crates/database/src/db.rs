use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::{env, time::Duration};

/// Upper bound for a single SQL statement, applied server-side so no
/// operation can block past it.
const STATEMENT_TIMEOUT_MS: u32 = 5_000;

/// Creates the shared connection pool.
///
/// Reads `DATABASE_URL` from the environment (or a `.env` file). Connection
/// failure is surfaced to the caller; at startup it is fatal.
pub async fn create_connection() -> Result<DatabaseConnection, DbErr> {
    dotenvy::dotenv().ok();
    let url = env::var("DATABASE_URL")
        .map_err(|_| DbErr::Custom("DATABASE_URL is not set".to_owned()))?;

    let mut options = ConnectOptions::new(with_statement_timeout(&url, STATEMENT_TIMEOUT_MS));
    options
        .max_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    Database::connect(options).await
}

/// Appends a Postgres `statement_timeout` startup option to the URL.
fn with_statement_timeout(url: &str, millis: u32) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}options=-c%20statement_timeout%3D{millis}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_option_starts_the_query_string() {
        assert_eq!(
            with_statement_timeout("postgres://localhost/registrar", 5000),
            "postgres://localhost/registrar?options=-c%20statement_timeout%3D5000"
        );
    }

    #[test]
    fn timeout_option_extends_an_existing_query_string() {
        assert_eq!(
            with_statement_timeout("postgres://localhost/registrar?sslmode=disable", 250),
            "postgres://localhost/registrar?sslmode=disable&options=-c%20statement_timeout%3D250"
        );
    }
}
