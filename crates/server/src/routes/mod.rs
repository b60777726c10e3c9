pub mod admin;
pub mod course;
pub mod department;
pub mod enrollment;
pub mod health;
pub mod instructor;
pub mod report;
pub mod root;
pub mod section;
pub mod student;

use crate::error::ApiError;
use database::error::RegistrarError;
use models::Semester;

/// Parses a semester name, mapping failure to a `Validation` error.
pub fn parse_semester(raw: &str) -> Result<Semester, ApiError> {
    raw.parse::<Semester>().map_err(|_| {
        ApiError(RegistrarError::Validation(format!(
            "unknown semester {raw:?}"
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semester_names_parse_case_insensitively() {
        assert_eq!(parse_semester("fall").unwrap(), Semester::Fall);
        assert!(parse_semester("Autumn").is_err());
    }
}
