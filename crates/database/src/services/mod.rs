pub mod catalog;
pub mod enrollment;
pub mod people;
pub mod report;
pub mod teaching;

use crate::error::{RegistrarError, Result};

/// Calendar bound shared by every operation that records a term.
pub(crate) fn validate_year(year: i16) -> Result<()> {
    if (1900..=2100).contains(&year) {
        Ok(())
    } else {
        Err(RegistrarError::Validation(format!(
            "year {year} is out of range"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_bounds_are_inclusive() {
        assert!(validate_year(1900).is_ok());
        assert!(validate_year(2100).is_ok());
        assert!(validate_year(1899).is_err());
        assert!(validate_year(2101).is_err());
    }
}
