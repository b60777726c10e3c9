use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Term a section is offered in. Stored as its display name in the database.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Semester {
    Spring,
    Summer,
    Fall,
    Winter,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Semester::from_str("fall").unwrap(), Semester::Fall);
        assert_eq!(Semester::from_str("Spring").unwrap(), Semester::Spring);
        assert_eq!(Semester::from_str("WINTER").unwrap(), Semester::Winter);
    }

    #[test]
    fn rejects_unknown_terms() {
        assert!(Semester::from_str("Autumn").is_err());
        assert!(Semester::from_str("").is_err());
    }

    #[test]
    fn round_trips_through_display() {
        for semester in [
            Semester::Spring,
            Semester::Summer,
            Semester::Fall,
            Semester::Winter,
        ] {
            assert_eq!(
                Semester::from_str(&semester.to_string()).unwrap(),
                semester
            );
        }
    }
}
