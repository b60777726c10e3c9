use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Day of the week a time slot meets on. Stored as the single-letter code
/// (`M`, `T`, `W`, `R`, `F`, `S`, `U`) in the database.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Day {
    #[strum(serialize = "M")]
    Monday,
    #[strum(serialize = "T")]
    Tuesday,
    #[strum(serialize = "W")]
    Wednesday,
    #[strum(serialize = "R")]
    Thursday,
    #[strum(serialize = "F")]
    Friday,
    #[strum(serialize = "S")]
    Saturday,
    #[strum(serialize = "U")]
    Sunday,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn codes_round_trip() {
        for day in Day::iter() {
            assert_eq!(Day::from_str(&day.to_string()).unwrap(), day);
        }
    }

    #[test]
    fn thursday_is_r() {
        assert_eq!(Day::Thursday.to_string(), "R");
        assert!(Day::from_str("X").is_err());
    }
}
