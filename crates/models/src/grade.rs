use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use thiserror::Error;

/// A letter grade recorded on a completed enrollment: `A+` down to `F`.
///
/// `F` never satisfies a prerequisite, and neither does a missing grade,
/// which is why enrollments store `Option<Grade>` rather than a sentinel
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Grade(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid grade {0:?}, expected a letter A-F with optional +/-")]
pub struct InvalidGrade(pub String);

impl Grade {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything except a plain `F` counts as passing.
    pub fn is_passing(&self) -> bool {
        self.0 != "F"
    }
}

impl FromStr for Grade {
    type Err = InvalidGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next();
        let modifier = chars.next();

        let valid = matches!(letter, Some('A'..='D' | 'F'))
            && match modifier {
                None => true,
                // F has no graded modifiers
                Some('+' | '-') => letter != Some('F') && chars.next().is_none(),
                Some(_) => false,
            };

        if valid {
            Ok(Grade(s.to_string()))
        } else {
            Err(InvalidGrade(s.to_string()))
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Grade {
    type Error = InvalidGrade;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letter_grades() {
        for raw in ["A+", "A", "A-", "B+", "B", "C-", "D", "F"] {
            assert!(raw.parse::<Grade>().is_ok(), "{raw} should parse");
        }
    }

    #[test]
    fn rejects_malformed_grades() {
        for raw in ["E", "G", "AA", "A+-", "F+", "F-", "", "a"] {
            assert!(raw.parse::<Grade>().is_err(), "{raw} should not parse");
        }
    }

    #[test]
    fn only_f_fails() {
        assert!(!"F".parse::<Grade>().unwrap().is_passing());
        assert!("D".parse::<Grade>().unwrap().is_passing());
        assert!("A+".parse::<Grade>().unwrap().is_passing());
    }
}
