//! Year and semester value types used to locate a slot

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest year of study a plan can hold
pub const MAX_YEAR: u8 = 4;

/// Highest semester within a year (3 and 4 are special terms)
pub const MAX_SEMESTER: u8 = 4;

/// Year of study, 1 through [`MAX_YEAR`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Year(u8);

/// Semester within a year, 1 through [`MAX_SEMESTER`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Semester(u8);

impl Year {
    /// Create a year
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidYear` when `value` is outside `1..=MAX_YEAR`.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (1..=MAX_YEAR).contains(v))
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidYear(value.to_string()))
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All valid years up to and including `last`, clamped to the valid range
    pub fn up_to(last: u8) -> impl Iterator<Item = Self> {
        (1..=last.min(MAX_YEAR)).map(Self)
    }
}

impl Semester {
    /// Create a semester
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidSemester` when `value` is outside `1..=MAX_SEMESTER`.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (1..=MAX_SEMESTER).contains(v))
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidSemester(value.to_string()))
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All valid semesters up to and including `last`, clamped to the valid range
    pub fn up_to(last: u8) -> impl Iterator<Item = Self> {
        (1..=last.min(MAX_SEMESTER)).map(Self)
    }
}

impl FromStr for Year {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidYear(s.to_string()))
            .and_then(Self::new)
    }
}

impl FromStr for Semester {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidSemester(s.to_string()))
            .and_then(Self::new)
    }
}

impl TryFrom<i64> for Year {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Semester {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u8 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl From<Semester> for u8 {
    fn from(semester: Semester) -> Self {
        semester.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
