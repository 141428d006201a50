//! Credit and tag value types attached to modules

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest credit value a module may carry
pub const MAX_CREDITS: u32 = 999;

/// Non-negative module credit value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Credits(u32);

impl Credits {
    /// Create a credit value
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidCredits` for negative values or values above [`MAX_CREDITS`].
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u32::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_CREDITS)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidCredits(value.to_string()))
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Absolute distance between two credit values
    #[must_use]
    pub const fn difference(self, other: Self) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl FromStr for Credits {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidCredits(s.to_string()))
            .and_then(Self::new)
    }
}

impl TryFrom<i64> for Credits {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Credits> for u32 {
    fn from(credits: Credits) -> Self {
        credits.0
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form alphanumeric label used to describe and search modules
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Create a tag
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidTag` if the trimmed input is empty or not alphanumeric.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !trimmed.is_empty() && trimmed.chars().all(char::is_alphanumeric) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ValidationError::InvalidTag(raw.to_string()))
        }
    }

    /// Borrow the tag text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Tag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Tag {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credits_rejects_negative() {
        assert_eq!(
            Credits::new(-4).unwrap_err(),
            ValidationError::InvalidCredits("-4".to_string())
        );
        assert!("-1".parse::<Credits>().is_err());
        assert!("abc".parse::<Credits>().is_err());
    }

    #[test]
    fn test_credits_bounds() {
        assert_eq!(Credits::new(0).unwrap().value(), 0);
        assert_eq!(Credits::new(999).unwrap().value(), 999);
        assert!(Credits::new(1000).is_err());
    }

    #[test]
    fn test_credit_difference_is_symmetric() {
        let two = Credits::new(2).unwrap();
        let four = Credits::new(4).unwrap();
        assert_eq!(two.difference(four), 2);
        assert_eq!(four.difference(two), 2);
        assert_eq!(four.difference(four), 0);
    }

    #[test]
    fn test_tags() {
        assert_eq!(Tag::new(" algorithms ").unwrap().as_str(), "algorithms");
        assert!(Tag::new("").is_err());
        assert!(Tag::new("two words").is_err());
        assert!(Tag::new("c++").is_err());
    }
}
