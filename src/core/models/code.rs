//! Module code value type

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// A validated module code (e.g., "CS2040C")
///
/// Format: two or three uppercase letters, four digits, and an optional
/// single uppercase suffix letter. Parsing trims surrounding whitespace and
/// upper-cases the input, so `" cs1010 "` becomes `CS1010`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code(String);

impl Code {
    /// Human-readable description of the accepted format
    pub const CONSTRAINTS: &'static str =
        "Codes consist of 2-3 letters, 4 digits, and an optional letter suffix (e.g., CS2040C)";

    /// Parse and validate a code
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidCode` if the normalized input does not
    /// match the code format.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let normalized = raw.trim().to_ascii_uppercase();
        if Self::is_valid(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(ValidationError::InvalidCode(raw.to_string()))
        }
    }

    /// Check whether `candidate` is already a well-formed code
    #[must_use]
    pub fn is_valid(candidate: &str) -> bool {
        let bytes = candidate.as_bytes();
        let letters = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
        if !(2..=3).contains(&letters) {
            return false;
        }

        let rest = &bytes[letters..];
        if rest.len() < 4 || !rest[..4].iter().all(u8::is_ascii_digit) {
            return false;
        }

        match &rest[4..] {
            [] => true,
            [suffix] => suffix.is_ascii_uppercase(),
            _ => false,
        }
    }

    /// Borrow the code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Code {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Code {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.0
    }
}

impl Borrow<str> for Code {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
