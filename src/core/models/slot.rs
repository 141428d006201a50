//! Slot model

use super::{Code, Semester, Year};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A (year, semester) bucket of planned module codes
///
/// Slots are values: the plan never edits one in place, it swaps in a new
/// slot with the same year and semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    year: Year,
    semester: Semester,
    codes: BTreeSet<Code>,
}

impl Slot {
    /// Create a slot holding `codes`
    #[must_use]
    pub const fn new(year: Year, semester: Semester, codes: BTreeSet<Code>) -> Self {
        Self {
            year,
            semester,
            codes,
        }
    }

    /// Create an empty slot
    #[must_use]
    pub const fn empty(year: Year, semester: Semester) -> Self {
        Self::new(year, semester, BTreeSet::new())
    }

    /// Year of study
    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    /// Semester within the year
    #[must_use]
    pub const fn semester(&self) -> Semester {
        self.semester
    }

    /// Planned codes in this slot
    #[must_use]
    pub const fn codes(&self) -> &BTreeSet<Code> {
        &self.codes
    }

    /// Whether this slot sits at the given year and semester
    #[must_use]
    pub fn is_at(&self, year: Year, semester: Semester) -> bool {
        self.year == year && self.semester == semester
    }

    /// Whether both slots share the same identity
    #[must_use]
    pub fn is_same_slot(&self, other: &Self) -> bool {
        self.is_at(other.year, other.semester)
    }

    /// Whether `code` is planned in this slot
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }

    /// A copy of this slot holding `codes` instead
    #[must_use]
    pub const fn with_codes(&self, codes: BTreeSet<Code>) -> Self {
        Self::new(self.year, self.semester, codes)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year {} Semester {}", self.year, self.semester)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(year: i64, semester: i64) -> Slot {
        Slot::empty(Year::new(year).unwrap(), Semester::new(semester).unwrap())
    }

    #[test]
    fn test_identity() {
        let a = slot(1, 2);
        let b = a.with_codes(["CS1010".parse().unwrap()].into_iter().collect());
        assert!(a.is_same_slot(&b));
        assert_ne!(a, b);
        assert!(!a.is_same_slot(&slot(2, 1)));
    }

    #[test]
    fn test_with_codes_leaves_original_untouched() {
        let original = slot(1, 1);
        let replaced = original.with_codes(["CS2040C".parse().unwrap()].into_iter().collect());
        assert!(original.codes().is_empty());
        assert!(replaced.contains(&"CS2040C".parse().unwrap()));
    }

    #[test]
    fn test_display() {
        assert_eq!(slot(3, 4).to_string(), "Year 3 Semester 4");
    }
}
