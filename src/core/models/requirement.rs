//! Requirement category model

use super::{Code, Credits};
use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named group of modules with a credit target (e.g., "Computing Foundation")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementCategory {
    /// Category name, unique within a planner
    pub name: String,

    /// Credits needed to satisfy the category
    pub credits: Credits,

    /// Modules that count towards the category
    #[serde(default)]
    pub codes: BTreeSet<Code>,
}

impl RequirementCategory {
    /// Create a category
    ///
    /// # Errors
    /// Returns `ValidationError::EmptyRequirementCategoryName` if `name` is blank.
    pub fn new(name: &str, credits: Credits, codes: BTreeSet<Code>) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyRequirementCategoryName);
        }
        Ok(Self {
            name: name.to_string(),
            credits,
            codes,
        })
    }
}

/// Check that category names are non-empty and unique (case-insensitive)
///
/// # Errors
/// Returns the first blank or repeated name found.
pub fn validate_categories(categories: &[RequirementCategory]) -> Result<(), ValidationError> {
    let mut seen = BTreeSet::new();
    for category in categories {
        if category.name.trim().is_empty() {
            return Err(ValidationError::EmptyRequirementCategoryName);
        }
        if !seen.insert(category.name.to_lowercase()) {
            return Err(ValidationError::DuplicateRequirementCategory(
                category.name.clone(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> RequirementCategory {
        RequirementCategory {
            name: name.to_string(),
            credits: Credits::new(20).unwrap(),
            codes: BTreeSet::new(),
        }
    }

    #[test]
    fn test_new_trims_name() {
        let c = RequirementCategory::new("  Mathematics ", Credits::new(8).unwrap(), BTreeSet::new())
            .unwrap();
        assert_eq!(c.name, "Mathematics");
    }

    #[test]
    fn test_new_rejects_blank_name() {
        let err = RequirementCategory::new("   ", Credits::default(), BTreeSet::new()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyRequirementCategoryName);
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let err = validate_categories(&[category("Computing Foundation"), category("computing foundation")])
            .unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateRequirementCategory(_)));
        assert!(validate_categories(&[category("A"), category("B")]).is_ok());
    }
}
