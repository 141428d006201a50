//! Module model

use super::{Code, Credits, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A module offered in the catalog
///
/// Modules are immutable once loaded; a planning session only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Unique module code (e.g., "CS2040C")
    pub code: Code,

    /// Module title (e.g., "Data Structures and Algorithms")
    #[serde(default)]
    pub name: String,

    /// Credit value
    pub credits: Credits,

    /// Descriptive tags used by the suggestion ranker
    #[serde(default)]
    pub tags: BTreeSet<Tag>,

    /// Codes of modules that must be placed in the same slot as this one
    #[serde(default)]
    pub corequisites: BTreeSet<Code>,
}

impl Module {
    /// Create a module with no tags or co-requisites
    ///
    /// # Arguments
    /// * `code` - Module code
    /// * `name` - Module title
    /// * `credits` - Credit value
    #[must_use]
    pub const fn new(code: Code, name: String, credits: Credits) -> Self {
        Self {
            code,
            name,
            credits,
            tags: BTreeSet::new(),
            corequisites: BTreeSet::new(),
        }
    }

    /// Add a tag
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Add a co-requisite by code
    #[must_use]
    pub fn with_corequisite(mut self, code: Code) -> Self {
        self.corequisites.insert(code);
        self
    }

    /// Whether `code` is listed as a co-requisite of this module
    #[must_use]
    pub fn has_corequisite(&self, code: &Code) -> bool {
        self.corequisites.contains(code)
    }

    /// Number of this module's tags that appear in `wanted`
    #[must_use]
    pub fn matching_tag_count(&self, wanted: &BTreeSet<Tag>) -> usize {
        self.tags.intersection(wanted).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(code: &str, credits: i64) -> Module {
        Module::new(
            code.parse().unwrap(),
            format!("Module {code}"),
            Credits::new(credits).unwrap(),
        )
    }

    #[test]
    fn test_module_creation() {
        let m = module("CS2040C", 4);
        assert_eq!(m.code.as_str(), "CS2040C");
        assert_eq!(m.credits.value(), 4);
        assert!(m.tags.is_empty());
        assert!(m.corequisites.is_empty());
    }

    #[test]
    fn test_corequisites_deduplicate() {
        let coreq: Code = "CS2107".parse().unwrap();
        let m = module("CS2105", 4)
            .with_corequisite(coreq.clone())
            .with_corequisite(coreq.clone());
        assert_eq!(m.corequisites.len(), 1);
        assert!(m.has_corequisite(&coreq));
    }

    #[test]
    fn test_matching_tag_count() {
        let m = module("CS2040C", 4)
            .with_tag("algorithms".parse().unwrap())
            .with_tag("c".parse().unwrap());
        let wanted: BTreeSet<Tag> = ["algorithms", "java", "c"]
            .iter()
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(m.matching_tag_count(&wanted), 2);
        assert_eq!(m.matching_tag_count(&BTreeSet::new()), 0);
    }

    #[test]
    fn test_deserialize_defaults() {
        let m: Module = serde_json::from_str(r#"{"code": "CS1010", "credits": 4}"#).unwrap();
        assert!(m.name.is_empty());
        assert!(m.tags.is_empty());
        assert!(m.corequisites.is_empty());
    }
}
