//! Module catalog

use super::{Code, Module};
use crate::core::error::ValidationError;
use std::collections::BTreeMap;

/// Read-only collection of every known module, keyed by code
///
/// Construction checks that co-requisites reference known modules, so the
/// planner can follow co-requisite links without further lookups failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    modules: BTreeMap<Code, Module>,
}

impl Catalog {
    /// Build a catalog from a list of modules
    ///
    /// # Errors
    /// Returns an error if two modules share a code, a module lists itself as
    /// a co-requisite, or a co-requisite is not part of the list.
    pub fn new(modules: impl IntoIterator<Item = Module>) -> Result<Self, ValidationError> {
        let mut by_code = BTreeMap::new();
        for module in modules {
            if by_code.contains_key(&module.code) {
                return Err(ValidationError::DuplicateModule(module.code));
            }
            by_code.insert(module.code.clone(), module);
        }

        for module in by_code.values() {
            if module.has_corequisite(&module.code) {
                return Err(ValidationError::SelfCorequisite(module.code.clone()));
            }
            if let Some(missing) = module
                .corequisites
                .iter()
                .find(|coreq| !by_code.contains_key(*coreq))
            {
                return Err(ValidationError::UnknownCorequisite {
                    module: module.code.clone(),
                    corequisite: missing.clone(),
                });
            }
        }

        Ok(Self { modules: by_code })
    }

    /// Look up a module by code
    #[must_use]
    pub fn get(&self, code: &Code) -> Option<&Module> {
        self.modules.get(code)
    }

    /// Whether the catalog knows `code`
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.modules.contains_key(code)
    }

    /// Iterate modules in code order
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    /// Number of modules
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the catalog has no modules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Whether `a` and `b` must share a slot, in either direction
    #[must_use]
    pub fn are_corequisites(&self, a: &Code, b: &Code) -> bool {
        self.get(a).is_some_and(|m| m.has_corequisite(b))
            || self.get(b).is_some_and(|m| m.has_corequisite(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Credits;

    fn code(raw: &str) -> Code {
        raw.parse().unwrap()
    }

    fn module(raw: &str) -> Module {
        Module::new(code(raw), String::new(), Credits::new(4).unwrap())
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::new(vec![module("CS1010"), module("CS1231")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(&code("CS1010")));
        assert!(catalog.get(&code("CS9999")).is_none());
    }

    #[test]
    fn test_rejects_duplicate_module() {
        let err = Catalog::new(vec![module("CS1010"), module("CS1010")]).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateModule(code("CS1010")));
    }

    #[test]
    fn test_rejects_self_corequisite() {
        let err = Catalog::new(vec![module("CS1010").with_corequisite(code("CS1010"))]).unwrap_err();
        assert_eq!(err, ValidationError::SelfCorequisite(code("CS1010")));
    }

    #[test]
    fn test_rejects_unknown_corequisite() {
        let err = Catalog::new(vec![module("CS2105").with_corequisite(code("CS2107"))]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownCorequisite {
                module: code("CS2105"),
                corequisite: code("CS2107"),
            }
        );
    }

    #[test]
    fn test_corequisite_relation_is_symmetric() {
        let catalog = Catalog::new(vec![
            module("CS2105").with_corequisite(code("CS2107")),
            module("CS2107"),
            module("CS1010"),
        ])
        .unwrap();
        assert!(catalog.are_corequisites(&code("CS2105"), &code("CS2107")));
        assert!(catalog.are_corequisites(&code("CS2107"), &code("CS2105")));
        assert!(!catalog.are_corequisites(&code("CS1010"), &code("CS2105")));
    }

    #[test]
    fn test_modules_iterate_in_code_order() {
        let catalog = Catalog::new(vec![module("MA1521"), module("CS1010")]).unwrap();
        let order: Vec<&str> = catalog.modules().map(|m| m.code.as_str()).collect();
        assert_eq!(order, vec!["CS1010", "MA1521"]);
    }
}
