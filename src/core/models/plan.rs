//! Degree plan model

use super::{Catalog, Code, Semester, Slot, Year};
use crate::core::error::{format_codes, ValidationError};
use std::collections::BTreeSet;
use std::fmt;

/// An ordered list of slots, one per (year, semester)
///
/// Invariants held by construction and by every planner command:
/// - each (year, semester) appears once
/// - each code appears in at most one slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DegreePlan {
    slots: Vec<Slot>,
}

impl DegreePlan {
    /// Create a plan from its slots
    ///
    /// # Errors
    /// Returns an error if two slots share a year and semester, or a code is
    /// placed in more than one slot.
    pub fn new(slots: Vec<Slot>) -> Result<Self, ValidationError> {
        let mut seen_codes = BTreeSet::new();
        for (idx, slot) in slots.iter().enumerate() {
            if slots[..idx].iter().any(|earlier| earlier.is_same_slot(slot)) {
                return Err(ValidationError::DuplicateSlot {
                    year: slot.year(),
                    semester: slot.semester(),
                });
            }
            for code in slot.codes() {
                if !seen_codes.insert(code) {
                    return Err(ValidationError::CodeInMultipleSlots(code.clone()));
                }
            }
        }
        Ok(Self { slots })
    }

    /// Create an empty plan with one slot per year and semester
    ///
    /// # Arguments
    /// * `years` - Number of years (clamped to the valid range)
    /// * `semesters` - Semesters per year (clamped to the valid range)
    #[must_use]
    pub fn seeded(years: u8, semesters: u8) -> Self {
        let slots = Year::up_to(years)
            .flat_map(|year| Semester::up_to(semesters).map(move |sem| Slot::empty(year, sem)))
            .collect();
        Self { slots }
    }

    /// All slots in plan order
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The slot at `year` and `semester`, if the plan has one
    #[must_use]
    pub fn slot(&self, year: Year, semester: Semester) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.is_at(year, semester))
    }

    /// The slot currently holding `code`
    #[must_use]
    pub fn slot_of(&self, code: &Code) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.contains(code))
    }

    /// Whether `code` is planned anywhere
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.slot_of(code).is_some()
    }

    /// Every planned code across all slots
    #[must_use]
    pub fn codes(&self) -> BTreeSet<Code> {
        self.slots
            .iter()
            .flat_map(|slot| slot.codes().iter().cloned())
            .collect()
    }

    /// Replace the slot with the same identity as `replacement`
    ///
    /// # Returns
    /// `true` if a slot was replaced, `false` if no slot matched
    pub fn replace_slot(&mut self, replacement: Slot) -> bool {
        match self.slots.iter_mut().find(|slot| slot.is_same_slot(&replacement)) {
            Some(slot) => {
                *slot = replacement;
                true
            }
            None => false,
        }
    }

    /// Co-requisite pairs that are both planned but sit in different slots
    ///
    /// Each pair is reported once as `(declaring module, co-requisite)`.
    #[must_use]
    pub fn corequisite_violations(&self, catalog: &Catalog) -> Vec<(Code, Code)> {
        let mut violations = Vec::new();
        for slot in &self.slots {
            for code in slot.codes() {
                let Some(module) = catalog.get(code) else {
                    continue;
                };
                for coreq in &module.corequisites {
                    if self.slot_of(coreq).is_some_and(|other| !other.is_same_slot(slot)) {
                        violations.push((code.clone(), coreq.clone()));
                    }
                }
            }
        }
        violations
    }
}

impl fmt::Display for DegreePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            writeln!(f, "{slot}: {}", format_codes(slot.codes()))?;
        }
        Ok(())
    }
}
