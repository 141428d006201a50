//! Plan mutation engine
//!
//! Validates add/remove requests against the current plan and catalog and
//! computes the replacement slots. Nothing here touches the live plan: a
//! request either fails with a [`PlannerError`] or yields a [`Mutation`]
//! that the session applies in one step, so failed commands leave the plan
//! exactly as it was.
//!
//! Co-requisite policy:
//! 1. Adding a module auto-adds its co-requisites that are not yet planned
//! 2. Co-requisites already in the target slot count as satisfied
//! 3. A co-requisite planned in any other slot aborts the whole request
//! 4. Removing a module also removes its co-requisites wherever they are

use crate::core::error::{format_codes, PlannerError};
use crate::core::models::{Catalog, Code, DegreePlan, Semester, Slot, Year};
use crate::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Replacement slots computed by a successful request, plus its report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation<T> {
    slots: Vec<Slot>,
    outcome: T,
}

impl<T> Mutation<T> {
    /// Slots that will replace their counterparts in the plan
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Swap the replacement slots into `plan` and return the report
    pub fn apply_to(self, plan: &mut DegreePlan) -> T {
        for slot in self.slots {
            let replaced = plan.replace_slot(slot);
            debug_assert!(replaced, "mutation computed against a different plan");
        }
        self.outcome
    }
}

/// Report for a successful add
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// Target year
    pub year: Year,
    /// Target semester
    pub semester: Semester,
    /// Codes the caller asked to add
    pub added: BTreeSet<Code>,
    /// Co-requisites added automatically (never overlaps `added`)
    pub corequisites_added: BTreeSet<Code>,
}

/// Report for a successful remove
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveOutcome {
    /// Codes the caller asked to remove
    pub removed: BTreeSet<Code>,
    /// Co-requisites removed along with them (never overlaps `removed`)
    pub corequisites_removed: BTreeSet<Code>,
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added new module(s) to year {} semester {} of the degree plan:",
            self.year, self.semester
        )?;
        writeln!(f, "{}", format_codes(&self.added))?;
        writeln!(f, "Co-requisite(s) added:")?;
        write!(f, "{}", format_codes(&self.corequisites_added))
    }
}

impl fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Removed module(s) from the degree plan:")?;
        writeln!(f, "{}", format_codes(&self.removed))?;
        writeln!(f, "Co-requisite(s) removed:")?;
        write!(f, "{}", format_codes(&self.corequisites_removed))
    }
}

/// Validate adding `codes` to the slot at `year`/`semester`
///
/// Checks run in order, and each reports every offending code:
/// missing slot, codes already planned, codes unknown to the catalog, then
/// co-requisite conflicts. Conflicts are checked for every code entering the
/// slot (requested or auto-added) against planned modules in other slots,
/// whichever side declares the co-requisite.
///
/// # Errors
/// `EmptyCodeSet`, `SlotNotFound`, `DuplicateCode`, `UnknownModule`, or
/// `CorequisiteConflict`.
pub fn plan_add(
    plan: &DegreePlan,
    catalog: &Catalog,
    year: Year,
    semester: Semester,
    codes: &BTreeSet<Code>,
) -> Result<Mutation<AddOutcome>, PlannerError> {
    if codes.is_empty() {
        return Err(PlannerError::EmptyCodeSet);
    }

    let target = plan.slot(year, semester).ok_or_else(|| {
        debug!("Add rejected: no slot for year {year} semester {semester}");
        PlannerError::SlotNotFound { year, semester }
    })?;

    let duplicates: BTreeSet<Code> = codes.iter().filter(|c| plan.contains(c)).cloned().collect();
    if !duplicates.is_empty() {
        debug!("Add rejected: already planned {}", format_codes(&duplicates));
        return Err(PlannerError::DuplicateCode { codes: duplicates });
    }

    let unknown: BTreeSet<Code> = codes.iter().filter(|c| !catalog.contains(c)).cloned().collect();
    if !unknown.is_empty() {
        debug!("Add rejected: not in catalog {}", format_codes(&unknown));
        return Err(PlannerError::UnknownModule { codes: unknown });
    }

    // Every code entering the slot, mapped to the requested code that brought it in.
    let mut incoming: BTreeMap<Code, Code> = codes.iter().map(|c| (c.clone(), c.clone())).collect();
    let mut corequisites_added = BTreeSet::new();
    for code in codes {
        let Some(module) = catalog.get(code) else {
            continue;
        };
        for coreq in &module.corequisites {
            if plan.contains(coreq) || codes.contains(coreq) {
                continue;
            }
            incoming.entry(coreq.clone()).or_insert_with(|| code.clone());
            corequisites_added.insert(coreq.clone());
        }
    }

    let mut conflicts = BTreeSet::new();
    let mut triggers = BTreeSet::new();
    for other in plan.slots().iter().filter(|slot| !slot.is_same_slot(target)) {
        for planned in other.codes() {
            for (code, trigger) in &incoming {
                if catalog.are_corequisites(code, planned) {
                    conflicts.insert(planned.clone());
                    triggers.insert(trigger.clone());
                }
            }
        }
    }
    if !conflicts.is_empty() {
        debug!(
            "Add rejected: co-requisites {} of {} planned elsewhere",
            format_codes(&conflicts),
            format_codes(&triggers)
        );
        return Err(PlannerError::CorequisiteConflict {
            corequisites: conflicts,
            triggers,
        });
    }

    let mut target_codes = target.codes().clone();
    target_codes.extend(incoming.into_keys());

    Ok(Mutation {
        slots: vec![target.with_codes(target_codes)],
        outcome: AddOutcome {
            year,
            semester,
            added: codes.clone(),
            corequisites_added,
        },
    })
}

/// Validate removing `codes` from wherever they are planned
///
/// Direct co-requisites of the removed codes are swept from every slot.
///
/// # Errors
/// `EmptyCodeSet`, or `UnknownPlannerCode` listing every code that is not
/// planned.
pub fn plan_remove(
    plan: &DegreePlan,
    catalog: &Catalog,
    codes: &BTreeSet<Code>,
) -> Result<Mutation<RemoveOutcome>, PlannerError> {
    if codes.is_empty() {
        return Err(PlannerError::EmptyCodeSet);
    }

    let missing: BTreeSet<Code> = codes.iter().filter(|c| !plan.contains(c)).cloned().collect();
    if !missing.is_empty() {
        debug!("Remove rejected: not planned {}", format_codes(&missing));
        return Err(PlannerError::UnknownPlannerCode { codes: missing });
    }

    let coreqs_of_removed: BTreeSet<Code> = codes
        .iter()
        .filter_map(|code| catalog.get(code))
        .flat_map(|module| module.corequisites.iter().cloned())
        .collect();

    let mut corequisites_removed = BTreeSet::new();
    let mut slots = Vec::new();
    for slot in plan.slots() {
        let (dropped, kept): (BTreeSet<Code>, BTreeSet<Code>) = slot
            .codes()
            .iter()
            .cloned()
            .partition(|code| codes.contains(code) || coreqs_of_removed.contains(code));
        if dropped.is_empty() {
            continue;
        }
        corequisites_removed.extend(dropped.into_iter().filter(|code| !codes.contains(code)));
        slots.push(slot.with_codes(kept));
    }

    Ok(Mutation {
        slots,
        outcome: RemoveOutcome {
            removed: codes.clone(),
            corequisites_removed,
        },
    })
}
