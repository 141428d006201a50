//! Requirement category progress

use crate::core::error::format_codes;
use crate::core::models::{Catalog, Code, Credits, DegreePlan, RequirementCategory};
use std::collections::BTreeSet;
use std::fmt;

/// How far the plan goes towards one requirement category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementProgress {
    /// Category name
    pub name: String,
    /// Credits the category asks for
    pub target: Credits,
    /// Credits of category modules currently in the plan
    pub planned_credits: u32,
    /// Category modules currently in the plan
    pub planned_codes: BTreeSet<Code>,
}

impl RequirementProgress {
    /// Whether the planned credits reach the target
    #[must_use]
    pub const fn is_fulfilled(&self) -> bool {
        self.planned_credits >= self.target.value()
    }
}

impl fmt::Display for RequirementProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_fulfilled() { "✓" } else { "✗" };
        write!(
            f,
            "{mark} {}: {}/{} credits ({})",
            self.name,
            self.planned_credits,
            self.target,
            format_codes(&self.planned_codes)
        )
    }
}

/// Compute progress for every category, in the order given
///
/// Codes missing from the catalog count as zero credits.
#[must_use]
pub fn requirement_progress(
    categories: &[RequirementCategory],
    catalog: &Catalog,
    plan: &DegreePlan,
) -> Vec<RequirementProgress> {
    let planned = plan.codes();
    categories
        .iter()
        .map(|category| {
            let planned_codes: BTreeSet<Code> =
                category.codes.intersection(&planned).cloned().collect();
            let planned_credits = planned_codes
                .iter()
                .filter_map(|code| catalog.get(code))
                .map(|module| module.credits.value())
                .sum();
            RequirementProgress {
                name: category.name.clone(),
                target: category.credits,
                planned_credits,
                planned_codes,
            }
        })
        .collect()
}
