//! Module suggestion ranking
//!
//! Ranks unplanned catalog modules against a desired credit value and a set
//! of tags. More matching tags rank first; ties go to the smaller credit
//! difference, then to the code.

use crate::core::error::format_codes;
use crate::core::models::{Catalog, Code, Credits, DegreePlan, Tag};
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::fmt;

/// Default number of entries kept per suggestion list
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// A scored, unplanned module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Module code
    pub code: Code,
    /// `|module credits - desired credits|`
    pub credit_difference: u32,
    /// Number of desired tags the module carries
    pub matching_tags: usize,
}

/// Ranked suggestions and the side lists reported with them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions {
    /// All candidates, best first
    pub ranked: Vec<Candidate>,
    /// Candidates with at least one matching tag, best first
    pub with_matching_tags: Vec<Candidate>,
    /// Candidates whose credits equal the desired value, best first
    pub with_matching_credits: Vec<Candidate>,
    /// Co-requisites of planned modules that are not planned themselves
    pub missing_corequisites: BTreeSet<Code>,
}

/// Rank catalog modules that are not yet in `plan`
///
/// # Arguments
/// * `credits` - Desired credit value
/// * `tags` - Desired tags (may be empty)
/// * `limit` - Maximum entries per list; `0` keeps everything
#[must_use]
pub fn suggest(
    catalog: &Catalog,
    plan: &DegreePlan,
    credits: Credits,
    tags: &BTreeSet<Tag>,
    limit: usize,
) -> Suggestions {
    let planned = plan.codes();

    let mut ranked: Vec<Candidate> = catalog
        .modules()
        .filter(|module| !planned.contains(&module.code))
        .map(|module| Candidate {
            code: module.code.clone(),
            credit_difference: module.credits.difference(credits),
            matching_tags: module.matching_tag_count(tags),
        })
        .collect();
    // Catalog iteration is already in code order and the sort is stable.
    ranked.sort_by_key(|c| (Reverse(c.matching_tags), c.credit_difference));

    let cap = |list: Vec<Candidate>| -> Vec<Candidate> {
        if limit == 0 {
            list
        } else {
            list.into_iter().take(limit).collect()
        }
    };

    let with_matching_tags = cap(ranked.iter().filter(|c| c.matching_tags > 0).cloned().collect());
    let with_matching_credits =
        cap(ranked.iter().filter(|c| c.credit_difference == 0).cloned().collect());

    let missing_corequisites = planned
        .iter()
        .filter_map(|code| catalog.get(code))
        .flat_map(|module| module.corequisites.iter())
        .filter(|coreq| !planned.contains(*coreq))
        .cloned()
        .collect();

    Suggestions {
        ranked: cap(ranked),
        with_matching_tags,
        with_matching_credits,
        missing_corequisites,
    }
}

fn join(candidates: &[Candidate]) -> String {
    if candidates.is_empty() {
        return "None".to_string();
    }
    candidates
        .iter()
        .map(|c| c.code.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Suggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The list is sorted with the more recommended module(s) in front.")?;
        writeln!(f, "Module(s) recommended: {}", join(&self.ranked))?;
        writeln!(f, "Module(s) with relevant tags: {}", join(&self.with_matching_tags))?;
        write!(f, "Module(s) with matching credits: {}", join(&self.with_matching_credits))?;
        if !self.missing_corequisites.is_empty() {
            write!(
                f,
                "\nCo-requisite(s) missing from the degree plan: {}",
                format_codes(&self.missing_corequisites)
            )?;
        }
        Ok(())
    }
}
