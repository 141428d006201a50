//! Shared fixtures for integration tests
#![allow(dead_code)]

use degree_planner::core::models::{
    Catalog, Code, Credits, DegreePlan, Module, RequirementCategory, Semester, Tag, Year,
};
use degree_planner::core::planner::PlannerSession;
use std::collections::BTreeSet;

pub fn code(raw: &str) -> Code {
    raw.parse().expect("valid module code")
}

pub fn codes(raw: &[&str]) -> BTreeSet<Code> {
    raw.iter().map(|c| code(c)).collect()
}

pub fn tags(raw: &[&str]) -> BTreeSet<Tag> {
    raw.iter().map(|t| t.parse().expect("valid tag")).collect()
}

pub fn year(value: i64) -> Year {
    Year::new(value).expect("valid year")
}

pub fn semester(value: i64) -> Semester {
    Semester::new(value).expect("valid semester")
}

pub fn credits(value: i64) -> Credits {
    Credits::new(value).expect("valid credits")
}

fn module(raw: &str, name: &str, value: i64, tag_list: &[&str]) -> Module {
    let mut module = Module::new(code(raw), name.to_string(), credits(value));
    module.tags = tags(tag_list);
    module
}

/// Catalog with two co-requisite pairs: CS2102 -> CS1231 and CS2105 -> CS2107
pub fn catalog() -> Catalog {
    Catalog::new(vec![
        module("CS1010", "Programming Methodology", 4, &["programming"]),
        module("CS1231", "Discrete Structures", 4, &["math"]),
        module("CS2040C", "Data Structures and Algorithms", 4, &["algorithms"]),
        module("CS2102", "Database Systems", 4, &["databases"]).with_corequisite(code("CS1231")),
        module("CS2105", "Computer Networks", 4, &["networks"]).with_corequisite(code("CS2107")),
        module("CS2107", "Information Security", 4, &["security"]),
        module("CS3230", "Design and Analysis of Algorithms", 4, &["algorithms", "math"]),
        module("GER1000", "Quantitative Reasoning", 2, &[]),
        module("MA1521", "Calculus for Computing", 4, &["math"]),
    ])
    .expect("valid catalog")
}

pub fn categories() -> Vec<RequirementCategory> {
    vec![
        RequirementCategory::new("Computing Foundation", credits(12), codes(&["CS1010", "CS1231", "CS2040C"]))
            .expect("valid category"),
        RequirementCategory::new("General Education", credits(2), codes(&["GER1000"]))
            .expect("valid category"),
    ]
}

/// Session over [`catalog`] with four years of two empty semesters
pub fn session() -> PlannerSession {
    PlannerSession::new(catalog(), DegreePlan::seeded(4, 2), categories())
}

/// Every code in the plan appears in exactly one slot, and planned
/// co-requisite pairs share a slot
pub fn assert_plan_invariants(plan: &DegreePlan, catalog: &Catalog) {
    let total: usize = plan.slots().iter().map(|slot| slot.codes().len()).sum();
    assert_eq!(total, plan.codes().len(), "a code is planned in more than one slot");
    assert!(
        plan.corequisite_violations(catalog).is_empty(),
        "co-requisites split across slots: {:?}",
        plan.corequisite_violations(catalog)
    );
}
