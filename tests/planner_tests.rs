//! Integration tests for the planner session

mod common;

use common::{assert_plan_invariants, code, codes, credits, semester, session, tags, year};
use degree_planner::core::error::PlannerError;
use degree_planner::core::models::{DegreePlan, Slot};
use degree_planner::core::planner::PlannerSession;

#[test]
fn add_module_without_corequisites() {
    let mut s = session();
    let outcome = s.add_modules(year(2), semester(2), &codes(&["CS2040C"])).unwrap();

    assert_eq!(s.plan().slot(year(2), semester(2)).unwrap().codes(), &codes(&["CS2040C"]));
    assert!(outcome.corequisites_added.is_empty());
    assert_eq!(outcome.added, codes(&["CS2040C"]));
}

#[test]
fn add_module_with_corequisite_already_in_target_slot() {
    let mut s = session();
    s.add_modules(year(1), semester(1), &codes(&["CS2107"])).unwrap();

    let outcome = s.add_modules(year(1), semester(1), &codes(&["CS2105"])).unwrap();
    assert_eq!(s.plan().slot(year(1), semester(1)).unwrap().codes(), &codes(&["CS2105", "CS2107"]));
    assert!(outcome.corequisites_added.is_empty());
}

#[test]
fn add_module_auto_adds_missing_corequisite() {
    let mut s = session();
    let outcome = s.add_modules(year(1), semester(1), &codes(&["CS2105"])).unwrap();
    assert_eq!(outcome.corequisites_added, codes(&["CS2107"]));
    assert_eq!(s.plan().slot_of(&code("CS2107")).unwrap().year(), year(1));
}

#[test]
fn add_module_conflicts_with_corequisite_elsewhere() {
    let mut s = session();
    s.add_modules(year(1), semester(2), &codes(&["CS2107"])).unwrap();
    let before = s.plan().clone();

    let err = s.add_modules(year(1), semester(1), &codes(&["CS2105"])).unwrap_err();
    assert_eq!(
        err,
        PlannerError::CorequisiteConflict {
            corequisites: codes(&["CS2107"]),
            triggers: codes(&["CS2105"]),
        }
    );
    assert_eq!(s.plan(), &before);
}

#[test]
fn add_module_conflicts_when_planned_module_declares_it() {
    let plan = DegreePlan::new(vec![
        Slot::empty(year(1), semester(1)),
        Slot::new(year(1), semester(2), codes(&["CS2102"])),
    ])
    .unwrap();
    let mut s = PlannerSession::new(common::catalog(), plan, Vec::new());
    let before = s.plan().clone();

    let err = s.add_modules(year(1), semester(1), &codes(&["CS1231"])).unwrap_err();
    assert_eq!(
        err,
        PlannerError::CorequisiteConflict {
            corequisites: codes(&["CS2102"]),
            triggers: codes(&["CS1231"]),
        }
    );
    assert_eq!(s.plan(), &before);

    s.add_modules(year(1), semester(2), &codes(&["CS1231"])).unwrap();
    assert_plan_invariants(s.plan(), s.catalog());
}

#[test]
fn remove_module_cascades_corequisites() {
    let mut s = session();
    s.add_modules(year(1), semester(1), &codes(&["CS2102", "CS1010"])).unwrap();
    assert_eq!(s.plan().slot(year(1), semester(1)).unwrap().codes(), &codes(&["CS1010", "CS1231", "CS2102"]));

    let outcome = s.remove_modules(&codes(&["CS2102"])).unwrap();
    assert_eq!(outcome.removed, codes(&["CS2102"]));
    assert_eq!(outcome.corequisites_removed, codes(&["CS1231"]));
    assert_eq!(s.plan().slot(year(1), semester(1)).unwrap().codes(), &codes(&["CS1010"]));
}

#[test]
fn remove_unplanned_module_fails() {
    let mut s = session();
    s.add_modules(year(1), semester(1), &codes(&["CS1010"])).unwrap();
    let before = s.plan().clone();

    let err = s.remove_modules(&codes(&["CS9999", "CS1010"])).unwrap_err();
    assert_eq!(err, PlannerError::UnknownPlannerCode { codes: codes(&["CS9999"]) });
    assert_eq!(s.plan(), &before);
}

#[test]
fn failed_validation_is_idempotent() {
    let mut s = session();
    s.add_modules(year(1), semester(2), &codes(&["CS2107"])).unwrap();
    let before = s.plan().clone();
    let depth = s.history().undo_depth();

    let first = s.add_modules(year(1), semester(1), &codes(&["CS2105"])).unwrap_err();
    let second = s.add_modules(year(1), semester(1), &codes(&["CS2105"])).unwrap_err();
    assert_eq!(first, second);
    assert_eq!(s.plan(), &before);
    assert_eq!(s.history().undo_depth(), depth);
}

#[test]
fn add_reports_every_offending_code() {
    let mut s = session();
    s.add_modules(year(1), semester(1), &codes(&["CS1010", "MA1521"])).unwrap();

    let err = s
        .add_modules(year(1), semester(2), &codes(&["MA1521", "CS1010", "CS3230"]))
        .unwrap_err();
    assert_eq!(err, PlannerError::DuplicateCode { codes: codes(&["CS1010", "MA1521"]) });

    let err = s
        .add_modules(year(1), semester(2), &codes(&["CS9998", "CS3230", "CS9999"]))
        .unwrap_err();
    assert_eq!(err, PlannerError::UnknownModule { codes: codes(&["CS9998", "CS9999"]) });
}

#[test]
fn add_to_missing_slot_fails() {
    let mut s = PlannerSession::new(
        common::catalog(),
        DegreePlan::new(vec![Slot::empty(year(1), semester(1))]).unwrap(),
        Vec::new(),
    );
    let err = s.add_modules(year(1), semester(3), &codes(&["CS1010"])).unwrap_err();
    assert_eq!(err, PlannerError::SlotNotFound { year: year(1), semester: semester(3) });
}

#[test]
fn undo_all_then_redo_all_restores_final_state() {
    let mut s = session();
    s.add_modules(year(1), semester(1), &codes(&["CS1010"])).unwrap();
    s.add_modules(year(1), semester(2), &codes(&["CS2105"])).unwrap();
    s.add_modules(year(2), semester(1), &codes(&["CS2102"])).unwrap();
    s.remove_modules(&codes(&["CS2105"])).unwrap();
    let final_plan = s.plan().clone();

    for _ in 0..4 {
        s.undo().unwrap();
    }
    assert!(s.plan().codes().is_empty());
    assert_eq!(s.undo(), Err(PlannerError::NoUndoableState));
    assert!(s.plan().codes().is_empty());

    for _ in 0..4 {
        s.redo().unwrap();
    }
    assert_eq!(s.plan(), &final_plan);
    assert_eq!(s.redo(), Err(PlannerError::NoRedoableState));
}

#[test]
fn commit_after_undo_discards_redo_tail() {
    let mut s = session();
    s.add_modules(year(1), semester(1), &codes(&["CS1010"])).unwrap();
    s.add_modules(year(1), semester(1), &codes(&["CS1231"])).unwrap();
    s.undo().unwrap();

    s.add_modules(year(1), semester(2), &codes(&["MA1521"])).unwrap();
    assert!(!s.history().can_redo());
    assert_eq!(s.plan().codes(), codes(&["CS1010", "MA1521"]));
}

#[test]
fn suggestions_skip_planned_modules() {
    let mut s = session();
    s.add_modules(year(1), semester(1), &codes(&["CS1231"])).unwrap();

    let suggestions = s.suggest(credits(4), &tags(&["math", "algorithms"]), 0);
    let ranked: Vec<&str> = suggestions.ranked.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(ranked[0], "CS3230");
    assert!(!ranked.contains(&"CS1231"));
    assert_eq!(ranked.len(), 8);
}

#[test]
fn requirement_progress_tracks_plan() {
    let mut s = session();
    s.add_modules(year(1), semester(1), &codes(&["CS1010", "GER1000"])).unwrap();

    let progress = s.requirement_progress();
    assert_eq!(progress[0].planned_credits, 4);
    assert!(!progress[0].is_fulfilled());
    assert!(progress[1].is_fulfilled());
}

/// Minimal linear congruential generator for a reproducible command mix
struct Lcg(u64);

impl Lcg {
    fn below(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        usize::try_from(self.0 >> 33).unwrap() % bound
    }
}

#[test]
fn invariants_hold_across_random_commands() {
    const POOL: [&str; 10] = [
        "CS1010", "CS1231", "CS2040C", "CS2102", "CS2105", "CS2107", "CS3230", "GER1000", "MA1521",
        "CS9999",
    ];
    let mut rng = Lcg(42);
    let mut s = session();
    let catalog = s.catalog().clone();

    for _ in 0..500 {
        let before = s.plan().clone();
        let picked: std::collections::BTreeSet<_> =
            (0..=rng.below(2)).map(|_| code(POOL[rng.below(POOL.len())])).collect();

        let result = match rng.below(4) {
            0 | 1 => {
                let y = i64::try_from(rng.below(4) + 1).unwrap();
                let sem = i64::try_from(rng.below(2) + 1).unwrap();
                s.add_modules(year(y), semester(sem), &picked).map(|_| ())
            }
            2 => s.remove_modules(&picked).map(|_| ()),
            _ => {
                if rng.below(2) == 0 {
                    s.undo()
                } else {
                    s.redo()
                }
            }
        };

        if result.is_err() {
            assert_eq!(s.plan(), &before, "failed command changed the plan");
        }
        assert_plan_invariants(s.plan(), &catalog);
    }
}
