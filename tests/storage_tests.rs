//! Integration tests for planner data persistence

mod common;

use common::{codes, semester, year};
use degree_planner::core::error::{StorageError, ValidationError};
use degree_planner::core::planner::PlannerSession;
use degree_planner::core::storage::{self, PlannerData};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("samples").join("planner.json")
}

#[test]
fn sample_data_file_loads() {
    let data = storage::load(&sample_path()).expect("sample should load");
    assert_eq!(data.catalog.len(), 14);
    assert_eq!(data.plan.slots().len(), 8);
    assert_eq!(data.categories.len(), 4);
    assert!(data.plan.corequisite_violations(&data.catalog).is_empty());
}

#[test]
fn save_then_load_preserves_session() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("data").join("planner.json");

    let mut session = PlannerSession::from_data(storage::load(&sample_path()).unwrap(), 0);
    session
        .add_modules(year(2), semester(2), &codes(&["CS2105"]))
        .unwrap();
    storage::save(&path, &session.to_data()).expect("save should succeed");

    let reloaded = storage::load(&path).expect("reload should succeed");
    assert_eq!(reloaded, session.to_data());
    assert_eq!(
        reloaded.plan.slot(year(2), semester(2)).unwrap().codes(),
        &codes(&["CS2105", "CS2107"])
    );
}

#[test]
fn load_or_seed_creates_empty_plan_when_missing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("missing.json");

    let data = storage::load_or_seed(&path, 4, 3).unwrap();
    assert_eq!(data, PlannerData::seeded(4, 3));
    assert_eq!(data.plan.slots().len(), 12);
    assert!(!path.exists());
}

#[test]
fn missing_requirement_categories_default_to_empty() {
    let data = storage::from_json_str(r#"{"modules": [], "plannerModules": []}"#).unwrap();
    assert!(data.categories.is_empty());
    assert!(data.plan.slots().is_empty());
}

#[test]
fn unreadable_file_reports_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nope.json");
    let err = storage::load(&path).unwrap_err();
    assert!(matches!(err, StorageError::FileSystem { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn malformed_json_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ \"modules\": [").unwrap();
    assert!(matches!(storage::load(&path), Err(StorageError::Serialization { .. })));
}

#[test]
fn inconsistent_catalog_is_rejected() {
    let json = r#"{
        "modules": [{"code": "CS2105", "credits": 4, "corequisites": ["CS2107"]}],
        "plannerModules": []
    }"#;
    assert!(matches!(
        storage::from_json_str(json),
        Err(StorageError::InvalidData(ValidationError::UnknownCorequisite { .. }))
    ));

    let json = r#"{
        "modules": [{"code": "CS1010", "credits": 4}],
        "plannerModules": [],
        "requirementCategories": [
            {"name": "Core", "credits": 4},
            {"name": "core", "credits": 8}
        ]
    }"#;
    assert!(matches!(
        storage::from_json_str(json),
        Err(StorageError::InvalidData(ValidationError::DuplicateRequirementCategory(_)))
    ));
}
