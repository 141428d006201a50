//! JSON persistence for the planner data file
//!
//! The file holds the module catalog, the plan's slots, and the requirement
//! categories:
//!
//! ```json
//! {
//!   "modules": [{ "code": "CS2105", "name": "...", "credits": 4, "tags": ["networks"], "corequisites": ["CS2107"] }],
//!   "plannerModules": [{ "year": 1, "semester": 1, "codes": ["CS2105", "CS2107"] }],
//!   "requirementCategories": [{ "name": "Computing Breadth", "credits": 20, "codes": ["CS2105"] }]
//! }
//! ```

use crate::core::error::{StorageError, ValidationError};
use crate::core::models::requirement::validate_categories;
use crate::core::models::{Catalog, DegreePlan, Module, RequirementCategory, Slot};
use crate::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serialized form of the planner data file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerDocument {
    /// Module catalog
    #[serde(default)]
    pub modules: Vec<Module>,
    /// Plan slots in order
    #[serde(default)]
    pub planner_modules: Vec<Slot>,
    /// Requirement categories
    #[serde(default)]
    pub requirement_categories: Vec<RequirementCategory>,
}

/// Validated contents of a planner data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerData {
    /// Module catalog
    pub catalog: Catalog,
    /// Degree plan
    pub plan: DegreePlan,
    /// Requirement categories
    pub categories: Vec<RequirementCategory>,
}

impl PlannerData {
    /// An empty catalog with one empty slot per year and semester
    #[must_use]
    pub fn seeded(years: u8, semesters: u8) -> Self {
        Self {
            catalog: Catalog::default(),
            plan: DegreePlan::seeded(years, semesters),
            categories: Vec::new(),
        }
    }
}

impl PlannerDocument {
    /// Validate the document and build the model
    ///
    /// A plan whose co-requisites sit in different slots is accepted with a
    /// warning; planner commands never produce one, but older files may.
    ///
    /// # Errors
    /// Returns the first catalog, plan, or category inconsistency found.
    pub fn into_data(self) -> Result<PlannerData, ValidationError> {
        let catalog = Catalog::new(self.modules)?;
        let plan = DegreePlan::new(self.planner_modules)?;
        validate_categories(&self.requirement_categories)?;

        for (module, coreq) in plan.corequisite_violations(&catalog) {
            warn!("Co-requisite {coreq} of {module} is planned in a different slot");
        }
        for code in plan.codes().iter().filter(|code| !catalog.contains(code)) {
            warn!("Planned module {code} is not in the module list");
        }
        for category in &self.requirement_categories {
            for code in category.codes.iter().filter(|code| !catalog.contains(code)) {
                warn!(
                    "Requirement category '{}' lists module {code}, which is not in the module list",
                    category.name
                );
            }
        }

        Ok(PlannerData {
            catalog,
            plan,
            categories: self.requirement_categories,
        })
    }

    /// Build a document from model data
    #[must_use]
    pub fn from_data(data: &PlannerData) -> Self {
        Self {
            modules: data.catalog.modules().cloned().collect(),
            planner_modules: data.plan.slots().to_vec(),
            requirement_categories: data.categories.clone(),
        }
    }
}

/// Parse planner data from a JSON string
///
/// # Errors
/// Returns an error for malformed JSON or inconsistent data.
pub fn from_json_str(json: &str) -> Result<PlannerData, StorageError> {
    let document: PlannerDocument = serde_json::from_str(json)?;
    Ok(document.into_data()?)
}

/// Serialize planner data to pretty-printed JSON
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_json_string(data: &PlannerData) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(&PlannerDocument::from_data(data))?)
}

/// Load planner data from `path`
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid JSON, or
/// describes an inconsistent planner.
pub fn load(path: &Path) -> Result<PlannerData, StorageError> {
    let content = fs::read_to_string(path).map_err(|source| StorageError::FileSystem {
        path: path.to_path_buf(),
        source,
    })?;
    let data = from_json_str(&content)?;
    info!(
        "Loaded {} module(s) and {} slot(s) from {}",
        data.catalog.len(),
        data.plan.slots().len(),
        path.display()
    );
    Ok(data)
}

/// Load planner data from `path`, or seed an empty planner if the file does not exist
///
/// # Errors
/// Same as [`load`] when the file exists.
pub fn load_or_seed(path: &Path, years: u8, semesters: u8) -> Result<PlannerData, StorageError> {
    if path.exists() {
        load(path)
    } else {
        info!(
            "No planner data at {}; starting with {years} year(s) of {semesters} semester(s)",
            path.display()
        );
        Ok(PlannerData::seeded(years, semesters))
    }
}

/// Write planner data to `path`, creating parent directories as needed
///
/// # Errors
/// Returns an error if the directory or file cannot be written.
pub fn save(path: &Path, data: &PlannerData) -> Result<(), StorageError> {
    let to_fs_error = |source| StorageError::FileSystem {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(to_fs_error)?;
        }
    }
    let json = to_json_string(data)?;
    fs::write(path, json).map_err(to_fs_error)?;
    info!("Saved planner data to {}", path.display());
    Ok(())
}
