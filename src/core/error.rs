//! Error types for planner commands, model validation, and storage.

use crate::core::models::{Code, Semester, Year, MAX_CREDITS, MAX_SEMESTER, MAX_YEAR};
use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

/// Join codes into a sorted, comma-separated list for messages
#[must_use]
pub fn format_codes(codes: &BTreeSet<Code>) -> String {
    if codes.is_empty() {
        return "None".to_string();
    }
    codes
        .iter()
        .map(Code::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures a planner command can report back to its caller.
///
/// Every variant is detected before the plan is touched, so a returned
/// error always means the plan is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// No slot exists for the requested year and semester
    #[error("The degree plan of year {year} and semester {semester} does not exist.")]
    SlotNotFound {
        /// Requested year
        year: Year,
        /// Requested semester
        semester: Semester,
    },
    /// Codes that are already placed somewhere in the plan
    #[error("The module(s) {} already exist in the degree plan.", format_codes(.codes))]
    DuplicateCode {
        /// Offending codes
        codes: BTreeSet<Code>,
    },
    /// Codes that are not in the module catalog
    #[error("The module(s) {} do not exist in the module list.", format_codes(.codes))]
    UnknownModule {
        /// Offending codes
        codes: BTreeSet<Code>,
    },
    /// Co-requisites placed in a different slot than the target
    #[error(
        "The co-requisite(s) {} of module(s) {} already exist in a different year and semester of the degree plan.\n\
         Modules that are co-requisites of each other have to be in the same year and semester.",
        format_codes(.corequisites),
        format_codes(.triggers)
    )]
    CorequisiteConflict {
        /// Co-requisites already planned elsewhere
        corequisites: BTreeSet<Code>,
        /// Incoming codes that pulled them in
        triggers: BTreeSet<Code>,
    },
    /// Codes asked to be removed that are not in any slot
    #[error("The module(s) {} do not exist in the degree plan.", format_codes(.codes))]
    UnknownPlannerCode {
        /// Offending codes
        codes: BTreeSet<Code>,
    },
    /// A command was given no codes to work on
    #[error("At least one module code is required.")]
    EmptyCodeSet,
    /// Undo requested at the oldest snapshot
    #[error("No more commands to undo!")]
    NoUndoableState,
    /// Redo requested at the newest snapshot
    #[error("No more commands to redo!")]
    NoRedoableState,
}

/// Invalid domain values and inconsistent model data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Module code with the wrong shape
    #[error("Invalid module code '{0}': {rule}", rule = Code::CONSTRAINTS)]
    InvalidCode(String),
    /// Year outside 1..=MAX_YEAR
    #[error("Invalid year '{0}': years range from 1 to {max}", max = MAX_YEAR)]
    InvalidYear(String),
    /// Semester outside 1..=MAX_SEMESTER
    #[error("Invalid semester '{0}': semesters range from 1 to {max}", max = MAX_SEMESTER)]
    InvalidSemester(String),
    /// Credits negative, fractional, or above MAX_CREDITS
    #[error("Invalid credits '{0}': credits must be a whole number from 0 to {max}", max = MAX_CREDITS)]
    InvalidCredits(String),
    /// Empty or non-alphanumeric tag
    #[error("Invalid tag '{0}': tags must be non-empty and alphanumeric")]
    InvalidTag(String),
    /// Same code listed twice in the module list
    #[error("Module list contains duplicate module {0}")]
    DuplicateModule(Code),
    /// Module naming itself as co-requisite
    #[error("Module {0} lists itself as a co-requisite")]
    SelfCorequisite(Code),
    /// Co-requisite missing from the module list
    #[error("Module {module} lists unknown co-requisite {corequisite}")]
    UnknownCorequisite {
        /// Module declaring the co-requisite
        module: Code,
        /// Code not found in the module list
        corequisite: Code,
    },
    /// Two slots for the same year and semester
    #[error("Degree plan contains duplicate slot for year {year} semester {semester}")]
    DuplicateSlot {
        /// Year of the repeated slot
        year: Year,
        /// Semester of the repeated slot
        semester: Semester,
    },
    /// Code planned in more than one slot
    #[error("Module {0} is placed in more than one slot of the degree plan")]
    CodeInMultipleSlots(Code),
    /// Blank category name
    #[error("Requirement category name must not be empty")]
    EmptyRequirementCategoryName,
    /// Category name used twice
    #[error("Requirement category '{0}' is defined more than once")]
    DuplicateRequirementCategory(String),
}

/// Failures while reading or writing the planner data file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Malformed JSON
    #[error("Serialization error: {source}")]
    Serialization {
        /// Underlying JSON error
        #[from]
        source: serde_json::Error,
    },
    /// Well-formed JSON describing an inconsistent planner
    #[error("Invalid planner data: {0}")]
    InvalidData(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(raw: &[&str]) -> BTreeSet<Code> {
        raw.iter().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn test_format_codes_sorted() {
        assert_eq!(format_codes(&codes(&["CS2107", "CS1010"])), "CS1010, CS2107");
        assert_eq!(format_codes(&BTreeSet::new()), "None");
    }

    #[test]
    fn test_messages_embed_offending_codes() {
        let err = PlannerError::DuplicateCode {
            codes: codes(&["CS1231", "CS1010"]),
        };
        assert_eq!(
            err.to_string(),
            "The module(s) CS1010, CS1231 already exist in the degree plan."
        );

        let err = PlannerError::CorequisiteConflict {
            corequisites: codes(&["CS2107"]),
            triggers: codes(&["CS2105"]),
        };
        assert!(err.to_string().starts_with("The co-requisite(s) CS2107 of module(s) CS2105"));
    }

    #[test]
    fn test_slot_not_found_message() {
        let err = PlannerError::SlotNotFound {
            year: Year::new(2).unwrap(),
            semester: Semester::new(3).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "The degree plan of year 2 and semester 3 does not exist."
        );
    }

    #[test]
    fn test_storage_error_wraps_validation() {
        let err: StorageError = ValidationError::SelfCorequisite("CS1010".parse().unwrap()).into();
        assert!(err.to_string().contains("CS1010 lists itself"));
    }

    #[test]
    fn test_range_messages_include_limits() {
        assert_eq!(
            ValidationError::InvalidYear("7".to_string()).to_string(),
            format!("Invalid year '7': years range from 1 to {MAX_YEAR}")
        );
        assert_eq!(
            ValidationError::InvalidSemester("0".to_string()).to_string(),
            format!("Invalid semester '0': semesters range from 1 to {MAX_SEMESTER}")
        );
        assert!(ValidationError::InvalidCredits("-1".to_string())
            .to_string()
            .ends_with(&MAX_CREDITS.to_string()));
        assert_eq!(
            ValidationError::InvalidCode("cs".to_string()).to_string(),
            format!("Invalid module code 'cs': {}", Code::CONSTRAINTS)
        );
    }
}
