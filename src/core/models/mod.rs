//! Data models for the degree planner

pub mod attributes;
pub mod catalog;
pub mod code;
pub mod module;
pub mod plan;
pub mod requirement;
pub mod slot;
pub mod term;

pub use attributes::{Credits, Tag, MAX_CREDITS};
pub use catalog::Catalog;
pub use code::Code;
pub use module::Module;
pub use plan::DegreePlan;
pub use requirement::RequirementCategory;
pub use slot::Slot;
pub use term::{Semester, Year, MAX_SEMESTER, MAX_YEAR};
