//! Degree planning library
//!
//! Tracks modules, co-requisites and requirement categories across a
//! year/semester plan, with undo/redo history and JSON persistence.
//!
//! ```ignore
//! use degree_planner::core::planner::PlannerSession;
//! use degree_planner::core::storage;
//!
//! let data = storage::load(path)?;
//! let mut session = PlannerSession::from_data(data, 0);
//! let outcome = session.add_modules(year, semester, &codes)?;
//! println!("{outcome}");
//! ```

pub mod core;
pub mod logger;

pub use core::{config, get_version};
