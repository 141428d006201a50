//! Planning commands over a degree plan
//!
//! - [`engine`]: add/remove validation and co-requisite handling
//! - [`history`]: undo/redo snapshots
//! - [`suggest`]: module suggestion ranking
//! - [`requirements`]: requirement category progress
//! - [`session`]: the owner that ties them together

pub mod engine;
pub mod history;
pub mod requirements;
pub mod session;
pub mod suggest;

pub use engine::{plan_add, plan_remove, AddOutcome, Mutation, RemoveOutcome};
pub use history::History;
pub use requirements::{requirement_progress, RequirementProgress};
pub use session::{PlanListener, PlannerSession};
pub use suggest::{suggest, Candidate, Suggestions, DEFAULT_SUGGESTION_LIMIT};
