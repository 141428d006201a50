//! Core planner functionality shared by the library and the CLI

pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod storage;

/// Returns the current version of the `DegreePlanner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
