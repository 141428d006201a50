//! CLI command handlers for `DegreePlanner`.
//!
//! - [`config`]: `config get|set|unset|reset`
//! - [`planner`]: one-shot plan commands and the shared session setup
//! - [`shell`]: interactive session with undo/redo

pub mod config;
pub mod planner;
pub mod shell;
