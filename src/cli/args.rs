//! CLI argument definitions for `DegreePlanner`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use degree_planner::config::ConfigOverrides;
use degree_planner::core::models::{Code, Credits, Semester, Tag, Year};
use degree_planner::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to
/// [`Level`] for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_file`, `years`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Commands that read or change the degree plan.
///
/// Available both as top-level subcommands and inside the shell.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum PlanCommand {
    /// Show the degree plan and requirement progress.
    Show,
    /// Add modules (and their co-requisites) to a year and semester.
    Add {
        /// Target year (1-4)
        #[arg(short = 'y', long, value_name = "YEAR")]
        year: Year,
        /// Target semester (1-4)
        #[arg(short = 's', long, value_name = "SEMESTER")]
        semester: Semester,
        /// Module codes to add
        #[arg(value_name = "CODES", num_args = 1.., required = true)]
        codes: Vec<Code>,
    },
    /// Remove modules (and their co-requisites) from the degree plan.
    Remove {
        /// Module codes to remove
        #[arg(value_name = "CODES", num_args = 1.., required = true)]
        codes: Vec<Code>,
    },
    /// Suggest modules that are not yet planned.
    Suggest {
        /// Desired credits
        #[arg(short = 'c', long, value_name = "CREDITS")]
        credits: Credits,
        /// Desired tags (repeatable)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<Tag>,
    },
    /// Show requirement category progress.
    Requirements,
}

/// Commands accepted by the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ShellCommand {
    #[command(flatten)]
    Plan(PlanCommand),
    /// Undo the last change to the degree plan.
    Undo,
    /// Redo the last undone change.
    Redo,
    /// List commands entered in this session.
    History,
    /// Leave the shell.
    #[command(alias = "quit")]
    Exit,
}

/// One line typed into the shell.
#[derive(Parser, Debug)]
#[command(name = "planner", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    #[command(flatten)]
    Plan(PlanCommand),
    /// Start an interactive session with undo/redo.
    ///
    /// Every change is saved to the data file as it happens.
    Shell,
}

#[derive(Parser, Debug)]
#[command(
    name = "degreeplanner",
    about = "DegreePlanner command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Use this planner data file instead of the configured one
    #[arg(long = "data-file", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` fields leave the loaded configuration untouched.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_file: self
                .data_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
