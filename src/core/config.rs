//! Configuration module for `DegreePlanner`

use crate::core::models::{MAX_SEMESTER, MAX_YEAR};
use crate::core::planner::DEFAULT_SUGGESTION_LIMIT;
use crate::logger::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

const DIR_VARIABLE: &str = "$DEGREE_PLANNER";

const fn default_years() -> u8 {
    MAX_YEAR
}

const fn default_semesters() -> u8 {
    2
}

const fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Planner JSON data file
    #[serde(default)]
    pub data_file: String,
}

/// Planner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Years seeded into a new plan
    #[serde(default = "default_years")]
    pub years: u8,
    /// Semesters per year seeded into a new plan
    #[serde(default = "default_semesters")]
    pub semesters: u8,
    /// Undo steps kept by the shell (0 keeps all)
    #[serde(default)]
    pub history_limit: usize,
    /// Entries per suggestion list (0 keeps all)
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            years: default_years(),
            semesters: default_semesters(),
            history_limit: 0,
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Planner settings
    #[serde(default)]
    pub planner: PlannerConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override planner data file
    pub data_file: Option<String>,
}

fn parse_in_range<T>(key: &str, value: &str, low: T, high: T) -> Result<T, String>
where
    T: std::str::FromStr + PartialOrd + fmt::Display + Copy,
{
    let parsed = value
        .trim()
        .parse::<T>()
        .map_err(|_| format!("Invalid number for '{key}': '{value}'"))?;
    if parsed < low || parsed > high {
        return Err(format!("'{key}' must be between {low} and {high}, got {parsed}"));
    }
    Ok(parsed)
}

impl Config {
    /// Get the `$DEGREE_PLANNER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/degreeplanner`
    /// - macOS: `~/Library/Application Support/degreeplanner`
    /// - Windows: `%APPDATA%\degreeplanner`
    #[must_use]
    pub fn get_degreeplanner_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("degreeplanner")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled; planner numbers already carry serde defaults.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }
        if self.paths.data_file.is_empty() && !defaults.paths.data_file.is_empty() {
            self.paths.data_file.clone_from(&defaults.paths.data_file);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the config file is not touched.
    /// Only non-`None` values replace config values.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     data_file: Some("./plan.json".to_string()),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(data_file) = &overrides.data_file {
            self.paths.data_file = Self::expand_variables(data_file);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, in
    /// the directory returned by [`get_degreeplanner_dir`].
    ///
    /// [`get_degreeplanner_dir`]: Self::get_degreeplanner_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_degreeplanner_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$DEGREE_PLANNER` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_degreeplanner_dir();
            value.replace(DIR_VARIABLE, &dir.to_string_lossy())
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing sections and fields use their serde defaults. `$DEGREE_PLANNER`
    /// is expanded in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let config = Config::from_toml(r#"
    /// [logging]
    /// level = "info"
    /// file = "$DEGREE_PLANNER/logs/degreeplanner.log"
    /// "#)?;
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_file = Self::expand_variables(&config.paths.data_file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Debug builds use `DefaultCLIConfigDebug.toml`, release builds use
    /// `DefaultCLIConfigRelease.toml`.
    ///
    /// # Panics
    /// Panics if the embedded default configuration cannot be parsed. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - Existing file: load it, merge missing fields from defaults, and save
    ///   if anything was added.
    /// - First run: create the config directory and write the defaults.
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// The saved file will use the format:
    /// ```toml
    /// [logging]
    /// level = "info"
    /// file = "/home/user/.config/degreeplanner/logs/degreeplanner.log"
    /// verbose = false
    ///
    /// [paths]
    /// data_file = "/home/user/.config/degreeplanner/planner.json"
    ///
    /// [planner]
    /// years = 4
    /// semesters = 2
    /// history_limit = 0
    /// suggestion_limit = 10
    /// ```
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`, `file`, `verbose`
    /// - `data_file`
    /// - `years`, `semesters`, `history_limit`, `suggestion_limit`
    ///
    /// Dashed spellings (`data-file`) are accepted too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_file" | "data-file" => Some(self.paths.data_file.clone()),
            "years" => Some(self.planner.years.to_string()),
            "semesters" => Some(self.planner.semesters.to_string()),
            "history_limit" | "history-limit" => Some(self.planner.history_limit.to_string()),
            "suggestion_limit" | "suggestion-limit" => {
                Some(self.planner.suggestion_limit.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Value formats:
    /// - `level`: one of error, warn, info, debug
    /// - `file`, `data_file`: paths (may use `$DEGREE_PLANNER`)
    /// - `verbose`: "true" or "false"
    /// - `years`: 1 to 4, `semesters`: 1 to 4
    /// - `history_limit`, `suggestion_limit`: non-negative integers (0 means no limit)
    ///
    /// Note: This method updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is out of range.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                let level: Level = value
                    .parse()
                    .map_err(|_| format!("Invalid log level for 'level': '{value}'"))?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = Self::expand_variables(value),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_file" | "data-file" => self.paths.data_file = Self::expand_variables(value),
            "years" => self.planner.years = parse_in_range(key, value, 1, MAX_YEAR)?,
            "semesters" => self.planner.semesters = parse_in_range(key, value, 1, MAX_SEMESTER)?,
            "history_limit" | "history-limit" => {
                self.planner.history_limit = parse_in_range(key, value, 0, usize::MAX)?;
            }
            "suggestion_limit" | "suggestion-limit" => {
                self.planner.suggestion_limit = parse_in_range(key, value, 0, usize::MAX)?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Note: This method updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_file" | "data-file" => self.paths.data_file.clone_from(&defaults.paths.data_file),
            "years" => self.planner.years = defaults.planner.years,
            "semesters" => self.planner.semesters = defaults.planner.semesters,
            "history_limit" | "history-limit" => {
                self.planner.history_limit = defaults.planner.history_limit;
            }
            "suggestion_limit" | "suggestion-limit" => {
                self.planner.suggestion_limit = defaults.planner.suggestion_limit;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds without doing anything if there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_file = \"{}\"", self.paths.data_file)?;

        writeln!(f, "\n[planner]")?;
        writeln!(f, "  years = {}", self.planner.years)?;
        writeln!(f, "  semesters = {}", self.planner.semesters)?;
        writeln!(f, "  history_limit = {}", self.planner.history_limit)?;
        writeln!(f, "  suggestion_limit = {}", self.planner.suggestion_limit)?;

        Ok(())
    }
}
