//! Configuration file loading with precedence handling.

use crate::state::constants::{
    DEFAULT_RESIZE_QUIET_PERIOD, DEFAULT_SLIDE_GAP, DEFAULT_SWIPE_THRESHOLD,
};
use crate::state::EngineConfig;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default slide width in engine units.
pub const DEFAULT_SLIDE_WIDTH: f32 = 300.0;

/// Default number of engine units covered by one terminal column.
pub const DEFAULT_UNITS_PER_COLUMN: f32 = 10.0;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/cardswipe/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Drag distance, in units, needed to change slides.
    #[serde(default)]
    pub swipe_threshold: Option<f32>,

    /// Gap between slides, in units.
    #[serde(default)]
    pub slide_gap: Option<f32>,

    /// Resize quiet period in milliseconds.
    #[serde(default)]
    pub resize_quiet_period_ms: Option<u64>,

    /// Preferred slide width, in units.
    #[serde(default)]
    pub slide_width: Option<f32>,

    /// Units per terminal column.
    #[serde(default)]
    pub units_per_column: Option<f32>,

    /// Slide shown on startup.
    #[serde(default)]
    pub start_index: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Swipe threshold.
    pub swipe_threshold: f32,
    /// Slide gap.
    pub slide_gap: f32,
    /// Resize quiet period.
    pub resize_quiet_period: Duration,
    /// Preferred slide width.
    pub slide_width: f32,
    /// Units per terminal column.
    pub units_per_column: f32,
    /// Slide shown on startup.
    pub start_index: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            slide_gap: DEFAULT_SLIDE_GAP,
            resize_quiet_period: DEFAULT_RESIZE_QUIET_PERIOD,
            slide_width: DEFAULT_SLIDE_WIDTH,
            units_per_column: DEFAULT_UNITS_PER_COLUMN,
            start_index: 0,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Engine tuning derived from this configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            swipe_threshold: self.swipe_threshold,
            slide_gap: self.slide_gap,
            resize_quiet_period: self.resize_quiet_period,
            start_index: self.start_index,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/cardswipe/cardswipe.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("cardswipe").join("cardswipe.log")
    } else {
        PathBuf::from("cardswipe.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/cardswipe/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cardswipe").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CARDSWIPE_CONFIG` environment variable
/// 3. Default path `~/.config/cardswipe/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("CARDSWIPE_CONFIG") {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(
                "CARDSWIPE_CONFIG is set but empty".to_string(),
            ));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        swipe_threshold: config.swipe_threshold.unwrap_or(defaults.swipe_threshold),
        slide_gap: config.slide_gap.unwrap_or(defaults.slide_gap),
        resize_quiet_period: config
            .resize_quiet_period_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.resize_quiet_period),
        slide_width: config.slide_width.unwrap_or(defaults.slide_width),
        units_per_column: config.units_per_column.unwrap_or(defaults.units_per_column),
        start_index: config.start_index.unwrap_or(defaults.start_index),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CARDSWIPE_LOG_FILE`: Override log file path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var("CARDSWIPE_LOG_FILE") {
        if !path.is_empty() {
            config.log_file_path = PathBuf::from(path);
        }
    }

    config
}

/// CLI values that override every other configuration source.
///
/// `None` means the flag was not given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    /// From `--start`.
    pub start_index: Option<usize>,
    /// From `--slide-width`.
    pub slide_width: Option<f32>,
    /// From `--threshold`.
    pub swipe_threshold: Option<f32>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(start_index) = cli.start_index {
        config.start_index = start_index;
    }

    if let Some(slide_width) = cli.slide_width {
        config.slide_width = slide_width;
    }

    if let Some(threshold) = cli.swipe_threshold {
        config.swipe_threshold = threshold;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
