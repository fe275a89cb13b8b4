//! Configuration file loading with precedence handling.

use crate::view_state::{
    DEFAULT_COLLATION_LOCALE, DEFAULT_PAGE_SIZE, NARROW_MAX_VISIBLE_PAGES, WIDE_MAX_VISIBLE_PAGES,
};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ADMINVIEW_CONFIG";

/// Environment variable overriding the page size.
pub const PAGE_SIZE_ENV_VAR: &str = "ADMINVIEW_PAGE_SIZE";

/// Terminal width (columns) below which the compact pager is used.
pub const DEFAULT_NARROW_WIDTH: u16 = 80;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
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

    /// A setting parsed but is outside its valid range.
    #[error("Invalid value for {setting}: {reason}")]
    InvalidValue {
        /// Setting name as written in the file or environment.
        setting: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/adminview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Rows per page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Page markers shown by the pager on wide terminals.
    #[serde(default)]
    pub max_visible_pages: Option<usize>,

    /// Page markers shown by the pager on narrow terminals.
    #[serde(default)]
    pub narrow_max_visible_pages: Option<usize>,

    /// Width in columns below which the terminal counts as narrow.
    #[serde(default)]
    pub narrow_width: Option<u16>,

    /// BCP 47 locale used to order text columns (e.g. "en", "sv", "de-u-co-phonebk").
    #[serde(default)]
    pub collation_locale: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Rows per page.
    pub page_size: usize,
    /// Pager markers on wide terminals.
    pub max_visible_pages: usize,
    /// Pager markers on narrow terminals.
    pub narrow_max_visible_pages: usize,
    /// Narrow-terminal threshold in columns.
    pub narrow_width: u16,
    /// Collation locale for text sorting.
    pub collation_locale: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_visible_pages: WIDE_MAX_VISIBLE_PAGES,
            narrow_max_visible_pages: NARROW_MAX_VISIBLE_PAGES,
            narrow_width: DEFAULT_NARROW_WIDTH,
            collation_locale: DEFAULT_COLLATION_LOCALE.to_string(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Check the numeric settings are usable.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] for a zero page size or marker budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("page_size", self.page_size),
            ("max_visible_pages", self.max_visible_pages),
            ("narrow_max_visible_pages", self.narrow_max_visible_pages),
        ];
        for (setting, value) in checks {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    setting,
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/adminview/adminview.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("adminview").join("adminview.log"),
        None => PathBuf::from("adminview.log"),
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
/// Returns `~/.config/adminview/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("adminview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ADMINVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/adminview/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
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
        page_size: config.page_size.unwrap_or(defaults.page_size),
        max_visible_pages: config
            .max_visible_pages
            .unwrap_or(defaults.max_visible_pages),
        narrow_max_visible_pages: config
            .narrow_max_visible_pages
            .unwrap_or(defaults.narrow_max_visible_pages),
        narrow_width: config.narrow_width.unwrap_or(defaults.narrow_width),
        collation_locale: config
            .collation_locale
            .unwrap_or(defaults.collation_locale),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ADMINVIEW_PAGE_SIZE`: Override page size
///
/// # Errors
///
/// [`ConfigError::InvalidValue`] if `ADMINVIEW_PAGE_SIZE` is set but is not a
/// positive integer.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(PAGE_SIZE_ENV_VAR) {
        config.page_size = raw
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| ConfigError::InvalidValue {
                setting: PAGE_SIZE_ENV_VAR,
                reason: format!("expected a positive integer, got '{raw}'"),
            })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_size_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
