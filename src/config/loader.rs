//! Configuration file loading with precedence handling.

use crate::query::{PageSize, QueryState, SortKey, SortOrder};
use crate::source::http::DEFAULT_USER_AGENT;
use crate::source::DEFAULT_ENDPOINT;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or an unsupported value.
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
/// Corresponds to `~/.config/rmdex/config.toml`:
///
/// ```toml
/// endpoint = "https://rickandmortyapi.com/api/character"
/// page_size = 50
/// sort_key = "status"
/// sort_order = "desc"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// First page URL of the character collection.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Initial rows per page (10, 20 or 50).
    #[serde(default)]
    pub page_size: Option<PageSize>,

    /// Initial sort key (`name`, `status` or `gender`).
    #[serde(default)]
    pub sort_key: Option<SortKey>,

    /// Initial sort order (`asc` or `desc`).
    #[serde(default)]
    pub sort_order: Option<SortOrder>,

    /// `User-Agent` header for API requests.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// First page URL.
    pub endpoint: String,
    /// Initial page size.
    pub page_size: PageSize,
    /// Initial sort key.
    pub sort_key: SortKey,
    /// Initial sort order.
    pub sort_order: SortOrder,
    /// `User-Agent` header.
    pub user_agent: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: PageSize::default(),
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Initial query state seeded from the configured sort and page size.
    pub fn initial_query(&self) -> QueryState {
        QueryState {
            sort_key: self.sort_key,
            sort_order: self.sort_order,
            page_size: self.page_size,
            ..QueryState::default()
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/rmdex/rmdex.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("rmdex").join("rmdex.log")
    } else {
        PathBuf::from("rmdex.log")
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
/// Returns `~/.config/rmdex/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rmdex").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `RMDEX_CONFIG` environment variable
/// 3. Default path `~/.config/rmdex/config.toml`
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

    if let Ok(env_path) = std::env::var("RMDEX_CONFIG") {
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
        endpoint: config.endpoint.unwrap_or(defaults.endpoint),
        page_size: config.page_size.unwrap_or(defaults.page_size),
        sort_key: config.sort_key.unwrap_or(defaults.sort_key),
        sort_order: config.sort_order.unwrap_or(defaults.sort_order),
        user_agent: config.user_agent.unwrap_or(defaults.user_agent),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `RMDEX_ENDPOINT`: Override the first page URL
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(endpoint) = std::env::var("RMDEX_ENDPOINT") {
        config.endpoint = endpoint;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    endpoint_override: Option<String>,
    page_size_override: Option<PageSize>,
    sort_key_override: Option<SortKey>,
    descending_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(endpoint) = endpoint_override {
        config.endpoint = endpoint;
    }

    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    if let Some(sort_key) = sort_key_override {
        config.sort_key = sort_key;
    }

    if let Some(descending) = descending_override {
        config.sort_order = if descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
