//! Configuration: where the analysis API lives and how loud to log.
//!
//! Resolution order for the base URL: `--base-url`, then the
//! `INJURY_DASH_API_URL` environment variable, then `base_url` in
//! `~/.config/injury-dash/config.json`, then [`DEFAULT_BASE_URL`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{core::try_read_to_string, error::DashboardError, Result};

pub const API_URL_ENV_VAR: &str = "INJURY_DASH_API_URL";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Contents of the optional config file. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub log_level: Option<String>,
}

/// Path: ~/.config/injury-dash/config.json
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("injury-dash").join("config.json")
}

/// A missing file is an empty config; a malformed one is an error.
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    match try_read_to_string(path) {
        None => Ok(FileConfig::default()),
        Some(s) => serde_json::from_str(&s).map_err(|e| DashboardError::Config {
            message: format!("{}: {}", path.display(), e),
        }),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Pick the base URL from the given sources, first non-empty wins.
pub fn resolve_base_url_from(
    cli: Option<String>,
    env: Option<String>,
    file: &FileConfig,
) -> String {
    non_empty(cli)
        .or_else(|| non_empty(env))
        .or_else(|| non_empty(file.base_url.clone()))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Same as [`resolve_base_url_from`], reading the environment variable.
pub fn resolve_base_url(cli: Option<String>, file: &FileConfig) -> String {
    resolve_base_url_from(cli, std::env::var(API_URL_ENV_VAR).ok(), file)
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub log_level: String,
}

impl Settings {
    pub fn resolve(cli_base_url: Option<String>, verbose: bool, file: &FileConfig) -> Self {
        let log_level = if verbose {
            "debug".to_string()
        } else {
            non_empty(file.log_level.clone()).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
        };
        Self {
            base_url: resolve_base_url(cli_base_url, file),
            log_level,
        }
    }
}
