//! Persistent settings in `~/.config/issue-scan/config.toml`.
//!
//! Every key is optional. Command-line flags override environment
//! variables, which override the file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name for issue-scan within the user config dir.
const APP_DIR: &str = "issue-scan";

/// Filename for settings.
const CONFIG_FILE: &str = "config.toml";

/// Environment variable holding the tracker base URL.
pub const URL_ENV: &str = "YOUTRACK_URL";

/// Settings file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Tracker instance root, e.g. `https://company.youtrack.cloud`
    pub base_url: Option<String>,
    /// Default issue ID prefix
    pub project_id: Option<String>,
    /// Default target branch filter for merge scans
    pub target_branch: Option<String>,
    /// Tracker token, used when `YOUTRACK_TOKEN` is unset
    pub token: Option<String>,
}

impl Config {
    /// Tracker base URL: flag, then environment, then file.
    pub fn resolve_base_url(&self, flag: Option<&str>, env: Option<String>) -> Result<String> {
        non_empty(flag.map(String::from))
            .or_else(|| non_empty(env))
            .or_else(|| non_empty(self.base_url.clone()))
            .ok_or_else(|| {
                Error::Config(format!(
                    "no tracker URL; pass --url, set {URL_ENV} or add base_url to the config file"
                ))
            })
    }

    /// Issue ID prefix: flag, then file.
    pub fn resolve_project_id(&self, flag: Option<&str>) -> Result<String> {
        non_empty(flag.map(String::from))
            .or_else(|| non_empty(self.project_id.clone()))
            .ok_or_else(|| {
                Error::Config(
                    "no project id; pass --project or add project_id to the config file"
                        .to_string(),
                )
            })
    }

    /// Target branch filter: flag, then file.
    pub fn resolve_target_branch(&self, flag: Option<&str>) -> Option<String> {
        non_empty(flag.map(String::from)).or_else(|| non_empty(self.target_branch.clone()))
    }
}

/// Treat empty and whitespace-only values as unset.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Get the default settings file path, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load settings.
///
/// An explicit `path` must exist. Without one, the default file is read if
/// present and an empty `Config` is returned otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return read_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => read_config(&path),
        _ => Ok(Config::default()),
    }
}

fn read_config(path: &Path) -> Result<Config> {
    debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
}
