//! Authentication for the issue tracker
//!
//! Supports a token from the environment or from the config file.

use crate::config::{Config, non_empty};
use crate::error::{Error, Result};
use tracing::debug;

/// Environment variable holding the tracker token
pub const TOKEN_ENV: &str = "YOUTRACK_TOKEN";

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from environment variable
    EnvVar,
    /// Token from the config file
    ConfigFile,
}

/// Tracker credentials
#[derive(Clone)]
pub struct TrackerAuthConfig {
    /// Permanent token sent as a bearer token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

impl std::fmt::Debug for TrackerAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerAuthConfig")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Pick the tracker token, preferring `env_token` over the config file
pub fn resolve_token(env_token: Option<String>, config: &Config) -> Result<TrackerAuthConfig> {
    if let Some(token) = non_empty(env_token) {
        return Ok(TrackerAuthConfig {
            token,
            source: AuthSource::EnvVar,
        });
    }

    non_empty(config.token.clone())
        .map(|token| TrackerAuthConfig {
            token,
            source: AuthSource::ConfigFile,
        })
        .ok_or_else(|| {
            Error::Auth(format!(
                "no tracker token; set {TOKEN_ENV} or add token to the config file"
            ))
        })
}

/// Get tracker credentials from `YOUTRACK_TOKEN` or the config file
pub fn get_tracker_auth(config: &Config) -> Result<TrackerAuthConfig> {
    let auth = resolve_token(std::env::var(TOKEN_ENV).ok(), config)?;
    debug!(source = ?auth.source, "resolved tracker token");
    Ok(auth)
}
