//! Error types for issue-scan

use thiserror::Error;

/// Errors that can occur in issue-scan
#[derive(Error, Debug)]
pub enum Error {
    /// A revision or range endpoint could not be resolved to a commit
    #[error("cannot resolve revision '{spec}': {message}")]
    RangeResolution {
        /// The revision as given by the caller
        spec: String,
        /// Underlying resolution failure
        message: String,
    },

    /// A required field is absent from an issue record
    #[error("issue record is missing required field '{0}'")]
    MissingField(&'static str),

    /// The issue tracker answered with a non-success status
    #[error("issue tracker returned HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, empty if it could not be read
        body: String,
    },

    /// Repository could not be opened or traversed
    #[error("git error: {0}")]
    Git(String),

    /// Configuration is missing or invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// No tracker credentials available
    #[error("authentication error: {0}")]
    Auth(String),

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for issue-scan operations
pub type Result<T> = std::result::Result<T, Error>;
