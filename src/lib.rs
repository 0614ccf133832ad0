//! issue-scan: find the issues merged between two git revisions
//!
//! Walks a commit range, pulls issue identifiers out of merge commit
//! branch names (or plain commit messages) and looks the issues up in a
//! YouTrack-compatible tracker.

pub mod auth;
pub mod config;
pub mod error;
pub mod git;
pub mod tracker;
pub mod types;

pub use error::{Error, Result};
