//! Core types for issue-scan

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit as seen by the scanner
///
/// Owned copy of what the repository reports; the scanner never writes back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commit {
    /// Git commit ID (hex)
    pub id: String,
    /// Parent commit IDs (hex), in parent order
    pub parents: Vec<String>,
    /// Full commit message, including any trailing newline
    pub message: String,
    /// When the commit was committed
    pub committed_at: DateTime<Utc>,
}

impl Commit {
    /// A commit is a merge iff it has more than one parent
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

/// An issue from the tracker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Issue {
    /// Readable issue ID (e.g. "PROJ-123")
    pub id: String,
    /// Issue summary
    pub title: String,
    /// Name of the "State" custom field, if the issue has one
    pub state: Option<String>,
}

/// Where issue IDs are read from while walking a range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStrategy {
    /// Source branch names of merge commits
    #[default]
    MergeBranches,
    /// Messages of non-merge commits
    CommitMessages,
}

impl std::fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MergeBranches => write!(f, "merges"),
            Self::CommitMessages => write!(f, "messages"),
        }
    }
}

/// Options for a range scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Issue ID prefix (e.g. "PROJ" for "PROJ-123")
    pub project_id: String,
    /// Only count merges into this branch (merge strategy only)
    pub target_branch: Option<String>,
    /// Extraction strategy
    pub strategy: ExtractionStrategy,
    /// Collapse repeated IDs, keeping the first occurrence
    pub unique: bool,
}

impl ScanOptions {
    /// Merge-branch scan for `project_id` with no filter, duplicates kept
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            target_branch: None,
            strategy: ExtractionStrategy::MergeBranches,
            unique: false,
        }
    }

    /// Restrict to merges into `branch`
    #[must_use]
    pub fn with_target_branch(mut self, branch: impl Into<String>) -> Self {
        self.target_branch = Some(branch.into());
        self
    }

    /// Use a different extraction strategy
    #[must_use]
    pub const fn with_strategy(mut self, strategy: ExtractionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Collapse repeated IDs
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}
