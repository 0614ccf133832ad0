//! Git history scanning
//!
//! Walks a commit range and extracts issue IDs from merge branch names or
//! commit messages.

mod parse;
mod repository;
mod scan;

pub use parse::{
    IssuePattern, extract_issue_id, extract_source_branch_name, extract_target_branch_name,
    is_issue_id, is_merge_commit,
};
pub use repository::GitRepository;
pub use scan::{dedup_in_order, scan_commits, scan_range};

use crate::error::Result;
use crate::types::Commit;

/// Read access to a commit graph
///
/// Implemented by [`GitRepository`] for real repositories; tests provide
/// in-memory graphs.
pub trait CommitSource {
    /// Resolve a branch, tag or hash to a commit ID (hex)
    fn resolve(&self, spec: &str) -> Result<String>;

    /// Commits reachable from `to` but not from `from`, oldest first
    fn commits_in_range(&self, from: &str, to: &str) -> Result<Vec<Commit>>;
}
