//! Issue tracker lookup
//!
//! Fetches issue metadata for the IDs found in the history.

mod youtrack;

pub use youtrack::{YouTrackService, build_query, parse_issues};

use crate::error::Result;
use crate::types::Issue;
use async_trait::async_trait;

/// Issue tracker operations
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetch issues by readable ID in a single request
    ///
    /// Issues come back in the order the tracker returns them.
    async fn get_issues(&self, issue_ids: &[String]) -> Result<Vec<Issue>>;

    /// Browser URL for an issue
    fn issue_url(&self, issue_id: &str) -> String;
}

/// Reorder `issues` to follow `issue_ids`
///
/// Issues that were not asked for keep their relative order after the
/// requested ones.
pub fn order_like(issue_ids: &[String], mut issues: Vec<Issue>) -> Vec<Issue> {
    let rank = |issue: &Issue| {
        issue_ids
            .iter()
            .position(|id| *id == issue.id)
            .unwrap_or(issue_ids.len())
    };
    // sort_by_key is stable, so ties keep tracker order
    issues.sort_by_key(rank);
    issues
}
