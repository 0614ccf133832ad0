//! Range scanning - one walk, classify, extract pipeline
//!
//! `scan_commits` is pure and works on an already-resolved commit list, so
//! both extraction strategies can be tested without a repository.
//! `scan_range` adds the resolution step through a [`CommitSource`].

use super::CommitSource;
use super::parse::{IssuePattern, extract_source_branch_name, extract_target_branch_name};
use crate::error::{Error, Result};
use crate::types::{Commit, ExtractionStrategy, ScanOptions};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Extract issue IDs from commits ordered oldest first
///
/// IDs come out in commit order. Repeats are kept unless
/// [`ScanOptions::unique`] is set.
pub fn scan_commits(commits: &[Commit], options: &ScanOptions) -> Vec<String> {
    let Some(pattern) = IssuePattern::new(&options.project_id) else {
        return Vec::new();
    };

    let ids: Vec<String> = commits
        .iter()
        .filter_map(|commit| match options.strategy {
            ExtractionStrategy::MergeBranches => {
                issue_from_merge(commit, &pattern, options.target_branch.as_deref())
            }
            ExtractionStrategy::CommitMessages => issue_from_message(commit, &pattern),
        })
        .collect();

    if options.unique {
        dedup_in_order(ids)
    } else {
        ids
    }
}

fn issue_from_merge(
    commit: &Commit,
    pattern: &IssuePattern,
    target_filter: Option<&str>,
) -> Option<String> {
    if !commit.is_merge() {
        return None;
    }

    if let Some(wanted) = target_filter {
        let target = extract_target_branch_name(&commit.message);
        if target.as_deref() != Some(wanted) {
            trace!(commit = %commit.id, ?target, wanted, "skipping merge into other branch");
            return None;
        }
    }

    let source = extract_source_branch_name(&commit.message)?;
    let issue = pattern.find(&source);
    trace!(commit = %commit.id, source = %source, ?issue, "parsed merge commit");
    issue
}

fn issue_from_message(commit: &Commit, pattern: &IssuePattern) -> Option<String> {
    if commit.is_merge() {
        return None;
    }
    pattern.find(&commit.message)
}

/// Drop repeated IDs, keeping the first occurrence of each
pub fn dedup_in_order(ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// Scan `from..to` in `source`
pub fn scan_range(
    source: &dyn CommitSource,
    from: &str,
    to: &str,
    options: &ScanOptions,
) -> Result<Vec<String>> {
    if options.project_id.trim().is_empty() {
        return Err(Error::Config("project id must not be empty".to_string()));
    }

    debug!(from, to, strategy = %options.strategy, "scanning commit range");
    let commits = source.commits_in_range(from, to)?;
    let ids = scan_commits(&commits, options);
    debug!(
        commits = commits.len(),
        issues = ids.len(),
        "scanned commit range"
    );
    Ok(ids)
}
