//! In-memory commit graph for testing

use issue_scan::error::{Error, Result};
use issue_scan::git::CommitSource;
use issue_scan::types::Commit;
use std::collections::{HashMap, HashSet};

/// Simple in-memory `CommitSource`
///
/// Commits are kept in insertion order, which is treated as oldest first.
/// Branch names resolve through a name table; any other spec must be a
/// commit ID.
#[derive(Default)]
pub struct MockCommitSource {
    commits: Vec<Commit>,
    refs: HashMap<String, String>,
}

impl MockCommitSource {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit (must come after its parents)
    pub fn with_commit(mut self, commit: Commit) -> Self {
        self.commits.push(commit);
        self
    }

    /// Point a branch name at a commit
    pub fn with_ref(mut self, name: &str, id: &str) -> Self {
        self.refs.insert(name.to_string(), id.to_string());
        self
    }

    fn ancestors(&self, id: &str) -> HashSet<String> {
        let by_id: HashMap<&str, &Commit> =
            self.commits.iter().map(|c| (c.id.as_str(), c)).collect();

        let mut seen = HashSet::new();
        let mut stack = vec![id.to_string()];
        while let Some(current) = stack.pop() {
            if !seen.insert(current.clone()) {
                continue;
            }
            if let Some(commit) = by_id.get(current.as_str()) {
                stack.extend(commit.parents.iter().cloned());
            }
        }
        seen
    }
}

impl CommitSource for MockCommitSource {
    fn resolve(&self, spec: &str) -> Result<String> {
        if let Some(id) = self.refs.get(spec) {
            return Ok(id.clone());
        }
        if self.commits.iter().any(|c| c.id == spec) {
            return Ok(spec.to_string());
        }
        Err(Error::RangeResolution {
            spec: spec.to_string(),
            message: "unknown revision".to_string(),
        })
    }

    fn commits_in_range(&self, from: &str, to: &str) -> Result<Vec<Commit>> {
        let hidden = self.ancestors(&self.resolve(from)?);
        let visible = self.ancestors(&self.resolve(to)?);

        Ok(self
            .commits
            .iter()
            .filter(|c| visible.contains(&c.id) && !hidden.contains(&c.id))
            .cloned()
            .collect())
    }
}
