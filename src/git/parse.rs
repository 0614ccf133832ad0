//! Commit message parsing - pure regex helpers
//!
//! Merge messages generated by git look like
//! `Merge branch 'feature/PROJ-1' into release/v1.1.0`. When the destination
//! is the default branch git leaves out the `into ...` part, so the target
//! branch is frequently unknown.

use crate::types::Commit;
use regex::Regex;
use std::sync::LazyLock;

static TARGET_BRANCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Merge branch .* into ([\w./-]+)$").expect("target branch pattern is valid")
});

static SOURCE_BRANCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Merge branch '([\w./-]+)' into").expect("source branch pattern is valid")
});

/// Check whether a commit is a merge commit (more than one parent)
pub fn is_merge_commit(commit: &Commit) -> bool {
    commit.is_merge()
}

/// Extract the branch a merge commit merged into
///
/// The whole message must be the single merge line; one trailing newline is
/// accepted since git stores messages newline-terminated.
pub fn extract_target_branch_name(message: &str) -> Option<String> {
    let line = message.strip_suffix('\n').unwrap_or(message);
    TARGET_BRANCH_RE
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// Extract the branch a merge commit merged from
pub fn extract_source_branch_name(message: &str) -> Option<String> {
    SOURCE_BRANCH_RE
        .captures(message)
        .map(|caps| caps[1].to_string())
}

/// Compiled `<project_id>-<digits>` matcher
///
/// The project ID is matched literally, even if it contains regex
/// metacharacters.
#[derive(Debug, Clone)]
pub struct IssuePattern {
    search: Regex,
    exact: Regex,
}

impl IssuePattern {
    /// Compile the matcher for `project_id`
    pub fn new(project_id: &str) -> Option<Self> {
        let escaped = regex::escape(project_id);
        let search = Regex::new(&format!(r"{escaped}-\d+")).ok()?;
        let exact = Regex::new(&format!(r"^{escaped}-\d+$")).ok()?;
        Some(Self { search, exact })
    }

    /// First issue ID found anywhere in `text`
    pub fn find(&self, text: &str) -> Option<String> {
        self.search.find(text).map(|m| m.as_str().to_string())
    }

    /// Whether `candidate` is exactly one issue ID
    pub fn is_match(&self, candidate: &str) -> bool {
        self.exact.is_match(candidate)
    }
}

/// Extract the first issue ID for `project_id` from a branch name or message
///
/// `extract_issue_id("release/v1.0.0/bugfix/PROJ-123-fix", "PROJ")` yields
/// `Some("PROJ-123")`.
pub fn extract_issue_id(text: &str, project_id: &str) -> Option<String> {
    IssuePattern::new(project_id)?.find(text)
}

/// Check that `candidate` is a well-formed issue ID for `project_id`
pub fn is_issue_id(candidate: &str, project_id: &str) -> bool {
    IssuePattern::new(project_id).is_some_and(|p| p.is_match(candidate))
}
