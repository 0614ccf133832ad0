//! Shared test fixtures

#![allow(dead_code)]

mod mock_source;

pub use mock_source::MockCommitSource;

use chrono::DateTime;
use issue_scan::types::Commit;
use std::cell::Cell;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// First commit timestamp used by `TempGitRepo`
const EPOCH_START: i64 = 1_700_000_000;

/// Build a commit for in-memory graphs
pub fn make_commit(id: &str, parents: &[&str], message: &str) -> Commit {
    Commit {
        id: id.to_string(),
        parents: parents.iter().map(ToString::to_string).collect(),
        message: message.to_string(),
        committed_at: DateTime::UNIX_EPOCH,
    }
}

/// Build a merge commit with git's default message
pub fn make_merge(id: &str, parents: &[&str], source: &str, target: &str) -> Commit {
    make_commit(
        id,
        parents,
        &format!("Merge branch '{source}' into {target}\n"),
    )
}

/// A throwaway git repository driven through the `git` CLI
///
/// Every git invocation gets a later author/committer date than the last,
/// so history order does not depend on wall-clock resolution. Global and
/// system git config are ignored.
pub struct TempGitRepo {
    dir: TempDir,
    clock: Cell<i64>,
}

impl TempGitRepo {
    /// Create an empty repository on `master`
    pub fn new() -> Self {
        let repo = Self {
            dir: TempDir::new().expect("failed to create temp dir"),
            clock: Cell::new(EPOCH_START),
        };
        repo.git(&["init", "--quiet"]);
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/master"]);
        repo
    }

    /// Repository root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run git and return trimmed stdout, panicking on failure
    pub fn git(&self, args: &[&str]) -> String {
        let now = self.clock.get();
        self.clock.set(now + 60);
        let date = format!("{now} +0000");

        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .env("GIT_CONFIG_GLOBAL", "/dev/null")
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_AUTHOR_NAME", "Test")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "Test")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .env("GIT_AUTHOR_DATE", &date)
            .env("GIT_COMMITTER_DATE", &date)
            .output()
            .expect("failed to run git");

        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Create an empty commit on the current branch
    pub fn commit(&self, message: &str) {
        self.git(&["commit", "--quiet", "--allow-empty", "-m", message]);
    }

    /// Create and switch to a branch
    pub fn branch(&self, name: &str) {
        self.git(&["checkout", "--quiet", "-b", name]);
    }

    /// Switch to an existing branch
    pub fn checkout(&self, name: &str) {
        self.git(&["checkout", "--quiet", name]);
    }

    /// Merge `branch` into the current branch with a merge commit
    pub fn merge(&self, branch: &str) {
        self.git(&["merge", "--quiet", "--no-ff", "--no-edit", branch]);
    }

    /// Create a lightweight tag at HEAD
    pub fn tag(&self, name: &str) {
        self.git(&["tag", name]);
    }

    /// Resolve a revision to its full hash
    pub fn rev(&self, spec: &str) -> String {
        self.git(&["rev-parse", spec])
    }

    /// Commit "Initial commit" on master, tag it v1.0.0 and branch
    /// `release/v1.1.0` from it
    pub fn with_release_branch() -> Self {
        let repo = Self::new();
        repo.commit("Initial commit");
        repo.tag("v1.0.0");
        repo.branch("release/v1.1.0");
        repo
    }

    /// Commit on a new feature branch and merge it back into `into`
    pub fn merge_feature(&self, feature: &str, into: &str, messages: &[&str]) {
        self.branch(feature);
        for message in messages {
            self.commit(message);
        }
        self.checkout(into);
        self.merge(feature);
    }
}
