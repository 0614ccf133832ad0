//! gix-backed commit source

use super::CommitSource;
use crate::error::{Error, Result};
use crate::types::Commit;
use chrono::DateTime;
use gix::ObjectId;
use gix::bstr::ByteSlice;
use gix::revision::walk::Sorting;
use std::path::Path;
use tracing::debug;

/// A local git repository
pub struct GitRepository {
    repo: gix::Repository,
}

impl GitRepository {
    /// Open the repository containing `path`
    pub fn discover(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "opening git repository");
        let repo = gix::discover(path).map_err(|e| {
            Error::Git(format!("failed to open repository at {}: {e}", path.display()))
        })?;
        Ok(Self { repo })
    }

    /// The commit HEAD points at
    pub fn head_commit(&self) -> Result<Commit> {
        let head = self
            .repo
            .head_commit()
            .map_err(|e| Error::RangeResolution {
                spec: "HEAD".to_string(),
                message: e.to_string(),
            })?;
        to_commit(&head)
    }

    fn resolve_id(&self, spec: &str) -> Result<ObjectId> {
        // Peel tags and other refs down to the commit they name
        let peeled = format!("{spec}^{{commit}}");
        self.repo
            .rev_parse_single(peeled.as_str())
            .map(gix::Id::detach)
            .map_err(|e| Error::RangeResolution {
                spec: spec.to_string(),
                message: e.to_string(),
            })
    }
}

impl CommitSource for GitRepository {
    fn resolve(&self, spec: &str) -> Result<String> {
        self.resolve_id(spec).map(|id| id.to_string())
    }

    fn commits_in_range(&self, from: &str, to: &str) -> Result<Vec<Commit>> {
        let from_id = self.resolve_id(from)?;
        let to_id = self.resolve_id(to)?;
        debug!(from = %from_id, to = %to_id, "walking commit range");

        if from_id == to_id {
            return Ok(Vec::new());
        }

        let walk = self
            .repo
            .rev_walk([to_id])
            .with_hidden([from_id])
            .sorting(Sorting::ByCommitTime(Default::default()))
            .all()
            .map_err(|e| Error::Git(format!("failed to walk {from}..{to}: {e}")))?;

        let mut commits = Vec::new();
        for info in walk {
            let info = info.map_err(|e| Error::Git(format!("failed to walk {from}..{to}: {e}")))?;
            let commit = info
                .object()
                .map_err(|e| Error::Git(format!("failed to read commit {}: {e}", info.id)))?;
            commits.push(to_commit(&commit)?);
        }

        // The walk yields newest first
        commits.reverse();
        debug!(count = commits.len(), "walked commit range");
        Ok(commits)
    }
}

fn to_commit(commit: &gix::Commit<'_>) -> Result<Commit> {
    let id = commit.id().to_string();
    let time = commit
        .time()
        .map_err(|e| Error::Git(format!("failed to decode commit {id}: {e}")))?;

    Ok(Commit {
        parents: commit.parent_ids().map(|p| p.to_string()).collect(),
        message: commit.message_raw_sloppy().to_str_lossy().into_owned(),
        committed_at: DateTime::from_timestamp(time.seconds, 0).unwrap_or(DateTime::UNIX_EPOCH),
        id,
    })
}
