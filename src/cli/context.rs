//! Shared command context for CLI commands
//!
//! Extracts common setup code shared by scan, issues, report and head.

use crate::cli::RangeArgs;
use issue_scan::auth::get_tracker_auth;
use issue_scan::config::{Config, URL_ENV, load_config};
use issue_scan::error::Result;
use issue_scan::git::GitRepository;
use issue_scan::tracker::YouTrackService;
use issue_scan::types::{ExtractionStrategy, ScanOptions};
use std::path::{Path, PathBuf};

/// Shared context for CLI commands
///
/// Holds the merged settings. The repository and the tracker client are
/// created on demand since `issues` needs no repository and `scan` needs no
/// tracker.
pub struct CommandContext {
    /// Settings loaded from the config file
    pub config: Config,
    /// Repository path from `--path`
    pub repo_path: PathBuf,
    /// Whether to print JSON
    pub json: bool,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(repo_path: &Path, config_path: Option<&Path>, json: bool) -> Result<Self> {
        let config = load_config(config_path)?;
        Ok(Self {
            config,
            repo_path: repo_path.to_path_buf(),
            json,
        })
    }

    /// Open the repository at `--path`
    pub fn open_repository(&self) -> Result<GitRepository> {
        GitRepository::discover(&self.repo_path)
    }

    /// Build the tracker client
    ///
    /// Fails when no URL or no token can be found.
    pub fn tracker(&self, url: Option<&str>) -> Result<YouTrackService> {
        let base_url = self
            .config
            .resolve_base_url(url, std::env::var(URL_ENV).ok())?;
        let auth = get_tracker_auth(&self.config)?;
        YouTrackService::new(&base_url, auth.token)
    }

    /// Scan options from range arguments, filling gaps from the config file
    pub fn scan_options(&self, range: &RangeArgs) -> Result<ScanOptions> {
        let project_id = self.config.resolve_project_id(range.project.as_deref())?;

        let strategy = if range.messages {
            ExtractionStrategy::CommitMessages
        } else {
            ExtractionStrategy::MergeBranches
        };

        // The target branch only means something for merge scans
        let target_branch = match strategy {
            ExtractionStrategy::MergeBranches => self
                .config
                .resolve_target_branch(range.target_branch.as_deref()),
            ExtractionStrategy::CommitMessages => None,
        };

        Ok(ScanOptions {
            project_id,
            target_branch,
            strategy,
            unique: range.unique,
        })
    }
}
