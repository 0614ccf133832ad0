//! CLI command implementations

mod context;
mod head;
mod issues;
mod report;
mod scan;
pub mod style;

pub use context::CommandContext;
pub use head::run_head;
pub use issues::run_issues;
pub use report::run_report;
pub use scan::run_scan;

use clap::Args;

/// Commit range and extraction options shared by `scan` and `report`
#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
    /// Start of the range, excluded (branch, tag or hash)
    pub from: String,

    /// End of the range, included (branch, tag or hash)
    pub to: String,

    /// Issue ID prefix, e.g. PROJ for PROJ-123
    #[arg(long)]
    pub project: Option<String>,

    /// Only count merges into this branch
    #[arg(long, conflicts_with = "messages")]
    pub target_branch: Option<String>,

    /// Read IDs from plain commit messages instead of merged branch names
    #[arg(long)]
    pub messages: bool,

    /// List each issue once, at its first occurrence
    #[arg(long)]
    pub unique: bool,
}
