//! Scan command - list issue IDs found in a commit range

use crate::cli::RangeArgs;
use crate::cli::context::CommandContext;
use crate::cli::style::Stylize;
use anstream::{eprintln, println};
use issue_scan::error::Result;
use issue_scan::git::scan_range;

/// Run the scan command
pub fn run_scan(ctx: &CommandContext, range: &RangeArgs) -> Result<()> {
    let options = ctx.scan_options(range)?;
    let repo = ctx.open_repository()?;

    let ids = scan_range(&repo, &range.from, &range.to, &options)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&ids)?);
        return Ok(());
    }

    if ids.is_empty() {
        eprintln!(
            "{}",
            format!("No {} issues in {}..{}", options.project_id, range.from, range.to).muted()
        );
        return Ok(());
    }

    for id in &ids {
        println!("{id}");
    }

    Ok(())
}
