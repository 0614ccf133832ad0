//! Report command - scan a range and look up every issue found

use crate::cli::RangeArgs;
use crate::cli::context::CommandContext;
use crate::cli::issues::{fetch_with_spinner, print_issues};
use crate::cli::style::Stylize;
use anstream::{eprintln, println};
use issue_scan::error::Result;
use issue_scan::git::{dedup_in_order, scan_range};
use issue_scan::tracker::order_like;
use tracing::debug;

/// Run the report command
pub async fn run_report(ctx: &CommandContext, range: &RangeArgs, url: Option<&str>) -> Result<()> {
    let options = ctx.scan_options(range)?;
    let repo = ctx.open_repository()?;

    // One lookup per issue, in order of first appearance
    let ids = dedup_in_order(scan_range(&repo, &range.from, &range.to, &options)?);
    debug!(count = ids.len(), "issues to look up");

    if ids.is_empty() {
        if ctx.json {
            println!("[]");
        } else {
            eprintln!(
                "{}",
                format!("No {} issues in {}..{}", options.project_id, range.from, range.to)
                    .muted()
            );
        }
        return Ok(());
    }

    let tracker = ctx.tracker(url)?;
    let issues = order_like(&ids, fetch_with_spinner(&tracker, &ids).await?);

    if !ctx.json {
        println!(
            "{} {}",
            format!("{}..{}:", range.from, range.to).emphasis(),
            format!("{} issue(s)", issues.len()).success()
        );
    }
    print_issues(ctx, &tracker, &ids, &issues)
}
