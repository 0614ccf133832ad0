//! Issues command - look up issues in the tracker

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, link, spinner_style};
use anstream::{eprintln, println};
use indicatif::ProgressBar;
use issue_scan::error::{Error, Result};
use issue_scan::git::is_issue_id;
use issue_scan::tracker::IssueTracker;
use issue_scan::types::Issue;
use std::time::Duration;

/// Run the issues command
pub async fn run_issues(
    ctx: &CommandContext,
    ids: &[String],
    url: Option<&str>,
    project: Option<&str>,
) -> Result<()> {
    if let Some(project_id) = project.or(ctx.config.project_id.as_deref())
        && let Some(bad) = ids.iter().find(|id| !is_issue_id(id, project_id))
    {
        return Err(Error::Config(format!(
            "'{bad}' is not a {project_id} issue id"
        )));
    }

    let tracker = ctx.tracker(url)?;
    let issues = fetch_with_spinner(&tracker, ids).await?;
    print_issues(ctx, &tracker, ids, &issues)
}

/// Fetch issues, showing a spinner on stderr while the request runs
pub async fn fetch_with_spinner(tracker: &dyn IssueTracker, ids: &[String]) -> Result<Vec<Issue>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Fetching {} issue(s)...", ids.len()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = tracker.get_issues(ids).await;
    spinner.finish_and_clear();
    result
}

/// Print fetched issues and report requested IDs the tracker did not return
pub fn print_issues(
    ctx: &CommandContext,
    tracker: &dyn IssueTracker,
    requested: &[String],
    issues: &[Issue],
) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(issues)?);
    } else {
        let id_width = issues.iter().map(|i| i.id.len()).max().unwrap_or(0);
        let state_width = issues
            .iter()
            .map(|i| i.state.as_deref().map_or(1, str::len))
            .max()
            .unwrap_or(0);

        for issue in issues {
            let id = link(&issue.id, &tracker.issue_url(&issue.id));
            let id_pad = " ".repeat(id_width - issue.id.len());
            let state = issue
                .state
                .as_deref()
                .map_or_else(|| "-".muted(), |state| state.accent());
            let state_len = issue.state.as_deref().map_or(1, str::len);
            let state_pad = " ".repeat(state_width - state_len);

            println!(
                "{}{id_pad}  {state}{state_pad}  {}",
                id.emphasis(),
                issue.title
            );
        }
    }

    for missing in requested
        .iter()
        .filter(|id| !issues.iter().any(|issue| issue.id == **id))
    {
        eprintln!("{}", format!("not found: {missing}").muted());
    }

    Ok(())
}
