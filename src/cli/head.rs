//! Head command - print the current commit message

use crate::cli::context::CommandContext;
use anstream::println;
use issue_scan::error::Result;

/// Run the head command
pub fn run_head(ctx: &CommandContext) -> Result<()> {
    let commit = ctx.open_repository()?.head_commit()?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&commit)?);
    } else {
        println!("{}", commit.message.trim());
    }
    Ok(())
}
