//! issue-scan - list tracker issues merged between two git revisions

mod cli;

use anstream::eprintln;
use clap::{ArgAction, Parser, Subcommand};
use cli::style::Stylize;
use cli::{CommandContext, RangeArgs};
use issue_scan::error::Result;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "issue-scan",
    version,
    about = "List tracker issues merged between two git revisions"
)]
struct Cli {
    /// Path to the git repository
    #[arg(long, global = true, default_value = ".")]
    path: PathBuf,

    /// Settings file (default: ~/.config/issue-scan/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract issue IDs from the commits in FROM..TO
    Scan {
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Look up issues in the tracker
    Issues {
        /// Issue IDs (e.g. PROJ-123)
        #[arg(required = true)]
        ids: Vec<String>,

        /// Tracker base URL (overrides YOUTRACK_URL)
        #[arg(long)]
        url: Option<String>,

        /// Reject IDs that do not belong to this project
        #[arg(long)]
        project: Option<String>,
    },
    /// Scan FROM..TO and look up every issue found
    Report {
        #[command(flatten)]
        range: RangeArgs,

        /// Tracker base URL (overrides YOUTRACK_URL)
        #[arg(long)]
        url: Option<String>,
    },
    /// Print the message of the HEAD commit
    Head,
}

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "issue_scan=debug",
        _ => "issue_scan=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = CommandContext::new(&cli.path, cli.config.as_deref(), cli.json)?;

    match cli.command {
        Commands::Scan { range } => cli::run_scan(&ctx, &range),
        Commands::Issues { ids, url, project } => {
            cli::run_issues(&ctx, &ids, url.as_deref(), project.as_deref()).await
        }
        Commands::Report { range, url } => cli::run_report(&ctx, &range, url.as_deref()).await,
        Commands::Head => cli::run_head(&ctx),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".error());
            ExitCode::FAILURE
        }
    }
}
