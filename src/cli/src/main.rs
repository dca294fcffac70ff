//! CLI for readme-sync.
//!
//! Keeps the star counts and maintenance statuses annotated in a README in
//! sync with GitHub.

use clap::{Parser, Subcommand};
use readme_sync::{token_from_env, RunSummary, Runner, RunnerConfig, RunnerError, UpdateMode};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// readme-sync - Update README annotations from live GitHub metadata.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the README to update.
    #[arg(long, default_value = "README.md")]
    readme: PathBuf,

    /// GitHub token. Falls back to GH_TOKEN when GITHUB_TOKEN is unset or empty.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL (for GitHub Enterprise).
    #[arg(long)]
    api_url: Option<String>,

    /// Preview changes without writing the README.
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Update `**Stars**:` and `Official repository (…⭐)` annotations.
    Stars,
    /// Update `**Maintenance**:` annotations.
    Maintenance,
}

impl From<Command> for UpdateMode {
    fn from(command: Command) -> Self {
        match command {
            Command::Stars => UpdateMode::Stars,
            Command::Maintenance => UpdateMode::Maintenance,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let token = resolve_token(args.token);
    let mut config = RunnerConfig::new(args.readme, token, args.dry_run);
    if let Some(api_url) = args.api_url {
        config = config.with_api_url(&api_url)?;
    }

    let runner = Runner::new(config)?;
    runner.run(args.command.into()).await
}

/// Picks the token given on the command line or via `GITHUB_TOKEN`, falling
/// back to the remaining token variables.
fn resolve_token(arg: Option<String>) -> Option<String> {
    arg.filter(|token| !token.is_empty()).or_else(token_from_env)
}

/// Prints the outcome and the run summary.
fn print_summary(summary: &RunSummary) {
    println!("{}", summary.outcome_message());
    println!("\nSummary:");
    println!(
        "  Mode: {} ({})",
        summary.mode,
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Links found: {}", summary.occurrences);
    println!("  Repositories: {}", summary.repositories);
    println!("  Metadata fetched: {}", summary.repositories_resolved);
    println!("  Metadata unavailable: {}", summary.repositories_unavailable);
    println!("  Lines updated: {}", summary.lines_updated);
    println!("  Lines already current: {}", summary.lines_current);
}
