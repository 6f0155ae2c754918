//! CLI for the GitHub to GitLab migration tool.
//!
//! Migrates the repositories of a GitHub user or organization into a GitLab
//! group, including issues (with comment threads flattened into the issue
//! body) and best-effort wiki transfers.

use clap::Parser;
use github_gitlab_migrate::{MigrationConfig, RunSummary, Runner, RunnerError};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Migrate repositories, issues and wikis from GitHub to GitLab.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub user to connect with.
    #[arg(short = 'u', long)]
    user: String,

    /// Password or personal access token for the GitHub user.
    #[arg(short = 'p', long, env = "GITHUB_PASSWORD")]
    password: String,

    /// GitHub API endpoint, used with --enterprise.
    #[arg(long, default_value = "https://api.github.com")]
    api: String,

    /// GitHub web endpoint, used with --enterprise.
    #[arg(long, default_value = "https://github.com/")]
    web: String,

    /// Use the configured GitHub Enterprise endpoints instead of github.com.
    #[arg(long)]
    enterprise: bool,

    /// Source user or organization whose repositories are migrated.
    #[arg(short = 's', long)]
    space: String,

    /// Migrate only the named repository.
    #[arg(short = 'r', long)]
    repo: Option<String>,

    /// GitLab instance URL.
    #[arg(long, default_value = "https://gitlab.com")]
    gitlab_api: String,

    /// GitLab private access token.
    #[arg(long, env = "GITLAB_TOKEN")]
    gitlab_token: String,

    /// Host override for the wiki provisioning page visit.
    #[arg(long)]
    wiki_host: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
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
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let mut config = MigrationConfig::new(
        args.user,
        args.password,
        args.space,
        args.gitlab_api,
        args.gitlab_token,
    );
    if args.enterprise {
        config = config.with_enterprise_endpoints(args.api, args.web);
    }
    if let Some(repo) = args.repo {
        config = config.with_repo_filter(repo);
    }
    if let Some(host) = args.wiki_host {
        config = config.with_wiki_host(host);
    }
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Repositories discovered: {}",
        summary.repositories_discovered
    );
    println!("  Repositories migrated: {}", summary.repositories_migrated);
    println!("  Repositories skipped: {}", summary.repositories_skipped);
    println!("  Repositories failed: {}", summary.repositories_failed);
    println!("  Issues created: {}", summary.issues_created);
    println!("  Issues failed: {}", summary.issues_failed);
    println!("  Wikis migrated: {}", summary.wikis_migrated);
}
