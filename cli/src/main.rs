//! CLI for the base image scanner.
//!
//! Scans the repositories named in a repository list for Dockerfiles and
//! prints the base images they use as JSON.

use base_image_scanner::{
    default_config_path, ExtractorKind, RunOutput, RunSummary, Runner, RunnerConfig, RunnerError,
    SettingsOverrides,
};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Base Image Scanner - Report the base images used by Dockerfiles across repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the settings file [default: config/config.toml].
    #[arg(long, env = "SCANNER_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// URL or local path of the repository list.
    #[arg(long, env = "REPOSITORY_LIST_URL")]
    repository_list_url: Option<String>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL, for GitHub Enterprise.
    #[arg(long, env = "GITHUB_API_URL")]
    github_api_url: Option<String>,

    /// Scheduling strategy: `sequential` or `concurrent`.
    #[arg(long, env = "EXTRACTOR")]
    extractor: Option<ExtractorKind>,

    /// Maximum repositories scanned at once by the concurrent strategy.
    #[arg(long, env = "WORKER_POOL_SIZE")]
    workers: Option<usize>,

    /// Write the JSON report to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Args {
    fn runner_config(&self) -> RunnerConfig {
        let config_path = self.config.clone().unwrap_or_else(default_config_path);
        RunnerConfig::new(config_path).with_overrides(SettingsOverrides {
            repository_list_url: self.repository_list_url.clone(),
            github_token: self.token.clone(),
            github_api_url: self.github_api_url.clone(),
            extractor: self.extractor,
            worker_pool_size: self.workers,
        })
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Both octocrab and reqwest use rustls; pin the provider before either builds a client.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(&args).await {
        Ok(output) => {
            if let Err(e) = write_report(&output, args.output.as_ref()) {
                error!(error = %e, "Failed to write report");
                return ExitCode::from(2);
            }
            print_summary(&output.summary);

            if output.summary.has_failures() {
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
/// - Compact log formatting (single-line output) on stderr
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output;
        // stdout is reserved for the report
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: &Args) -> Result<RunOutput, RunnerError> {
    let runner = Runner::new(args.runner_config())?;
    runner.run().await
}

/// Writes the report as pretty JSON to `path`, or stdout.
fn write_report(output: &RunOutput, path: Option<&PathBuf>) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(&output.report)?;
    match path {
        Some(path) => std::fs::write(path, json + "\n"),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    eprintln!("\nSummary:");
    eprintln!("  Repositories scanned: {}", summary.repositories_scanned);
    eprintln!("  Repositories with data: {}", summary.repositories_with_data);
    eprintln!("  Discovery failures: {}", summary.discovery_failures);
    eprintln!("  Partial failures: {}", summary.partial_failures);
    eprintln!("  Dockerfiles extracted: {}", summary.files_extracted);
    eprintln!("  Dockerfiles failed: {}", summary.files_failed);
    eprintln!("  Distinct base images: {}", summary.distinct_images);
}
