//! CLI for the post retention sweep
//!
//! Archives public posts older than 24 hours. With `--dry-run` it only reports
//! what would be archived. Logs go to stderr; `--json` prints the scan report
//! to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vault_core::config::Config;
use vault_core::domains::posts::{ArchiveScanner, InMemoryPostStore};
use vault_core::kernel::SystemClock;

#[derive(Parser)]
#[command(name = "archive_posts")]
#[command(about = "Archive public posts older than 24 hours")]
struct Cli {
    /// Simulate archiving without changing state
    #[arg(long)]
    dry_run: bool,

    /// JSON seed file to load posts from (defaults to VAULT_SEED_PATH, then the built-in sample)
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Print the scan report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if cli.dry_run {
        tracing::info!("Mode: DRY-RUN (no posts will be archived)");
    }

    let mut scanner = match cli.seed.or(config.seed_path) {
        Some(path) => {
            let store = InMemoryPostStore::from_json_file(&path)?;
            ArchiveScanner::with_store(store, cli.dry_run)
        }
        None => ArchiveScanner::new(cli.dry_run),
    };

    let report = scanner
        .scan_and_archive(&SystemClock)
        .context("Archive scan failed")?;

    if cli.json {
        println!("{}", serde_json::to_string(&report)?);
    }

    Ok(())
}
