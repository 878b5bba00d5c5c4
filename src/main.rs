//! kb-harvest main entry point
//!
//! Command-line interface for the knowledge-base article harvester.

use anyhow::Context;
use clap::Parser;
use kb_harvest::config::{load_config, CrawlConfig};
use kb_harvest::engine::CrawlEngine;
use kb_harvest::fetch::{FixtureFetcher, HttpFetcher};
use kb_harvest::output::write_aggregate;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use url::Url;

/// kb-harvest: depth-bounded knowledge-base article harvester
///
/// Recursively walks a knowledge-base portal from a start URL, converts
/// every article page it finds to Markdown, and aggregates the results
/// into a single output document.
#[derive(Parser, Debug)]
#[command(name = "kb-harvest")]
#[command(version)]
#[command(about = "Harvest knowledge-base articles into one Markdown document", long_about = None)]
struct Cli {
    /// The start URL (typically a section or part page) to harvest from
    #[arg(value_name = "URL")]
    url: String,

    /// Output file for the aggregated Markdown
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum recursion depth; level 0 is the start page
    #[arg(long, value_name = "N")]
    max_depth: Option<u32>,

    /// Path to a TOML configuration file (selector profile, origins, fetch)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Use the deterministic fixture fetcher instead of live HTTP
    ///
    /// Synthesizes pages from URL markers, which exercises the full
    /// traversal and aggregation pipeline without network access.
    #[arg(long)]
    fixtures: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration: file if given, built-in defaults otherwise
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => CrawlConfig::default(),
    };

    // CLI flags override the config file
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }
    if let Some(output) = &cli.output {
        config.output.path = output.display().to_string();
    }

    let start_url = Url::parse(&cli.url).context("invalid start URL")?;

    // The start URL's own host is always crawlable
    if let Some(host) = start_url.host_str() {
        config.origins.allow_host(host);
    }

    let output_path = config.output.path.clone();
    let report = if cli.fixtures {
        tracing::info!("Using fixture fetcher (no network access)");
        let engine = CrawlEngine::new(config, FixtureFetcher::default());
        engine.run(&start_url).await?
    } else {
        let fetcher = HttpFetcher::new(&config.fetch).context("failed to build HTTP client")?;
        let engine = CrawlEngine::new(config, fetcher);
        engine.run(&start_url).await?
    };

    if report.parts.is_empty() {
        tracing::warn!("No article content was aggregated; nothing written");
    } else {
        write_aggregate(&report.parts, Path::new(&output_path))
            .with_context(|| format!("failed to write {}", output_path))?;
        println!(
            "{} article part(s) collected, written to {}",
            report.parts.len(),
            output_path
        );
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("kb_harvest=info,warn"),
            1 => EnvFilter::new("kb_harvest=debug,info"),
            2 => EnvFilter::new("kb_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
