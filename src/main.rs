//! pget main entry point
//!
//! This is the command-line interface for pget.

use anyhow::Context;
use clap::Parser;
use pget::config::{load_or_default, validate, CrawlMode};
use pget::crawler::crawl;
use pget::output::print_summary;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// pget: download numbered resource sequences
///
/// pget detects a numeric index in the given URL (file name, query string or
/// path) and downloads the resources at neighbouring indices, walking down and
/// up until each direction hits a missing resource.
#[derive(Parser, Debug)]
#[command(name = "pget")]
#[command(version)]
#[command(
    about = "Detect a pattern in a URL and download files from similar URLs",
    long_about = None
)]
struct Cli {
    /// URL containing a numeric index, e.g. http://example.com/pics/pic_023.jpg
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Directory downloaded files are written to
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Only check which resources exist (HEAD), download nothing
    #[arg(long)]
    probe_only: bool,

    /// Probe whether the site zero-pads shorter indices before crawling
    #[arg(long)]
    check_padding: bool,

    /// Skip checking that the seed URL itself exists
    #[arg(long)]
    no_verify_start: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pget=info,warn"),
            1 => EnvFilter::new("pget=debug,info"),
            2 => EnvFilter::new("pget=trace,debug"),
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

/// Loads configuration, applies command-line overrides and runs the crawl
async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_or_default(cli.config.as_deref()).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            cli.config
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;

    if let Some(dir) = cli.output_dir {
        config.output.directory = dir;
    }
    if cli.probe_only {
        config.output.mode = CrawlMode::Probe;
    }
    if cli.check_padding {
        config.crawl.check_padding = true;
    }
    if cli.no_verify_start {
        config.crawl.verify_start = false;
    }
    validate(&config).context("Invalid configuration")?;

    let downloads = config.output.mode == CrawlMode::Download;
    let summary = crawl(config, &cli.url).await.context("Crawling failed")?;

    if !cli.quiet {
        print_summary(&summary, downloads);
    }

    Ok(())
}
