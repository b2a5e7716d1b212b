//! doctally - Count literal values across text and spreadsheet documents
//!
//! doctally provides:
//! - Text (.txt) and workbook (.xlsx) ingestion into searchable text
//! - Case-insensitive, non-overlapping literal counting
//! - Per-document error reporting that never aborts a run
//! - Spreadsheet export plus jsonl/json/md/table rendering

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod core;
mod export;
mod flows;

fn init_logging(verbose: bool, no_color: bool) {
    let default_filter = if verbose {
        "doctally=debug"
    } else {
        "doctally=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!no_color)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose, cli.no_color);

    cli::run(cli)
}
