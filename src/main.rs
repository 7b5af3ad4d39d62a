// src/main.rs
mod batch;
mod extractors;
mod policy;
mod source;
mod storage;
mod utils;

use batch::{BatchExtractor, ExtractorConfig};
use clap::Parser;
use utils::AppError;

/// Condenses abstracted policy JSON files into a single compact text report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Show debug diagnostics (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Parse CLI Arguments
    let args = Args::parse();

    // 2. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging(args.verbose);

    // 3. Source, pattern and report locations are fixed
    let config = ExtractorConfig::default();
    tracing::debug!("Starting extraction with config: {:?}", config);

    // 4. Run the batch; only discovery and report-write failures end up here
    let summary = BatchExtractor::new(config).run().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    for skipped in &summary.skipped {
        tracing::debug!("Skipped {}: {}", skipped.filename, skipped.reason);
    }
    tracing::debug!(
        "Finished. Processed: {}, Skipped: {}, Warnings: {}, Report: {:?}",
        summary.processed.len(),
        summary.skipped.len(),
        summary.warnings,
        summary.output
    );

    Ok(())
}
