//! Summarize command implementation.
//!
//! The summarize command:
//! 1. Loads admission records from CSV
//! 2. Aggregates statistics per rank
//! 3. Writes the JSON report

use super::models::SummarizeArgs;
use crate::aggregator::build_report;
use crate::loader::{load_table, Report};
use crate::output::{render_summary, write_report};
use crate::utils::error::Error;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Run the load → aggregate → write pipeline
///
/// **Public** - library entry point, no logging setup or printing
///
/// # Errors
/// * `Error::Load` - input missing, unreadable or malformed; nothing is written
/// * `Error::Aggregate` - a rank group is empty; nothing is written
/// * `Error::Output` - report could not be written; the destination is untouched
pub fn run(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<Report, Error> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    info!("Step 1/3: Loading admission records...");
    let table = load_table(input_path)?;

    info!("Step 2/3: Aggregating by rank...");
    let report = build_report(&table)?;
    debug!("Ranks in report: {:?}", report.ranks().collect::<Vec<_>>());

    info!("Step 3/3: Writing report...");
    write_report(&report, output_path)?;

    Ok(report)
}

/// Execute the summarize command
///
/// **Public** - main entry point called from main.rs
pub fn execute_summarize(args: SummarizeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Input: {}", args.input_csv.display());
    info!("Output: {}", args.output_json.display());

    let report = run(&args.input_csv, &args.output_json).with_context(|| {
        format!(
            "Failed to summarize {} into {}",
            args.input_csv.display(),
            args.output_json.display()
        )
    })?;

    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", render_summary(&report));
    }

    let elapsed = start_time.elapsed();
    info!("Summary completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Execute summarize on the default input and output paths
///
/// **Public** - what the binary runs when no subcommand is given
pub fn execute_default() -> Result<()> {
    let args = SummarizeArgs::default();
    validate_args(&args)?;
    execute_summarize(args)
}

/// Validate summarize arguments
///
/// **Public** - can be called before execute_summarize for early validation
pub fn validate_args(args: &SummarizeArgs) -> Result<()> {
    if args.input_csv.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.input_csv == args.output_json {
        anyhow::bail!("Output path must differ from input path");
    }

    Ok(())
}
