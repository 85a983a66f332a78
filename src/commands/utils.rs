use crate::loader::Report;
use crate::output::{read_report, render_summary};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<Report> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)
        .with_context(|| format!("Invalid report {}", file_path.display()))?;

    println!("✓ Valid report JSON");
    println!("  Ranks: {}", report.len());
    println!("{}", render_summary(&report));

    Ok(report)
}

/// Display version information
pub fn display_version() {
    println!("Admission Summary v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Per-rank admission statistics and college recommendations.");
}
