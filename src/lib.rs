//! Admission Summary
//!
//! Per-rank admission statistics from college admission records.
//!
//! The core pipeline loads a CSV of `rank`, `admit` and `gpa` columns,
//! groups rows by rank, computes admission rate and GPA statistics per
//! group, and writes the result as an indented JSON report.
//!
//! ```ignore
//! let report = admission_summary::run("data/College_admission.csv", "data/College_admission.json")?;
//! ```
//!
//! A written report can also be used to rank college tiers for a student
//! GPA, see [`recommend`].

pub mod aggregator;
pub mod commands;
pub mod loader;
pub mod output;
pub mod recommend;
pub mod utils;

pub use commands::run;
pub use loader::{AdmissionRecord, GroupSummary, Report, Table};
pub use utils::error::Error;
