//! Aggregation of admission records into per-rank statistics.
//!
//! This module transforms a loaded table into:
//! - Rank groups (row indices per rank, ascending)
//! - A report of admission rate and GPA statistics per rank

pub mod grouping;
pub mod metrics;

// Re-export main types and functions
pub use grouping::{group_by_rank, RankGroup};
pub use metrics::{build_report, mean, minimum, round_to, sample_std, summarize_group, summarize_records};
