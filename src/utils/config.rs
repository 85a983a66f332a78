//! Configuration and constants for the CLI.

/// Default location of the admission records
pub const DEFAULT_INPUT_PATH: &str = "data/College_admission.csv";

/// Default location of the written report
pub const DEFAULT_OUTPUT_PATH: &str = "data/College_admission.json";

// Column names expected in the input header row
pub const RANK_COLUMN: &str = "rank";
pub const ADMIT_COLUMN: &str = "admit";
pub const GPA_COLUMN: &str = "gpa";

/// Decimal places kept for admission rates
pub const RATE_PRECISION: u32 = 3;

/// Decimal places kept for GPA figures
pub const GPA_PRECISION: u32 = 2;

/// Unix mode of a newly created report file
pub const NEW_REPORT_MODE: u32 = 0o644;

// Plausible GPA range. Values outside it are accepted but logged.
pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;

// Admission probability model used by `recommend`
pub const PROBABILITY_CAP: f64 = 0.95;
pub const PROBABILITY_FLOOR: f64 = 0.05;
pub const Z_SCORE_WEIGHT: f64 = 0.1;

/// Number of college tiers on the fixed prestige scale
pub const MAX_TIER: u32 = 4;

/// Default number of colleges to recommend
pub const DEFAULT_MAX_APPLICATIONS: usize = 3;
