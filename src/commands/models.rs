use crate::recommend::Strategy;
use crate::utils::config::{DEFAULT_INPUT_PATH, DEFAULT_MAX_APPLICATIONS, DEFAULT_OUTPUT_PATH};
use std::path::PathBuf;

/// Arguments for the summarize command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SummarizeArgs {
    /// Path to admission records CSV
    pub input_csv: PathBuf,

    /// Output path for JSON report
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for SummarizeArgs {
    fn default() -> Self {
        Self {
            input_csv: PathBuf::from(DEFAULT_INPUT_PATH),
            output_json: PathBuf::from(DEFAULT_OUTPUT_PATH),
            print_summary: false,
        }
    }
}

/// Arguments for the recommend command
#[derive(Debug, Clone)]
pub struct RecommendArgs {
    /// Path to a report written by summarize
    pub report_json: PathBuf,

    /// Student GPA
    pub gpa: f64,

    /// Weighting between admission chance and prestige
    pub strategy: Strategy,

    /// Maximum number of colleges to list
    pub max_applications: usize,
}

impl Default for RecommendArgs {
    fn default() -> Self {
        Self {
            report_json: PathBuf::from(DEFAULT_OUTPUT_PATH),
            gpa: 3.5,
            strategy: Strategy::default(),
            max_applications: DEFAULT_MAX_APPLICATIONS,
        }
    }
}
