//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod recommend;
pub mod summarize;
pub mod utils;

// Re-export main command functions
pub use models::{RecommendArgs, SummarizeArgs};
pub use recommend::{execute_recommend, validate_recommend_args};
pub use summarize::{execute_default, execute_summarize, run, validate_args};
pub use utils::{display_version, validate_report_file};
