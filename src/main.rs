//! Admission Summary CLI
//!
//! Computes per-rank admission statistics from a CSV of admission records
//! and recommends college tiers from the resulting report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use admission_summary::commands::{
    display_version, execute_default, execute_recommend, execute_summarize, validate_args,
    validate_recommend_args, validate_report_file, RecommendArgs, SummarizeArgs,
};
use admission_summary::recommend::Strategy;
use admission_summary::utils::config::{
    DEFAULT_INPUT_PATH, DEFAULT_MAX_APPLICATIONS, DEFAULT_OUTPUT_PATH,
};

/// Admission Summary - per-rank admission statistics
#[derive(Parser, Debug)]
#[command(name = "admission-summary")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute (defaults to `summarize` with default paths)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize admission records into a JSON report
    Summarize {
        /// Path to admission records CSV
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Output path for JSON report
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        file: PathBuf,
    },

    /// Recommend colleges for a student GPA
    Recommend {
        /// Path to report JSON file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        report: PathBuf,

        /// Student GPA
        #[arg(short, long)]
        gpa: f64,

        /// Weighting between admission chance and prestige
        #[arg(short, long, value_enum, default_value_t = Strategy::Balanced)]
        strategy: Strategy,

        /// Maximum number of colleges to list
        #[arg(short, long, default_value_t = DEFAULT_MAX_APPLICATIONS)]
        max_applications: usize,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        None => {
            execute_default()?;
        }

        Some(Commands::Summarize {
            input,
            output,
            summary,
        }) => {
            let args = SummarizeArgs {
                input_csv: input,
                output_json: output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_summarize(args)?;
        }

        Some(Commands::Validate { file }) => {
            validate_report_file(file)?;
        }

        Some(Commands::Recommend {
            report,
            gpa,
            strategy,
            max_applications,
        }) => {
            let args = RecommendArgs {
                report_json: report,
                gpa,
                strategy,
                max_applications,
            };

            validate_recommend_args(&args)?;
            execute_recommend(args)?;
        }

        Some(Commands::Version) => {
            display_version();
        }
    }

    Ok(())
}
