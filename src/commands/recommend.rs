//! Recommend command implementation.
//! Reads a report and lists the best college tiers for a student GPA.

use super::models::RecommendArgs;
use crate::output::read_report;
use crate::recommend::{recommend, Recommendation};
use crate::utils::config::{GPA_MAX, GPA_MIN};
use anyhow::{Context, Result};
use colored::*;
use log::info;

/// Execute the recommend command
pub fn execute_recommend(args: RecommendArgs) -> Result<Vec<Recommendation>> {
    let report = read_report(&args.report_json)
        .with_context(|| format!("Failed to read report {}", args.report_json.display()))?;

    info!(
        "Recommending up to {} colleges for GPA {:.2} ({})",
        args.max_applications, args.gpa, args.strategy
    );

    let recs = recommend(&report, args.gpa, args.strategy, args.max_applications);

    println!("{}", render_recommendations(&recs));

    Ok(recs)
}

/// Validate recommend arguments
pub fn validate_recommend_args(args: &RecommendArgs) -> Result<()> {
    if !args.gpa.is_finite() || !(GPA_MIN..=GPA_MAX).contains(&args.gpa) {
        anyhow::bail!("GPA must be between {} and {}", GPA_MIN, GPA_MAX);
    }

    if args.max_applications == 0 {
        anyhow::bail!("max_applications must be greater than 0");
    }

    Ok(())
}

fn render_recommendations(recs: &[Recommendation]) -> String {
    let mut out = String::new();
    out.push_str(&"Recommended Applications".bold().to_string());
    out.push('\n');

    if recs.is_empty() {
        out.push_str("No colleges in report\n");
        return out;
    }

    for (i, rec) in recs.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} (rank {}) - admission {:.1}%, prestige {:.1}%, utility {}\n",
            i + 1,
            rec.name,
            rec.rank,
            rec.admission_prob * 100.0,
            rec.prestige_score * 100.0,
            format!("{:.1}", rec.utility * 100.0).cyan()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_recommend_args_default() {
        assert!(validate_recommend_args(&RecommendArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_recommend_args_gpa_out_of_range() {
        for gpa in [-0.1, 4.5, f64::NAN] {
            let args = RecommendArgs {
                gpa,
                ..Default::default()
            };
            assert!(validate_recommend_args(&args).is_err());
        }
    }

    #[test]
    fn test_validate_recommend_args_zero_applications() {
        let args = RecommendArgs {
            max_applications: 0,
            ..Default::default()
        };

        assert!(validate_recommend_args(&args).is_err());
    }

    #[test]
    fn test_render_empty() {
        assert!(render_recommendations(&[]).contains("No colleges in report"));
    }
}
