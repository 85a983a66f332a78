//! Terminal rendering of a report.

use crate::loader::schema::Report;
use colored::*;

/// Render a report as a fixed-width table
///
/// Undefined statistics are shown as `-`.
pub fn render_summary(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&"Admission Summary by Rank".bold().to_string());
    out.push('\n');
    out.push_str(&format!(
        "{:>4}  {:>8}  {:>9}  {:>8}  {:>7}\n",
        "Rank", "Rate", "Threshold", "Mean", "Std"
    ));
    out.push_str(&"-".repeat(44));
    out.push('\n');

    if report.is_empty() {
        out.push_str("(no records)\n");
        return out;
    }

    for (rank, summary) in &report.groups {
        out.push_str(&format!(
            "{:>4}  {:>8.3}  {:>9}  {:>8}  {:>7}\n",
            rank,
            summary.admission_rate,
            fmt_gpa(summary.gpa_threshold),
            fmt_gpa(summary.gpa_admitted_mean),
            fmt_gpa(summary.gpa_admitted_std),
        ));
    }

    out
}

fn fmt_gpa(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}
