//! College recommendations from a written report.
//!
//! Each rank in the report is treated as a college tier. Tiers are scored
//! by a strategy-weighted blend of the student's admission probability and
//! the tier's prestige, then the best `max_applications` are returned.

pub mod probability;
pub mod strategy;

pub use probability::{admission_probability, college_name, prestige_score};
pub use strategy::{Strategy, Weights};

use crate::loader::schema::Report;
use log::debug;
use serde::Serialize;

/// One recommended college tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub rank: u32,
    pub name: String,
    pub admission_prob: f64,
    pub prestige_score: f64,
    pub utility: f64,
}

/// Rank college tiers for a student
///
/// **Public** - main entry point for recommendations
///
/// Results are sorted by utility, highest first; equal utilities keep
/// ascending rank order.
pub fn recommend(
    report: &Report,
    gpa: f64,
    strategy: Strategy,
    max_applications: usize,
) -> Vec<Recommendation> {
    let weights = strategy.weights();

    let mut scored: Vec<Recommendation> = report
        .groups
        .iter()
        .map(|(&rank, summary)| {
            let admission_prob = admission_probability(summary, gpa);
            let prestige_score = prestige_score(rank);
            Recommendation {
                rank,
                name: college_name(rank),
                admission_prob,
                prestige_score,
                utility: weights.admission_prob * admission_prob
                    + weights.prestige * prestige_score,
            }
        })
        .collect();

    // Stable sort keeps ascending rank among ties
    scored.sort_by(|a, b| b.utility.total_cmp(&a.utility));
    scored.truncate(max_applications);

    debug!(
        "Recommended {} of {} tiers for GPA {} ({})",
        scored.len(),
        report.len(),
        gpa,
        strategy
    );

    scored
}
