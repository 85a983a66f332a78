//! Admission probability model for a single college tier.
//!
//! Above the tier's GPA threshold the rate is scaled by the student's
//! z-score among admitted applicants and capped. Below it the rate is
//! reduced by the GPA deficit and floored.

use crate::loader::schema::GroupSummary;
use crate::utils::config::{MAX_TIER, PROBABILITY_CAP, PROBABILITY_FLOOR, Z_SCORE_WEIGHT};

/// Estimated chance of admission for a student with `gpa`
pub fn admission_probability(summary: &GroupSummary, gpa: f64) -> f64 {
    let rate = summary.admission_rate;

    let prob = match summary.gpa_threshold {
        Some(threshold) if gpa >= threshold => {
            let z = z_score(summary, gpa);
            (rate * (1.0 + Z_SCORE_WEIGHT * z)).min(PROBABILITY_CAP)
        }
        threshold => {
            let deficit = threshold.map_or(0.0, |t| t - gpa);
            (rate * (1.0 - deficit)).max(PROBABILITY_FLOOR)
        }
    };

    prob.clamp(0.0, 1.0)
}

/// Student's position among admitted GPAs; 0 when spread is unknown or zero
fn z_score(summary: &GroupSummary, gpa: f64) -> f64 {
    match (summary.gpa_admitted_mean, summary.gpa_admitted_std) {
        (Some(mean), Some(std)) if std > 0.0 => (gpa - mean) / std,
        _ => 0.0,
    }
}

/// Tier score on a fixed scale: 1.0 for rank 1 down to 0.25 for rank 4
///
/// Ranks past `MAX_TIER` score 0. The score of a rank does not depend on
/// which other ranks are present in the report.
pub fn prestige_score(rank: u32) -> f64 {
    (MAX_TIER + 1).saturating_sub(rank) as f64 / MAX_TIER as f64
}

/// Display name of a college tier
pub fn college_name(rank: u32) -> String {
    match rank {
        1 => "Top Tier University".to_string(),
        2 => "High Tier University".to_string(),
        3 => "Mid Tier University".to_string(),
        4 => "Regular University".to_string(),
        n => format!("Rank {}", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(rate: f64, threshold: Option<f64>, mean: Option<f64>, std: Option<f64>) -> GroupSummary {
        GroupSummary {
            admission_rate: rate,
            gpa_threshold: threshold,
            gpa_admitted_mean: mean,
            gpa_admitted_std: std,
        }
    }

    #[test]
    fn test_above_threshold_uses_z_score() {
        let s = summary(0.5, Some(3.0), Some(3.4), Some(0.4));
        // z = (3.8 - 3.4) / 0.4 = 1.0
        let p = admission_probability(&s, 3.8);
        assert!((p - 0.55).abs() < 1e-9);
    }

    #[test]
    fn test_above_threshold_is_capped() {
        let s = summary(0.94, Some(2.0), Some(2.5), Some(0.1));
        assert_eq!(admission_probability(&s, 4.0), PROBABILITY_CAP);
    }

    #[test]
    fn test_missing_std_means_zero_z() {
        let s = summary(0.6, Some(3.0), Some(3.0), None);
        assert!((admission_probability(&s, 3.9) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_below_threshold_deficit() {
        let s = summary(0.5, Some(3.5), Some(3.7), Some(0.2));
        // deficit 0.5 -> 0.5 * 0.5
        let p = admission_probability(&s, 3.0);
        assert!((p - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_below_threshold_is_floored() {
        let s = summary(0.1, Some(3.9), Some(3.9), None);
        assert_eq!(admission_probability(&s, 2.0), PROBABILITY_FLOOR);
    }

    #[test]
    fn test_no_admissions_gets_floor() {
        let s = summary(0.0, None, None, None);
        assert_eq!(admission_probability(&s, 4.0), PROBABILITY_FLOOR);
    }

    #[test]
    fn test_prestige_score() {
        assert_eq!(prestige_score(1), 1.0);
        assert_eq!(prestige_score(2), 0.75);
        assert_eq!(prestige_score(3), 0.5);
        assert_eq!(prestige_score(4), 0.25);
        assert_eq!(prestige_score(5), 0.0);
        assert_eq!(prestige_score(40), 0.0);
    }

    #[test]
    fn test_college_name() {
        assert_eq!(college_name(1), "Top Tier University");
        assert_eq!(college_name(9), "Rank 9");
    }
}
