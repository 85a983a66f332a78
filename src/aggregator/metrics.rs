//! Per-rank admission statistics.
//!
//! Conventions:
//! - standard deviation is the sample estimate (N-1 denominator)
//! - rounding is half away from zero on the decimal-scaled value
//! - undefined statistics are `None`, never NaN

use super::grouping::{group_by_rank, RankGroup};
use crate::loader::schema::{AdmissionRecord, GroupSummary, Report, Table};
use crate::utils::config::{GPA_PRECISION, RATE_PRECISION};
use crate::utils::error::AggregateError;
use log::{debug, info};

/// Build the report for a whole table
///
/// **Public** - main entry point for aggregation
///
/// # Errors
/// * `AggregateError::EmptyGroup` - a rank has no records; the whole run fails
pub fn build_report(table: &Table) -> Result<Report, AggregateError> {
    let groups = group_by_rank(table);
    let mut report = Report::default();

    for group in &groups {
        let summary = summarize_group(group, table)?;
        debug!(
            "Rank {}: rate={}, threshold={:?}, mean={:?}, std={:?}",
            group.rank,
            summary.admission_rate,
            summary.gpa_threshold,
            summary.gpa_admitted_mean,
            summary.gpa_admitted_std
        );
        report.groups.insert(group.rank, summary);
    }

    info!("Summarized {} ranks", report.len());

    Ok(report)
}

/// Compute the statistics of one rank group
pub fn summarize_group(group: &RankGroup, table: &Table) -> Result<GroupSummary, AggregateError> {
    summarize_records(group.rank, group.records(table))
}

/// Compute statistics over the records of a single rank
///
/// **Public** - usable without a table, e.g. in tests
pub fn summarize_records<'a>(
    rank: u32,
    records: impl IntoIterator<Item = &'a AdmissionRecord>,
) -> Result<GroupSummary, AggregateError> {
    let mut total = 0usize;
    let mut admitted = Vec::new();

    for record in records {
        total += 1;
        if record.admit {
            admitted.push(record.gpa);
        }
    }

    if total == 0 {
        return Err(AggregateError::EmptyGroup { rank });
    }

    let admission_rate = admitted.len() as f64 / total as f64;

    Ok(GroupSummary {
        admission_rate: round_to(admission_rate, RATE_PRECISION),
        gpa_threshold: minimum(&admitted).map(|v| round_to(v, GPA_PRECISION)),
        gpa_admitted_mean: mean(&admitted).map(|v| round_to(v, GPA_PRECISION)),
        gpa_admitted_std: sample_std(&admitted).map(|v| round_to(v, GPA_PRECISION)),
    })
}

/// Round to a number of decimal places, ties away from zero
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Smallest value, `None` for an empty slice
pub fn minimum(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation, `None` with fewer than two values
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(0.0625, 3), 0.063);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(1.0 / 3.0, 3), 0.333);
        assert_eq!(round_to(2.0 / 3.0, 3), 0.667);
    }

    #[test]
    fn test_mean_and_std() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[3.0, 4.0]), Some(3.5));
        assert_eq!(sample_std(&[3.5]), None);

        let std = sample_std(&[3.0, 4.0]).unwrap();
        assert!((std - 0.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_minimum() {
        assert_eq!(minimum(&[]), None);
        assert_eq!(minimum(&[3.4, 2.9, 3.1]), Some(2.9));
    }

    #[test]
    fn test_summarize_two_admitted() {
        let records = [
            AdmissionRecord::new(2, true, 3.0),
            AdmissionRecord::new(2, true, 4.0),
        ];
        let summary = summarize_records(2, &records).unwrap();

        assert_eq!(summary.admission_rate, 1.0);
        assert_eq!(summary.gpa_threshold, Some(3.0));
        assert_eq!(summary.gpa_admitted_mean, Some(3.5));
        assert_eq!(summary.gpa_admitted_std, Some(0.71));
    }

    #[test]
    fn test_summarize_none_admitted() {
        let records = [
            AdmissionRecord::new(4, false, 3.0),
            AdmissionRecord::new(4, false, 2.5),
        ];
        let summary = summarize_records(4, &records).unwrap();

        assert_eq!(summary.admission_rate, 0.0);
        assert_eq!(summary.gpa_threshold, None);
        assert_eq!(summary.gpa_admitted_mean, None);
        assert_eq!(summary.gpa_admitted_std, None);
    }

    #[test]
    fn test_summarize_empty_group() {
        let empty: [AdmissionRecord; 0] = [];
        let err = summarize_records(7, &empty).unwrap_err();
        assert!(matches!(err, AggregateError::EmptyGroup { rank: 7 }));
    }

    #[test]
    fn test_build_report_scenario() {
        let table = Table::new(vec![
            AdmissionRecord::new(1, true, 3.8),
            AdmissionRecord::new(1, false, 3.2),
            AdmissionRecord::new(2, true, 3.5),
        ]);
        let report = build_report(&table).unwrap();

        assert_eq!(report.len(), 2);
        let one = report.get(1).unwrap();
        assert_eq!(one.admission_rate, 0.5);
        assert_eq!(one.gpa_threshold, Some(3.8));
        assert_eq!(one.gpa_admitted_mean, Some(3.8));
        assert_eq!(one.gpa_admitted_std, None);

        let two = report.get(2).unwrap();
        assert_eq!(two.admission_rate, 1.0);
        assert_eq!(two.gpa_threshold, Some(3.5));
    }
}
