//! Data model for admission records and the summary report.
//!
//! The report types are also the JSON schema of the file we write to disk,
//! so changing a field name here changes the output format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One input row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdmissionRecord {
    /// Tier of the institution (1 = most selective)
    pub rank: u32,

    /// Whether the applicant was admitted
    pub admit: bool,

    /// Applicant GPA
    pub gpa: f64,
}

impl AdmissionRecord {
    pub fn new(rank: u32, admit: bool, gpa: f64) -> Self {
        Self { rank, admit, gpa }
    }
}

/// Records in file order. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    records: Vec<AdmissionRecord>,
}

impl Table {
    pub fn new(records: Vec<AdmissionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AdmissionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<AdmissionRecord>> for Table {
    fn from(records: Vec<AdmissionRecord>) -> Self {
        Self::new(records)
    }
}

/// Statistics for a single rank
///
/// GPA-derived fields are `None` when they are undefined for the group
/// (no admitted records, or fewer than two for the standard deviation).
/// They serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Admitted / total, rounded to 3 places
    pub admission_rate: f64,

    /// Lowest GPA among admitted records
    pub gpa_threshold: Option<f64>,

    /// Mean GPA of admitted records
    pub gpa_admitted_mean: Option<f64>,

    /// Sample standard deviation (N-1) of admitted GPAs
    pub gpa_admitted_std: Option<f64>,
}

/// Top-level report written to JSON, keyed by rank in ascending order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    pub groups: BTreeMap<u32, GroupSummary>,
}

impl Report {
    pub fn get(&self, rank: u32) -> Option<&GroupSummary> {
        self.groups.get(&rank)
    }

    pub fn ranks(&self) -> impl Iterator<Item = u32> + '_ {
        self.groups.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
