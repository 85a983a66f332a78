//! Group records by rank.
//!
//! Groups hold row indices into the table rather than copies of the
//! records, and are keyed in ascending rank order.

use crate::loader::schema::{AdmissionRecord, Table};
use log::debug;
use std::collections::BTreeMap;

/// A rank and the indices of its rows in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroup {
    pub rank: u32,
    pub rows: Vec<usize>,
}

impl RankGroup {
    /// Resolve the row indices against the table they came from
    pub fn records<'a>(&'a self, table: &'a Table) -> impl Iterator<Item = &'a AdmissionRecord> + 'a {
        let records = table.records();
        self.rows.iter().filter_map(move |&i| records.get(i))
    }
}

/// Build one group per distinct rank, ascending
///
/// **Public** - main entry point for grouping
pub fn group_by_rank(table: &Table) -> Vec<RankGroup> {
    let mut index: BTreeMap<u32, Vec<usize>> = BTreeMap::new();

    for (row, record) in table.records().iter().enumerate() {
        index.entry(record.rank).or_default().push(row);
    }

    debug!("Grouped {} records into {} ranks", table.len(), index.len());

    index
        .into_iter()
        .map(|(rank, rows)| RankGroup { rank, rows })
        .collect()
}
