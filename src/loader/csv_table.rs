//! CSV loader for admission records.
//!
//! Expects a header row naming at least the `rank`, `admit` and `gpa`
//! columns. Other columns (e.g. `gre`) are ignored and column order does
//! not matter.

use super::schema::{AdmissionRecord, Table};
use crate::utils::config::{ADMIT_COLUMN, GPA_COLUMN, GPA_MAX, GPA_MIN, RANK_COLUMN};
use crate::utils::error::LoadError;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load admission records from a CSV file
///
/// **Public** - main entry point for loading
///
/// # Arguments
/// * `input_path` - Path to the CSV file
///
/// # Returns
/// Table of records in file order
///
/// # Errors
/// * `LoadError::Io` - File missing or unreadable
/// * `LoadError::Csv` - Malformed CSV (e.g. ragged rows)
/// * `LoadError::MissingColumn` - Required column absent from header
/// * `LoadError::InvalidValue` - Cell cannot be parsed into its field
pub fn load_table(input_path: impl AsRef<Path>) -> Result<Table, LoadError> {
    let input_path = input_path.as_ref();

    info!("Loading admission records from: {}", input_path.display());

    let file = File::open(input_path).map_err(|source| LoadError::Io {
        path: input_path.to_path_buf(),
        source,
    })?;

    let table = read_table(file)?;

    info!("Loaded {} records", table.len());

    Ok(table)
}

/// Parse admission records from any reader
///
/// **Public** - useful for tests and in-memory data
pub fn read_table<R: Read>(input: R) -> Result<Table, LoadError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);

    let columns = ColumnIndex::locate(reader.headers()?)?;
    debug!(
        "Column positions: rank={}, admit={}, gpa={}",
        columns.rank, columns.admit, columns.gpa
    );

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result?;
        records.push(columns.parse_row(&row, row_no + 1)?);
    }

    Ok(Table::new(records))
}

/// Positions of the required columns in the header row
///
/// **Private** - internal helper for read_table
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    rank: usize,
    admit: usize,
    gpa: usize,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            rank: find(RANK_COLUMN)?,
            admit: find(ADMIT_COLUMN)?,
            gpa: find(GPA_COLUMN)?,
        })
    }

    fn parse_row(&self, row: &StringRecord, row_no: usize) -> Result<AdmissionRecord, LoadError> {
        let rank = parse_rank(row.get(self.rank).unwrap_or(""), row_no)?;
        let admit = parse_admit(row.get(self.admit).unwrap_or(""), row_no)?;
        let gpa = parse_gpa(row.get(self.gpa).unwrap_or(""), row_no)?;

        Ok(AdmissionRecord::new(rank, admit, gpa))
    }
}

fn invalid(row: usize, column: &'static str, value: &str) -> LoadError {
    LoadError::InvalidValue {
        row,
        column,
        value: value.to_string(),
    }
}

fn parse_rank(raw: &str, row: usize) -> Result<u32, LoadError> {
    match raw.parse::<u32>() {
        Ok(rank) if rank > 0 => Ok(rank),
        _ => Err(invalid(row, RANK_COLUMN, raw)),
    }
}

fn parse_admit(raw: &str, row: usize) -> Result<bool, LoadError> {
    match raw.parse::<u8>() {
        Ok(0) => Ok(false),
        Ok(1) => Ok(true),
        _ => Err(invalid(row, ADMIT_COLUMN, raw)),
    }
}

fn parse_gpa(raw: &str, row: usize) -> Result<f64, LoadError> {
    let gpa = raw
        .parse::<f64>()
        .ok()
        .filter(|g| g.is_finite())
        .ok_or_else(|| invalid(row, GPA_COLUMN, raw))?;

    if !(GPA_MIN..=GPA_MAX).contains(&gpa) {
        warn!("Row {}: GPA {} is outside [{}, {}]", row, gpa, GPA_MIN, GPA_MAX);
    }

    Ok(gpa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_table_basic() {
        let csv = "admit,gre,gpa,rank\n0,380,3.61,3\n1,660,3.67,3\n1,800,4,1\n";
        let table = read_table(csv.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.records()[0], AdmissionRecord::new(3, false, 3.61));
        assert_eq!(table.records()[2], AdmissionRecord::new(1, true, 4.0));
    }

    #[test]
    fn test_read_table_trims_whitespace() {
        let csv = " rank , admit , gpa \n 2 , 1 , 3.5 \n";
        let table = read_table(csv.as_bytes()).unwrap();

        assert_eq!(table.records(), &[AdmissionRecord::new(2, true, 3.5)]);
    }

    #[test]
    fn test_missing_column() {
        let csv = "rank,admit\n1,1\n";
        let err = read_table(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "gpa"));
    }

    #[test]
    fn test_empty_input_is_missing_column() {
        let err = read_table("".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(_)));
    }

    #[test]
    fn test_header_only_gives_empty_table() {
        let table = read_table("rank,admit,gpa\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_invalid_admit() {
        let csv = "rank,admit,gpa\n1,2,3.0\n";
        let err = read_table(csv.as_bytes()).unwrap_err();

        match err {
            LoadError::InvalidValue { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, "admit");
                assert_eq!(value, "2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_rank_zero() {
        let csv = "rank,admit,gpa\n0,1,3.0\n";
        assert!(matches!(
            read_table(csv.as_bytes()),
            Err(LoadError::InvalidValue { column: "rank", .. })
        ));
    }

    #[test]
    fn test_invalid_gpa() {
        let csv = "rank,admit,gpa\n1,1,abc\n1,1,NaN\n";
        assert!(matches!(
            read_table(csv.as_bytes()),
            Err(LoadError::InvalidValue { column: "gpa", row: 1, .. })
        ));
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let csv = "rank,admit,gpa\n1,1\n";
        assert!(matches!(read_table(csv.as_bytes()), Err(LoadError::Csv(_))));
    }

    #[test]
    fn test_load_table_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = load_table(temp_dir.path().join("absent.csv")).unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
    }
}
