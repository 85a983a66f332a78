//! Loading of admission records and schema definitions.
//!
//! This module handles:
//! - Reading the CSV input into a typed table
//! - Defining the record and report types

pub mod csv_table;
pub mod schema;

// Re-export main types
pub use csv_table::{load_table, read_table};
pub use schema::{AdmissionRecord, GroupSummary, Report, Table};
