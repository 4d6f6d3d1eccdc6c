//! Storage layer for the carpool calculator
//!
//! Saved carpools are folders of CSV records. This module provides:
//! - the [`RecordStore`] seam for reading/writing rows of named fields
//! - a `csv`-backed implementation
//! - fixed-shape week and summary records with schema validation
//! - bundle and record file naming

pub mod bundle;
pub mod csv_store;
pub mod records;

use std::path::Path;

use crate::error::CarpoolResult;

pub use csv_store::CsvStore;
pub use records::{SummaryRecord, SummaryRow, WeekRecord, WeekRow};

/// Rows of string cells under a header line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Column index of a header
    pub fn column(&self, field: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == field)
    }

    /// Cell of `row` under `field`
    pub fn get(&self, row: usize, field: &str) -> Option<&str> {
        let column = self.column(field)?;
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}

/// Reads and writes tables of named fields
pub trait RecordStore {
    /// Read every row of the record at `path`
    fn read_rows(&self, path: &Path) -> CarpoolResult<Table>;

    /// Replace the record at `path` with `table`
    fn write_rows(&self, path: &Path, table: &Table) -> CarpoolResult<()>;
}
