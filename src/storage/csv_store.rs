//! CSV-backed record store
//!
//! Each read or write opens the file, fully consumes or produces it, and
//! closes it before returning.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{CarpoolError, CarpoolResult};

use super::{RecordStore, Table};

/// Stores tables as comma-separated files with a header line
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvStore;

impl CsvStore {
    pub fn new() -> Self {
        Self
    }
}

impl RecordStore for CsvStore {
    fn read_rows(&self, path: &Path) -> CarpoolResult<Table> {
        if !path.exists() {
            return Err(CarpoolError::Storage(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| CarpoolError::Csv(format!("Failed to open {}: {}", path.display(), e)))?;

        let headers = reader
            .headers()
            .map_err(|e| CarpoolError::Csv(format!("Failed to read header of {}: {}", path.display(), e)))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut table = Table::new(headers);
        for (idx, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                CarpoolError::Csv(format!("Error reading row {} of {}: {}", idx + 1, path.display(), e))
            })?;
            table.rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(table)
    }

    fn write_rows(&self, path: &Path, table: &Table) -> CarpoolResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CarpoolError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut writer = WriterBuilder::new()
            .from_path(path)
            .map_err(|e| CarpoolError::Csv(format!("Failed to create {}: {}", path.display(), e)))?;

        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }

        writer
            .flush()
            .map_err(|e| CarpoolError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Table {
        let mut table = Table::new(vec!["Participant name".into(), "Total".into()]);
        table.rows.push(vec!["Brock".into(), "12.50".into()]);
        table.rows.push(vec!["Smith, Jo".into(), "0.00".into()]);
        table
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("summary.csv");
        let store = CsvStore::new();

        store.write_rows(&path, &sample()).unwrap();
        let loaded = store.read_rows(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("summary.csv");

        CsvStore::new().write_rows(&path, &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_written_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("summary.csv");
        CsvStore::new().write_rows(&path, &sample()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Participant name,Total\nBrock,12.50\n\"Smith, Jo\",0.00\n"
        );
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = CsvStore::new().read_rows(&temp_dir.path().join("missing.csv"));
        assert!(matches!(result, Err(CarpoolError::Storage(_))));
    }

    #[test]
    fn test_read_ragged_rows_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ragged.csv");
        fs::write(&path, "a,b\n1,2,3\n").unwrap();
        assert!(matches!(
            CsvStore::new().read_rows(&path),
            Err(CarpoolError::Csv(_))
        ));
    }
}
