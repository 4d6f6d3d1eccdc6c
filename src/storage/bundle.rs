//! Bundle layout and record file naming
//!
//! A saved carpool is a folder named after its date range:
//!
//! ```text
//! CARPOOL_2024-03-04_TO_2024-03-18/
//!   SUMMARY_2024-03-04_TO_2024-03-18.csv
//!   DETAILED_2024-03-04.csv
//!   DETAILED_2024-03-11.csv
//!   DETAILED_2024-03-18.csv
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{CarpoolError, CarpoolResult};

pub const BUNDLE_PREFIX: &str = "CARPOOL_";
pub const SUMMARY_PREFIX: &str = "SUMMARY_";
pub const DETAILED_PREFIX: &str = "DETAILED_";
pub const RANGE_SEPARATOR: &str = "_TO_";
pub const RECORD_EXTENSION: &str = "csv";

/// Date format used in every file and folder name
pub const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

fn date_range(earliest: NaiveDate, latest: NaiveDate) -> String {
    format!(
        "{}{}{}",
        earliest.format(FILE_DATE_FORMAT),
        RANGE_SEPARATOR,
        latest.format(FILE_DATE_FORMAT)
    )
}

/// Folder name of a bundle spanning `earliest..=latest`
pub fn bundle_name(earliest: NaiveDate, latest: NaiveDate) -> String {
    format!("{}{}", BUNDLE_PREFIX, date_range(earliest, latest))
}

pub fn summary_file_name(earliest: NaiveDate, latest: NaiveDate) -> String {
    format!(
        "{}{}.{}",
        SUMMARY_PREFIX,
        date_range(earliest, latest),
        RECORD_EXTENSION
    )
}

pub fn detailed_file_name(date: NaiveDate) -> String {
    format!(
        "{}{}.{}",
        DETAILED_PREFIX,
        date.format(FILE_DATE_FORMAT),
        RECORD_EXTENSION
    )
}

/// Week date encoded in a detailed record's file name
///
/// The extension matches case-insensitively, as when listing records.
pub fn parse_detailed_file_name(file_name: &str) -> Option<NaiveDate> {
    let path = Path::new(file_name);
    if !is_record_extension(path) {
        return None;
    }
    let date = path.file_stem()?.to_str()?.strip_prefix(DETAILED_PREFIX)?;
    NaiveDate::parse_from_str(date, FILE_DATE_FORMAT).ok()
}

fn is_record_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(RECORD_EXTENSION))
        .unwrap_or(false)
}

/// Detailed records in `dir`, ordered by file name
pub fn list_detailed_records(dir: &Path) -> CarpoolResult<Vec<(NaiveDate, PathBuf)>> {
    let mut records = Vec::new();
    for (name, path) in record_files(dir)? {
        match parse_detailed_file_name(&name) {
            Some(date) => records.push((name, date, path)),
            None if name.starts_with(DETAILED_PREFIX) => {
                tracing::warn!(file = %name, "skipping detailed record with unreadable date");
            }
            None => {}
        }
    }

    records.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(records
        .into_iter()
        .map(|(_, date, path)| (date, path))
        .collect())
}

/// The bundle's summary record, if there is one
pub fn find_summary_record(dir: &Path) -> CarpoolResult<Option<PathBuf>> {
    let mut summaries: Vec<(String, PathBuf)> = record_files(dir)?
        .into_iter()
        .filter(|(name, _)| name.starts_with(SUMMARY_PREFIX))
        .collect();
    summaries.sort_by(|a, b| a.0.cmp(&b.0));

    if summaries.len() > 1 {
        tracing::warn!(dir = %dir.display(), count = summaries.len(), "bundle has several summary records, using the first");
    }
    Ok(summaries.into_iter().next().map(|(_, path)| path))
}

/// Delete the summary and detailed records in `dir`
///
/// Other files are left alone. A missing directory has nothing to clear.
/// Returns how many records were removed.
pub fn clear_records(dir: &Path) -> CarpoolResult<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for (name, path) in record_files(dir)? {
        if name.starts_with(SUMMARY_PREFIX) || name.starts_with(DETAILED_PREFIX) {
            fs::remove_file(&path).map_err(|e| {
                CarpoolError::Io(format!("Failed to remove {}: {}", path.display(), e))
            })?;
            tracing::debug!(file = %name, "stale record removed");
            removed += 1;
        }
    }
    Ok(removed)
}

fn record_files(dir: &Path) -> CarpoolResult<Vec<(String, PathBuf)>> {
    if !dir.is_dir() {
        return Err(CarpoolError::Storage(format!(
            "Bundle directory not found: {}",
            dir.display()
        )));
    }

    let entries = fs::read_dir(dir)
        .map_err(|e| CarpoolError::Io(format!("Failed to read {}: {}", dir.display(), e)))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if !is_record_extension(&path) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            files.push((name.to_string(), path.clone()));
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_names() {
        assert_eq!(bundle_name(date(4), date(18)), "CARPOOL_2024-03-04_TO_2024-03-18");
        assert_eq!(
            summary_file_name(date(4), date(18)),
            "SUMMARY_2024-03-04_TO_2024-03-18.csv"
        );
        assert_eq!(detailed_file_name(date(4)), "DETAILED_2024-03-04.csv");
    }

    #[test]
    fn test_parse_detailed_file_name() {
        assert_eq!(parse_detailed_file_name("DETAILED_2024-03-04.csv"), Some(date(4)));
        assert_eq!(parse_detailed_file_name("DETAILED_2024-13-04.csv"), None);
        assert_eq!(parse_detailed_file_name("SUMMARY_2024-03-04.csv"), None);
        assert_eq!(parse_detailed_file_name("DETAILED_2024-03-04.txt"), None);
        assert_eq!(parse_detailed_file_name("DETAILED_2024-03-04.CSV"), Some(date(4)));
        assert_eq!(parse_detailed_file_name("DETAILED_2024-03-04"), None);
    }

    #[test]
    fn test_list_detailed_records_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        for name in [
            "DETAILED_2024-03-18.csv",
            "DETAILED_2024-03-04.csv",
            "DETAILED_2024-03-25.CSV",
            "DETAILED_garbage.csv",
            "SUMMARY_2024-03-04_TO_2024-03-18.csv",
            "notes.txt",
        ] {
            fs::write(dir.join(name), "").unwrap();
        }
        fs::create_dir(dir.join("DETAILED_2024-03-11.csv")).unwrap();

        let records = list_detailed_records(dir).unwrap();
        let dates: Vec<NaiveDate> = records.iter().map(|(d, _)| *d).collect();
        assert_eq!(dates, vec![date(4), date(18), date(25)]);

        let summary = find_summary_record(dir).unwrap().unwrap();
        assert!(summary.ends_with("SUMMARY_2024-03-04_TO_2024-03-18.csv"));
    }

    #[test]
    fn test_clear_records_keeps_other_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        for name in [
            "DETAILED_2024-03-04.csv",
            "DETAILED_2024-03-11.CSV",
            "SUMMARY_2024-03-04_TO_2024-03-11.csv",
            "notes.txt",
            "other.csv",
        ] {
            fs::write(dir.join(name), "").unwrap();
        }

        assert_eq!(clear_records(dir).unwrap(), 3);
        assert!(list_detailed_records(dir).unwrap().is_empty());
        assert!(find_summary_record(dir).unwrap().is_none());
        assert!(dir.join("notes.txt").is_file());
        assert!(dir.join("other.csv").is_file());

        assert_eq!(clear_records(&dir.join("missing")).unwrap(), 0);
    }

    #[test]
    fn test_missing_bundle_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        assert!(matches!(
            list_detailed_records(&missing),
            Err(CarpoolError::Storage(_))
        ));
    }
}
