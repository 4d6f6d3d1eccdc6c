//! Bundle service
//!
//! Saves a carpool as a bundle of CSV records and rebuilds a carpool from
//! one. Rebuilding recovers riders from the stored amounts (any non-zero cell
//! is a ride), then recalculates everything from scratch.

use std::path::{Path, PathBuf};

use crate::error::{CarpoolError, CarpoolResult};
use crate::models::amount::CENT;
use crate::models::{Carpool, CarpoolConfig, Week};
use crate::storage::bundle::{
    bundle_name, clear_records, detailed_file_name, find_summary_record, list_detailed_records,
    summary_file_name,
};
use crate::storage::{RecordStore, SummaryRecord, WeekRecord};

/// Service for saving and loading carpool bundles
pub struct BundleService<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> BundleService<'a, S> {
    /// Create a new bundle service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Write `carpool` as a bundle under `output_dir`
    ///
    /// The carpool is recalculated first. Records already in the bundle
    /// folder are replaced, so the folder ends up holding exactly this
    /// carpool's weeks. A failure midway can leave some records written and
    /// others missing.
    pub fn save(&self, carpool: &mut Carpool, output_dir: &Path) -> CarpoolResult<PathBuf> {
        let (earliest, latest) = carpool
            .date_range()
            .ok_or(CarpoolError::EmptyCarpoolOnSave)?;
        carpool.calculate()?;

        let bundle_dir = output_dir.join(bundle_name(earliest, latest));
        let stale = clear_records(&bundle_dir)?;
        if stale > 0 {
            tracing::info!(bundle = %bundle_dir.display(), stale, "replacing existing bundle records");
        }

        let summary_path = bundle_dir.join(summary_file_name(earliest, latest));
        let summary = SummaryRecord::from_balance(carpool.total());
        self.store.write_rows(&summary_path, &summary.to_table())?;
        tracing::debug!(path = %summary_path.display(), "summary record written");

        for week in carpool.weeks() {
            let record = week.to_record()?;
            let path = bundle_dir.join(detailed_file_name(record.date));
            self.store.write_rows(&path, &record.to_table())?;
            tracing::debug!(path = %path.display(), "week record written");
        }

        tracing::info!(
            bundle = %bundle_dir.display(),
            weeks = carpool.len(),
            "carpool saved"
        );
        Ok(bundle_dir)
    }

    /// Rebuild a carpool from the bundle at `bundle_dir`
    ///
    /// Weeks are added in file-name order. A stored summary that disagrees
    /// with the recalculated total is logged, not treated as an error.
    pub fn load(&self, config: CarpoolConfig, bundle_dir: &Path) -> CarpoolResult<Carpool> {
        let records = list_detailed_records(bundle_dir)?;
        if records.is_empty() {
            return Err(CarpoolError::Storage(format!(
                "No week records found in {}",
                bundle_dir.display()
            )));
        }

        let mut carpool = Carpool::new(config);
        for (date, path) in records {
            let table = self.store.read_rows(&path)?;
            let record = WeekRecord::from_table(date, &table, carpool.config().roster(), &path)?;

            let mut week = Week::with_date(date, carpool.config().roster());
            week.reconstruct(carpool.config(), &record.rows)?;
            warn_on_week_mismatch(&week, &record, &path);

            carpool.add_week(week)?;
        }
        carpool.calculate()?;

        if let Some(summary_path) = find_summary_record(bundle_dir)? {
            let table = self.store.read_rows(&summary_path)?;
            let summary = SummaryRecord::from_table(&table, carpool.config().roster(), &summary_path)?;
            let stored = summary.to_balance(carpool.config().roster())?;
            if !stored.approx_eq(carpool.total()) {
                tracing::warn!(
                    path = %summary_path.display(),
                    "stored summary differs from the recalculated total"
                );
            }
        } else {
            tracing::warn!(bundle = %bundle_dir.display(), "bundle has no summary record");
        }

        tracing::info!(
            bundle = %bundle_dir.display(),
            weeks = carpool.len(),
            "carpool loaded"
        );
        Ok(carpool)
    }
}

fn warn_on_week_mismatch(week: &Week, record: &WeekRecord, path: &Path) {
    for row in &record.rows {
        let recalculated = week.balance().get(&row.participant);
        let matches = recalculated
            .map(|amount| amount.approx_eq(row.total, CENT))
            .unwrap_or(false);
        if !matches {
            tracing::warn!(
                path = %path.display(),
                participant = %row.participant,
                stored = %row.total,
                "stored week total differs from the recalculated one"
            );
        }
    }
}
