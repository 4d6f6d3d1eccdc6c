//! The carpool: every week of a session and their combined balance
//!
//! One `Carpool` value owns the whole ledger for a session. Weeks keep their
//! insertion order; calendar order only matters when naming a saved bundle.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{CarpoolError, CarpoolResult};
use crate::services::bundle::BundleService;
use crate::storage::RecordStore;

use super::balance::Balance;
use super::carpool_config::CarpoolConfig;
use super::week::Week;

/// All weeks of a session and their total
#[derive(Debug, Clone)]
pub struct Carpool {
    config: CarpoolConfig,
    weeks: Vec<Week>,
    total: Balance,
}

impl Carpool {
    /// An empty carpool
    pub fn new(config: CarpoolConfig) -> Self {
        let total = Balance::zero(config.roster());
        Self {
            config,
            weeks: Vec::new(),
            total,
        }
    }

    pub fn config(&self) -> &CarpoolConfig {
        &self.config
    }

    /// A fresh undated week over this carpool's roster
    pub fn new_week(&self) -> Week {
        Week::new(self.config.roster())
    }

    /// Weeks in insertion order
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Mutable access to the weeks together with the rules needed to edit them
    ///
    /// Call [`Carpool::calculate`] afterwards to refresh the total.
    pub fn weeks_mut(&mut self) -> (&CarpoolConfig, &mut [Week]) {
        (&self.config, &mut self.weeks)
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Total as of the last [`Carpool::calculate`]
    pub fn total(&self) -> &Balance {
        &self.total
    }

    /// Append a week and refresh the total
    ///
    /// The week must be dated, and no other week may share its date.
    pub fn add_week(&mut self, week: Week) -> CarpoolResult<()> {
        let date = week
            .date()
            .ok_or_else(|| CarpoolError::Validation("A week needs a date before it is added".into()))?;
        if self.weeks.iter().any(|w| w.date() == Some(date)) {
            return Err(CarpoolError::DuplicateWeek(date));
        }

        self.weeks.push(week);
        self.calculate()?;
        tracing::debug!(%date, weeks = self.weeks.len(), "week added");
        Ok(())
    }

    /// Recalculate every week and sum them
    pub fn calculate(&mut self) -> CarpoolResult<&Balance> {
        let mut total = Balance::zero(self.config.roster());
        for week in &mut self.weeks {
            total = total.add(week.calculate(&self.config)?)?;
        }
        self.total = total;
        Ok(&self.total)
    }

    /// Earliest and latest week dates, by calendar
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.weeks.iter().filter_map(Week::date);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(earliest, latest), date| {
            (earliest.min(date), latest.max(date))
        }))
    }

    /// Write the summary and every week's detailed record under `output_dir`
    ///
    /// Returns the bundle directory that was written.
    pub fn save<S: RecordStore>(&mut self, output_dir: &Path, store: &S) -> CarpoolResult<PathBuf> {
        BundleService::new(store).save(self, output_dir)
    }

    /// Rebuild a carpool from a saved bundle directory
    pub fn load<S: RecordStore>(
        config: CarpoolConfig,
        bundle_dir: &Path,
        store: &S,
    ) -> CarpoolResult<Carpool> {
        BundleService::new(store).load(config, bundle_dir)
    }
}
