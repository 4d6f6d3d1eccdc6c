//! A week of commuting trips
//!
//! A week is identified by a calendar date and owns one trip per slot. Its
//! balance is the sum of the ten trip balances.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{CarpoolError, CarpoolResult};
use crate::storage::records::{WeekRecord, WeekRow};

use super::balance::Balance;
use super::carpool_config::CarpoolConfig;
use super::roster::Roster;
use super::slot::Slot;
use super::trip::Trip;

/// One calendar week of trips
#[derive(Debug, Clone)]
pub struct Week {
    date: Option<NaiveDate>,
    trips: BTreeMap<Slot, Trip>,
    balance: Balance,
}

impl Week {
    /// An undated week with no trips
    pub fn new(roster: &Roster) -> Self {
        Self {
            date: None,
            trips: BTreeMap::new(),
            balance: Balance::zero(roster),
        }
    }

    pub fn with_date(date: NaiveDate, roster: &Roster) -> Self {
        let mut week = Self::new(roster);
        week.set_date(date);
        week
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Assign the week's date
    ///
    /// The interactive flow sets it once; reconstruction from a stored
    /// record may set it again from the file name.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    /// The trip for `slot`, created empty on first access
    pub fn ensure_trip(&mut self, slot: Slot, roster: &Roster) -> &mut Trip {
        self.trips
            .entry(slot)
            .or_insert_with(|| Trip::new(slot, roster))
    }

    /// [`Week::ensure_trip`] by slot name
    pub fn ensure_trip_named(&mut self, slot_name: &str, roster: &Roster) -> CarpoolResult<&mut Trip> {
        let slot = Slot::from_name(slot_name)?;
        Ok(self.ensure_trip(slot, roster))
    }

    pub fn trip(&self, slot: Slot) -> Option<&Trip> {
        self.trips.get(&slot)
    }

    /// Trips created so far, in slot order
    pub fn trips(&self) -> impl Iterator<Item = &Trip> {
        self.trips.values()
    }

    /// Balance as of the last [`Week::calculate`]
    pub fn balance(&self) -> &Balance {
        &self.balance
    }

    /// Recalculate every trip and sum them
    ///
    /// All ten slots are included; slots nobody rode contribute zero.
    pub fn calculate(&mut self, config: &CarpoolConfig) -> CarpoolResult<&Balance> {
        let roster = config.roster();
        let mut total = Balance::zero(roster);

        for slot in Slot::ALL {
            let trip_balance = self.ensure_trip(slot, roster).calculate(config);
            total = total.add(trip_balance)?;
        }

        self.balance = total;
        Ok(&self.balance)
    }

    /// Recover riders from stored per-slot amounts
    ///
    /// Any non-zero stored amount marks the participant as a rider of that
    /// slot. The stored amounts themselves are discarded; the balance is
    /// recalculated from the recovered riders.
    pub fn reconstruct(&mut self, config: &CarpoolConfig, rows: &[WeekRow]) -> CarpoolResult<&Balance> {
        let roster = config.roster();

        for row in rows {
            for slot in Slot::ALL {
                if !row.amount(slot).is_zero() {
                    self.ensure_trip(slot, roster)
                        .add_rider(roster, &row.participant)?;
                }
            }
        }

        self.calculate(config)
    }

    /// Shape the week into its detailed record
    ///
    /// Uses the balances from the last [`Week::calculate`].
    pub fn to_record(&self) -> CarpoolResult<WeekRecord> {
        let date = self.date.ok_or_else(|| {
            CarpoolError::Validation("Cannot record a week without a date".into())
        })?;

        let mut rows = Vec::with_capacity(self.balance.len());
        for (participant, total) in self.balance.iter() {
            let mut row = WeekRow::empty(participant);
            for trip in self.trips.values() {
                row.slots[trip.slot().index()] = trip.balance().get(participant)?;
            }
            row.total = total;
            rows.push(row);
        }

        Ok(WeekRecord { date, rows })
    }

    /// Heading used in summaries
    pub fn label(&self) -> String {
        match self.date {
            Some(date) => format!("Week {}", date),
            None => "Week (undated)".to_string(),
        }
    }
}
