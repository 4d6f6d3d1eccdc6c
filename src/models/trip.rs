//! A single commute trip
//!
//! A trip belongs to one slot of a week and records who rode along. The
//! driver is never a rider: they are implicit, and pay an equal share of the
//! trip price that nobody reimburses.

use crate::error::{CarpoolError, CarpoolResult};

use super::amount::Amount;
use super::balance::Balance;
use super::carpool_config::CarpoolConfig;
use super::roster::Roster;
use super::slot::Slot;

/// What happened when a preset was applied to a trip
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetOutcome {
    /// Riders added by the preset
    pub added: Vec<String>,
    /// Preset members that were already riding
    pub already_riding: Vec<String>,
    /// Preset members that could not be matched, with the reason
    pub skipped: Vec<(String, String)>,
}

/// One trip slot and its riders
#[derive(Debug, Clone)]
pub struct Trip {
    slot: Slot,
    riders: Vec<String>,
    balance: Balance,
}

impl Trip {
    /// Create an empty trip for a slot
    pub fn new(slot: Slot, roster: &Roster) -> Self {
        Self {
            slot,
            riders: Vec::new(),
            balance: Balance::zero(roster),
        }
    }

    /// Create an empty trip from a slot name
    pub fn create(slot_name: &str, roster: &Roster) -> CarpoolResult<Self> {
        Ok(Self::new(Slot::from_name(slot_name)?, roster))
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Riders in the order they were added
    pub fn riders(&self) -> &[String] {
        &self.riders
    }

    pub fn has_riders(&self) -> bool {
        !self.riders.is_empty()
    }

    pub fn is_rider(&self, name: &str) -> bool {
        self.riders.iter().any(|r| r == name)
    }

    /// Balance as of the last [`Trip::calculate`]
    pub fn balance(&self) -> &Balance {
        &self.balance
    }

    /// Add a rider by exact roster name
    ///
    /// Returns `false` when the participant was already riding.
    pub fn add_rider(&mut self, roster: &Roster, name: &str) -> CarpoolResult<bool> {
        if !roster.contains(name) {
            return Err(CarpoolError::UnknownParticipant(name.to_string()));
        }
        if self.is_rider(name) {
            return Ok(false);
        }
        self.riders.push(name.to_string());
        Ok(true)
    }

    /// Add every member of the preset at `index` (1-based)
    ///
    /// Members that don't resolve to a roster entry are skipped and listed in
    /// the outcome rather than failing the whole preset.
    pub fn apply_preset(
        &mut self,
        config: &CarpoolConfig,
        index: usize,
    ) -> CarpoolResult<PresetOutcome> {
        let preset = config.preset(index)?;
        let roster = config.roster();
        let mut outcome = PresetOutcome::default();

        for member in &preset.members {
            let name = match roster.resolve(member) {
                Ok(name) => name,
                Err(err) => {
                    outcome.skipped.push((member.clone(), err.to_string()));
                    continue;
                }
            };

            if self.add_rider(roster, name)? {
                outcome.added.push(name.to_string());
            } else {
                outcome.already_riding.push(name.to_string());
            }
        }

        Ok(outcome)
    }

    pub fn clear_riders(&mut self) {
        self.riders.clear();
    }

    /// Each rider's share: the price split between the riders and the driver
    pub fn price_per_person(&self, trip_price: Amount) -> Amount {
        if self.riders.is_empty() {
            Amount::zero()
        } else {
            trip_price.split(self.riders.len() + 1)
        }
    }

    /// Recompute the balance from the current riders
    ///
    /// No riders means nobody drove that slot, so everyone owes nothing.
    pub fn calculate(&mut self, config: &CarpoolConfig) -> &Balance {
        let share = self.price_per_person(config.trip_price());
        let riders = &self.riders;
        self.balance = Balance::from_fn(config.roster(), |name| {
            if riders.iter().any(|r| r == name) {
                share
            } else {
                Amount::zero()
            }
        });
        &self.balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::carpool_config::Preset;

    fn config() -> CarpoolConfig {
        CarpoolConfig::new(
            Roster::new(["A", "B", "C"]).unwrap(),
            Amount::new(25.0),
            vec![Preset::new(["A", "B"]), Preset::new(["B", "Zed", "c"])],
        )
        .unwrap()
    }

    #[test]
    fn test_create_validates_slot_name() {
        let config = config();
        let trip = Trip::create("Monday morning", config.roster()).unwrap();
        assert_eq!(trip.slot(), Slot::MondayMorning);
        assert!(!trip.has_riders());
        assert!(trip.balance().is_all_zero());

        assert!(matches!(
            Trip::create("Sunday", config.roster()),
            Err(CarpoolError::UnknownSlot(_))
        ));
    }

    #[test]
    fn test_add_rider_is_idempotent() {
        let config = config();
        let mut trip = Trip::new(Slot::MondayMorning, config.roster());
        assert!(trip.add_rider(config.roster(), "B").unwrap());
        assert!(!trip.add_rider(config.roster(), "B").unwrap());
        assert_eq!(trip.riders(), &["B".to_string()]);
    }

    #[test]
    fn test_add_rider_unknown() {
        let config = config();
        let mut trip = Trip::new(Slot::MondayMorning, config.roster());
        assert!(matches!(
            trip.add_rider(config.roster(), "Zed"),
            Err(CarpoolError::UnknownParticipant(_))
        ));
        assert!(!trip.has_riders());
    }

    #[test]
    fn test_calculate_empty_is_zero() {
        let config = config();
        let mut trip = Trip::new(Slot::FridayArvo, config.roster());
        assert!(trip.calculate(&config).is_all_zero());
    }

    #[test]
    fn test_calculate_single_rider_splits_with_driver() {
        let config = config();
        let mut trip = Trip::new(Slot::MondayMorning, config.roster());
        trip.add_rider(config.roster(), "B").unwrap();

        let balance = trip.calculate(&config).clone();
        assert_eq!(balance.get("A").unwrap(), Amount::zero());
        assert_eq!(balance.get("B").unwrap(), Amount::new(12.5));
        assert_eq!(balance.get("C").unwrap(), Amount::zero());
    }

    #[test]
    fn test_calculate_total_is_price_times_n_over_n_plus_one() {
        let config = config();
        let mut trip = Trip::new(Slot::TuesdayArvo, config.roster());
        trip.add_rider(config.roster(), "A").unwrap();
        trip.add_rider(config.roster(), "C").unwrap();

        let balance = trip.calculate(&config);
        let expected = 25.0 * 2.0 / 3.0;
        assert!((balance.total().value() - expected).abs() < 1e-9);
        assert_eq!(balance.get("A").unwrap(), balance.get("C").unwrap());
    }

    #[test]
    fn test_calculate_tracks_rider_changes() {
        let config = config();
        let mut trip = Trip::new(Slot::MondayMorning, config.roster());
        trip.add_rider(config.roster(), "A").unwrap();
        let first = trip.calculate(&config).clone();
        assert_eq!(trip.calculate(&config), &first);

        trip.clear_riders();
        assert!(trip.calculate(&config).is_all_zero());
    }

    #[test]
    fn test_apply_preset() {
        let config = config();
        let mut trip = Trip::new(Slot::MondayMorning, config.roster());
        trip.add_rider(config.roster(), "B").unwrap();

        let outcome = trip.apply_preset(&config, 2).unwrap();
        assert_eq!(outcome.added, vec!["C".to_string()]);
        assert_eq!(outcome.already_riding, vec!["B".to_string()]);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].0, "Zed");
        assert_eq!(trip.riders(), &["B".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_apply_preset_invalid_index() {
        let config = config();
        let mut trip = Trip::new(Slot::MondayMorning, config.roster());
        assert!(matches!(
            trip.apply_preset(&config, 5),
            Err(CarpoolError::InvalidPresetIndex { .. })
        ));
        assert!(!trip.has_riders());
    }
}
