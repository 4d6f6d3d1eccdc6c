//! Immutable accounting rules for a carpool session
//!
//! Built once from the user's settings and shared by every trip, week and
//! carpool calculation.

use crate::error::{CarpoolError, CarpoolResult};

use super::amount::Amount;
use super::roster::Roster;

/// A named shortcut for a common set of riders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub members: Vec<String>,
}

impl Preset {
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Members joined for display
    pub fn label(&self) -> String {
        self.members.join(", ")
    }
}

/// Roster, flat trip price and presets
#[derive(Debug, Clone)]
pub struct CarpoolConfig {
    roster: Roster,
    trip_price: Amount,
    presets: Vec<Preset>,
}

impl CarpoolConfig {
    pub fn new(roster: Roster, trip_price: Amount, presets: Vec<Preset>) -> CarpoolResult<Self> {
        if !trip_price.is_valid_share() {
            return Err(CarpoolError::Config(format!(
                "Trip price must be a non-negative number, got {}",
                trip_price.value()
            )));
        }

        Ok(Self {
            roster,
            trip_price,
            presets,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Flat price of a single trip, shared by the riders and the driver
    pub fn trip_price(&self) -> Amount {
        self.trip_price
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Look up a preset by its 1-based index
    pub fn preset(&self, index: usize) -> CarpoolResult<&Preset> {
        index
            .checked_sub(1)
            .and_then(|i| self.presets.get(i))
            .ok_or(CarpoolError::InvalidPresetIndex {
                index,
                available: self.presets.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CarpoolConfig {
        CarpoolConfig::new(
            Roster::new(["A", "B", "C"]).unwrap(),
            Amount::new(25.0),
            vec![Preset::new(["A", "B"]), Preset::new(["C"])],
        )
        .unwrap()
    }

    #[test]
    fn test_preset_lookup_is_one_based() {
        let config = config();
        assert_eq!(config.preset(1).unwrap().members, vec!["A", "B"]);
        assert_eq!(config.preset(2).unwrap().label(), "C");
    }

    #[test]
    fn test_preset_out_of_range() {
        let config = config();
        assert!(matches!(
            config.preset(0),
            Err(CarpoolError::InvalidPresetIndex { index: 0, available: 2 })
        ));
        assert!(matches!(
            config.preset(3),
            Err(CarpoolError::InvalidPresetIndex { index: 3, available: 2 })
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        let result = CarpoolConfig::new(
            Roster::new(["A"]).unwrap(),
            Amount::new(-1.0),
            Vec::new(),
        );
        assert!(matches!(result, Err(CarpoolError::Config(_))));
    }
}
