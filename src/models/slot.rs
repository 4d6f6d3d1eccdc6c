//! Trip slots
//!
//! A week of commuting has ten fixed slots: a morning and an arvo trip on
//! each weekday. Slot names double as the column headers of the detailed
//! week records, so their spelling and order are part of the file format.

use std::fmt;
use std::str::FromStr;

use crate::error::{CarpoolError, CarpoolResult};

/// One of the ten weekly trip slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    MondayMorning,
    MondayArvo,
    TuesdayMorning,
    TuesdayArvo,
    WednesdayMorning,
    WednesdayArvo,
    ThursdayMorning,
    ThursdayArvo,
    FridayMorning,
    FridayArvo,
}

impl Slot {
    pub const COUNT: usize = 10;

    /// All slots in record column order
    pub const ALL: [Slot; Slot::COUNT] = [
        Slot::MondayMorning,
        Slot::MondayArvo,
        Slot::TuesdayMorning,
        Slot::TuesdayArvo,
        Slot::WednesdayMorning,
        Slot::WednesdayArvo,
        Slot::ThursdayMorning,
        Slot::ThursdayArvo,
        Slot::FridayMorning,
        Slot::FridayArvo,
    ];

    /// Display and column name
    pub const fn name(&self) -> &'static str {
        match self {
            Slot::MondayMorning => "Monday morning",
            Slot::MondayArvo => "Monday arvo",
            Slot::TuesdayMorning => "Tuesday morning",
            Slot::TuesdayArvo => "Tuesday arvo",
            Slot::WednesdayMorning => "Wednesday morning",
            Slot::WednesdayArvo => "Wednesday arvo",
            Slot::ThursdayMorning => "Thursday morning",
            Slot::ThursdayArvo => "Thursday arvo",
            Slot::FridayMorning => "Friday morning",
            Slot::FridayArvo => "Friday arvo",
        }
    }

    /// Position in [`Slot::ALL`]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Look up a slot by its name (case-insensitive)
    pub fn from_name(name: &str) -> CarpoolResult<Slot> {
        let name = name.trim();
        Slot::ALL
            .iter()
            .copied()
            .find(|slot| slot.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CarpoolError::UnknownSlot(name.to_string()))
    }

    /// Slot names in column order
    pub fn names() -> impl Iterator<Item = &'static str> {
        Slot::ALL.iter().map(|slot| slot.name())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Slot {
    type Err = CarpoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_index() {
        for (i, slot) in Slot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_names() {
        let names: Vec<&str> = Slot::names().collect();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "Monday morning");
        assert_eq!(names[9], "Friday arvo");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Slot::from_name("tuesday ARVO").unwrap(), Slot::TuesdayArvo);
        assert_eq!("Friday morning".parse::<Slot>().unwrap(), Slot::FridayMorning);
        assert!(matches!(
            Slot::from_name("Saturday morning"),
            Err(CarpoolError::UnknownSlot(_))
        ));
    }
}
