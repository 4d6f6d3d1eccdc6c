//! Core data models for the carpool calculator
//!
//! This module contains the balance-accounting model: participants and their
//! roster, trips, weeks and the carpool that aggregates them.

pub mod amount;
pub mod balance;
pub mod carpool;
pub mod carpool_config;
pub mod roster;
pub mod slot;
pub mod trip;
pub mod week;

pub use amount::Amount;
pub use balance::Balance;
pub use carpool::Carpool;
pub use carpool_config::{CarpoolConfig, Preset};
pub use roster::Roster;
pub use slot::Slot;
pub use trip::{PresetOutcome, Trip};
pub use week::Week;
