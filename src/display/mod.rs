//! Display formatting for terminal output
//!
//! Provides colored messages and tables for balances, weeks and settings.

pub mod messages;
pub mod tables;

pub use messages::{error, heading, success, warning, MessageKind};
pub use tables::{
    format_balance, format_carpool_summary, format_presets, format_price_breakdown, format_trips,
};
