//! Service layer for the carpool calculator
//!
//! Collaborators the core model leans on: date parsing for typed-in week
//! dates, and saving/loading carpool bundles through a record store.

pub mod bundle;
pub mod date_parser;

pub use bundle::BundleService;
pub use date_parser::{DateParser, FlexibleDateParser};
