//! Carpool - interactive calculator for splitting weekly carpool costs
//!
//! Every trip has a flat price (fuel plus toll). Riders split it with the
//! driver in equal shares; the driver's share is never reimbursed. Trips are
//! grouped into weeks of ten slots (Monday to Friday, morning and arvo) and
//! weeks add up to a carpool total that can be saved as a bundle of CSV
//! records and loaded back.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Application directory and user settings
//! - `error`: Custom error types
//! - `models`: Balances, trips, weeks and the carpool
//! - `storage`: CSV record store, typed records and the bundle layout
//! - `services`: Date parsing and bundle save/load
//! - `session`: The interactive prompt loop
//! - `display`: Colored messages and tables
//! - `cli`: Command handlers for the `carpool` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use carpool::config::{CarpoolPaths, Settings};
//! use carpool::models::Carpool;
//!
//! let paths = CarpoolPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let carpool = Carpool::new(settings.carpool_config()?);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{CarpoolError, CarpoolResult};
