//! Configuration module for the carpool calculator
//!
//! This module provides configuration management including:
//! - application directory resolution
//! - roster, pricing and preset settings

pub mod paths;
pub mod settings;

pub use paths::CarpoolPaths;
pub use settings::Settings;
