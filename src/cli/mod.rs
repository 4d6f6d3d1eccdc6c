//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session and storage layers.

pub mod carpool;
pub mod settings;

pub use carpool::{handle_load_command, handle_new_command};
pub use settings::{
    handle_config_command, handle_init_command, handle_presets_command, handle_price_command,
};
