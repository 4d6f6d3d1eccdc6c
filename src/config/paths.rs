//! Path management for the carpool calculator
//!
//! ## Path Resolution Order
//!
//! 1. `CARPOOL_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux and macOS): `$XDG_CONFIG_HOME/carpool-cli` if set,
//!    otherwise `~/.config/carpool-cli`
//! 3. Windows: `%APPDATA%\carpool-cli`

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::CarpoolError;

/// Environment variable overriding the application directory
pub const DATA_DIR_ENV: &str = "CARPOOL_CLI_DATA_DIR";

const APP_DIR_NAME: &str = "carpool-cli";

/// Manages all paths used by the carpool calculator
#[derive(Debug, Clone)]
pub struct CarpoolPaths {
    /// Base directory for settings and saved bundles
    base_dir: PathBuf,
}

impl CarpoolPaths {
    /// Create a new CarpoolPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, CarpoolError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create CarpoolPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default folder saved bundles are written to
    pub fn bundles_dir(&self) -> PathBuf {
        self.base_dir.join("bundles")
    }

    /// Ensure the base and bundle directories exist
    pub fn ensure_directories(&self) -> Result<(), CarpoolError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CarpoolError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.bundles_dir())
            .map_err(|e| CarpoolError::Io(format!("Failed to create bundles directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default application directory on Unix
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CarpoolError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| CarpoolError::Config("Could not determine the home directory".into()))?;
    let xdg = std::env::var("XDG_CONFIG_HOME").ok();
    Ok(unix_config_base(xdg.as_deref(), dirs.home_dir()).join(APP_DIR_NAME))
}

/// Resolve the default application directory on Windows
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CarpoolError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| CarpoolError::Config("Could not determine the APPDATA directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}

/// `$XDG_CONFIG_HOME` when set and non-empty, otherwise `~/.config`
#[cfg_attr(windows, allow(dead_code))]
fn unix_config_base(xdg_config_home: Option<&str>, home: &Path) -> PathBuf {
    match xdg_config_home {
        Some(xdg) if !xdg.trim().is_empty() => PathBuf::from(xdg),
        _ => home.join(".config"),
    }
}
