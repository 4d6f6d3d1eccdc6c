//! User settings for the carpool calculator
//!
//! Holds the roster, the inputs the per-trip price is derived from, and the
//! rider presets. Missing fields fall back to their defaults so older or
//! hand-edited files keep loading.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::CarpoolPaths;
use crate::error::{CarpoolError, CarpoolResult};
use crate::models::{Amount, CarpoolConfig, Preset, Roster};

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Everyone who may ride, in display order
    #[serde(default = "default_participants")]
    pub participants: Vec<String>,

    /// One-way trip distance in km
    #[serde(default = "default_trip_distance")]
    pub trip_distance_km: f64,

    /// Fuel price per litre
    #[serde(default = "default_fuel_price")]
    pub fuel_price_per_litre: f64,

    /// Car consumption in L/100km
    #[serde(default = "default_consumption")]
    pub consumption_l_per_100km: f64,

    /// Toll paid on every trip
    #[serde(default = "default_toll")]
    pub toll_per_trip: f64,

    /// Rider presets, referenced as P1, P2, ... while entering trips
    #[serde(default = "default_presets")]
    pub presets: Vec<Vec<String>>,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_participants() -> Vec<String> {
    ["Neerav", "Brock", "Tony", "Juan"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_trip_distance() -> f64 {
    19.0
}

fn default_fuel_price() -> f64 {
    2.1
}

fn default_consumption() -> f64 {
    8.2
}

fn default_toll() -> f64 {
    6.5
}

fn default_presets() -> Vec<Vec<String>> {
    [
        vec!["Brock", "Tony"],
        vec!["Brock", "Tony", "Neerav"],
        vec!["Brock", "Tony", "Juan"],
    ]
    .into_iter()
    .map(|preset| preset.into_iter().map(String::from).collect())
    .collect()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            participants: default_participants(),
            trip_distance_km: default_trip_distance(),
            fuel_price_per_litre: default_fuel_price(),
            consumption_l_per_100km: default_consumption(),
            toll_per_trip: default_toll(),
            presets: default_presets(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use the defaults if the file doesn't exist
    pub fn load_or_create(paths: &CarpoolPaths) -> CarpoolResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CarpoolError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CarpoolError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CarpoolPaths) -> CarpoolResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CarpoolError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            CarpoolError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Check the roster and price inputs
    pub fn validate(&self) -> CarpoolResult<()> {
        Roster::new(self.participants.iter().cloned())
            .map_err(|e| CarpoolError::Config(e.to_string()))?;

        let pricing = [
            ("trip_distance_km", self.trip_distance_km),
            ("fuel_price_per_litre", self.fuel_price_per_litre),
            ("consumption_l_per_100km", self.consumption_l_per_100km),
            ("toll_per_trip", self.toll_per_trip),
        ];
        for (field, value) in pricing {
            if !value.is_finite() || value < 0.0 {
                return Err(CarpoolError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    field, value
                )));
            }
        }

        for (idx, preset) in self.presets.iter().enumerate() {
            if preset.is_empty() || preset.iter().any(|m| m.trim().is_empty()) {
                return Err(CarpoolError::Config(format!(
                    "Preset {} has an empty member list or a blank name",
                    idx + 1
                )));
            }
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(CarpoolError::Config(format!(
                "Invalid date_format: '{}'",
                self.date_format
            )));
        }

        Ok(())
    }

    /// Fuel cost of one trip
    pub fn fuel_cost_per_trip(&self) -> f64 {
        self.consumption_l_per_100km / 100.0 * self.fuel_price_per_litre * self.trip_distance_km
    }

    /// Flat price of one trip: fuel plus toll
    pub fn trip_price(&self) -> Amount {
        Amount::new(self.fuel_cost_per_trip() + self.toll_per_trip)
    }

    /// Build the accounting rules for a session
    pub fn carpool_config(&self) -> CarpoolResult<CarpoolConfig> {
        self.validate()?;
        let roster = Roster::new(self.participants.iter().cloned())?;
        let presets = self
            .presets
            .iter()
            .map(|members| Preset::new(members.iter().cloned()))
            .collect();
        CarpoolConfig::new(roster, self.trip_price(), presets)
    }
}
