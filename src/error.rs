//! Custom error types for the carpool calculator
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for carpool operations
#[derive(Error, Debug)]
pub enum CarpoolError {
    /// Name is not part of the configured roster
    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    /// Partial name matches more than one roster entry
    #[error("'{input}' matches more than one participant: {}", .candidates.join(", "))]
    AmbiguousParticipant {
        input: String,
        candidates: Vec<String>,
    },

    /// Preset index outside 1..=available
    #[error("Invalid preset index {index}: choose between 1 and {available}")]
    InvalidPresetIndex { index: usize, available: usize },

    /// Slot name is not one of the ten trip slots
    #[error("Unknown trip slot: {0}")]
    UnknownSlot(String),

    /// Answer to a date confirmation was neither yes nor no
    #[error("Invalid answer: '{0}' (expected Y or N)")]
    InvalidDateResponse(String),

    /// The user rejected the parsed date
    #[error("Date not confirmed")]
    DateNotConfirmed,

    /// The date parser could not make sense of the input
    #[error("Could not parse date: '{0}'")]
    UnparseableDate(String),

    /// Saving requires at least one week to bound the bundle name
    #[error("Cannot save an empty carpool: add at least one week first")]
    EmptyCarpoolOnSave,

    /// Two weeks would share the same date (and the same record file)
    #[error("A week dated {0} has already been added")]
    DuplicateWeek(NaiveDate),

    /// Two balances were built over different rosters
    #[error("Balances do not share the same participants")]
    RosterMismatch,

    /// A stored record failed schema validation
    #[error("Invalid record {}: {message}", .path.display())]
    Schema { path: PathBuf, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage layout errors (missing bundle, missing records)
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl CarpoolError {
    /// Create a schema error for a stored record
    pub fn schema(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Errors an interactive prompt loop reports and then re-prompts on
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownParticipant(_)
                | Self::AmbiguousParticipant { .. }
                | Self::InvalidPresetIndex { .. }
                | Self::UnknownSlot(_)
                | Self::InvalidDateResponse(_)
                | Self::DateNotConfirmed
                | Self::UnparseableDate(_)
                | Self::DuplicateWeek(_)
                | Self::Validation(_)
        )
    }
}

impl From<std::io::Error> for CarpoolError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for CarpoolError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for CarpoolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for carpool operations
pub type CarpoolResult<T> = Result<T, CarpoolError>;
