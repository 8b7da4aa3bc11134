//! Core error types for lifepulse-core.
//!
//! Content selection and milestone evaluation are total and never fail; every
//! error here comes from storage, configuration or user-supplied input.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

use crate::mood::{EnergyPhase, Feeling};

/// Core error type for lifepulse-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// State or log file could not be read or written
    #[error("Storage unavailable at {path}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// State file exists but does not parse
    #[error("Malformed check-in state in {path}: {source}")]
    MalformedState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Same-day repeat check-ins are disabled and one already exists
    #[error("Already checked in on {date}")]
    AlreadyCheckedIn { date: NaiveDate },

    /// Serialization errors outside of state loading
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoreError::StorageUnavailable {
            path: path.into(),
            source,
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A content table does not cover every feeling/phase combination
    #[error("Content table '{table}' is missing {} combination(s): {}", missing.len(), format_missing(missing))]
    IncompleteTable {
        table: String,
        missing: Vec<(Feeling, EnergyPhase)>,
    },

    /// A phase-only table does not cover every phase
    #[error("Content table '{table}' is missing phase(s): {missing:?}")]
    IncompletePhaseTable {
        table: String,
        missing: Vec<EnergyPhase>,
    },

    /// Name did not match any known feeling
    #[error("Unknown feeling '{0}' (expected one of: energetic, tired, stressed, inspired, calm)")]
    UnknownFeeling(String),

    /// Name did not match any known energy phase
    #[error("Unknown energy phase '{0}' (expected one of: build, create, deepen, rest)")]
    UnknownPhase(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

fn format_missing(missing: &[(Feeling, EnergyPhase)]) -> String {
    missing
        .iter()
        .map(|(f, p)| format!("{f}+{p}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
