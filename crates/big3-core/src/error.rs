//! Core error types for big3-core.
//!
//! Nothing in this crate is fatal to the process. Configuration and catalog
//! failures degrade to defaults at the call sites that own them; these types
//! exist so callers can decide how loudly to degrade.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for big3-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Exercise catalog errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Rejected sequencer commands
    #[error("Sequencer error: {0}")]
    Sequencer(#[from] SequencerError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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

    /// Value could not be coerced into the field's type
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Dotted key does not name a configuration field
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// The configuration as a whole breaks a workout invariant
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Out of bounds
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: String,
        index: usize,
        len: usize,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Two exercises share an id
    #[error("Duplicate exercise id: {0}")]
    DuplicateId(String),
}

/// Exercise catalog errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors for commands the sequencer refuses outright.
///
/// Commands that are merely invalid in the current phase are no-ops, not
/// errors; only caller contract violations land here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequencerError {
    #[error("Position set {set}, exercise {exercise} is outside the workout ({sets} sets x {exercises} exercises)")]
    PositionOutOfRange {
        set: usize,
        exercise: usize,
        sets: usize,
        exercises: usize,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
