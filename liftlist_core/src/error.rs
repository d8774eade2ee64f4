//! Error types for the liftlist_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for liftlist_core operations
///
/// The reducer itself never fails; these errors come from the boundary
/// (configuration, user input, serialized actions).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Unknown muscle group or filter name
    #[error("Unknown muscle group: '{0}'")]
    InvalidFilter(String),

    /// Unknown view name
    #[error("Unknown view: '{0}' (expected 'library' or 'workout')")]
    InvalidView(String),

    /// Value outside its allowed range
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed input line or command
    #[error("Parse error: {0}")]
    Parse(String),
}
