//! Error types and handling for kbase core

use thiserror::Error;

/// Result type alias for kbase operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for kbase core
#[derive(Error, Debug)]
pub enum Error {
    /// Preference loading and validation errors
    #[error("Preferences error: {0}")]
    Preferences(#[from] PreferencesError),

    /// Catalog loading errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A column was addressed by a name the table does not have
    #[error("Unknown column: {name}")]
    UnknownColumn { name: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Preference-specific errors
#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("Invalid value for preference '{key}': {value}")]
    InvalidValue { key: String, value: String },

    #[error("Malformed preferences file {path}: {message}")]
    Malformed { path: String, message: String },
}

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Data file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid catalog data: {message}")]
    InvalidData { message: String },
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
