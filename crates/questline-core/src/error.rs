//! Core error types for questline-core.
//!
//! This module defines the error hierarchy using thiserror. The scoring
//! functions themselves are total and never fail; errors only arise from
//! the storage and configuration layers.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for questline-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open database connection
    #[error("Failed to open stats database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
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

    /// Missing required configuration key
    #[error("Missing required configuration key: {0}")]
    MissingKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
