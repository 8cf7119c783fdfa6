//! Custom error types for the booking server
//!
//! Provides structured error handling with context for startup failures.
//! Request-level failures travel as `anyhow::Error` through the storage
//! layer and are mapped to HTTP responses in the handlers.

use std::fmt;

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Missing required environment variable
    MissingRequired { field: String },

    /// Environment variable present but unusable
    InvalidValue { field: String, reason: String },
}

/// Storage error variants
#[derive(Debug)]
pub enum StoreError {
    /// Connection to MongoDB failed
    ConnectionFailed { reason: String },

    /// Connectivity check against the target database failed
    PingFailed { database: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingRequired { field } => {
                write!(f, "Missing required environment variable: {}", field)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::ConnectionFailed { reason } => {
                write!(f, "MongoDB connection failed: {}", reason)
            }
            StoreError::PingFailed { database, reason } => {
                write!(f, "Ping against database '{}' failed: {}", database, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for StoreError {}
