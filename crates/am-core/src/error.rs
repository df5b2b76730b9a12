//! Error types for am-core

use thiserror::Error;

/// Core error type for Arthur's Motors
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// E003: Fixture file not found
    #[error("[E003] Fixture file not found: {path}")]
    FixtureNotFound { path: String },

    /// E004: Failed to parse a fixture file as JSON
    #[error("[E004] Failed to parse fixture {path}: {message}")]
    FixtureParseError { path: String, message: String },

    /// E005: Fixture file has the wrong shape
    #[error("[E005] Invalid fixture {path}: {reason}")]
    FixtureInvalid { path: String, reason: String },

    /// E006: IO error with file path context
    #[error("[E006] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
