//! Error types for Sherpa operations.
//!
//! This module defines [`SherpaError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SherpaError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SherpaError::Other`) for unexpected errors
//! - All failures are terminal for the invocation; there are no retries

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Sherpa operations.
#[derive(Debug, Error)]
pub enum SherpaError {
    /// App configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the app configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A toolchain invocation ran and exited with a non-zero status.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A child process could not be started at all.
    #[error("Failed to run {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Sherpa operations.
pub type Result<T> = std::result::Result<T, SherpaError>;
