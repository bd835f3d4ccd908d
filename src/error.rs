//! Error types for jdkspan operations.
//!
//! This module defines [`JdkspanError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `JdkspanError` for errors that invalidate a whole package result
//!   (or the whole run)
//! - Probe and provisioning failures are recovered as booleans close to
//!   where they happen and never surface through this type
//! - Use `anyhow::Error` (via `JdkspanError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for jdkspan operations.
#[derive(Debug, Error)]
pub enum JdkspanError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Requested package coordinate is not in the configured list.
    #[error("Unknown package: {coordinate}")]
    UnknownPackage { coordinate: String },

    /// A JDK required for the current operation could not be provisioned.
    #[error("Failed to provision JDK {version}")]
    ProvisionFailed { version: String },

    /// A JDK identifier has no leading numeric release component.
    #[error("JDK identifier '{version}' has no numeric release component")]
    MalformedVersion { version: String },

    /// Shell command could not be spawned or waited on.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Results document could not be serialized.
    #[error("Failed to write results to {path}: {message}")]
    ReportWriteError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for jdkspan operations.
pub type Result<T> = std::result::Result<T, JdkspanError>;
