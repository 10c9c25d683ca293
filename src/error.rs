//! Error types for windeploy operations.
//!
//! This module defines [`DeployError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DeployError` for domain-specific errors that need distinct handling
//! - A failed package install is *not* an error value: it is reported to the
//!   user and the remaining installs continue
//! - User cancellation is `Cancelled` and maps to a successful exit

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for windeploy operations.
#[derive(Debug, Error)]
pub enum DeployError {
    /// Manifest file not found at the given path.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse the JSON manifest.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// A package references a manager name outside the closed set.
    #[error("Unknown package manager: {name}")]
    UnknownManager { name: String },

    /// Relaunching the process with elevated rights failed.
    #[error("Failed to request administrator rights: {message}")]
    ElevationFailed { message: String },

    /// Shell command could not be started or failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The final bulk upgrade of an unattended run failed.
    #[error("Bulk upgrade failed with exit code {code:?}")]
    BulkUpgradeFailed { code: Option<i32> },

    /// The user interrupted a prompt (Esc / Ctrl-C).
    #[error("Operation cancelled by user")]
    Cancelled,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for windeploy operations.
pub type Result<T> = std::result::Result<T, DeployError>;
