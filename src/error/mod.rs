//! Error types and handling for autofetch
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`manifest`]: Manifest loading and validation errors
//! - [`fetch`]: Resource retrieval errors
//! - [`state`]: Durable flag store and registry errors
//! - [`config`]: Settings errors

pub mod config;
pub mod fetch;
pub mod manifest;
pub mod state;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for autofetch operations
#[derive(Error, Diagnostic, Debug)]
pub enum AutofetchError {
    // Manifest errors
    #[error("Manifest not found: {path}")]
    #[diagnostic(
        code(autofetch::manifest::not_found),
        help("Pass --manifest or set AUTOFETCH_MANIFEST to the unit's metadata.yaml")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to read manifest: {path}: {reason}")]
    #[diagnostic(code(autofetch::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(code(autofetch::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Invalid manifest: {message}")]
    #[diagnostic(code(autofetch::manifest::invalid))]
    ManifestInvalid { message: String },

    #[error("Resource '{name}' is not declared in the manifest")]
    #[diagnostic(
        code(autofetch::manifest::not_declared),
        help("Run 'autofetch list --all' to see declared resources")
    )]
    ResourceNotDeclared { name: String },

    #[error("Resource '{name}' is a {kind} resource, not a docker resource")]
    #[diagnostic(code(autofetch::manifest::not_docker))]
    ResourceNotDocker { name: String, kind: String },

    // Fetch errors
    #[error("Failed to fetch resource '{name}': {reason}")]
    #[diagnostic(
        code(autofetch::fetch::failed),
        help("The next 'autofetch run' retries the whole pass")
    )]
    FetchFailed { name: String, reason: String },

    #[error("Pending fetch failed for: {names}")]
    #[diagnostic(
        code(autofetch::fetch::pending_failed),
        help("Failed resources stay queued; run 'autofetch run' again to retry them")
    )]
    PendingFetchFailed { names: String },

    #[error("Invalid fetch command: {message}")]
    #[diagnostic(code(autofetch::fetch::invalid_command))]
    FetchCommandInvalid { message: String },

    // Flag store errors
    #[error("Failed to read state file: {path}: {reason}")]
    #[diagnostic(code(autofetch::state::read_failed))]
    StateReadFailed { path: String, reason: String },

    #[error("Failed to write state file: {path}: {reason}")]
    #[diagnostic(
        code(autofetch::state::write_failed),
        help("Completion cannot be recorded until the state directory is writable")
    )]
    StateWriteFailed { path: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(autofetch::config::invalid))]
    ConfigInvalid { message: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(autofetch::fs::io_error))]
    IoError { message: String },
}

/// Error taxonomy used by callers deciding how to report a failed pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Manifest,
    Fetch,
    FlagStore,
    Config,
    Io,
}

impl AutofetchError {
    /// Classify this error into its taxonomy bucket
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ManifestNotFound { .. }
            | Self::ManifestReadFailed { .. }
            | Self::ManifestParseFailed { .. }
            | Self::ManifestInvalid { .. }
            | Self::ResourceNotDeclared { .. }
            | Self::ResourceNotDocker { .. } => ErrorCategory::Manifest,
            Self::FetchFailed { .. }
            | Self::PendingFetchFailed { .. }
            | Self::FetchCommandInvalid { .. } => ErrorCategory::Fetch,
            Self::StateReadFailed { .. } | Self::StateWriteFailed { .. } => {
                ErrorCategory::FlagStore
            }
            Self::ConfigInvalid { .. } => ErrorCategory::Config,
            Self::IoError { .. } => ErrorCategory::Io,
        }
    }
}

impl From<std::io::Error> for AutofetchError {
    fn from(err: std::io::Error) -> Self {
        AutofetchError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AutofetchError {
    fn from(err: serde_yaml::Error) -> Self {
        AutofetchError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AutofetchError {
    fn from(err: serde_json::Error) -> Self {
        AutofetchError::StateReadFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AutofetchError>;
