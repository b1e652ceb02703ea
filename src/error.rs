//! Invocation-level error types.
//!
//! Only failures that end the whole run live here. Per-file and
//! per-document problems are recorded in the run summary instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a validation run.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The input path is neither a file nor a directory
    #[error("provided path is neither a file nor a directory: {}", .0.display())]
    PathNotFound(PathBuf),

    /// `--type` named a kind without a rule set
    #[error(
        "unsupported resource type '{0}' (expected one of: pod, deployment, service, ingress, pv, pvc, statefulset, daemonset, storageclass, all)"
    )]
    UnsupportedKind(String),

    /// The reporter could not write its output
    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Result type alias for validator operations
pub type Result<T> = std::result::Result<T, ValidatorError>;
