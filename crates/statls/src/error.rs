//! Error types for listing, per-entry queries, configuration, and output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a whole collection run.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The directory itself could not be listed; no entry was queried.
    #[error("failed to list directory `{}`: {source}", path.display())]
    ListingFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure of the metadata query for a single listed entry.
///
/// Stored in the entry's result slot instead of aborting the batch.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct MetadataQueryFailed {
    pub path: PathBuf,
    pub kind: io::ErrorKind,
    pub message: String,
}

impl MetadataQueryFailed {
    pub fn from_io(path: PathBuf, error: &io::Error) -> Self {
        Self {
            path,
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Invalid runtime configuration taken from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported output format `{value}` in {variable} (expected `text` or `json`)")]
    UnknownFormat {
        variable: &'static str,
        value: String,
    },
    #[error("{variable} must be a positive integer, got `{value}`")]
    InvalidLimit {
        variable: &'static str,
        value: String,
    },
}

/// Top-level error of one `statls` invocation.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Collect(#[from] CollectError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
