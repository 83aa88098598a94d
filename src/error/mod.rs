//! Error types for mailrecon.
//!
//! Only two kinds of failure end a run:
//! - `InputError`: the scan subject is malformed, raised before any lookup
//! - `ReconError::Persistence`: a report artifact could not be written
//!
//! Per-provider failures live in [`crate::providers::ProviderError`] and are
//! recorded inside the report instead of being propagated.

mod context;

pub use context::IoOperation;

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// The scan subject could not be interpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Malformed email address: {0}")]
    MalformedInput(String),

    #[error("{reason}: {input}")]
    InvalidFormat { input: String, reason: &'static str },
}

#[derive(Error, Debug)]
pub enum ReconError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Failed to {operation} {path}: {source}")]
    Persistence {
        path: PathBuf,
        operation: IoOperation,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ReconError {
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            operation: IoOperation::Write,
            source,
        }
    }

    pub fn create_dir_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            operation: IoOperation::CreateDir,
            source,
        }
    }

    /// Whether this error came from the scan subject rather than the environment.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

pub type Result<T> = std::result::Result<T, ReconError>;
