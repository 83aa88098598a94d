//! Settings file errors.

use std::path::PathBuf;

/// Syntax of a settings file, chosen by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Toml,
    Yaml,
    Json,
}

impl std::fmt::Display for SettingsFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toml => write!(f, "TOML"),
            Self::Yaml => write!(f, "YAML"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Settings file {} has unsupported extension '{extension}' (use .toml, .yaml, .yml or .json)", .path.display())]
    Unsupported { path: PathBuf, extension: String },

    #[error("Cannot read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {format} in settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        format: SettingsFormat,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
