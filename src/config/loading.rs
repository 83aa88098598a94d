//! Settings loading functions.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::error::{ConfigError, SettingsFormat};
use super::types::Settings;

type SyntaxError = Box<dyn std::error::Error + Send + Sync>;

impl SettingsFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    fn parse(self, content: &str) -> Result<Settings, SyntaxError> {
        Ok(match self {
            Self::Toml => toml::from_str(content)?,
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
        })
    }
}

impl Settings {
    /// Load settings from a file. The extension picks the syntax and is
    /// checked before the file is read.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = SettingsFormat::from_path(path).ok_or_else(|| ConfigError::Unsupported {
            path: path.to_path_buf(),
            extension: path
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_default(),
        })?;

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = format.parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            format,
            source,
        })?;
        debug!(path = %path.display(), %format, "Loaded settings");
        Ok(settings)
    }

    /// Discover a settings file in `dir`.
    ///
    /// Search order:
    /// 1. `.mailrecon.toml`
    /// 2. `.mailrecon.yaml` / `.mailrecon.yml`
    /// 3. `.mailrecon.json`
    /// 4. Default settings
    pub fn discover(dir: &Path) -> Self {
        for filename in &[
            ".mailrecon.toml",
            ".mailrecon.yaml",
            ".mailrecon.yml",
            ".mailrecon.json",
        ] {
            let path = dir.join(filename);
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(settings) => return settings,
                Err(e) => warn!(error = %e, "Ignoring unreadable settings file"),
            }
        }

        Self::default()
    }

    /// Load from an explicit path when given, otherwise discover in `dir`.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Ok(Self::discover(dir)),
        }
    }
}
