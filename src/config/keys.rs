//! API key store.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use serde_json::Value;
use tracing::{debug, warn};

pub const DEFAULT_KEYS_PATH: &str = "config/keys.json";

pub const EMAILREP_KEY: &str = "emailrep_key";
pub const ABUSEIPDB_KEY: &str = "abuseipdb_key";

/// Named API keys, read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiKeys {
    keys: HashMap<String, String>,
}

impl ApiKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load keys from a JSON object of strings.
    ///
    /// A missing or invalid file is never fatal: it yields an empty key set
    /// and a warning, and key-dependent providers report a missing key.
    /// Entries whose value is not a string are skipped on their own.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "{} not found. API-dependent features will be skipped.",
                    path.display()
                );
                return Self::default();
            }
            Err(e) => {
                warn!(error = %e, "Failed to read {}", path.display());
                return Self::default();
            }
        };

        let entries = match serde_json::from_str::<HashMap<String, Value>>(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "{} contains invalid JSON.", path.display());
                return Self::default();
            }
        };

        let keys: HashMap<String, String> = entries
            .into_iter()
            .filter_map(|(name, value)| match value {
                Value::String(key) => Some((name, key)),
                other => {
                    warn!(key = %name, value = %other, "Skipping non-string API key entry");
                    None
                }
            })
            .collect();
        debug!(count = keys.len(), path = %path.display(), "Loaded API keys");
        Self { keys }
    }

    pub fn with_key(mut self, name: &str, value: &str) -> Self {
        self.keys.insert(name.to_string(), value.to_string());
        self
    }

    /// Look up a key; blank values count as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.keys
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
