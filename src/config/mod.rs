//! Configuration: optional settings file plus the API key store.

mod error;
mod keys;
mod loading;
mod types;

pub use error::{ConfigError, SettingsFormat};
pub use keys::{ABUSEIPDB_KEY, ApiKeys, DEFAULT_KEYS_PATH, EMAILREP_KEY};
pub use types::{DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECS, Endpoints, Settings};
