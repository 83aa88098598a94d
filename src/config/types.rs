//! Settings types.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OUTPUT_DIR: &str = "reports";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings shared by every scan in a process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory that receives the JSON and text artifacts.
    pub output_dir: PathBuf,
    /// Per-call latency bound for HTTP and DNS lookups.
    pub timeout_secs: u64,
    /// Nameserver to query instead of the system resolver.
    pub dns_server: Option<SocketAddr>,
    pub endpoints: Endpoints,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            dns_server: None,
            endpoints: Endpoints::default(),
        }
    }
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Base URLs of the HTTP signal sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub breachdirectory: String,
    pub emailrep: String,
    pub gravatar: String,
    pub rdap: String,
    pub abuseipdb: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            breachdirectory: "https://breachdirectory.org/api".to_string(),
            emailrep: "https://emailrep.io/".to_string(),
            gravatar: "https://www.gravatar.com/avatar/".to_string(),
            rdap: "https://rdap.org/domain/".to_string(),
            abuseipdb: "https://api.abuseipdb.com/api/v2/check".to_string(),
        }
    }
}

impl Endpoints {
    /// Point every endpoint at the same base, used to simulate an outage.
    pub fn all(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            breachdirectory: format!("{}/api", base),
            emailrep: format!("{}/", base),
            gravatar: format!("{}/avatar/", base),
            rdap: format!("{}/domain/", base),
            abuseipdb: format!("{}/api/v2/check", base),
        }
    }
}
