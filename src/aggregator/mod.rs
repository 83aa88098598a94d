//! Scan dispatch and provider aggregation.

mod email;
mod phone;

pub use email::split_address;
pub use phone::scan_phone;

use crate::config::ApiKeys;
use crate::error::InputError;
use crate::output::artifact_stem;
use crate::providers::{Provider, ProviderError, ProviderSet};
use crate::report::ScanReport;
use std::time::Instant;
use tracing::{debug, info};

/// What to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanRequest {
    Email { address: String },
    Phone { raw_number: String },
}

impl ScanRequest {
    pub fn email(address: impl Into<String>) -> Self {
        Self::Email {
            address: address.into(),
        }
    }

    pub fn phone(raw_number: impl Into<String>) -> Self {
        Self::Phone {
            raw_number: raw_number.into(),
        }
    }

    /// The address or number exactly as given.
    pub fn subject(&self) -> &str {
        match self {
            Self::Email { address } => address,
            Self::Phone { raw_number } => raw_number,
        }
    }

    /// File name stem for this scan's artifacts.
    pub fn artifact_stem(&self) -> String {
        artifact_stem(self)
    }
}

/// Runs scans against a fixed set of providers, one request at a time.
pub struct Aggregator {
    providers: ProviderSet,
}

impl Aggregator {
    pub fn new(providers: ProviderSet) -> Self {
        Self { providers }
    }

    /// Build a complete report for `request`. Only malformed input fails;
    /// provider failures are recorded in the report.
    pub fn scan(&self, request: &ScanRequest, keys: &ApiKeys) -> Result<ScanReport, InputError> {
        info!(request = ?request, "Starting scan");
        let report = match request {
            ScanRequest::Email { address } => ScanReport::Email(self.scan_email(address, keys)?),
            ScanRequest::Phone { raw_number } => ScanReport::Phone(scan_phone(raw_number)?),
        };
        info!(scan_type = report.scan_type(), "Scan completed");
        Ok(report)
    }
}

/// Query one provider, resolving its key from `keys`.
fn query<O>(
    provider: &dyn Provider<str, Output = O>,
    input: &str,
    keys: &ApiKeys,
) -> Result<O, ProviderError> {
    let key = provider.key_name().and_then(|name| keys.get(name));
    let started = Instant::now();
    let result = provider.lookup(input, key);
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match &result {
        Ok(_) => debug!(provider = provider.name(), elapsed_ms, "Provider call succeeded"),
        Err(e) => info!(
            provider = provider.name(),
            elapsed_ms,
            error = %e,
            "Provider call failed"
        ),
    }
    result
}
