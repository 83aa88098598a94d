//! Provider-specific error types.

use thiserror::Error;

/// Failure of a single provider call. Recorded inline in the report as its
/// display string; never aborts a scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("No API key provided")]
    MissingKey,

    #[error("Rate limited by {0}")]
    RateLimited(&'static str),

    #[error("{0} forbade the request (403)")]
    Forbidden(&'static str),

    #[error("Invalid endpoint {0}")]
    Endpoint(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Parse(&'static str),

    #[error("DNS lookup failed: {0}")]
    Dns(String),
}

impl ProviderError {
    pub fn request(source: impl std::fmt::Display) -> Self {
        Self::Request(source.to_string())
    }

    pub fn invalid_response(source: impl std::fmt::Display) -> Self {
        Self::InvalidResponse(source.to_string())
    }
}
