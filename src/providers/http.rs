//! Shared blocking HTTP client.

use super::ProviderError;
use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::warn;

pub const USER_AGENT: &str = "MailRecon";

/// One client for every HTTP provider, with a fixed per-call timeout.
///
/// A client that fails to build is kept as an error so that each provider
/// reports it instead of the whole scan failing.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Result<Client, String>,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Self {
        let inner = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                warn!(error = %e, "Failed to build HTTP client");
                e.to_string()
            });
        Self { inner }
    }

    pub fn get(&self, url: impl reqwest::IntoUrl) -> Result<RequestBuilder, ProviderError> {
        match &self.inner {
            Ok(client) => Ok(client.get(url)),
            Err(e) => Err(ProviderError::Request(e.clone())),
        }
    }

    /// Send a request once. No retries.
    pub fn send(&self, request: RequestBuilder) -> Result<Response, ProviderError> {
        request.send().map_err(ProviderError::request)
    }
}

/// `base` with `segment` appended as one percent-encoded path segment.
///
/// `base` may end with or without a slash; `/`, `?` and `#` inside `segment`
/// never change the request target.
pub fn endpoint_url(base: &str, segment: &str) -> Result<Url, ProviderError> {
    let mut url = Url::parse(base).map_err(|e| ProviderError::Endpoint(format!("{}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| ProviderError::Endpoint(format!("{}: cannot take a path", base)))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}
