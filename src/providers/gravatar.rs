//! Gravatar avatar presence.

use super::http::endpoint_url;
use super::{HttpClient, Provider, ProviderError};
use sha2::{Digest, Sha256};

pub struct Gravatar {
    http: HttpClient,
    base_url: String,
}

impl Gravatar {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

/// Gravatar accepts SHA-256 of the trimmed, lower-cased address.
pub fn avatar_hash(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.trim().to_lowercase().as_bytes());
    hex::encode(hasher.finalize())
}

impl Provider<str> for Gravatar {
    type Output = bool;

    fn name(&self) -> &'static str {
        "gravatar"
    }

    fn lookup(&self, email: &str, _key: Option<&str>) -> Result<bool, ProviderError> {
        let url = endpoint_url(&self.base_url, &avatar_hash(email))?;
        let request = self.http.get(url)?.query(&[("d", "404")]);
        let response = self.http.send(request)?;
        Ok(response.status().as_u16() != 404)
    }
}
