//! EmailRep.io reputation lookup.

use super::http::endpoint_url;
use super::{HttpClient, Provider, ProviderError};
use crate::config::EMAILREP_KEY;
use crate::report::Reputation;
use serde_json::Value;

pub struct EmailRep {
    http: HttpClient,
    base_url: String,
}

impl EmailRep {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_reputation(body: &Value) -> Reputation {
    let details = body.get("details");
    let lookup = |field: &str| {
        details
            .and_then(|d| d.get(field))
            .or_else(|| body.get(field))
    };

    Reputation {
        reputation: body
            .get("reputation")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string(),
        disposable: lookup("disposable")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        badges: string_list(lookup("badges")),
    }
}

impl Provider<str> for EmailRep {
    type Output = Reputation;

    fn name(&self) -> &'static str {
        "emailrep"
    }

    fn key_name(&self) -> Option<&'static str> {
        Some(EMAILREP_KEY)
    }

    fn lookup(&self, email: &str, key: Option<&str>) -> Result<Reputation, ProviderError> {
        let url = endpoint_url(&self.base_url, email)?;
        let mut request = self.http.get(url)?;
        if let Some(key) = key {
            request = request.header("Key", key);
        }
        let response = self.http.send(request)?;

        match response.status().as_u16() {
            200 => {}
            429 => return Err(ProviderError::RateLimited("EmailRep.io")),
            code => return Err(ProviderError::Status(code)),
        }

        let body: Value = response.json().map_err(ProviderError::invalid_response)?;
        Ok(parse_reputation(&body))
    }
}
