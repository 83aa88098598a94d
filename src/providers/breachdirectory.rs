//! BreachDirectory breach lookup.

use super::{HttpClient, Provider, ProviderError};
use serde_json::Value;

pub struct BreachDirectory {
    http: HttpClient,
    base_url: String,
}

impl BreachDirectory {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

/// Entries of the `response` list; non-string entries keep their JSON text.
fn parse_breaches(body: &Value) -> Vec<String> {
    body.get("response")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| match entry {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

impl Provider<str> for BreachDirectory {
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        "breachdirectory"
    }

    fn lookup(&self, email: &str, _key: Option<&str>) -> Result<Vec<String>, ProviderError> {
        let request = self.http.get(&self.base_url)?.query(&[("email", email)]);
        let response = self.http.send(request)?;

        match response.status().as_u16() {
            200 => {}
            403 => return Err(ProviderError::Forbidden("BreachDirectory")),
            code => return Err(ProviderError::Status(code)),
        }

        let body: Value = response.json().map_err(ProviderError::invalid_response)?;
        Ok(parse_breaches(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::http::testing::{OneShot, UNREACHABLE, client};
    use serde_json::json;

    #[test]
    fn test_parse_breaches_strings() {
        let body = json!({"success": true, "response": ["LinkedIn", "Adobe"]});
        assert_eq!(parse_breaches(&body), vec!["LinkedIn", "Adobe"]);
    }

    #[test]
    fn test_parse_breaches_objects_keep_json_text() {
        let body = json!({"response": [{"sources": ["Canva"]}]});
        assert_eq!(parse_breaches(&body), vec![r#"{"sources":["Canva"]}"#]);
    }

    #[test]
    fn test_parse_breaches_missing_response() {
        assert!(parse_breaches(&json!({"success": false})).is_empty());
    }

    #[test]
    fn test_unreachable_endpoint() {
        let provider = BreachDirectory::new(client(), format!("{}/api", UNREACHABLE));
        let err = provider.lookup("test@example.com", None).unwrap_err();
        assert!(matches!(err, ProviderError::Request(_)));
    }

    #[test]
    fn test_lookup_success() {
        let server = OneShot::new(200, r#"{"success": true, "response": ["LinkedIn", "Adobe"]}"#);
        let provider = BreachDirectory::new(client(), format!("{}/api", server.base));

        let breaches = provider.lookup("test@example.com", None).unwrap();
        assert_eq!(breaches, vec!["LinkedIn", "Adobe"]);
        assert_eq!(
            server.request_line(),
            "get /api?email=test%40example.com http/1.1"
        );
    }

    #[test]
    fn test_forbidden() {
        let server = OneShot::new(403, "{}");
        let provider = BreachDirectory::new(client(), format!("{}/api", server.base));
        assert_eq!(
            provider.lookup("test@example.com", None).unwrap_err(),
            ProviderError::Forbidden("BreachDirectory")
        );
    }

    #[test]
    fn test_other_status() {
        let server = OneShot::new(503, "{}");
        let provider = BreachDirectory::new(client(), format!("{}/api", server.base));
        assert_eq!(
            provider.lookup("test@example.com", None).unwrap_err(),
            ProviderError::Status(503)
        );
    }
}
