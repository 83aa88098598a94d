//! AbuseIPDB confidence score lookup.

use super::{HttpClient, Provider, ProviderError};
use crate::config::ABUSEIPDB_KEY;
use crate::report::AbuseScore;
use serde_json::Value;

const MAX_AGE_DAYS: &str = "90";

pub struct AbuseIpDb {
    http: HttpClient,
    base_url: String,
}

impl AbuseIpDb {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

fn parse_abuse(body: &Value) -> AbuseScore {
    let data = &body["data"];
    AbuseScore {
        score: data["abuseConfidenceScore"]
            .as_u64()
            .and_then(|s| u32::try_from(s).ok())
            .unwrap_or(0),
        country_code: data["countryCode"].as_str().unwrap_or("").to_string(),
        domain: data["domain"].as_str().unwrap_or("").to_string(),
    }
}

impl Provider<str> for AbuseIpDb {
    type Output = AbuseScore;

    fn name(&self) -> &'static str {
        "abuseipdb"
    }

    fn key_name(&self) -> Option<&'static str> {
        Some(ABUSEIPDB_KEY)
    }

    fn lookup(&self, ip: &str, key: Option<&str>) -> Result<AbuseScore, ProviderError> {
        let key = key.ok_or(ProviderError::MissingKey)?;
        let request = self
            .http
            .get(&self.base_url)?
            .header("Key", key)
            .header("Accept", "application/json")
            .query(&[("ipAddress", ip), ("maxAgeInDays", MAX_AGE_DAYS)]);
        let response = self.http.send(request)?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(ProviderError::Status(status));
        }

        let body: Value = response.json().map_err(ProviderError::invalid_response)?;
        Ok(parse_abuse(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::http::testing::{OneShot, UNREACHABLE, client};
    use serde_json::json;

    #[test]
    fn test_parse_abuse() {
        let body = json!({
            "data": {
                "ipAddress": "118.25.6.39",
                "abuseConfidenceScore": 100,
                "countryCode": "CN",
                "domain": "tencent.com"
            }
        });
        let score = parse_abuse(&body);
        assert_eq!(score.score, 100);
        assert_eq!(score.country_code, "CN");
        assert_eq!(score.domain, "tencent.com");
    }

    #[test]
    fn test_parse_abuse_defaults() {
        let score = parse_abuse(&json!({}));
        assert_eq!(score.score, 0);
        assert_eq!(score.country_code, "");
        assert_eq!(score.domain, "");
    }

    #[test]
    fn test_missing_key_makes_no_request() {
        let provider = AbuseIpDb::new(client(), format!("{}/api/v2/check", UNREACHABLE));
        assert_eq!(
            provider.lookup("1.2.3.4", None).unwrap_err(),
            ProviderError::MissingKey
        );
    }

    #[test]
    fn test_unreachable_endpoint_with_key() {
        let provider = AbuseIpDb::new(client(), format!("{}/api/v2/check", UNREACHABLE));
        let err = provider.lookup("1.2.3.4", Some("key")).unwrap_err();
        assert!(matches!(err, ProviderError::Request(_)));
    }

    #[test]
    fn test_lookup_success() {
        let server = OneShot::new(
            200,
            r#"{"data": {"abuseConfidenceScore": 7, "countryCode": "US", "domain": "example.net"}}"#,
        );
        let provider = AbuseIpDb::new(client(), format!("{}/api/v2/check", server.base));

        let score = provider.lookup("1.2.3.4", Some("ab-key")).unwrap();
        assert_eq!(score.score, 7);
        assert_eq!(score.country_code, "US");

        let request = server.request();
        assert!(request.starts_with(
            "get /api/v2/check?ipaddress=1.2.3.4&maxageindays=90 http/1.1\r\n"
        ));
        assert!(request.contains("\r\nkey: ab-key\r\n"));
        assert!(request.contains("\r\naccept: application/json\r\n"));
    }

    #[test]
    fn test_lookup_status() {
        let server = OneShot::new(401, r#"{"errors": []}"#);
        let provider = AbuseIpDb::new(client(), format!("{}/api/v2/check", server.base));
        assert_eq!(
            provider.lookup("1.2.3.4", Some("bad-key")).unwrap_err(),
            ProviderError::Status(401)
        );
    }
}
