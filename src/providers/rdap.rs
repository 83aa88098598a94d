//! Domain registration lookup over RDAP.

use super::http::endpoint_url;
use super::{HttpClient, Provider, ProviderError};
use crate::report::Registration;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

const UNPARSEABLE_DATE: &str = "unable to parse creation date";

pub struct Rdap {
    http: HttpClient,
    base_url: String,
}

impl Rdap {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RdapResponse {
    #[serde(default)]
    events: Vec<RdapEvent>,
    #[serde(default)]
    entities: Vec<RdapEntity>,
}

#[derive(Debug, Deserialize)]
struct RdapEvent {
    #[serde(rename = "eventAction")]
    event_action: String,
    #[serde(rename = "eventDate")]
    event_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RdapEntity {
    #[serde(default)]
    roles: Vec<String>,
    #[serde(rename = "publicIds", default)]
    public_ids: Vec<RdapPublicId>,
    handle: Option<String>,
    #[serde(rename = "vcardArray")]
    vcard_array: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RdapPublicId {
    identifier: String,
}

impl RdapEntity {
    /// The `fn` property of a jCard: `["vcard", [["fn", {}, "text", "Name"], ...]]`.
    fn formatted_name(&self) -> Option<String> {
        self.vcard_array
            .as_ref()?
            .get(1)?
            .as_array()?
            .iter()
            .find(|prop| prop.get(0).and_then(Value::as_str) == Some("fn"))?
            .get(3)?
            .as_str()
            .map(str::to_string)
    }

    fn display_name(&self) -> Option<String> {
        self.formatted_name()
            .or_else(|| self.public_ids.first().map(|id| id.identifier.clone()))
            .or_else(|| self.handle.clone())
    }
}

fn parse_registration(rdap: &RdapResponse, now: DateTime<Utc>) -> Result<Registration, ProviderError> {
    let created = rdap
        .events
        .iter()
        .find(|e| e.event_action == "registration")
        .and_then(|e| e.event_date.as_deref())
        .and_then(|date| DateTime::parse_from_rfc3339(date).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(ProviderError::Parse(UNPARSEABLE_DATE))?;

    let registrar = rdap
        .entities
        .iter()
        .find(|e| e.roles.iter().any(|r| r == "registrar"))
        .and_then(RdapEntity::display_name)
        .unwrap_or_else(|| "unknown".to_string());

    Ok(Registration {
        creation_date: created.format("%Y-%m-%d").to_string(),
        age_days: (now - created).num_days(),
        registrar,
    })
}

impl Provider<str> for Rdap {
    type Output = Registration;

    fn name(&self) -> &'static str {
        "rdap"
    }

    fn lookup(&self, domain: &str, _key: Option<&str>) -> Result<Registration, ProviderError> {
        let url = endpoint_url(&self.base_url, domain)?;
        let request = self
            .http
            .get(url)?
            .header("Accept", "application/rdap+json");
        let response = self.http.send(request)?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(ProviderError::Status(status));
        }

        let rdap: RdapResponse = response.json().map_err(ProviderError::invalid_response)?;
        parse_registration(&rdap, Utc::now())
    }
}
