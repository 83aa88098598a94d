use crate::providers::ProviderError;
use crate::scoring::PhoneAnalysis;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one provider call as recorded in a report: the payload, or an
/// `{"error": ...}` marker. Never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProviderResult<T> {
    Ok(T),
    Err { error: String },
}

impl<T> ProviderResult<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Err {
            error: message.into(),
        }
    }

    pub fn ok(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err { .. } => None,
        }
    }

    pub fn err(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Err { error } => Some(error),
        }
    }
}

impl<T> From<Result<T, ProviderError>> for ProviderResult<T> {
    fn from(result: Result<T, ProviderError>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(e) => Self::error(e.to_string()),
        }
    }
}

/// EmailRep reputation fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reputation {
    pub reputation: String,
    pub disposable: bool,
    pub badges: Vec<String>,
}

/// Domain registration data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    /// `YYYY-MM-DD`
    pub creation_date: String,
    pub age_days: i64,
    pub registrar: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DnsRecords {
    pub a: Vec<String>,
    pub mx: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbuseScore {
    #[serde(rename = "abuseConfidenceScore")]
    pub score: u32,
    #[serde(rename = "countryCode")]
    pub country_code: String,
    pub domain: String,
}

/// Per-zone DNSBL verdict: listed/not listed, or `"error: ..."`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BlacklistHit {
    Listed(bool),
    Error(String),
}

impl std::fmt::Display for BlacklistHit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Listed(hit) => write!(f, "{}", hit),
            Self::Error(e) => write!(f, "{}", e),
        }
    }
}

pub type BlacklistHits = BTreeMap<String, BlacklistHit>;

/// Merged result of every email signal provider.
///
/// Each field is filled from its provider or carries an explicit
/// error/absence marker; `None` serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailReport {
    pub breaches: Vec<String>,
    pub breachdirectory_error: Option<String>,
    pub reputation: Option<String>,
    pub disposable: Option<bool>,
    pub badges: Vec<String>,
    pub emailrep_error: Option<String>,
    pub has_gravatar: bool,
    pub whois: ProviderResult<Registration>,
    pub dns: DnsRecords,
    pub abuseipdb: ProviderResult<AbuseScore>,
    pub blacklists: BlacklistHits,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhoneReport {
    pub phone_analysis: PhoneAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "scan_type", rename_all = "lowercase")]
pub enum ScanReport {
    Email(EmailReport),
    Phone(PhoneReport),
}

impl ScanReport {
    pub fn scan_type(&self) -> &'static str {
        match self {
            Self::Email(_) => "email",
            Self::Phone(_) => "phone",
        }
    }

    /// The report as an insertion-ordered JSON value.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
