//! Signal providers.
//!
//! Every external source sits behind the same [`Provider`] shape: one input,
//! one payload or a [`ProviderError`]. Keys are not held by providers; each
//! names the key it wants and the caller passes it in per call.

pub mod abuseipdb;
pub mod blacklist;
pub mod breachdirectory;
pub mod dns;
pub mod emailrep;
mod error;
pub mod gravatar;
pub mod http;
pub mod rdap;

pub use error::ProviderError;
pub use http::HttpClient;

use crate::config::Settings;
use crate::report::{AbuseScore, BlacklistHits, DnsRecords, Registration, Reputation};

/// A single external signal source.
pub trait Provider<I: ?Sized> {
    type Output;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Name of the API key this provider uses, if any.
    fn key_name(&self) -> Option<&'static str> {
        None
    }

    /// Perform one lookup. Implementations bound their own latency.
    fn lookup(&self, input: &I, key: Option<&str>) -> Result<Self::Output, ProviderError>;
}

pub type BreachLookup = Box<dyn Provider<str, Output = Vec<String>>>;
pub type ReputationLookup = Box<dyn Provider<str, Output = Reputation>>;
pub type AvatarPresence = Box<dyn Provider<str, Output = bool>>;
pub type RegistrationLookup = Box<dyn Provider<str, Output = Registration>>;
pub type DnsLookup = Box<dyn Provider<str, Output = DnsRecords>>;
pub type AbuseScoreLookup = Box<dyn Provider<str, Output = AbuseScore>>;
pub type BlacklistLookup = Box<dyn Provider<str, Output = BlacklistHits>>;

/// The providers the email aggregator queries, one per source.
pub struct ProviderSet {
    pub breach: BreachLookup,
    pub reputation: ReputationLookup,
    pub avatar: AvatarPresence,
    pub registration: RegistrationLookup,
    pub dns: DnsLookup,
    pub abuse: AbuseScoreLookup,
    pub blacklist: BlacklistLookup,
}

impl ProviderSet {
    /// Network-backed providers configured from settings.
    pub fn live(settings: &Settings) -> Self {
        let http = HttpClient::new(settings.timeout());
        let resolver = dns::DnsResolver::from_settings(settings);
        let endpoints = &settings.endpoints;

        Self {
            breach: Box::new(breachdirectory::BreachDirectory::new(
                http.clone(),
                &endpoints.breachdirectory,
            )),
            reputation: Box::new(emailrep::EmailRep::new(http.clone(), &endpoints.emailrep)),
            avatar: Box::new(gravatar::Gravatar::new(http.clone(), &endpoints.gravatar)),
            registration: Box::new(rdap::Rdap::new(http.clone(), &endpoints.rdap)),
            dns: Box::new(dns::DnsRecordLookup::new(resolver.clone())),
            abuse: Box::new(abuseipdb::AbuseIpDb::new(http, &endpoints.abuseipdb)),
            blacklist: Box::new(blacklist::Blacklists::new(resolver)),
        }
    }
}
