//! DNS resolution: A/MX records for a domain.

use super::{Provider, ProviderError};
use crate::config::Settings;
use crate::report::DnsRecords;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use trust_dns_resolver::Resolver;
use trust_dns_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};

/// Synchronous resolver shared by the DNS and DNSBL providers.
pub struct DnsResolver {
    inner: Result<Resolver, String>,
}

/// Outcome of an A query, distinguishing "no such record" from failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ALookup {
    Found(Vec<String>),
    NotFound,
}

impl DnsResolver {
    pub fn new(server: Option<SocketAddr>, timeout: Duration) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = 1;

        let config = match server {
            Some(addr) => ResolverConfig::from_parts(
                None,
                vec![],
                NameServerConfigGroup::from_ips_clear(&[addr.ip()], addr.port(), true),
            ),
            None => match trust_dns_resolver::system_conf::read_system_conf() {
                Ok((config, _)) => config,
                Err(e) => {
                    debug!(error = %e, "No system resolver configuration, using defaults");
                    ResolverConfig::default()
                }
            },
        };

        let inner = Resolver::new(config, opts).map_err(|e| {
            warn!(error = %e, "Failed to create DNS resolver");
            e.to_string()
        });
        Self { inner }
    }

    pub fn from_settings(settings: &Settings) -> Arc<Self> {
        Arc::new(Self::new(settings.dns_server, settings.timeout()))
    }

    fn resolver(&self) -> Result<&Resolver, ProviderError> {
        self.inner
            .as_ref()
            .map_err(|e| ProviderError::Dns(e.clone()))
    }

    pub fn a(&self, name: &str) -> Result<ALookup, ProviderError> {
        match self.resolver()?.ipv4_lookup(fqdn(name)) {
            Ok(lookup) => Ok(ALookup::Found(
                lookup.iter().map(|a| a.to_string()).collect(),
            )),
            Err(e) if is_not_found(&e) => Ok(ALookup::NotFound),
            Err(e) => Err(ProviderError::Dns(e.to_string())),
        }
    }

    pub fn mx(&self, name: &str) -> Result<Vec<String>, ProviderError> {
        let lookup = self
            .resolver()?
            .mx_lookup(fqdn(name))
            .map_err(|e| ProviderError::Dns(e.to_string()))?;
        Ok(lookup
            .iter()
            .map(|mx| mx.exchange().to_utf8().trim_end_matches('.').to_string())
            .collect())
    }
}

fn is_not_found(err: &ResolveError) -> bool {
    matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. })
}

/// Absolute name, so resolver search domains never apply.
fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

pub struct DnsRecordLookup {
    resolver: Arc<DnsResolver>,
}

impl DnsRecordLookup {
    pub fn new(resolver: Arc<DnsResolver>) -> Self {
        Self { resolver }
    }
}

impl Provider<str> for DnsRecordLookup {
    type Output = DnsRecords;

    fn name(&self) -> &'static str {
        "dns"
    }

    /// Best effort: each record type falls back to an empty list.
    fn lookup(&self, domain: &str, _key: Option<&str>) -> Result<DnsRecords, ProviderError> {
        let a = match self.resolver.a(domain) {
            Ok(ALookup::Found(records)) => records,
            Ok(ALookup::NotFound) => Vec::new(),
            Err(e) => {
                debug!(domain, error = %e, "A lookup failed");
                Vec::new()
            }
        };
        let mx = self.resolver.mx(domain).unwrap_or_else(|e| {
            debug!(domain, error = %e, "MX lookup failed");
            Vec::new()
        });
        Ok(DnsRecords { a, mx })
    }
}
