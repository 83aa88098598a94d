//! DNSBL checks for an IPv4 address.

use super::dns::{ALookup, DnsResolver};
use super::{Provider, ProviderError};
use crate::report::{BlacklistHit, BlacklistHits};
use std::net::Ipv4Addr;
use std::sync::Arc;

pub const DNSBL_ZONES: &[&str] = &[
    "zen.spamhaus.org",
    "bl.spamcop.net",
    "b.barracudacentral.org",
];

pub struct Blacklists {
    resolver: Arc<DnsResolver>,
    zones: Vec<String>,
}

impl Blacklists {
    pub fn new(resolver: Arc<DnsResolver>) -> Self {
        Self {
            resolver,
            zones: DNSBL_ZONES.iter().map(|z| z.to_string()).collect(),
        }
    }
}

/// `1.2.3.4` in `zone` becomes `4.3.2.1.zone`.
pub fn dnsbl_query(ip: Ipv4Addr, zone: &str) -> String {
    let [a, b, c, d] = ip.octets();
    format!("{}.{}.{}.{}.{}", d, c, b, a, zone)
}

impl Provider<str> for Blacklists {
    type Output = BlacklistHits;

    fn name(&self) -> &'static str {
        "dnsbl"
    }

    /// Errors are per zone; the lookup itself always succeeds.
    fn lookup(&self, ip: &str, _key: Option<&str>) -> Result<BlacklistHits, ProviderError> {
        let Ok(addr) = ip.parse::<Ipv4Addr>() else {
            return Ok(self
                .zones
                .iter()
                .map(|zone| {
                    (
                        zone.clone(),
                        BlacklistHit::Error("error: not an IPv4 address".to_string()),
                    )
                })
                .collect());
        };

        Ok(self
            .zones
            .iter()
            .map(|zone| {
                let hit = match self.resolver.a(&dnsbl_query(addr, zone)) {
                    Ok(ALookup::Found(_)) => BlacklistHit::Listed(true),
                    Ok(ALookup::NotFound) => BlacklistHit::Listed(false),
                    Err(e) => BlacklistHit::Error(format!("error: {}", e)),
                };
                (zone.clone(), hit)
            })
            .collect())
    }
}
