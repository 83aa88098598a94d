use super::{Aggregator, query};
use crate::config::ApiKeys;
use crate::error::InputError;
use crate::report::{AbuseScore, BlacklistHits, EmailReport, ProviderResult, Registration};
use tracing::debug;

/// Split an address into local part and domain at the last `@`.
pub fn split_address(address: &str) -> Result<(&str, &str), InputError> {
    match address.rsplit_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok((local, domain)),
        _ => Err(InputError::MalformedInput(address.to_string())),
    }
}

impl Aggregator {
    /// Query every email provider in a fixed order and merge the results.
    ///
    /// No provider failure stops the pipeline. DNS failures are swallowed
    /// into empty record lists; the others are recorded as error strings.
    pub fn scan_email(&self, address: &str, keys: &ApiKeys) -> Result<EmailReport, InputError> {
        let (_, domain) = split_address(address)?;
        let p = &self.providers;

        let (breaches, breachdirectory_error) = match query(&*p.breach, address, keys) {
            Ok(breaches) => (breaches, None),
            Err(e) => (Vec::new(), Some(e.to_string())),
        };

        let (reputation, disposable, badges, emailrep_error) =
            match query(&*p.reputation, address, keys) {
                Ok(rep) => (Some(rep.reputation), Some(rep.disposable), rep.badges, None),
                Err(e) => (None, None, Vec::new(), Some(e.to_string())),
            };

        let has_gravatar = query(&*p.avatar, address, keys).unwrap_or(false);

        let whois: ProviderResult<Registration> = query(&*p.registration, domain, keys).into();

        let dns = query(&*p.dns, domain, keys).unwrap_or_default();

        let (abuseipdb, blacklists): (ProviderResult<AbuseScore>, BlacklistHits) = match dns.a.first() {
            Some(ip) => {
                debug!(ip = %ip, "Checking first A record");
                (
                    query(&*p.abuse, ip, keys).into(),
                    query(&*p.blacklist, ip, keys).unwrap_or_default(),
                )
            }
            None => (ProviderResult::error("No IP"), BlacklistHits::new()),
        };

        Ok(EmailReport {
            breaches,
            breachdirectory_error,
            reputation,
            disposable,
            badges,
            emailrep_error,
            has_gravatar,
            whois,
            dns,
            abuseipdb,
            blacklists,
        })
    }
}
