#[cfg(test)]
pub mod fakes {
    use crate::providers::{Provider, ProviderError, ProviderSet};
    use std::cell::RefCell;
    use std::marker::PhantomData;
    use std::rc::Rc;

    /// Always fails with the same error.
    pub struct Failing<T> {
        error: ProviderError,
        _output: PhantomData<fn() -> T>,
    }

    impl<T> Failing<T> {
        pub fn new(error: ProviderError) -> Self {
            Self {
                error,
                _output: PhantomData,
            }
        }

        pub fn network_down() -> Self {
            Self::new(ProviderError::Request("network unreachable".to_string()))
        }
    }

    impl<T> Provider<str> for Failing<T> {
        type Output = T;

        fn name(&self) -> &'static str {
            "failing"
        }

        fn lookup(&self, _input: &str, _key: Option<&str>) -> Result<T, ProviderError> {
            Err(self.error.clone())
        }
    }

    /// Always returns the same payload.
    pub struct Fixed<T>(pub T);

    impl<T: Clone> Provider<str> for Fixed<T> {
        type Output = T;

        fn name(&self) -> &'static str {
            "fixed"
        }

        fn lookup(&self, _input: &str, _key: Option<&str>) -> Result<T, ProviderError> {
            Ok(self.0.clone())
        }
    }

    pub type Calls = Rc<RefCell<Vec<(String, Option<String>)>>>;

    /// Records every input and key it receives, then delegates.
    pub struct Recorder<P> {
        inner: P,
        key_name: Option<&'static str>,
        calls: Calls,
    }

    impl<P> Recorder<P> {
        pub fn new(inner: P) -> (Self, Calls) {
            let calls = Calls::default();
            let recorder = Self {
                inner,
                key_name: None,
                calls: Rc::clone(&calls),
            };
            (recorder, calls)
        }

        pub fn with_key(inner: P, key_name: &'static str) -> (Self, Calls) {
            let (mut recorder, calls) = Self::new(inner);
            recorder.key_name = Some(key_name);
            (recorder, calls)
        }
    }

    impl<P: Provider<str>> Provider<str> for Recorder<P> {
        type Output = P::Output;

        fn name(&self) -> &'static str {
            "recorder"
        }

        fn key_name(&self) -> Option<&'static str> {
            self.key_name
        }

        fn lookup(&self, input: &str, key: Option<&str>) -> Result<P::Output, ProviderError> {
            self.calls
                .borrow_mut()
                .push((input.to_string(), key.map(str::to_string)));
            self.inner.lookup(input, key)
        }
    }

    /// Every provider fails as if the network were down.
    pub fn offline_providers() -> ProviderSet {
        ProviderSet {
            breach: Box::new(Failing::network_down()),
            reputation: Box::new(Failing::network_down()),
            avatar: Box::new(Failing::network_down()),
            registration: Box::new(Failing::network_down()),
            dns: Box::new(Failing::network_down()),
            abuse: Box::new(Failing::network_down()),
            blacklist: Box::new(Failing::network_down()),
        }
    }
}

#[cfg(test)]
pub mod fixtures {
    use crate::report::{
        AbuseScore, BlacklistHit, BlacklistHits, DnsRecords, EmailReport, ProviderResult,
        Registration, ScanReport,
    };

    pub fn email_report() -> ScanReport {
        let mut blacklists = BlacklistHits::new();
        blacklists.insert("b.barracudacentral.org".to_string(), BlacklistHit::Listed(false));
        blacklists.insert(
            "bl.spamcop.net".to_string(),
            BlacklistHit::Error("error: timed out".to_string()),
        );
        blacklists.insert("zen.spamhaus.org".to_string(), BlacklistHit::Listed(true));

        ScanReport::Email(EmailReport {
            breaches: vec!["LinkedIn".to_string(), "Adobe".to_string()],
            breachdirectory_error: None,
            reputation: None,
            disposable: None,
            badges: vec![],
            emailrep_error: Some("HTTP 429".to_string()),
            has_gravatar: true,
            whois: ProviderResult::Ok(Registration {
                creation_date: "1995-08-14".to_string(),
                age_days: 10957,
                registrar: "IANA".to_string(),
            }),
            dns: DnsRecords {
                a: vec!["93.184.216.34".to_string()],
                mx: vec![],
            },
            abuseipdb: ProviderResult::Ok(AbuseScore {
                score: 25,
                country_code: "US".to_string(),
                domain: "edgecast.com".to_string(),
            }),
            blacklists,
        })
    }

    pub fn offline_email_report() -> ScanReport {
        ScanReport::Email(EmailReport {
            breaches: vec![],
            breachdirectory_error: Some("Request failed: network unreachable".to_string()),
            reputation: None,
            disposable: None,
            badges: vec![],
            emailrep_error: Some("Request failed: network unreachable".to_string()),
            has_gravatar: false,
            whois: ProviderResult::error("Request failed: network unreachable"),
            dns: DnsRecords::default(),
            abuseipdb: ProviderResult::error("No IP"),
            blacklists: BlacklistHits::new(),
        })
    }

    pub fn phone_report(raw: &str) -> ScanReport {
        ScanReport::Phone(crate::aggregator::scan_phone(raw).unwrap())
    }
}
