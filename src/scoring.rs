//! Heuristic phone number risk scoring.
//!
//! Fully offline: the score is the sum of the points of every triggered
//! flag, and the assessment is derived from that sum.

use crate::error::InputError;
use regex::Regex;
use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

const MIN_NORMALIZED_LEN: usize = 10;

static TOLL_FREE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"^(\+1)?8(00|44|55|66|77|88)\d{7}$").unwrap(),
        Regex::new(r"^(\+1)?9(00|07)\d{7}$").unwrap(),
    ]
});

const VOIP_AREA_CODES: &[&str] = &["555", "800", "844", "855", "866", "877", "888"];

/// Known country calling codes: (prefix, country, expected total length).
const COUNTRY_CODES: &[(&str, &str, [usize; 2])] = &[
    ("+1", "US/Canada", [11, 11]),
    ("+44", "United Kingdom", [11, 13]),
    ("+49", "Germany", [11, 12]),
    ("+33", "France", [10, 10]),
    ("+86", "China", [11, 13]),
    ("+91", "India", [10, 12]),
    ("+81", "Japan", [10, 11]),
    ("+7", "Russia", [10, 11]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskFlag {
    TollFree,
    Sequential,
    Repetitive,
    Voip,
}

impl RiskFlag {
    pub fn points(&self) -> u32 {
        match self {
            RiskFlag::TollFree => 30,
            RiskFlag::Sequential => 20,
            RiskFlag::Repetitive => 15,
            RiskFlag::Voip => 25,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskFlag::TollFree => "Premium or toll-free number",
            RiskFlag::Sequential => "Sequential digit pattern detected",
            RiskFlag::Repetitive => "Repetitive digit pattern detected",
            RiskFlag::Voip => "Likely VoIP/disposable number",
        }
    }
}

impl std::fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for RiskFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Risk category derived from the cumulative score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    LowRisk,
    MediumRisk,
    HighRisk,
}

impl Assessment {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=25 => Assessment::LowRisk,
            26..=50 => Assessment::MediumRisk,
            _ => Assessment::HighRisk,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Assessment::LowRisk => "low_risk",
            Assessment::MediumRisk => "medium_risk",
            Assessment::HighRisk => "high_risk",
        }
    }
}

impl std::fmt::Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryInfo {
    pub code: String,
    pub name: String,
    pub expected_length: Option<[usize; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhoneAnalysis {
    pub original: String,
    pub normalized: String,
    /// Triggered flags in evaluation order.
    pub privacy_risks: Vec<RiskFlag>,
    /// No carrier source is queried; always null.
    pub carrier_info: Option<String>,
    pub disposable: bool,
    pub spam_score: u32,
    pub country_code: String,
    pub country: String,
    pub expected_length: Option<[usize; 2]>,
    pub lookup_hash: String,
    pub privacy_assessment: Assessment,
}

/// Keep digits, plus a `+` only when it leads the result.
pub fn normalize(raw: &str) -> Result<String, InputError> {
    let mut normalized = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() || (c == '+' && normalized.is_empty()) {
            normalized.push(c);
        }
    }

    if normalized.is_empty() {
        return Err(InputError::InvalidFormat {
            input: raw.to_string(),
            reason: "Invalid phone number format",
        });
    }
    if normalized.len() < MIN_NORMALIZED_LEN {
        return Err(InputError::InvalidFormat {
            input: raw.to_string(),
            reason: "Phone number too short",
        });
    }
    Ok(normalized)
}

/// Detect the country from the longest matching calling-code prefix.
pub fn detect_country(normalized: &str) -> CountryInfo {
    let matched = COUNTRY_CODES
        .iter()
        .filter(|(code, _, _)| normalized.starts_with(code))
        .max_by_key(|(code, _, _)| code.len());

    match matched {
        Some((code, name, range)) => CountryInfo {
            code: code.to_string(),
            name: name.to_string(),
            expected_length: Some(*range),
        },
        None if normalized.starts_with('+') => CountryInfo {
            code: "unknown".to_string(),
            name: "Unknown".to_string(),
            expected_length: None,
        },
        None => CountryInfo {
            code: "+1".to_string(),
            name: "US (assumed)".to_string(),
            expected_length: Some([10, 10]),
        },
    }
}

fn digits_of(s: &str) -> Vec<u8> {
    s.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

pub fn is_toll_free(normalized: &str) -> bool {
    TOLL_FREE_PATTERNS.iter().any(|re| re.is_match(normalized))
}

/// Any 4-digit window forming an ascending or descending run.
pub fn has_sequential_digits(normalized: &str) -> bool {
    digits_of(normalized).windows(4).any(|w| {
        let ascending = w.windows(2).all(|p| p[1] == p[0] + 1);
        let descending = w.windows(2).all(|p| p[0] == p[1] + 1);
        ascending || descending
    })
}

/// Any 4-digit window containing at most two distinct digits.
pub fn has_repetitive_digits(normalized: &str) -> bool {
    digits_of(normalized).windows(4).any(|w| {
        let mut distinct = w.to_vec();
        distinct.sort_unstable();
        distinct.dedup();
        distinct.len() <= 2
    })
}

/// Area code of a 10-digit tail checked against known VoIP ranges.
pub fn is_likely_voip(normalized: &str) -> bool {
    let digits: String = normalized.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 10 {
        return false;
    }
    let start = digits.len() - 10;
    VOIP_AREA_CODES.contains(&&digits[start..start + 3])
}

/// Privacy-safe identifier for the number: first 16 hex chars of SHA-256.
pub fn lookup_hash(normalized: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    let mut hash = hex::encode(hasher.finalize());
    hash.truncate(16);
    hash
}

/// Score a raw phone number.
pub fn score(raw: &str) -> Result<PhoneAnalysis, InputError> {
    let normalized = normalize(raw)?;
    let country = detect_country(&normalized);

    let mut flags = Vec::new();
    if is_toll_free(&normalized) {
        flags.push(RiskFlag::TollFree);
    }
    if has_sequential_digits(&normalized) {
        flags.push(RiskFlag::Sequential);
    }
    if has_repetitive_digits(&normalized) {
        flags.push(RiskFlag::Repetitive);
    }
    let disposable = is_likely_voip(&normalized);
    if disposable {
        flags.push(RiskFlag::Voip);
    }

    let spam_score: u32 = flags.iter().map(RiskFlag::points).sum();

    Ok(PhoneAnalysis {
        original: raw.to_string(),
        lookup_hash: lookup_hash(&normalized),
        normalized,
        privacy_risks: flags,
        carrier_info: None,
        disposable,
        spam_score,
        country_code: country.code,
        country: country.name,
        expected_length: country.expected_length,
        privacy_assessment: Assessment::from_score(spam_score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use RiskFlag::*;

    #[test]
    fn test_score_table() {
        let cases: Vec<(&str, Vec<RiskFlag>, u32, Assessment)> = vec![
            (
                "8005551234",
                vec![TollFree, Sequential, Repetitive, Voip],
                90,
                Assessment::HighRisk,
            ),
            (
                "+18005551234",
                vec![TollFree, Sequential, Repetitive, Voip],
                90,
                Assessment::HighRisk,
            ),
            (
                "2025551234",
                vec![Sequential, Repetitive],
                35,
                Assessment::MediumRisk,
            ),
            ("+1-202-867-5309", vec![], 0, Assessment::LowRisk),
            (
                "+1-555-123-4567",
                vec![Sequential, Repetitive, Voip],
                60,
                Assessment::HighRisk,
            ),
            ("+44 20 7946 0958", vec![], 0, Assessment::LowRisk),
            ("+9000000000", vec![Repetitive], 15, Assessment::LowRisk),
            ("9005550000", vec![TollFree, Repetitive], 45, Assessment::MediumRisk),
            (
                "(877) 123-9999",
                vec![TollFree, Repetitive, Voip],
                70,
                Assessment::HighRisk,
            ),
            (
                "+7 (495) 555-01-23",
                vec![Sequential, Repetitive],
                35,
                Assessment::MediumRisk,
            ),
        ];

        for (raw, flags, expected_score, assessment) in cases {
            let analysis = score(raw).unwrap();
            assert_eq!(analysis.privacy_risks, flags, "flags for {}", raw);
            assert_eq!(analysis.spam_score, expected_score, "score for {}", raw);
            let sum: u32 = flags.iter().map(RiskFlag::points).sum();
            assert_eq!(analysis.spam_score, sum, "sum for {}", raw);
            assert_eq!(analysis.privacy_assessment, assessment, "level for {}", raw);
        }
    }

    #[test]
    fn test_voip_sets_disposable() {
        assert!(score("8005551234").unwrap().disposable);
        assert!(!score("2025551234").unwrap().disposable);
    }

    #[test]
    fn test_normalize_strips_formatting() {
        assert_eq!(normalize("+1 (202) 867-5309").unwrap(), "+12028675309");
        assert_eq!(normalize("202.867.5309").unwrap(), "2028675309");
    }

    #[test]
    fn test_normalize_keeps_only_leading_plus() {
        assert_eq!(normalize("1+2345678901").unwrap(), "12345678901");
        assert_eq!(normalize("++12345678901").unwrap(), "+12345678901");
    }

    #[test]
    fn test_normalize_empty_is_invalid_format() {
        let err = normalize("call me").unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidFormat {
                input: "call me".to_string(),
                reason: "Invalid phone number format",
            }
        );
    }

    #[test]
    fn test_normalize_too_short() {
        let err = score("555-1234").unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidFormat {
                reason: "Phone number too short",
                ..
            }
        ));
    }

    #[test]
    fn test_length_counts_leading_plus() {
        // 9 digits plus '+' reaches the minimum length
        assert!(normalize("+123456789").is_ok());
        assert!(normalize("123456789").is_err());
    }

    #[test]
    fn test_detect_country_known_codes() {
        let uk = detect_country("+442079460958");
        assert_eq!(uk.code, "+44");
        assert_eq!(uk.name, "United Kingdom");
        assert_eq!(uk.expected_length, Some([11, 13]));

        let ru = detect_country("+74955550123");
        assert_eq!(ru.code, "+7");
        assert_eq!(ru.name, "Russia");
    }

    #[test]
    fn test_detect_country_assumes_us_without_plus() {
        let info = detect_country("2025551234");
        assert_eq!(info.code, "+1");
        assert_eq!(info.name, "US (assumed)");
        assert_eq!(info.expected_length, Some([10, 10]));
    }

    #[test]
    fn test_detect_country_unknown_with_plus() {
        let info = detect_country("+2125551234");
        assert_eq!(info.code, "unknown");
        assert_eq!(info.name, "Unknown");
        assert_eq!(info.expected_length, None);
    }

    #[test]
    fn test_sequential_detection() {
        assert!(has_sequential_digits("0000123499"));
        assert!(has_sequential_digits("0000987600"));
        assert!(!has_sequential_digits("7890789078"));
        assert!(!has_sequential_digits("2028675309"));
    }

    #[test]
    fn test_repetitive_detection() {
        assert!(has_repetitive_digits("1212343434"));
        assert!(!has_repetitive_digits("2028675309"));
    }

    #[test]
    fn test_voip_uses_last_ten_digits() {
        assert!(is_likely_voip("15551234567"));
        assert!(is_likely_voip("+448661234567"));
        assert!(!is_likely_voip("+12028675309"));
    }

    #[test]
    fn test_assessment_boundaries() {
        assert_eq!(Assessment::from_score(0), Assessment::LowRisk);
        assert_eq!(Assessment::from_score(25), Assessment::LowRisk);
        assert_eq!(Assessment::from_score(26), Assessment::MediumRisk);
        assert_eq!(Assessment::from_score(50), Assessment::MediumRisk);
        assert_eq!(Assessment::from_score(51), Assessment::HighRisk);
        assert_eq!(Assessment::from_score(130), Assessment::HighRisk);
    }

    #[test]
    fn test_lookup_hash_is_stable() {
        let a = score("+1 (202) 867-5309").unwrap();
        let b = score("+1-202-867-5309").unwrap();
        assert_eq!(a.lookup_hash, b.lookup_hash);
        assert_eq!(a.lookup_hash.len(), 16);
    }

    #[test]
    fn test_analysis_serialization() {
        let value = serde_json::to_value(score("8005551234").unwrap()).unwrap();
        assert_eq!(value["privacy_assessment"], "high_risk");
        assert_eq!(value["privacy_risks"][0], "Premium or toll-free number");
        assert!(value["carrier_info"].is_null());
        assert_eq!(value["expected_length"][0], 10);
    }
}
