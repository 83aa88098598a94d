use crate::report::ScanReport;
use crate::reporter::Reporter;

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }

    /// Pretty-printed JSON with the report's field order preserved.
    pub fn render(&self, report: &ScanReport) -> serde_json::Result<String> {
        serde_json::to_string_pretty(report)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, report: &ScanReport) -> String {
        self.render(report)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize report: {}"}}"#, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{email_report, offline_email_report, phone_report};

    #[test]
    fn test_email_json_structure() {
        let output = JsonReporter::new().report(&email_report());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["scan_type"], "email");
        assert_eq!(parsed["breaches"][1], "Adobe");
        assert_eq!(parsed["whois"]["age_days"], 10957);
        assert_eq!(parsed["abuseipdb"]["abuseConfidenceScore"], 25);
        assert_eq!(parsed["blacklists"]["zen.spamhaus.org"], true);
        assert_eq!(parsed["blacklists"]["bl.spamcop.net"], "error: timed out");
    }

    #[test]
    fn test_nulls_are_written_not_omitted() {
        let output = JsonReporter::new().report(&offline_email_report());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(parsed["reputation"].is_null());
        assert!(parsed["disposable"].is_null());
        assert!(parsed.as_object().unwrap().contains_key("reputation"));
        assert_eq!(parsed["abuseipdb"]["error"], "No IP");
        assert_eq!(parsed["whois"]["error"], "Request failed: network unreachable");
    }

    #[test]
    fn test_phone_json_structure() {
        let output = JsonReporter::new().report(&phone_report("8005551234"));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["scan_type"], "phone");
        let analysis = &parsed["phone_analysis"];
        assert_eq!(analysis["normalized"], "8005551234");
        assert_eq!(analysis["country"], "US (assumed)");
        assert_eq!(analysis["spam_score"], 90);
        assert_eq!(analysis["privacy_assessment"], "high_risk");
        assert_eq!(analysis["privacy_risks"][0], "Premium or toll-free number");
        assert!(analysis["carrier_info"].is_null());
    }

    #[test]
    fn test_json_is_pretty_printed() {
        let output = JsonReporter::new().report(&phone_report("2025551234"));
        assert!(output.starts_with("{\n  \"scan_type\": \"phone\""));
    }
}
