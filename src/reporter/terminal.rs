use crate::report::{EmailReport, PhoneReport, ProviderResult, ScanReport};
use crate::reporter::Reporter;
use crate::scoring::Assessment;
use colored::Colorize;

/// Human-readable scan summary for stdout.
pub struct TerminalReporter {
    subject: String,
}

impl TerminalReporter {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }

    fn header(&self, kind: &str) -> String {
        format!(
            "{} {} scan complete for {}\n\n",
            "[+]".green().bold(),
            kind,
            self.subject.bold()
        )
    }

    fn assessment_color(&self, assessment: Assessment) -> colored::ColoredString {
        let label = assessment.as_str();
        match assessment {
            Assessment::LowRisk => label.green().bold(),
            Assessment::MediumRisk => label.yellow().bold(),
            Assessment::HighRisk => label.red().bold(),
        }
    }

    fn format_email(&self, report: &EmailReport) -> String {
        let mut output = self.header("Email");

        output.push_str(&format!(
            "BreachDirectory: {} breaches{}\n",
            report.breaches.len(),
            inline_error(report.breachdirectory_error.as_deref())
        ));
        output.push_str(&format!(
            "EmailRep reput.: {}{}\n",
            report.reputation.as_deref().unwrap_or("unknown"),
            inline_error(report.emailrep_error.as_deref())
        ));
        output.push_str(&format!("Gravatar: {}\n", report.has_gravatar));

        match &report.whois {
            ProviderResult::Ok(reg) => output.push_str(&format!(
                "Whois: created {} ({}d ago, registrar {})\n",
                reg.creation_date, reg.age_days, reg.registrar
            )),
            ProviderResult::Err { error } => {
                output.push_str(&format!("Whois: {}\n", format!("error: {}", error).red()))
            }
        }

        let a_records = if report.dns.a.is_empty() {
            "None".to_string()
        } else {
            report.dns.a.join(", ")
        };
        output.push_str(&format!("A records: {}\n", a_records));

        match &report.abuseipdb {
            ProviderResult::Ok(abuse) => {
                output.push_str(&format!("AbuseIPDB score: {}%\n", abuse.score))
            }
            ProviderResult::Err { error } => output.push_str(&format!(
                "AbuseIPDB score: N/A{}\n",
                inline_error(Some(error))
            )),
        }

        output.push_str(&format!("\n{}\n", "Blacklist hits:".bold()));
        if report.blacklists.is_empty() {
            output.push_str("  (not checked)\n");
        }
        for (zone, hit) in &report.blacklists {
            output.push_str(&format!("  - {}: {}\n", zone, hit));
        }
        output
    }

    fn format_phone(&self, report: &PhoneReport) -> String {
        let analysis = &report.phone_analysis;
        let mut output = self.header("Phone");

        output.push_str(&format!("Normalized: {}\n", analysis.normalized));
        output.push_str(&format!("Country: {}\n", analysis.country));
        output.push_str(&format!(
            "Privacy Assessment: {}\n",
            self.assessment_color(analysis.privacy_assessment)
        ));
        output.push_str(&format!("Spam Score: {}/100\n", analysis.spam_score));
        output.push_str(&format!("Disposable/VoIP: {}\n", analysis.disposable));

        if analysis.privacy_risks.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                "No significant privacy risks detected.".green()
            ));
        } else {
            output.push_str(&format!("\n{}\n", "Privacy Risks:".bold()));
            for risk in &analysis.privacy_risks {
                output.push_str(&format!("  - {}\n", risk.label().yellow()));
            }
        }
        output
    }
}

fn inline_error(error: Option<&str>) -> String {
    match error {
        Some(e) => format!(" {}", format!("(error: {})", e).red()),
        None => String::new(),
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, report: &ScanReport) -> String {
        match report {
            ScanReport::Email(email) => self.format_email(email),
            ScanReport::Phone(phone) => self.format_phone(phone),
        }
    }
}
