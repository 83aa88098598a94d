//! Guided walkthrough over a fixed set of subjects.

use crate::aggregator::{Aggregator, ScanRequest};
use crate::config::{ApiKeys, DEFAULT_KEYS_PATH};
use crate::error::Result;
use crate::handlers::run_scan;
use crate::output::{ReportPaths, ReportWriter};
use crate::reporter::{Reporter, TerminalReporter};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the key file the demo requires.
pub const KEYS_ENV: &str = "MAILRECON_KEYS";

pub const DEMO_EMAILS: [&str; 2] = ["test@example.com", "demo@gmail.com"];

pub const DEMO_PHONES: [&str; 4] = [
    "+1-555-123-4567",
    "2025551234",
    "+1-202-867-5309",
    "8005551234",
];

const EMAIL_DIGEST: &[&str] = &["[+]", "BreachDirectory:", "EmailRep", "Privacy Assessment:"];
const PHONE_DIGEST: &[&str] = &["[+]", "Privacy Assessment:", "Spam Score:", "Privacy Risks:"];

const RULE: &str = "============================================================";

pub fn keys_path() -> PathBuf {
    std::env::var_os(KEYS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_KEYS_PATH))
}

pub fn missing_keys_help(path: &Path) -> String {
    format!(
        "API key file {} not found. Create it before running the demo:\n   \
         mkdir -p config\n   \
         echo '{{\"emailrep_key\": \"\", \"abuseipdb_key\": \"\"}}' > config/keys.json\n\
         or point {} at an existing key file.",
        path.display(),
        KEYS_ENV
    )
}

pub fn demo_requests() -> Vec<ScanRequest> {
    DEMO_EMAILS
        .iter()
        .map(|e| ScanRequest::email(*e))
        .chain(DEMO_PHONES.iter().map(|p| ScanRequest::phone(*p)))
        .collect()
}

/// The summary lines worth showing for a request, as the demo prints them.
pub fn digest<'a>(request: &ScanRequest, summary: &'a str) -> Vec<&'a str> {
    let keywords = match request {
        ScanRequest::Email { .. } => EMAIL_DIGEST,
        ScanRequest::Phone { .. } => PHONE_DIGEST,
    };
    summary
        .lines()
        .filter(|line| keywords.iter().any(|k| line.contains(k)))
        .collect()
}

/// Names of the files currently in `dir`, sorted.
pub fn list_reports(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.path().is_file())
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

fn banner(title: &str) {
    println!("\n{}", RULE);
    println!("{}", title.bold());
    println!("{}", RULE);
}

/// Scan every demo subject, printing a digest of each, then list the artifacts.
pub fn run_demo(
    aggregator: &Aggregator,
    keys: &ApiKeys,
    writer: &ReportWriter,
    output_dir: &Path,
) -> Result<Vec<ReportPaths>> {
    println!("{}", "MAILRECON - PRIVACY ANALYSIS TOOL DEMO".bold());
    println!("Email and Phone Privacy Protection");

    let mut written = Vec::new();
    let mut section = "";
    for request in demo_requests() {
        let title = match request {
            ScanRequest::Email { .. } => "EMAIL PRIVACY ANALYSIS DEMO",
            ScanRequest::Phone { .. } => "PHONE PRIVACY ANALYSIS DEMO",
        };
        if title != section {
            banner(title);
            section = title;
        }

        println!("\nAnalyzing: {}", request.subject().cyan());
        println!("{}", "-".repeat(40));

        let (report, paths) = run_scan(&request, aggregator, keys, writer)?;
        let summary = TerminalReporter::new(request.subject()).report(&report);
        for line in digest(&request, &summary) {
            println!("{}", line);
        }
        println!("Reports generated: {}", paths.json.display());
        written.push(paths);
    }

    banner("GENERATED REPORTS");
    let files = list_reports(output_dir);
    if files.is_empty() {
        println!("No reports found.");
    } else {
        println!("Generated report files:");
        for file in files {
            println!("  {}", file);
        }
    }

    banner("DEMO COMPLETE");
    println!(
        "Your privacy analysis reports have been generated in '{}'.",
        output_dir.display()
    );
    println!("Both JSON and text formats are available for detailed analysis.");
    Ok(written)
}
