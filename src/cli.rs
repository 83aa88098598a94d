use crate::aggregator::ScanRequest;
use crate::config::DEFAULT_KEYS_PATH;
use clap::{Args, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mailrecon",
    version,
    about = "MailRecon - Email & Phone Privacy Tool",
    long_about = "MailRecon checks an email address against breach, reputation, registration, DNS and blacklist sources, or scores a phone number for privacy risk, and writes JSON and text reports."
)]
pub struct Cli {
    #[command(flatten)]
    pub target: Target,

    /// API key file (JSON object of key name to key)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_KEYS_PATH)]
    pub keys: PathBuf,

    /// Settings file (.toml, .yaml, .yml or .json)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for report artifacts
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Exactly one scan subject.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Target {
    /// Email address to scan
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number to analyze
    #[arg(long)]
    pub phone: Option<String>,
}

impl Cli {
    pub fn request(&self) -> ScanRequest {
        match (&self.target.email, &self.target.phone) {
            (Some(address), _) => ScanRequest::email(address.as_str()),
            (None, Some(number)) => ScanRequest::phone(number.as_str()),
            (None, None) => unreachable!("clap requires --email or --phone"),
        }
    }
}
