//! CLI command handlers
//!
//! Orchestration between parsed arguments, the aggregator and the report
//! artifacts, kept out of main.rs so it can be unit tested.

use crate::aggregator::{Aggregator, ScanRequest};
use crate::cli::Cli;
use crate::config::{ApiKeys, Settings};
use crate::error::Result;
use crate::output::{ReportPaths, ReportWriter};
use crate::providers::ProviderSet;
use crate::report::ScanReport;
use crate::reporter::{Reporter, TerminalReporter};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

/// Result type for handler functions that can be tested
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResult {
    Success,
    Error(u8),
}

impl From<HandlerResult> for ExitCode {
    fn from(result: HandlerResult) -> Self {
        match result {
            HandlerResult::Success => ExitCode::SUCCESS,
            HandlerResult::Error(code) => ExitCode::from(code),
        }
    }
}

/// Settings from `--config` or discovery, with command-line overrides applied.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref(), Path::new("."))?;
    if let Some(dir) = &cli.output_dir {
        settings.output_dir = dir.clone();
    }
    if let Some(secs) = cli.timeout {
        settings.timeout_secs = secs;
    }
    Ok(settings)
}

/// Scan one subject and persist both artifacts.
pub fn run_scan(
    request: &ScanRequest,
    aggregator: &Aggregator,
    keys: &ApiKeys,
    writer: &ReportWriter,
) -> Result<(ScanReport, ReportPaths)> {
    let report = aggregator.scan(request, keys)?;
    let paths = writer.write(request, &report)?;
    Ok((report, paths))
}

pub fn print_report_paths(paths: &ReportPaths) {
    println!("\n{}", "Reports generated:".bold());
    println!("- JSON: {}", paths.json.display());
    println!("- Text: {}", paths.text.display());
}

/// Handle a `--email` or `--phone` scan
pub fn handle_scan(cli: &Cli) -> HandlerResult {
    let settings = match load_settings(cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return HandlerResult::Error(2);
        }
    };
    let keys = ApiKeys::load(&cli.keys);
    let aggregator = Aggregator::new(ProviderSet::live(&settings));
    let writer = ReportWriter::new(&settings.output_dir);
    let request = cli.request();

    match run_scan(&request, &aggregator, &keys, &writer) {
        Ok((report, paths)) => {
            print!("{}", TerminalReporter::new(request.subject()).report(&report));
            print_report_paths(&paths);
            HandlerResult::Success
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            HandlerResult::Error(2)
        }
    }
}
