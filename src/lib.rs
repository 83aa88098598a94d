pub mod aggregator;
pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod handlers;
mod logging;
pub mod output;
pub mod providers;
pub mod report;
pub mod reporter;
pub mod scoring;

#[cfg(test)]
pub mod test_utils;

pub use aggregator::{Aggregator, ScanRequest};
pub use cli::Cli;
pub use config::{ApiKeys, Settings};
pub use error::{InputError, ReconError, Result};
pub use logging::init_logging;
pub use output::{ReportPaths, ReportWriter, artifact_stem};
pub use providers::{Provider, ProviderError, ProviderSet};
pub use report::{EmailReport, PhoneReport, ScanReport};
pub use reporter::{JsonReporter, Reporter, TerminalReporter, TextReporter};
pub use scoring::{Assessment, PhoneAnalysis, RiskFlag};
