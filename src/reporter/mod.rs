pub mod json;
pub mod terminal;
pub mod text;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;
pub use text::TextReporter;

use crate::report::ScanReport;

pub trait Reporter {
    fn report(&self, report: &ScanReport) -> String;
}
