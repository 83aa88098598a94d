//! Report artifacts on disk.

use crate::aggregator::ScanRequest;
use crate::error::{ReconError, Result};
use crate::report::ScanReport;
use crate::reporter::{JsonReporter, TextReporter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name stem derived from the scan subject. Deterministic, filesystem-safe.
pub fn artifact_stem(request: &ScanRequest) -> String {
    match request {
        ScanRequest::Email { address } => address
            .replace('@', "_at_")
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect(),
        ScanRequest::Phone { raw_number } => {
            let safe: String = raw_number
                .replace('+', "plus")
                .replace([' ', '-'], "_")
                .replace(['(', ')'], "")
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
                .collect();
            format!("phone_{}", safe)
        }
    }
}

/// Where a scan's two artifacts were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub text: PathBuf,
}

impl ReportPaths {
    pub fn new(dir: &Path, stem: &str) -> Self {
        Self {
            json: dir.join(format!("{}_report.json", stem)),
            text: dir.join(format!("{}_report.txt", stem)),
        }
    }
}

/// Writes the JSON and paginated text artifacts for a report.
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn write(&self, request: &ScanRequest, report: &ScanReport) -> Result<ReportPaths> {
        let paths = ReportPaths::new(&self.dir, &request.artifact_stem());

        let json = JsonReporter::new().render(report)?;
        let text = TextReporter::new(request.subject()).render(report)?;

        fs::create_dir_all(&self.dir).map_err(|e| ReconError::create_dir_error(&self.dir, e))?;
        fs::write(&paths.json, json).map_err(|e| ReconError::write_error(&paths.json, e))?;
        if let Err(e) = fs::write(&paths.text, text) {
            // Both artifacts or neither.
            if let Err(cleanup) = fs::remove_file(&paths.json) {
                warn!(path = %paths.json.display(), error = %cleanup, "Failed to remove partial report");
            }
            return Err(ReconError::write_error(&paths.text, e));
        }

        info!(json = %paths.json.display(), text = %paths.text.display(), "Reports written");
        Ok(paths)
    }
}
