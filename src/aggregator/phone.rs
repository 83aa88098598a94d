use crate::error::InputError;
use crate::report::PhoneReport;
use crate::scoring;

/// Phone path: offline heuristics only, no provider calls.
pub fn scan_phone(raw_number: &str) -> Result<PhoneReport, InputError> {
    Ok(PhoneReport {
        phone_analysis: scoring::score(raw_number)?,
    })
}
