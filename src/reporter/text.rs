//! Paginated plain-text report.
//!
//! Layout follows a US-letter page measured in points: a cursor starts at the
//! top margin and moves down by a fixed amount for every line written. When it
//! drops below the bottom margin a form feed starts the next page.

use crate::report::ScanReport;
use crate::reporter::Reporter;
use serde_json::Value;

const PAGE_HEIGHT: u32 = 792;
const MARGIN: u32 = 50;
const TITLE_HEIGHT: u32 = 30;
const SECTION_HEIGHT: u32 = 20;
const ITEM_HEIGHT: u32 = 15;
const SECTION_GAP: u32 = 10;

const PAGE_BREAK: char = '\x0c';
const ITEM_INDENT: &str = "    ";

pub struct TextReporter {
    subject: String,
}

impl TextReporter {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }

    pub fn render(&self, report: &ScanReport) -> serde_json::Result<String> {
        let value = report.to_value()?;
        let mut page = Page::new();
        page.line(&format!("MailRecon Report for {}", self.subject), TITLE_HEIGHT);

        if let Value::Object(sections) = &value {
            for (section, contents) in sections {
                page.line(&format!("{}:", section), SECTION_HEIGHT);
                match contents {
                    Value::Array(items) => {
                        for item in items {
                            page.line(&format!("{}• {}", ITEM_INDENT, display(item)), ITEM_HEIGHT);
                        }
                    }
                    Value::Object(fields) => {
                        for (key, field) in fields {
                            page.line(
                                &format!("{}{}: {}", ITEM_INDENT, key, display(field)),
                                ITEM_HEIGHT,
                            );
                        }
                    }
                    scalar => page.line(&format!("{}{}", ITEM_INDENT, display(scalar)), ITEM_HEIGHT),
                }
                page.gap(SECTION_GAP);
            }
        }

        Ok(page.finish())
    }
}

impl Reporter for TextReporter {
    fn report(&self, report: &ScanReport) -> String {
        self.render(report)
            .unwrap_or_else(|e| format!("Failed to render report: {}\n", e))
    }
}

/// Strings print bare, `null` prints as `None`, anything nested as compact JSON.
fn display(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

struct Page {
    out: String,
    cursor: u32,
    pages: usize,
}

impl Page {
    fn new() -> Self {
        Self {
            out: String::new(),
            cursor: PAGE_HEIGHT - MARGIN,
            pages: 1,
        }
    }

    fn line(&mut self, text: &str, height: u32) {
        self.out.push_str(text);
        self.out.push('\n');
        self.advance(height);
    }

    fn gap(&mut self, height: u32) {
        self.out.push('\n');
        self.advance(height);
    }

    fn advance(&mut self, height: u32) {
        self.cursor = self.cursor.saturating_sub(height);
        if self.cursor < MARGIN {
            self.out.push(PAGE_BREAK);
            self.cursor = PAGE_HEIGHT - MARGIN;
            self.pages += 1;
        }
    }

    fn finish(mut self) -> String {
        // A break right at the end would leave an empty trailing page.
        if self.out.ends_with(PAGE_BREAK) {
            self.out.pop();
            self.pages -= 1;
        }
        tracing::debug!(pages = self.pages, "Rendered text report");
        self.out
    }
}
