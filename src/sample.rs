// src/sample.rs
//! Built-in demo corpus so the pipeline can run without a tracker export.

use crate::types::Record;

const SAMPLE: &[(&str, &str, &str, &str)] = &[
    ("DEMO-1", "Login button crashes when submitting the form", "Open", "Ana"),
    ("DEMO-2", "Search results load slowly", "In Progress", "Ben"),
    ("DEMO-3", "Export monthly report to PDF", "Open", ""),
    ("DEMO-4", "Login button crashes when submitting form", "Open", ""),
    ("DEMO-5", "Export monthly invoices to spreadsheet", "To Do", "Chen"),
    ("DEMO-6", "Search results loading slow", "To Do", ""),
    ("DEMO-7", "Dark theme colours wrong in sidebar", "Done", "Ana"),
];

/// Records covering one pair per tier plus an unrelated record.
#[must_use]
pub fn sample_records() -> Vec<Record> {
    SAMPLE
        .iter()
        .map(|&(id, title, status, assignee)| {
            let record = Record::new(id, title).with_status(status);
            if assignee.is_empty() {
                record
            } else {
                record.with_assignee(assignee)
            }
        })
        .collect()
}
