// src/ingest.rs
//! Loading records from JSON exports.
//!
//! Two shapes are accepted, alone or mixed, either as a top-level array or
//! under an `"issues"` key:
//! - flat records: `{"id", "title", "body", "status", "assignee", "link"}`
//! - tracker issues: `{"key", "fields": {"summary", "description",
//!   "status": {"name"}, "assignee": {"displayName"}}}`

use crate::error::{DupeError, Result};
use crate::types::Record;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    List(Vec<RawRecord>),
    Search { issues: Vec<RawRecord> },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRecord {
    Tracker(TrackerIssue),
    Flat(Record),
}

#[derive(Debug, Deserialize)]
struct TrackerIssue {
    key: String,
    fields: TrackerFields,
}

#[derive(Debug, Default, Deserialize)]
struct TrackerFields {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    description: Option<Value>,
    #[serde(default)]
    status: Option<Named>,
    #[serde(default)]
    assignee: Option<Person>,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Person {
    display_name: Option<String>,
}

/// Strips markup from record bodies.
#[derive(Debug, Clone)]
pub struct BodyCleaner {
    tags: Regex,
}

impl BodyCleaner {
    /// # Errors
    /// Returns `DupeError::Regex` if the tag pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            tags: Regex::new(r"<[^>]+>")?,
        })
    }

    /// Removes HTML tags and trims; `None` when nothing is left.
    #[must_use]
    pub fn clean(&self, body: &str) -> Option<String> {
        let stripped = self.tags.replace_all(body, "");
        let trimmed = stripped.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// Parses records from a JSON string.
///
/// When `tracker_url` is set, tracker issues without a link get
/// `{tracker_url}/browse/{key}`.
///
/// # Errors
/// Returns `DupeError::Json` if the document matches neither shape.
pub fn parse_records(json: &str, tracker_url: Option<&str>) -> Result<Vec<Record>> {
    let document: Document = serde_json::from_str(json)?;
    let raw = match document {
        Document::List(list) | Document::Search { issues: list } => list,
    };

    let cleaner = BodyCleaner::new()?;
    Ok(raw
        .into_iter()
        .map(|r| match r {
            RawRecord::Tracker(issue) => from_tracker(issue, &cleaner, tracker_url),
            RawRecord::Flat(mut record) => {
                record.body = record.body.as_deref().and_then(|b| cleaner.clean(b));
                record
            }
        })
        .collect())
}

/// Reads and parses a JSON export from disk.
///
/// # Errors
/// Returns `DupeError::Io` (with the path) if the file cannot be read, or a
/// parse error from [`parse_records`].
pub fn load_records(path: &Path, tracker_url: Option<&str>) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path).map_err(|source| DupeError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_records(&content, tracker_url)
}

fn from_tracker(issue: TrackerIssue, cleaner: &BodyCleaner, tracker_url: Option<&str>) -> Record {
    let TrackerIssue { key, fields } = issue;
    let body = fields
        .description
        .as_ref()
        .map(description_text)
        .and_then(|text| cleaner.clean(&text));
    let link = tracker_url.map(|base| format!("{}/browse/{key}", base.trim_end_matches('/')));

    Record {
        title: fields.summary.unwrap_or_default(),
        body,
        status: fields.status.and_then(|s| s.name),
        assignee: fields.assignee.and_then(|a| a.display_name),
        link,
        id: key,
    }
}

/// Flattens a description that is either plain text or a rich-text document
/// tree (nodes with `"text"` leaves under `"content"`).
fn description_text(value: &Value) -> String {
    let mut parts = Vec::new();
    collect_text(value, &mut parts);
    parts.join(" ")
}

fn collect_text<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
    match value {
        Value::String(s) => out.push(s),
        Value::Array(items) => items.iter().for_each(|v| collect_text(v, out)),
        Value::Object(map) => {
            if let Some(Value::String(text)) = map.get("text") {
                out.push(text);
            }
            if let Some(content) = map.get("content") {
                collect_text(content, out);
            }
        }
        _ => {}
    }
}
