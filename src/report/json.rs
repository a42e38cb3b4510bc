// src/report/json.rs
use crate::aggregate::Analysis;
use crate::error::Result;

/// Formats the analysis as pretty JSON for machine consumption.
///
/// # Errors
/// Returns `DupeError::Json` if serialization fails.
pub fn format_json(analysis: &Analysis) -> Result<String> {
    let mut out = serde_json::to_string_pretty(analysis)?;
    out.push('\n');
    Ok(out)
}
