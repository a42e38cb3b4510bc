// src/report/mod.rs
//! Output formatting for analysis results.

pub mod ai;
pub mod json;
pub mod markdown;
pub mod terminal;

pub use ai::format_ai_prompt;
pub use json::format_json;
pub use markdown::format_markdown;
pub use terminal::format_terminal;

use crate::aggregate::Analysis;
use crate::error::Result;
use crate::grouping::TierBounds;
use crate::types::Tier;
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
    Ai,
}

/// Formats the analysis according to the specified format.
///
/// # Errors
/// Returns `DupeError::Json` if JSON serialization fails.
pub fn format_report(analysis: &Analysis, format: ReportFormat) -> Result<String> {
    Ok(match format {
        ReportFormat::Terminal => format_terminal(analysis),
        ReportFormat::Json => format_json(analysis)?,
        ReportFormat::Markdown => format_markdown(analysis),
        ReportFormat::Ai => format_ai_prompt(analysis),
    })
}

/// Display value for optional metadata.
pub(crate) fn or_na(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("N/A")
}

/// Removes terminal colour codes, for reports written to a file.
///
/// # Errors
/// Returns `DupeError::Regex` if the escape pattern fails to compile.
pub fn strip_ansi(text: &str) -> Result<String> {
    let escapes = Regex::new(r"\x1b\[[0-9;]*m")?;
    Ok(escapes.replace_all(text, "").into_owned())
}

/// Whole-percent band for a tier, e.g. `≥80%` or `50-79%`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn band_label(bounds: &TierBounds, tier: Tier) -> String {
    let percent = |bound: f64| ((bound * 100.0) - 1e-9).ceil().max(0.0) as u32;
    let lower = percent(bounds.lower(tier));
    match bounds.upper(tier) {
        None => format!("≥{lower}%"),
        Some(upper) => format!("{lower}-{}%", percent(upper).saturating_sub(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bands_read_as_whole_percentages() {
        let bounds = TierBounds::default();
        assert_eq!(band_label(&bounds, Tier::High), "≥80%");
        assert_eq!(band_label(&bounds, Tier::Medium), "50-79%");
        assert_eq!(band_label(&bounds, Tier::Low), "30-49%");
    }

    #[test]
    fn colour_codes_are_stripped() {
        let coloured = "\x1b[1;31m🔥 HIGH\x1b[0m avg \x1b[2m(91.0%)\x1b[0m";
        assert_eq!(strip_ansi(coloured).unwrap(), "🔥 HIGH avg (91.0%)");
        assert_eq!(strip_ansi("plain | text").unwrap(), "plain | text");
    }

    #[test]
    fn missing_metadata_reads_na() {
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_na(Some("")), "N/A");
        assert_eq!(or_na(Some("Open")), "Open");
    }
}
