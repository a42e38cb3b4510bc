// src/report/ai.rs
use crate::aggregate::Analysis;
use crate::insight::{self, NO_GROUPS_MESSAGE};
use std::fmt::Write;

/// Formats the insight request as a prompt that can be pasted into a model.
#[must_use]
pub fn format_ai_prompt(analysis: &Analysis) -> String {
    let Some(request) = insight::build_request(analysis) else {
        return format!("{NO_GROUPS_MESSAGE}\n");
    };

    let mut out = String::new();
    let _ = writeln!(out, "# System");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", request.system);
    let _ = writeln!(out);
    let _ = writeln!(out, "# Context");
    let _ = writeln!(out);
    out.push_str(&request.context);
    out
}
