// src/insight.rs
//! Context for an external insight generator (for example an LLM call).
//!
//! Nothing here performs I/O; it only shapes groups into the text such a
//! collaborator consumes.

use crate::aggregate::{Analysis, Group};
use serde::Serialize;
use std::fmt::Write;

/// Instruction given to the insight generator alongside the group context.
pub const SYSTEM_PROMPT: &str = "You are an expert issue tracker administrator analyzing \
    duplicate issues. Provide insights about the duplicate groups found, including \
    recommendations for consolidation and potential root causes.";

/// Returned in place of a request when there is nothing to analyze.
pub const NO_GROUPS_MESSAGE: &str = "No duplicate issues found.";

/// A ready-to-send insight request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightRequest {
    pub system: String,
    pub context: String,
}

/// Renders one group as the unit of input for insight generation.
#[must_use]
pub fn group_context(group: &Group) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Group {} ({} similarity):", group.name, group.tier);
    for member in &group.members {
        let _ = writeln!(out, "  - {}: {}", member.id, member.title);
    }
    let _ = writeln!(out, "  Similarity Score: {:.3}", group.average_score);
    out
}

/// Builds the request for every group, or `None` when no groups were found.
#[must_use]
pub fn build_request(analysis: &Analysis) -> Option<InsightRequest> {
    if !analysis.has_groups() {
        return None;
    }

    let mut context = String::from("Duplicate Issue Analysis:\n\n");
    for group in &analysis.groups {
        context.push_str(&group_context(group));
        context.push('\n');
    }

    Some(InsightRequest {
        system: SYSTEM_PROMPT.to_string(),
        context,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Record, Tier};

    #[test]
    fn group_context_lists_members_and_score() {
        let group = Group {
            name: "high_similarity_group_1".into(),
            tier: Tier::High,
            members: vec![
                Record::new("KAN-1", "Login crash"),
                Record::new("KAN-4", "Login crashes"),
            ],
            average_score: 0.912_34,
        };
        let text = group_context(&group);
        assert!(text.starts_with("Group high_similarity_group_1 (High similarity):"));
        assert!(text.contains("  - KAN-4: Login crashes\n"));
        assert!(text.contains("Similarity Score: 0.912"));
    }
}
