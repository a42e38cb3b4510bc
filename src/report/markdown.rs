// src/report/markdown.rs
use super::{band_label, or_na};
use crate::aggregate::{Analysis, Group};
use crate::types::{Record, Tier};
use std::fmt::Write;

/// Formats the analysis as a Markdown document suitable for sharing.
#[must_use]
pub fn format_markdown(analysis: &Analysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Similarity Analysis Report");
    let _ = writeln!(out);

    write_summary(&mut out, analysis);

    if analysis.has_groups() {
        let _ = writeln!(out, "## Similarity Groups");
        let _ = writeln!(out);
        for tier in Tier::ALL {
            write_tier(&mut out, analysis, tier);
        }
    } else {
        let _ = writeln!(out, "_No similar records found._");
        let _ = writeln!(out);
    }

    write_ungrouped(&mut out, analysis);
    out
}

fn write_summary(out: &mut String, analysis: &Analysis) {
    let _ = writeln!(out, "## Summary");
    let _ = writeln!(out);
    let _ = writeln!(out, "- **Total records analyzed:** {}", analysis.total_records);
    let _ = writeln!(out, "- **Similarity groups found:** {}", analysis.total_groups);
    for tier in Tier::ALL {
        let _ = writeln!(
            out,
            "  - {} similarity ({} - {}): {}",
            tier.label(),
            band_label(&analysis.bounds, tier),
            tier.meaning(),
            analysis.tier_counts.get(tier)
        );
    }
    let _ = writeln!(out);
}

fn write_tier(out: &mut String, analysis: &Analysis, tier: Tier) {
    let mut groups = analysis.groups_in(tier).peekable();
    if groups.peek().is_none() {
        return;
    }

    let _ = writeln!(
        out,
        "### {} Similarity ({})",
        tier.label(),
        band_label(&analysis.bounds, tier)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "_{}_", tier.meaning());
    let _ = writeln!(out);
    for group in groups {
        write_group(out, group);
    }
}

fn write_group(out: &mut String, group: &Group) {
    let _ = writeln!(
        out,
        "#### {} ({} records, average similarity {:.1}%)",
        group.name,
        group.len(),
        group.average_score * 100.0
    );
    let _ = writeln!(out);
    write_table_header(out);
    for member in &group.members {
        write_row(out, member);
    }
    let _ = writeln!(out);
}

fn write_ungrouped(out: &mut String, analysis: &Analysis) {
    let mut ungrouped = analysis.ungrouped().peekable();
    if ungrouped.peek().is_none() {
        return;
    }

    let _ = writeln!(out, "## Analyzed but Not Grouped");
    let _ = writeln!(out);
    write_table_header(out);
    for entry in ungrouped {
        write_row(out, &entry.record);
    }
    let _ = writeln!(out);
}

fn write_table_header(out: &mut String) {
    let _ = writeln!(out, "| Key | Summary | Status | Assignee | Link |");
    let _ = writeln!(out, "|-----|---------|--------|----------|------|");
}

fn write_row(out: &mut String, record: &Record) {
    let link = record
        .link
        .as_deref()
        .filter(|l| !l.is_empty())
        .map_or_else(|| "N/A".to_string(), |l| format!("[View]({l})"));
    let _ = writeln!(
        out,
        "| {} | {} | {} | {} | {} |",
        cell(&record.id),
        cell(&record.title),
        cell(or_na(record.status.as_deref())),
        cell(or_na(record.assignee.as_deref())),
        link
    );
}

/// Escapes pipes so a value cannot break the table row.
fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::DuplicateDetector;

    #[test]
    fn tables_carry_metadata_and_links() {
        let records = vec![
            Record::new("KAN-1", "Login button crashes when submitting the form")
                .with_status("Open")
                .with_link("https://tracker.example/browse/KAN-1"),
            Record::new("KAN-2", "Login button crashes when submitting form")
                .with_assignee("Dana"),
            Record::new("KAN-3", "Dark theme colours | wrong in sidebar"),
        ];
        let analysis = DuplicateDetector::default().analyze(&records).unwrap();
        let md = format_markdown(&analysis);

        assert!(md.contains("### High Similarity (≥80%)"));
        assert!(md.contains(
            "| KAN-1 | Login button crashes when submitting the form | Open | N/A | \
             [View](https://tracker.example/browse/KAN-1) |"
        ));
        assert!(md.contains("| KAN-2 | Login button crashes when submitting form | N/A | Dana | N/A |"));
        assert!(md.contains("## Analyzed but Not Grouped"));
        assert!(md.contains("Dark theme colours \\| wrong in sidebar"));
    }

    #[test]
    fn summary_lists_every_tier() {
        let analysis = DuplicateDetector::default().analyze(&[]).unwrap();
        let md = format_markdown(&analysis);
        assert!(md.contains("- **Total records analyzed:** 0"));
        assert!(md.contains("  - Medium similarity (50-79% - Potential Duplicates): 0"));
        assert!(md.contains("_No similar records found._"));
    }
}
