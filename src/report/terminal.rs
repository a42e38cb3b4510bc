// src/report/terminal.rs
use super::band_label;
use crate::aggregate::{Analysis, Group};
use crate::types::Tier;
use colored::{ColoredString, Colorize};
use std::fmt::Write;

/// Formats the analysis for terminal display.
#[must_use]
pub fn format_terminal(analysis: &Analysis) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "─".repeat(70).dimmed());
    let _ = writeln!(out, "{}", " 🔍 SIMILARITY ANALYSIS REPORT ".cyan().bold());
    let _ = writeln!(out, "{}", "─".repeat(70).dimmed());
    let _ = writeln!(out);

    write_summary(&mut out, analysis);

    if analysis.has_groups() {
        for tier in Tier::ALL {
            write_tier(&mut out, analysis, tier);
        }
        write_ungrouped(&mut out, analysis);
    } else {
        let _ = writeln!(
            out,
            "{}",
            "✨ No similar records found. Nothing looks duplicated.".green()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "─".repeat(70).dimmed());

    out
}

fn write_summary(out: &mut String, analysis: &Analysis) {
    let _ = writeln!(out, "{}", "📊 SUMMARY".cyan().bold());
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "   Records analyzed:  {}",
        analysis.total_records.to_string().white()
    );
    let _ = writeln!(
        out,
        "   Groups found:      {}",
        format_count(analysis.total_groups)
    );
    let _ = writeln!(out);

    for tier in Tier::ALL {
        let label = format!("{} ({})", tier.label(), band_label(&analysis.bounds, tier));
        let _ = writeln!(
            out,
            "   {label:<22} {}",
            format_count(analysis.tier_counts.get(tier))
        );
    }
    let _ = writeln!(out);
}

fn format_count(n: usize) -> String {
    if n == 0 {
        "0".dimmed().to_string()
    } else {
        n.to_string().yellow().to_string()
    }
}

fn tier_heading(tier: Tier) -> ColoredString {
    let text = format!("{} SIMILARITY · {}", tier.label().to_uppercase(), tier.meaning());
    match tier {
        Tier::High => format!("🔥 {text}").red().bold(),
        Tier::Medium => format!("🟡 {text}").yellow().bold(),
        Tier::Low => format!("🟠 {text}").bright_yellow().bold(),
    }
}

fn write_tier(out: &mut String, analysis: &Analysis, tier: Tier) {
    let mut groups = analysis.groups_in(tier).peekable();
    if groups.peek().is_none() {
        return;
    }

    let _ = writeln!(out, "{}", tier_heading(tier));
    let _ = writeln!(out);
    for group in groups {
        write_group(out, group);
    }
}

fn write_group(out: &mut String, group: &Group) {
    let _ = writeln!(
        out,
        "   {} {}",
        group.name.white().bold(),
        format!("(avg {})", format_percent(group.average_score)).dimmed()
    );
    for member in &group.members {
        let _ = writeln!(out, "     {} {}", format!("{}:", member.id).cyan(), member.title);
    }
    let _ = writeln!(out);
}

fn write_ungrouped(out: &mut String, analysis: &Analysis) {
    let mut ungrouped = analysis.ungrouped().peekable();
    if ungrouped.peek().is_none() {
        return;
    }

    let _ = writeln!(out, "{}", "📋 NOT GROUPED".cyan().bold());
    let _ = writeln!(out);
    for entry in ungrouped {
        let _ = writeln!(
            out,
            "     {} {}",
            format!("{}:", entry.record.id).dimmed(),
            entry.record.title.dimmed()
        );
    }
}

fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::DuplicateDetector;
    use crate::types::Record;

    #[test]
    fn lists_groups_and_leftovers() {
        let records = vec![
            Record::new("A-1", "Login button crashes when submitting the form"),
            Record::new("A-2", "Dark theme colours wrong in sidebar"),
            Record::new("A-3", "Login button crashes when submitting form"),
        ];
        let analysis = DuplicateDetector::default().analyze(&records).unwrap();
        let out = format_terminal(&analysis);

        assert!(out.contains("SIMILARITY ANALYSIS REPORT"));
        assert!(out.contains("high_similarity_group_1"));
        assert!(out.contains("A-3:"));
        assert!(out.contains("Login button crashes when submitting form"));
        assert!(out.contains("NOT GROUPED"));
        assert!(out.contains("A-2:"));
    }

    #[test]
    fn empty_analysis_says_so() {
        let analysis = DuplicateDetector::default().analyze(&[]).unwrap();
        let out = format_terminal(&analysis);
        assert!(out.contains("No similar records found"));
        assert!(!out.contains("NOT GROUPED"));
    }
}
