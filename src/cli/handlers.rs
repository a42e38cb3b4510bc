// src/cli/handlers.rs
//! Command handlers behind the `dupehound` binary.

use super::args::RunArgs;
use crate::aggregate::Analysis;
use crate::config::Config;
use crate::ingest;
use crate::report::{self, ReportFormat};
use crate::sample;
use crate::scoring::TfIdfScope;
use crate::types::Record;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Layers command-line flags over the loaded configuration.
pub fn apply_overrides(config: &mut Config, run: &RunArgs) {
    if let Some(format) = run.format {
        config.report.format = format;
    }
    if let Some(high) = run.high {
        config.thresholds.high = high;
    }
    if let Some(medium) = run.medium {
        config.thresholds.medium = medium;
    }
    if let Some(low) = run.low {
        config.thresholds.low = low;
    }
    if let Some(chaining) = run.chaining {
        config.grouping.chaining = chaining;
    }
    if run.corpus_idf {
        config.scoring.tfidf_scope = TfIdfScope::Corpus;
    }
}

/// Analyzes the records in `file`.
///
/// # Errors
/// Returns error if the file cannot be loaded, the configuration is invalid,
/// or the report cannot be written.
pub fn handle_analyze(
    config: &Config,
    file: &Path,
    tracker_url: Option<&str>,
    run: &RunArgs,
) -> Result<()> {
    let tracker_url = tracker_url.or(config.report.tracker_url.as_deref());
    let records = ingest::load_records(file, tracker_url)
        .with_context(|| format!("Failed to load records from {}", file.display()))?;
    run_analysis(config, &records, run)
}

/// Analyzes the built-in demo records.
///
/// # Errors
/// Returns error if the configuration is invalid or the report cannot be
/// written.
pub fn handle_sample(config: &Config, run: &RunArgs) -> Result<()> {
    run_analysis(config, &sample::sample_records(), run)
}

fn run_analysis(config: &Config, records: &[Record], run: &RunArgs) -> Result<()> {
    let mut config = config.clone();
    apply_overrides(&mut config, run);
    let detector = config.detector().context("Invalid configuration")?;

    let format = config.report.format;
    if format == ReportFormat::Terminal && run.output.is_none() {
        println!(
            "{}",
            format!("🔍 Analyzing {} records...", records.len()).cyan()
        );
    }

    let analysis = detector.analyze(records)?;
    emit(&analysis, format, run.output.as_deref())
}

fn emit(analysis: &Analysis, format: ReportFormat, output: Option<&Path>) -> Result<()> {
    let Some(path) = output else {
        print!("{}", report::format_report(analysis, format)?);
        return Ok(());
    };

    let rendered = report::strip_ansi(&report::format_report(analysis, format)?)?;
    fs::write(path, rendered)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    eprintln!(
        "{} Report written to {}",
        "✓".green(),
        path.display().to_string().white().bold()
    );
    Ok(())
}

/// Prints the normalized texts and per-signal scores for two inputs.
///
/// # Errors
/// Returns error if the configuration is invalid.
pub fn handle_score(config: &Config, a: &str, b: &str) -> Result<()> {
    let detector = config.detector().context("Invalid configuration")?;
    let normalized_a = detector.normalizer().normalize(a);
    let normalized_b = detector.normalizer().normalize(b);
    let breakdown = detector.scorer().breakdown(&normalized_a, &normalized_b);

    println!("   A: {}", normalized_a.white());
    println!("   B: {}", normalized_b.white());
    println!();
    for (signal, (name, value)) in detector.scorer().signals().iter().zip(&breakdown.signals) {
        println!(
            "   {name:<10} {value:.4}  {}",
            format!("× {:.2}", signal.weight).dimmed()
        );
    }
    println!();

    let tier = config.thresholds.classify(breakdown.total);
    let verdict = tier.map_or_else(
        || "below grouping floor".dimmed(),
        |t| format!("{t} ({})", t.meaning()).yellow(),
    );
    println!(
        "   {} {}  {verdict}",
        "score".cyan().bold(),
        format!("{:.4}", breakdown.total).white().bold()
    );
    Ok(())
}

/// Prints the normalized form of `text`.
///
/// # Errors
/// Returns error if the configured vocabulary is invalid.
pub fn handle_normalize(config: &Config, text: &str) -> Result<()> {
    let detector = config.detector().context("Invalid configuration")?;
    println!("{}", detector.normalizer().normalize(text));
    Ok(())
}

/// Prints the effective configuration.
///
/// # Errors
/// Returns error if the configuration is invalid or cannot be rendered.
pub fn handle_config(config: &Config) -> Result<()> {
    config.validate().context("Invalid configuration")?;
    print!("{}", config.to_toml()?);
    Ok(())
}
