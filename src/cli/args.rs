// src/cli/args.rs
use crate::grouping::ChainingPolicy;
use crate::report::ReportFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dupehound",
    version,
    about = "Finds duplicate and related issue-tracker records"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Config file to read instead of ./dupehound.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Log pipeline details to stderr (same as `RUST_LOG=debug`)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Group the records of a JSON export by similarity
    Analyze {
        /// Flat record array or tracker export
        file: PathBuf,
        /// Base URL for `{url}/browse/{key}` links
        #[arg(long, value_name = "URL")]
        tracker_url: Option<String>,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Analyze the built-in demo records
    Sample {
        #[command(flatten)]
        run: RunArgs,
    },
    /// Score two texts and show each signal
    Score { a: String, b: String },
    /// Print the normalized form of a text
    Normalize { text: String },
    /// Print the effective configuration as TOML
    Config,
}

/// Flags shared by every command that runs an analysis. Each overrides the
/// matching config file value when given.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Lower bound of the High tier
    #[arg(long)]
    pub high: Option<f64>,
    /// Lower bound of the Medium tier
    #[arg(long)]
    pub medium: Option<f64>,
    /// Lower bound of the Low tier; pairs below it are never grouped
    #[arg(long)]
    pub low: Option<f64>,
    #[arg(long, value_enum)]
    pub chaining: Option<ChainingPolicy>,
    /// Compute IDF over every record instead of per pair
    #[arg(long)]
    pub corpus_idf: bool,
    /// Write the report to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
