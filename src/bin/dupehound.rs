// src/bin/dupehound.rs
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use dupehound_core::cli::{self, Cli, Commands};
use dupehound_core::config::Config;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(e) = run(&cli) {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => {
            anyhow::ensure!(path.exists(), "config file {} not found", path.display());
            Config::from_path(path)
        }
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    dispatch(&cli.command, &config)
}

fn dispatch(cmd: &Commands, config: &Config) -> Result<()> {
    match cmd {
        Commands::Analyze {
            file,
            tracker_url,
            run,
        } => cli::handle_analyze(config, file, tracker_url.as_deref(), run),
        Commands::Sample { run } => cli::handle_sample(config, run),
        Commands::Score { a, b } => cli::handle_score(config, a, b),
        Commands::Normalize { text } => cli::handle_normalize(config, text),
        Commands::Config => cli::handle_config(config),
    }
}
