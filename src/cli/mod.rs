// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands, RunArgs};
pub use handlers::{
    apply_overrides, handle_analyze, handle_config, handle_normalize, handle_sample,
    handle_score,
};
