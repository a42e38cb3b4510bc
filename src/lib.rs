// src/lib.rs
//! Duplicate detection for issue-tracker records.
//!
//! Records are normalized, scored pairwise with four weighted text signals,
//! and grouped greedily into High, Medium and Low similarity tiers, with
//! each record placed in at most one group.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod grouping;
pub mod ingest;
pub mod insight;
pub mod matrix;
pub mod normalize;
pub mod report;
pub mod sample;
pub mod scoring;
pub mod types;

pub use aggregate::{Analysis, Group};
pub use detector::DuplicateDetector;
pub use error::{DupeError, Result};
pub use grouping::{ChainingPolicy, GroupingOptions, TierBounds};
pub use normalize::{normalize, Normalizer, Vocabulary};
pub use scoring::{Scorer, Weights};
pub use types::{PairScore, Record, Tier};
