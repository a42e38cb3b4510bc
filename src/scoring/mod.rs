// src/scoring/mod.rs
//! Similarity scoring between two normalized texts.
//!
//! Four independent signals are combined by a fixed weighted sum:
//! - **Sequence**: character LCS ratio, catches near-verbatim text
//! - **TF-IDF**: cosine of weighted term vectors
//! - **Word overlap**: Jaccard over word sets
//! - **N-gram overlap**: Jaccard over character n-grams, tolerant of typos

pub mod overlap;
pub mod profile;
pub mod sequence;
pub mod tfidf;

pub use profile::{TextProfile, DEFAULT_NGRAM_SIZE};
pub use tfidf::{IdfTable, TfIdfScope};

use crate::error::{DupeError, Result};
use serde::{Deserialize, Serialize};

/// Tolerance when checking that weights sum to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// A signal: takes two profiles and the IDF table, returns a value in [0, 1].
pub type Measure = fn(&TextProfile, &TextProfile, &IdfTable) -> f64;

/// Weights of the four signals. Must be non-negative and sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(default = "default_sequence")]
    pub sequence: f64,
    #[serde(default = "default_tfidf")]
    pub tfidf: f64,
    #[serde(default = "default_overlap")]
    pub overlap: f64,
    #[serde(default = "default_ngram")]
    pub ngram: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            sequence: default_sequence(),
            tfidf: default_tfidf(),
            overlap: default_overlap(),
            ngram: default_ngram(),
        }
    }
}

const fn default_sequence() -> f64 { 0.30 }
const fn default_tfidf() -> f64 { 0.30 }
const fn default_overlap() -> f64 { 0.20 }
const fn default_ngram() -> f64 { 0.20 }

impl Weights {
    /// Validates the weights.
    ///
    /// # Errors
    /// Returns `DupeError::Scoring` for negative or non-finite weights, or
    /// weights that do not sum to 1.
    pub fn validate(&self) -> Result<()> {
        let all = [
            ("sequence", self.sequence),
            ("tfidf", self.tfidf),
            ("overlap", self.overlap),
            ("ngram", self.ngram),
        ];
        for (name, w) in all {
            if !w.is_finite() || w < 0.0 {
                return Err(DupeError::Scoring(format!(
                    "weight '{name}' must be a non-negative number, got {w}"
                )));
            }
        }
        let sum: f64 = all.iter().map(|(_, w)| w).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(DupeError::Scoring(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

/// One named, weighted signal in the combination.
#[derive(Debug, Clone, Copy)]
pub struct Signal {
    pub name: &'static str,
    pub weight: f64,
    pub measure: Measure,
}

/// Per-signal values for a single pair, for explaining a score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub signals: Vec<(&'static str, f64)>,
    pub total: f64,
}

/// Combines the four signals into one score in [0, 1].
#[derive(Debug, Clone)]
pub struct Scorer {
    signals: [Signal; 4],
    ngram_size: usize,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::build(Weights::default(), DEFAULT_NGRAM_SIZE)
    }
}

impl Scorer {
    /// Creates a scorer with custom weights and n-gram width.
    ///
    /// # Errors
    /// Returns `DupeError::Scoring` if the weights are invalid or
    /// `ngram_size` is zero.
    pub fn new(weights: Weights, ngram_size: usize) -> Result<Self> {
        weights.validate()?;
        if ngram_size == 0 {
            return Err(DupeError::Scoring("ngram_size must be at least 1".into()));
        }
        Ok(Self::build(weights, ngram_size))
    }

    fn build(weights: Weights, ngram_size: usize) -> Self {
        Self {
            signals: [
                Signal {
                    name: "sequence",
                    weight: weights.sequence,
                    measure: sequence::sequence_ratio,
                },
                Signal {
                    name: "tfidf",
                    weight: weights.tfidf,
                    measure: tfidf::tfidf_cosine,
                },
                Signal {
                    name: "overlap",
                    weight: weights.overlap,
                    measure: overlap::word_overlap,
                },
                Signal {
                    name: "ngram",
                    weight: weights.ngram,
                    measure: overlap::ngram_overlap,
                },
            ],
            ngram_size,
        }
    }

    #[must_use]
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    #[must_use]
    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    /// Builds the profile this scorer expects for a normalized text.
    #[must_use]
    pub fn profile(&self, normalized: &str) -> TextProfile {
        TextProfile::new(normalized, self.ngram_size)
    }

    /// Scores two normalized texts, using the pair itself for IDF.
    #[must_use]
    pub fn score(&self, a: &str, b: &str) -> f64 {
        self.score_profiles(&self.profile(a), &self.profile(b), &IdfTable::Pair)
    }

    /// Scores two prepared profiles.
    ///
    /// Empty text on either side scores 0.0; identical non-empty text scores
    /// exactly 1.0.
    #[must_use]
    pub fn score_profiles(&self, a: &TextProfile, b: &TextProfile, idf: &IdfTable) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        if a.text() == b.text() {
            return 1.0;
        }
        let total: f64 = self
            .signals
            .iter()
            .map(|s| s.weight * (s.measure)(a, b, idf))
            .sum();
        total.clamp(0.0, 1.0)
    }

    /// Scores two normalized texts and reports each signal's raw value.
    #[must_use]
    pub fn breakdown(&self, a: &str, b: &str) -> ScoreBreakdown {
        let (pa, pb) = (self.profile(a), self.profile(b));
        let signals = self
            .signals
            .iter()
            .map(|s| (s.name, (s.measure)(&pa, &pb, &IdfTable::Pair)))
            .collect();
        ScoreBreakdown {
            signals,
            total: self.score_profiles(&pa, &pb, &IdfTable::Pair),
        }
    }
}
