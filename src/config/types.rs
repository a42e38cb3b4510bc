// src/config/types.rs
use crate::grouping::{ChainingPolicy, TierBounds};
use crate::report::ReportFormat;
use crate::scoring::{TfIdfScope, Weights, DEFAULT_NGRAM_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_ngram_size")]
    pub ngram_size: usize,
    #[serde(default)]
    pub tfidf_scope: TfIdfScope,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            ngram_size: default_ngram_size(),
            tfidf_scope: TfIdfScope::default(),
        }
    }
}

const fn default_ngram_size() -> usize { DEFAULT_NGRAM_SIZE }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupingConfig {
    #[serde(default)]
    pub chaining: ChainingPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Start from empty tables instead of the built-in ones.
    #[serde(default)]
    pub replace_defaults: bool,
    /// Added to the built-in stopwords.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
    /// Added to the built-in synonym map, `word = "canonical"`.
    #[serde(default)]
    pub synonyms: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Base URL used to build `{tracker_url}/browse/{key}` links on ingest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracker_url: Option<String>,
    #[serde(default)]
    pub format: ReportFormat,
}

/// Contents of `dupehound.toml`. Every section and field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub thresholds: TierBounds,
    #[serde(default)]
    pub weights: Weights,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub grouping: GroupingConfig,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
    #[serde(default)]
    pub report: ReportConfig,
}
