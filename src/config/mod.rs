// src/config/mod.rs
//! `dupehound.toml` loading and conversion into a detector.

pub mod types;

pub use self::types::{Config, GroupingConfig, ReportConfig, ScoringConfig, VocabularyConfig};

use crate::detector::DuplicateDetector;
use crate::error::{DupeError, Result};
use crate::grouping::GroupingOptions;
use crate::normalize::{Normalizer, Vocabulary};
use crate::scoring::Scorer;
use std::path::Path;
use tracing::debug;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "dupehound.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `dupehound.toml` from the working directory.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::from_path(Path::new(CONFIG_FILE))
    }

    /// Loads a config file, falling back to defaults when it does not exist.
    ///
    /// # Errors
    /// Returns `DupeError::Io` if the file cannot be read, `DupeError::Toml`
    /// if it is malformed.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| DupeError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::parse_toml(&content)
    }

    /// Parses TOML text. Absent sections and fields take their defaults.
    ///
    /// # Errors
    /// Returns `DupeError::Toml` for malformed input.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Runs every engine validation without building anything.
    ///
    /// # Errors
    /// Returns the first invalid section's error.
    pub fn validate(&self) -> Result<()> {
        self.detector().map(|_| ())
    }

    /// Builds the vocabulary from the built-in tables and the configured
    /// additions.
    ///
    /// # Errors
    /// Returns `DupeError::Vocabulary` for invalid entries.
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        let base = if self.vocabulary.replace_defaults {
            Vocabulary::empty()
        } else {
            Vocabulary::default()
        };
        base.extended(
            self.vocabulary.extra_stopwords.iter().cloned(),
            self.vocabulary
                .synonyms
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        )
    }

    #[must_use]
    pub fn grouping_options(&self) -> GroupingOptions {
        GroupingOptions {
            bounds: self.thresholds,
            chaining: self.grouping.chaining,
        }
    }

    /// Builds a detector carrying this configuration.
    ///
    /// # Errors
    /// Returns the validation error of the first invalid section.
    pub fn detector(&self) -> Result<DuplicateDetector> {
        let normalizer = Normalizer::new(self.vocabulary()?);
        let scorer = Scorer::new(self.weights, self.scoring.ngram_size)?;
        DuplicateDetector::new(
            normalizer,
            scorer,
            self.grouping_options(),
            self.scoring.tfidf_scope,
        )
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    /// Returns `DupeError::TomlWrite` if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::ChainingPolicy;
    use crate::report::ReportFormat;
    use crate::scoring::TfIdfScope;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse_toml(
            r#"
            [thresholds]
            high = 0.9

            [scoring]
            tfidf_scope = "corpus"

            [grouping]
            chaining = "all_members"

            [report]
            format = "markdown"
            tracker_url = "https://tracker.example"
            "#,
        )
        .unwrap();

        assert!((config.thresholds.high - 0.9).abs() < f64::EPSILON);
        assert!((config.thresholds.medium - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.scoring.tfidf_scope, TfIdfScope::Corpus);
        assert_eq!(config.scoring.ngram_size, 3);
        assert_eq!(config.grouping.chaining, ChainingPolicy::AllMembers);
        assert_eq!(config.report.format, ReportFormat::Markdown);
        assert_eq!(config.report.tracker_url.as_deref(), Some("https://tracker.example"));
    }

    #[test]
    fn vocabulary_section_extends_or_replaces() {
        let extended = Config::parse_toml(
            r#"
            [vocabulary]
            extra_stopwords = ["please"]
            synonyms = { crashes = "crash" }
            "#,
        )
        .unwrap()
        .vocabulary()
        .unwrap();
        assert!(extended.is_stopword("bug"));
        assert!(extended.is_stopword("please"));
        assert_eq!(extended.canonical("crashes"), "crash");

        let replaced = Config::parse_toml("[vocabulary]\nreplace_defaults = true\n")
            .unwrap()
            .vocabulary()
            .unwrap();
        assert!(!replaced.is_stopword("bug"));
    }

    #[test]
    fn invalid_sections_fail_validation() {
        let bad_bounds = Config::parse_toml("[thresholds]\nlow = 0.6\n").unwrap();
        assert!(matches!(bad_bounds.validate(), Err(DupeError::TierBounds(_))));

        let bad_weights = Config::parse_toml("[weights]\nsequence = 0.9\n").unwrap();
        assert!(matches!(bad_weights.validate(), Err(DupeError::Scoring(_))));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(matches!(
            Config::parse_toml("[thresholds\nhigh = "),
            Err(DupeError::Toml(_))
        ));
    }

    #[test]
    fn rendered_toml_parses_back() {
        let mut config = Config::default();
        config.report.tracker_url = Some("https://tracker.example".into());
        let text = config.to_toml().unwrap();
        assert!(text.contains("[thresholds]"));
        assert_eq!(Config::parse_toml(&text).unwrap(), config);
    }
}
