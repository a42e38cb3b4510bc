// src/normalize/mod.rs
//! Text canonicalization ahead of similarity scoring.
//!
//! The pipeline is fixed: lowercase, turn everything that is not a letter,
//! digit or whitespace into a space, collapse whitespace, remove stopwords,
//! then fold synonyms. Synonym folding happens last and never re-triggers stopword
//! removal.

pub mod vocabulary;

pub use vocabulary::Vocabulary;

use std::sync::OnceLock;

/// Canonicalizes raw record text against an injected [`Vocabulary`].
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    vocabulary: Vocabulary,
}

impl Normalizer {
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Normalizes `raw`. Total: empty or all-noise input yields `""`.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        let cleaned: String = raw
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|word| !self.vocabulary.is_stopword(word))
            .map(|word| self.vocabulary.canonical(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Normalizes with the default domain vocabulary.
#[must_use]
pub fn normalize(raw: &str) -> String {
    static DEFAULT: OnceLock<Normalizer> = OnceLock::new();
    DEFAULT.get_or_init(Normalizer::default).normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Login FAILS: on Safari!!"), "login fails on safari");
    }

    #[test]
    fn punctuation_separates_words() {
        assert_eq!(normalize("log-in e.g. v2.1"), "log in e g v2 1");
        assert_eq!(normalize("Crash in navigator/designer"), "crash in navigation design");
    }

    #[test]
    fn hyphenated_stopword_and_synonym_still_apply() {
        assert_eq!(normalize("Navigator-error"), "navigation");
        assert_eq!(normalize("Navigator-error on save"), "navigation on save");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  search \t results\n\nslow  "), "search results slow");
    }

    #[test]
    fn removes_stopwords_in_order() {
        assert_eq!(normalize("Fix the export bug in reports"), "the export in reports");
    }

    #[test]
    fn maps_synonyms() {
        assert_eq!(normalize("Navigator error"), "navigation");
        assert_eq!(normalize("Configuration manager error"), "config manage");
    }

    #[test]
    fn noise_only_is_empty() {
        assert_eq!(normalize("Bug!! error? ISSUE..."), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn injected_vocabulary_is_used() {
        let vocabulary = Vocabulary::new(vec!["please"], vec![("crashes", "crash")]).unwrap();
        let normalizer = Normalizer::new(vocabulary);
        assert_eq!(normalizer.normalize("Please: app crashes, bug"), "app crash bug");
    }

    #[test]
    fn is_idempotent() {
        let once = normalize("The Navigator keeps crashing -- configure it? Error #42");
        assert_eq!(normalize(&once), once);
    }
}
