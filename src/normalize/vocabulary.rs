// src/normalize/vocabulary.rs
//! Stopword and synonym tables used by the normalizer.

use crate::error::{DupeError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Domain noise words that say nothing about what a ticket is about.
pub const DEFAULT_STOPWORDS: &[&str] = &["error", "issue", "bug", "problem", "fix", "resolve"];

/// Near-synonyms folded onto one canonical token.
pub const DEFAULT_SYNONYMS: &[(&str, &str)] = &[
    ("navigator", "navigation"),
    ("navigate", "navigation"),
    ("navigating", "navigation"),
    ("designer", "design"),
    ("designing", "design"),
    ("manager", "manage"),
    ("managing", "manage"),
    ("configuration", "config"),
    ("configure", "config"),
];

/// An immutable, validated stopword list and synonym map.
///
/// Construction checks the tables so that normalizing twice is the same as
/// normalizing once: canonical forms are never stopwords and never map again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    stopwords: BTreeSet<String>,
    synonyms: BTreeMap<String, String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| (*s).to_string()).collect(),
            synonyms: DEFAULT_SYNONYMS
                .iter()
                .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
                .collect(),
        }
    }
}

impl Vocabulary {
    /// Builds a vocabulary from explicit tables.
    ///
    /// # Errors
    /// Returns `DupeError::Vocabulary` if an entry is not a single lowercase
    /// alphanumeric token, a canonical form is a stopword, or a canonical form
    /// is itself a synonym key.
    pub fn new<S, K, V>(
        stopwords: impl IntoIterator<Item = S>,
        synonyms: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        S: Into<String>,
        K: Into<String>,
        V: Into<String>,
    {
        let vocabulary = Self {
            stopwords: stopwords.into_iter().map(Into::into).collect(),
            synonyms: synonyms
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        };
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// A vocabulary that leaves every word alone.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            stopwords: BTreeSet::new(),
            synonyms: BTreeMap::new(),
        }
    }

    /// Returns a copy with additional entries layered on top.
    ///
    /// # Errors
    /// Same validation as [`Vocabulary::new`], applied to the merged tables.
    pub fn extended<S, K, V>(
        &self,
        stopwords: impl IntoIterator<Item = S>,
        synonyms: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        S: Into<String>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut merged = self.clone();
        merged.stopwords.extend(stopwords.into_iter().map(Into::into));
        merged
            .synonyms
            .extend(synonyms.into_iter().map(|(k, v)| (k.into(), v.into())));
        merged.validate()?;
        Ok(merged)
    }

    #[must_use]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Maps a word to its canonical form, or returns it unchanged.
    #[must_use]
    pub fn canonical<'a>(&'a self, word: &'a str) -> &'a str {
        self.synonyms.get(word).map_or(word, String::as_str)
    }

    pub fn stopwords(&self) -> impl Iterator<Item = &str> {
        self.stopwords.iter().map(String::as_str)
    }

    pub fn synonyms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.synonyms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn validate(&self) -> Result<()> {
        let words = self
            .stopwords
            .iter()
            .chain(self.synonyms.keys())
            .chain(self.synonyms.values());
        for word in words {
            if !is_token(word) {
                return Err(DupeError::Vocabulary(format!(
                    "'{word}' is not a single lowercase alphanumeric word"
                )));
            }
        }

        for (from, to) in &self.synonyms {
            if self.stopwords.contains(to) {
                return Err(DupeError::Vocabulary(format!(
                    "synonym '{from}' maps to stopword '{to}'"
                )));
            }
            if self.synonyms.contains_key(to) {
                return Err(DupeError::Vocabulary(format!(
                    "synonym '{from}' maps to '{to}', which is mapped again"
                )));
            }
        }
        Ok(())
    }
}

fn is_token(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphanumeric) && word.to_lowercase() == word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_are_valid() {
        assert!(Vocabulary::default().validate().is_ok());
    }

    #[test]
    fn rejects_chained_synonyms() {
        let result = Vocabulary::new(Vec::<String>::new(), vec![("a1", "b1"), ("b1", "c1")]);
        assert!(matches!(result, Err(DupeError::Vocabulary(_))));
    }

    #[test]
    fn rejects_synonym_onto_stopword() {
        let result = Vocabulary::new(vec!["crash"], vec![("crashes", "crash")]);
        assert!(matches!(result, Err(DupeError::Vocabulary(_))));
    }

    #[test]
    fn rejects_multi_word_entries() {
        assert!(Vocabulary::new(vec!["two words"], Vec::<(String, String)>::new()).is_err());
        assert!(Vocabulary::new(vec!["Upper"], Vec::<(String, String)>::new()).is_err());
    }

    #[test]
    fn extended_keeps_defaults() {
        let v = Vocabulary::default()
            .extended(vec!["please"], vec![("crashes", "crash")])
            .unwrap();
        assert!(v.is_stopword("bug"));
        assert!(v.is_stopword("please"));
        assert_eq!(v.canonical("crashes"), "crash");
        assert_eq!(v.canonical("navigator"), "navigation");
    }
}
