// src/scoring/profile.rs
//! Precomputed per-text features so pairwise scoring does not re-tokenize.

use std::collections::{BTreeMap, HashSet};

/// Character n-gram width used unless configured otherwise.
pub const DEFAULT_NGRAM_SIZE: usize = 3;

/// A normalized text plus the derived views every signal needs.
#[derive(Debug, Clone)]
pub struct TextProfile {
    text: String,
    chars: Vec<char>,
    terms: BTreeMap<String, usize>,
    ngrams: HashSet<String>,
}

impl TextProfile {
    /// Builds a profile from already-normalized text.
    #[must_use]
    pub fn new(normalized: impl Into<String>, ngram_size: usize) -> Self {
        let text = normalized.into();
        let chars: Vec<char> = text.chars().collect();

        let mut terms = BTreeMap::new();
        for word in text.split_whitespace() {
            *terms.entry(word.to_string()).or_insert(0) += 1;
        }

        let ngrams = char_ngrams(&chars, ngram_size);

        Self {
            text,
            chars,
            terms,
            ngrams,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Term counts, ordered by term.
    #[must_use]
    pub fn terms(&self) -> &BTreeMap<String, usize> {
        &self.terms
    }

    #[must_use]
    pub fn has_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    #[must_use]
    pub fn ngrams(&self) -> &HashSet<String> {
        &self.ngrams
    }
}

fn char_ngrams(chars: &[char], n: usize) -> HashSet<String> {
    if n == 0 || chars.len() < n {
        return HashSet::new();
    }
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_terms() {
        let p = TextProfile::new("login page login", 3);
        assert_eq!(p.terms().get("login"), Some(&2));
        assert_eq!(p.terms().get("page"), Some(&1));
    }

    #[test]
    fn trigram_set_is_deduplicated() {
        let p = TextProfile::new("aaaa", 3);
        assert_eq!(p.ngrams().len(), 1);
        assert!(p.ngrams().contains("aaa"));
    }

    #[test]
    fn short_text_has_no_ngrams() {
        assert!(TextProfile::new("ab", 3).ngrams().is_empty());
    }
}
