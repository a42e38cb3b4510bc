// src/scoring/tfidf.rs
//! TF-IDF cosine similarity over word tokens.
//!
//! Term weights are raw counts times a smoothed inverse document frequency,
//! `ln((1 + N) / (1 + df)) + 1`. The document set is either just the pair
//! being compared or a whole corpus.

use super::profile::TextProfile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which documents the inverse document frequency is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TfIdfScope {
    /// Only the two texts being compared.
    #[default]
    Pair,
    /// Every text in the batch being scored.
    Corpus,
}

/// Document frequencies backing the IDF term.
#[derive(Debug, Clone, PartialEq)]
pub enum IdfTable {
    Pair,
    Corpus {
        documents: usize,
        frequencies: HashMap<String, usize>,
    },
}

impl IdfTable {
    /// Counts, for every term, how many profiles contain it.
    #[must_use]
    pub fn from_corpus(profiles: &[TextProfile]) -> Self {
        let mut frequencies: HashMap<String, usize> = HashMap::new();
        for profile in profiles {
            for term in profile.terms().keys() {
                *frequencies.entry(term.clone()).or_insert(0) += 1;
            }
        }
        Self::Corpus {
            documents: profiles.len(),
            frequencies,
        }
    }

    #[must_use]
    pub fn for_scope(scope: TfIdfScope, profiles: &[TextProfile]) -> Self {
        match scope {
            TfIdfScope::Pair => Self::Pair,
            TfIdfScope::Corpus => Self::from_corpus(profiles),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn idf(&self, term: &str, a: &TextProfile, b: &TextProfile) -> f64 {
        let in_pair = usize::from(a.has_term(term)) + usize::from(b.has_term(term));
        let (documents, df) = match self {
            Self::Pair => (2, in_pair),
            Self::Corpus {
                documents,
                frequencies,
            } => {
                let df = frequencies.get(term).copied().unwrap_or(in_pair);
                ((*documents).max(2), df.max(in_pair))
            }
        };
        ((1 + documents) as f64 / (1 + df) as f64).ln() + 1.0
    }
}

/// Cosine similarity of the two TF-IDF vectors; 0.0 for a zero vector.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tfidf_cosine(a: &TextProfile, b: &TextProfile, idf: &IdfTable) -> f64 {
    if a.terms().is_empty() || b.terms().is_empty() {
        return 0.0;
    }

    let weight = |count: usize, term: &str| count as f64 * idf.idf(term, a, b);

    let norm = |p: &TextProfile| -> f64 {
        p.terms()
            .iter()
            .map(|(t, &c)| weight(c, t.as_str()).powi(2))
            .sum()
    };
    let (norm_a, norm_b) = (norm(a), norm(b));

    // Both maps are ordered by term, so the intersection is visited in the
    // same order whichever side drives the loop.
    let dot: f64 = a
        .terms()
        .iter()
        .filter_map(|(t, &ca)| {
            let cb = *b.terms().get(t)?;
            Some(weight(ca, t.as_str()) * weight(cb, t.as_str()))
        })
        .sum();

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(0.0, 1.0)
    }
}
