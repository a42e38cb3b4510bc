// src/scoring/overlap.rs
//! Set-overlap signals: word Jaccard and character n-gram Jaccard.

use super::profile::TextProfile;
use super::tfidf::IdfTable;
use std::collections::HashSet;
use std::hash::Hash;

/// Jaccard index over the two word sets.
#[must_use]
pub fn word_overlap(a: &TextProfile, b: &TextProfile, _idf: &IdfTable) -> f64 {
    let wa: HashSet<&String> = a.terms().keys().collect();
    let wb: HashSet<&String> = b.terms().keys().collect();
    jaccard(&wa, &wb)
}

/// Jaccard index over character n-gram sets; tolerant of typos and suffixes.
#[must_use]
pub fn ngram_overlap(a: &TextProfile, b: &TextProfile, _idf: &IdfTable) -> f64 {
    jaccard(a.ngrams(), b.ngrams())
}

/// `|A ∩ B| / |A ∪ B|`, 0.0 when both sets are empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
