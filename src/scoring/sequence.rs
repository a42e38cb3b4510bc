// src/scoring/sequence.rs
//! Character-level longest-common-subsequence ratio.

use super::profile::TextProfile;
use super::tfidf::IdfTable;

/// `2 * LCS(a, b) / (|a| + |b|)`, 0.0 when either side is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sequence_ratio(a: &TextProfile, b: &TextProfile, _idf: &IdfTable) -> f64 {
    let (x, y) = (a.chars(), b.chars());
    let total = x.len() + y.len();
    if x.is_empty() || y.is_empty() {
        return 0.0;
    }
    2.0 * lcs_length(x, y) as f64 / total as f64
}

/// LCS length using two-row DP.
#[must_use]
pub fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
