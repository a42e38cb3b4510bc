// src/matrix.rs
//! Symmetric pairwise score table over a corpus.

use crate::scoring::{IdfTable, Scorer, TextProfile};
use rayon::prelude::*;

/// Dense symmetric score matrix. The diagonal is never scored.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    size: usize,
    scores: Vec<f64>,
}

impl ScoreMatrix {
    /// Scores every unordered pair of profiles exactly once.
    ///
    /// Rows of the upper triangle are computed in parallel and assembled in
    /// index order, so the result does not depend on scheduling.
    #[must_use]
    pub fn build(profiles: &[TextProfile], scorer: &Scorer, idf: &IdfTable) -> Self {
        let size = profiles.len();
        let rows: Vec<Vec<f64>> = (0..size)
            .into_par_iter()
            .map(|i| {
                profiles[i + 1..]
                    .iter()
                    .map(|other| scorer.score_profiles(&profiles[i], other, idf))
                    .collect()
            })
            .collect();

        let mut matrix = Self::zeroed(size);
        for (i, row) in rows.into_iter().enumerate() {
            for (offset, score) in row.into_iter().enumerate() {
                matrix.set(i, i + 1 + offset, score);
            }
        }
        matrix
    }

    /// Builds a matrix from an explicit scoring function over `i < j`.
    #[must_use]
    pub fn from_fn(size: usize, mut score: impl FnMut(usize, usize) -> f64) -> Self {
        let mut matrix = Self::zeroed(size);
        for i in 0..size {
            for j in (i + 1)..size {
                matrix.set(i, j, score(i, j));
            }
        }
        matrix
    }

    fn zeroed(size: usize) -> Self {
        Self {
            size,
            scores: vec![0.0; size * size],
        }
    }

    fn set(&mut self, i: usize, j: usize, score: f64) {
        self.scores[i * self.size + j] = score;
        self.scores[j * self.size + i] = score;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Score of a distinct pair; `None` on the diagonal or out of range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i == j || i >= self.size || j >= self.size {
            return None;
        }
        self.scores.get(i * self.size + j).copied()
    }

    /// Upper-triangle pairs scoring at least `floor`, highest first.
    ///
    /// Equal scores keep supplied order: lower first index, then lower second.
    #[must_use]
    pub fn pairs_at_or_above(&self, floor: f64) -> Vec<(usize, usize, f64)> {
        let mut pairs: Vec<(usize, usize, f64)> = (0..self.size)
            .flat_map(|i| ((i + 1)..self.size).map(move |j| (i, j)))
            .filter_map(|(i, j)| {
                let score = self.get(i, j)?;
                (score >= floor).then_some((i, j, score))
            })
            .collect();

        pairs.sort_by(|a, b| {
            b.2.total_cmp(&a.2)
                .then_with(|| a.0.cmp(&b.0))
                .then_with(|| a.1.cmp(&b.1))
        });
        pairs
    }

    /// Mean score over every pair drawn from `members`; 0.0 for fewer than two.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_pairwise(&self, members: &[usize]) -> f64 {
        let mut total = 0.0;
        let mut count = 0usize;
        for (k, &a) in members.iter().enumerate() {
            for &b in &members[k + 1..] {
                if let Some(score) = self.get(a, b) {
                    total += score;
                    count += 1;
                }
            }
        }
        if count > 0 {
            total / count as f64
        } else {
            0.0
        }
    }
}
