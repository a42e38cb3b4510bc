// src/detector.rs
//! The duplicate detection pipeline: validate, normalize, score, group,
//! aggregate.

use crate::aggregate::{self, Analysis, Group};
use crate::error::{DupeError, Result};
use crate::grouping::{self, GroupingOptions, IndexGroup};
use crate::matrix::ScoreMatrix;
use crate::normalize::Normalizer;
use crate::scoring::{IdfTable, Scorer, TextProfile, TfIdfScope};
use crate::types::{PairScore, Record};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info};

/// A configured detector. Holds no per-run state.
#[derive(Debug, Clone, Default)]
pub struct DuplicateDetector {
    normalizer: Normalizer,
    scorer: Scorer,
    grouping: GroupingOptions,
    tfidf_scope: TfIdfScope,
}

impl DuplicateDetector {
    /// Creates a detector from its parts.
    ///
    /// # Errors
    /// Returns `DupeError::TierBounds` if the grouping bounds are invalid.
    pub fn new(
        normalizer: Normalizer,
        scorer: Scorer,
        grouping: GroupingOptions,
        tfidf_scope: TfIdfScope,
    ) -> Result<Self> {
        grouping.bounds.validate()?;
        Ok(Self {
            normalizer,
            scorer,
            grouping,
            tfidf_scope,
        })
    }

    #[must_use]
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    #[must_use]
    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    #[must_use]
    pub fn grouping_options(&self) -> &GroupingOptions {
        &self.grouping
    }

    /// Similarity of two raw texts, normalizing both first.
    #[must_use]
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        self.scorer
            .score(&self.normalizer.normalize(a), &self.normalizer.normalize(b))
    }

    /// Groups `records` with this detector's options.
    ///
    /// # Errors
    /// Returns `DupeError::DuplicateId` before any scoring if two records
    /// share an id.
    pub fn group(&self, records: &[Record]) -> Result<Vec<Group>> {
        Ok(self.analyze(records)?.groups)
    }

    /// Groups `records` with bounds and chaining overridden for this call.
    ///
    /// # Errors
    /// Returns `DupeError::TierBounds` for invalid bounds and
    /// `DupeError::DuplicateId` for repeated ids, both before scoring.
    pub fn analyze_with(&self, records: &[Record], options: &GroupingOptions) -> Result<Analysis> {
        options.bounds.validate()?;
        validate_ids(records)?;

        let start = Instant::now();
        let normalized: Vec<String> = records
            .iter()
            .map(|r| self.normalizer.normalize(&r.text()))
            .collect();
        for (record, text) in records.iter().zip(&normalized) {
            debug!(id = %record.id, normalized = %text, "normalized record");
        }

        let profiles: Vec<TextProfile> =
            normalized.iter().map(|t| self.scorer.profile(t)).collect();
        let idf = IdfTable::for_scope(self.tfidf_scope, &profiles);
        let matrix = ScoreMatrix::build(&profiles, &self.scorer, &idf);

        let pairs = candidate_pairs(records, &matrix, options);
        let index_groups: Vec<IndexGroup> = grouping::group_matrix(&matrix, options);

        info!(
            records = records.len(),
            candidate_pairs = pairs.len(),
            groups = index_groups.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "similarity analysis complete"
        );

        Ok(aggregate::aggregate(
            records,
            normalized,
            index_groups,
            pairs,
            options.bounds,
        ))
    }

    /// Runs the full pipeline with this detector's own options.
    ///
    /// # Errors
    /// See [`DuplicateDetector::analyze_with`].
    pub fn analyze(&self, records: &[Record]) -> Result<Analysis> {
        self.analyze_with(records, &self.grouping)
    }
}

fn validate_ids(records: &[Record]) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if let Some(&first) = seen.get(record.id.as_str()) {
            return Err(DupeError::DuplicateId {
                id: record.id.clone(),
                first,
                second: index,
            });
        }
        seen.insert(&record.id, index);
    }
    Ok(())
}

fn candidate_pairs(
    records: &[Record],
    matrix: &ScoreMatrix,
    options: &GroupingOptions,
) -> Vec<PairScore> {
    matrix
        .pairs_at_or_above(options.bounds.floor())
        .into_iter()
        .map(|(i, j, score)| {
            if let Some(tier) = options.bounds.classify(score) {
                debug!(
                    a = %records[i].id,
                    b = %records[j].id,
                    score,
                    tier = tier.label(),
                    "similar pair"
                );
            }
            PairScore {
                a: records[i].id.clone(),
                b: records[j].id.clone(),
                score,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ids_fail_before_scoring() {
        let records = vec![
            Record::new("KEY-1", "Login crash"),
            Record::new("KEY-2", "Export fails"),
            Record::new("KEY-1", "Login crash again"),
        ];
        let err = DuplicateDetector::default().analyze(&records).unwrap_err();
        match err {
            DupeError::DuplicateId { id, first, second } => {
                assert_eq!(id, "KEY-1");
                assert_eq!((first, second), (0, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn overridden_bounds_are_validated() {
        let opts = GroupingOptions {
            bounds: crate::grouping::TierBounds {
                high: 0.4,
                medium: 0.5,
                low: 0.3,
            },
            ..GroupingOptions::default()
        };
        let records = vec![Record::new("A", "x"), Record::new("B", "y")];
        let result = DuplicateDetector::default().analyze_with(&records, &opts);
        assert!(matches!(result, Err(DupeError::TierBounds(_))));
    }

    #[test]
    fn similarity_normalizes_first() {
        let d = DuplicateDetector::default();
        assert!((d.similarity("Navigator error", "Navigation error") - 1.0).abs() < f64::EPSILON);
        assert!(d.similarity("Bug!", "error").abs() < f64::EPSILON);
    }
}
