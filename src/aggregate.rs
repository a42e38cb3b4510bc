// src/aggregate.rs
//! Final result structure handed to reporting.

use crate::grouping::{IndexGroup, TierBounds};
use crate::types::{PairScore, Record, Tier};
use serde::Serialize;

/// A named group of similar records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub name: String,
    pub tier: Tier,
    /// Members in supplied order; always at least two.
    pub members: Vec<Record>,
    pub average_score: f64,
}

impl Group {
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.members.iter().any(|m| m.id == id)
    }
}

/// Number of groups found per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl TierCounts {
    #[must_use]
    pub fn get(&self, tier: Tier) -> usize {
        match tier {
            Tier::High => self.high,
            Tier::Medium => self.medium,
            Tier::Low => self.low,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }

    fn bump(&mut self, tier: Tier) {
        match tier {
            Tier::High => self.high += 1,
            Tier::Medium => self.medium += 1,
            Tier::Low => self.low += 1,
        }
    }
}

/// A record as seen by the analysis, with the group holding it, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedRecord {
    pub record: Record,
    pub normalized: String,
    pub group: Option<String>,
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub total_records: usize,
    pub tier_counts: TierCounts,
    pub total_groups: usize,
    pub groups: Vec<Group>,
    /// Every supplied record, grouped or not, in supplied order.
    pub records: Vec<AnalyzedRecord>,
    /// Pairs at or above the grouping floor, highest first.
    pub pairs: Vec<PairScore>,
    /// Tier bounds the groups were formed with.
    pub bounds: TierBounds,
}

impl Analysis {
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn groups_in(&self, tier: Tier) -> impl Iterator<Item = &Group> {
        self.groups.iter().filter(move |g| g.tier == tier)
    }

    /// Records that were analyzed but landed in no group.
    pub fn ungrouped(&self) -> impl Iterator<Item = &AnalyzedRecord> {
        self.records.iter().filter(|r| r.group.is_none())
    }

    #[must_use]
    pub fn has_groups(&self) -> bool {
        !self.groups.is_empty()
    }
}

/// Joins index groups back to their records and computes the summary.
#[must_use]
pub fn aggregate(
    records: &[Record],
    normalized: Vec<String>,
    index_groups: Vec<IndexGroup>,
    pairs: Vec<PairScore>,
    bounds: TierBounds,
) -> Analysis {
    let mut membership: Vec<Option<String>> = vec![None; records.len()];
    let mut tier_counts = TierCounts::default();
    let mut groups = Vec::with_capacity(index_groups.len());

    for group in index_groups {
        tier_counts.bump(group.tier);
        let members = group
            .members
            .iter()
            .filter_map(|&i| {
                let slot = membership.get_mut(i)?;
                slot.get_or_insert_with(|| group.name.clone());
                records.get(i).cloned()
            })
            .collect();
        groups.push(Group {
            name: group.name,
            tier: group.tier,
            members,
            average_score: group.average_score,
        });
    }

    let analyzed = records
        .iter()
        .zip(normalized)
        .zip(membership)
        .map(|((record, normalized), group)| AnalyzedRecord {
            record: record.clone(),
            normalized,
            group,
        })
        .collect();

    Analysis {
        total_records: records.len(),
        total_groups: groups.len(),
        tier_counts,
        groups,
        records: analyzed,
        pairs,
        bounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_membership_and_counts_tiers() {
        let records: Vec<_> = ["A", "B", "C"].iter().map(|id| Record::new(*id, *id)).collect();
        let normalized = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let groups = vec![IndexGroup {
            name: "high_similarity_group_1".into(),
            tier: Tier::High,
            members: vec![0, 2],
            average_score: 0.9,
        }];

        let analysis = aggregate(&records, normalized, groups, Vec::new(), TierBounds::default());

        assert_eq!(analysis.total_records, 3);
        assert_eq!(analysis.total_groups, 1);
        assert_eq!(analysis.tier_counts.get(Tier::High), 1);
        assert_eq!(analysis.tier_counts.total(), 1);
        let ungrouped: Vec<_> = analysis.ungrouped().map(|r| r.record.id.as_str()).collect();
        assert_eq!(ungrouped, vec!["B"]);
        assert!(analysis.group("high_similarity_group_1").unwrap().contains("C"));
    }

    #[test]
    fn empty_input_gives_empty_summary() {
        let analysis = aggregate(&[], Vec::new(), Vec::new(), Vec::new(), TierBounds::default());
        assert_eq!(analysis.total_records, 0);
        assert!(!analysis.has_groups());
        assert_eq!(analysis.ungrouped().count(), 0);
    }
}
