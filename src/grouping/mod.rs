// src/grouping/mod.rs
//! Tiered greedy grouping over a score matrix.
//!
//! Tiers are visited from High down to Low. Within a tier the strongest
//! unclaimed pair seeds a group, which then grows by scanning the remaining
//! unclaimed records in supplied order. A record placed in any group is
//! claimed and never reconsidered, so groups in one tier are disjoint and a
//! higher tier always wins over a lower one.

pub mod tiers;

pub use tiers::TierBounds;

use crate::matrix::ScoreMatrix;
use crate::types::Tier;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Rule deciding whether a candidate may join a group being grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ChainingPolicy {
    /// The candidate's score to both seed members is inside the tier band.
    #[default]
    SeedPair,
    /// The candidate's score to every current member is inside the tier band.
    AllMembers,
    /// The candidate's score to at least one current member is inside the band.
    AnyMember,
}

impl ChainingPolicy {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SeedPair => "seed_pair",
            Self::AllMembers => "all_members",
            Self::AnyMember => "any_member",
        }
    }
}

/// Knobs for one grouping pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupingOptions {
    pub bounds: TierBounds,
    pub chaining: ChainingPolicy,
}

/// A group expressed as indices into the supplied record order.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexGroup {
    pub name: String,
    pub tier: Tier,
    /// Member indices, ascending.
    pub members: Vec<usize>,
    /// Mean of all pairwise scores among the final members.
    pub average_score: f64,
}

/// Partitions the matrix's records into tiered groups.
///
/// Deterministic for a given matrix. Records that never pair above the
/// floor appear in no group.
#[must_use]
pub fn group_matrix(matrix: &ScoreMatrix, options: &GroupingOptions) -> Vec<IndexGroup> {
    let size = matrix.len();
    if size < 2 {
        return Vec::new();
    }

    let bounds = options.bounds;
    let candidates = matrix.pairs_at_or_above(bounds.floor());
    let mut claimed = vec![false; size];
    let mut groups = Vec::new();

    for tier in Tier::ALL {
        let mut counter = 0usize;

        for &(a, b, score) in &candidates {
            if !bounds.contains(tier, score) || claimed[a] || claimed[b] {
                continue;
            }

            let mut members = vec![a, b];
            for candidate in 0..size {
                if claimed[candidate] || candidate == a || candidate == b {
                    continue;
                }
                if joins(matrix, &members, candidate, tier, options) {
                    members.push(candidate);
                }
            }

            for &m in &members {
                claimed[m] = true;
            }
            members.sort_unstable();

            counter += 1;
            let name = format!("{}_similarity_group_{counter}", tier.slug());
            let average_score = matrix.mean_pairwise(&members);
            info!(
                group = %name,
                seed_score = score,
                size = members.len(),
                average_score,
                "formed group"
            );

            groups.push(IndexGroup {
                name,
                tier,
                members,
                average_score,
            });
        }
    }

    groups
}

fn joins(
    matrix: &ScoreMatrix,
    members: &[usize],
    candidate: usize,
    tier: Tier,
    options: &GroupingOptions,
) -> bool {
    let in_band = |member: &usize| {
        matrix
            .get(*member, candidate)
            .is_some_and(|s| options.bounds.contains(tier, s))
    };
    match options.chaining {
        ChainingPolicy::SeedPair => members.iter().take(2).all(in_band),
        ChainingPolicy::AllMembers => members.iter().all(in_band),
        ChainingPolicy::AnyMember => members.iter().any(in_band),
    }
}
