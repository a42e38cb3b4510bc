// src/grouping/tiers.rs
//! Tier boundaries and score classification.

use crate::error::{DupeError, Result};
use crate::types::Tier;
use serde::{Deserialize, Serialize};

/// Inclusive lower bounds of each tier. A tier's upper bound (exclusive) is
/// the lower bound of the tier above it; High has none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierBounds {
    #[serde(default = "default_high")]
    pub high: f64,
    #[serde(default = "default_medium")]
    pub medium: f64,
    #[serde(default = "default_low")]
    pub low: f64,
}

impl Default for TierBounds {
    fn default() -> Self {
        Self {
            high: default_high(),
            medium: default_medium(),
            low: default_low(),
        }
    }
}

const fn default_high() -> f64 { 0.80 }
const fn default_medium() -> f64 { 0.50 }
const fn default_low() -> f64 { 0.30 }

impl TierBounds {
    /// Checks `0 <= low < medium < high <= 1`.
    ///
    /// # Errors
    /// Returns `DupeError::TierBounds` describing the first violated rule.
    pub fn validate(&self) -> Result<()> {
        let Self { high, medium, low } = *self;
        if [high, medium, low].iter().any(|b| !b.is_finite()) {
            return Err(DupeError::TierBounds("bounds must be finite numbers".into()));
        }
        if low < 0.0 || high > 1.0 {
            return Err(DupeError::TierBounds(format!(
                "bounds must lie in [0, 1] (low = {low}, high = {high})"
            )));
        }
        if !(low < medium && medium < high) {
            return Err(DupeError::TierBounds(format!(
                "expected low < medium < high, got {low} / {medium} / {high}"
            )));
        }
        Ok(())
    }

    /// Scores below this are never grouped.
    #[must_use]
    pub fn floor(&self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn lower(&self, tier: Tier) -> f64 {
        match tier {
            Tier::High => self.high,
            Tier::Medium => self.medium,
            Tier::Low => self.low,
        }
    }

    #[must_use]
    pub fn upper(&self, tier: Tier) -> Option<f64> {
        match tier {
            Tier::High => None,
            Tier::Medium => Some(self.high),
            Tier::Low => Some(self.medium),
        }
    }

    /// True when `score` falls inside `tier`'s half-open band.
    #[must_use]
    pub fn contains(&self, tier: Tier, score: f64) -> bool {
        score >= self.lower(tier) && self.upper(tier).map_or(true, |upper| score < upper)
    }

    /// The tier a score belongs to, if it clears the floor.
    #[must_use]
    pub fn classify(&self, score: f64) -> Option<Tier> {
        Tier::ALL.into_iter().find(|&t| self.contains(t, score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_respects_half_open_bands() {
        let b = TierBounds::default();
        assert_eq!(b.classify(1.0), Some(Tier::High));
        assert_eq!(b.classify(0.80), Some(Tier::High));
        assert_eq!(b.classify(0.7999), Some(Tier::Medium));
        assert_eq!(b.classify(0.50), Some(Tier::Medium));
        assert_eq!(b.classify(0.4999), Some(Tier::Low));
        assert_eq!(b.classify(0.30), Some(Tier::Low));
        assert_eq!(b.classify(0.2999), None);
    }

    #[test]
    fn validate_requires_strict_order() {
        assert!(TierBounds::default().validate().is_ok());
        let bad = TierBounds {
            high: 0.5,
            medium: 0.5,
            low: 0.3,
        };
        assert!(matches!(bad.validate(), Err(DupeError::TierBounds(_))));
        let inverted = TierBounds {
            high: 0.3,
            medium: 0.5,
            low: 0.8,
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let b = TierBounds {
            high: 1.2,
            ..TierBounds::default()
        };
        assert!(b.validate().is_err());
        let b = TierBounds {
            low: f64::NAN,
            ..TierBounds::default()
        };
        assert!(b.validate().is_err());
    }
}
