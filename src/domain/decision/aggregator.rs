//! Decision aggregator - Weighted scores to a final verdict.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::criteria::{Criterion, CriterionId};

/// Final scores at or above this threshold recommend buying.
pub const BUY_THRESHOLD: f64 = 60.0;

/// Final-score band edges for confidence classification. A score at or
/// beyond the outer edges is a High-confidence call, at or beyond the
/// inner edges Medium, anything in between Low.
pub const HIGH_CONFIDENCE_EDGES: (f64, f64) = (20.0, 80.0);
pub const MEDIUM_CONFIDENCE_EDGES: (f64, f64) = (35.0, 65.0);

/// The recommendation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Buy,
    #[serde(rename = "Don't Buy")]
    DontBuy,
}

impl Decision {
    /// Returns the display label for this decision.
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Buy => "Buy",
            Decision::DontBuy => "Don't Buy",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How decisive the final score is. Scores far from the threshold in
/// either direction are confident calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Classifies a final score into a confidence band. High is checked
    /// before Medium; the bands are exclusive by that ordering.
    pub fn from_final_score(final_score: f64) -> Self {
        let (high_low, high_high) = HIGH_CONFIDENCE_EDGES;
        let (medium_low, medium_high) = MEDIUM_CONFIDENCE_EDGES;

        if final_score >= high_high || final_score <= high_low {
            Confidence::High
        } else if final_score >= medium_high || final_score <= medium_low {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    /// Returns the display label for this confidence level.
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Aggregator over the twelve weighted criterion scores.
pub struct DecisionAggregator;

impl DecisionAggregator {
    /// Computes the final score on a 0-100 scale: the weighted mean of
    /// the 0-10 criterion scores, times 10. The weights sum to 1.0 by
    /// construction but the division is kept so partial score maps still
    /// aggregate sensibly.
    pub fn final_score(scores: &BTreeMap<CriterionId, Criterion>) -> f64 {
        let total_weight: f64 = scores.values().map(|c| c.weight).sum();
        if total_weight <= 0.0 {
            return 0.0;
        }

        let total_weighted: f64 = scores.values().map(|c| c.weighted_score).sum();
        (total_weighted / total_weight) * 10.0
    }

    /// Applies the hard buy threshold. No hysteresis.
    pub fn decide(final_score: f64) -> Decision {
        if final_score >= BUY_THRESHOLD {
            Decision::Buy
        } else {
            Decision::DontBuy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Score;

    fn uniform_scores(value: u8) -> BTreeMap<CriterionId, Criterion> {
        let weight = 1.0 / CriterionId::ALL.len() as f64;
        CriterionId::ALL
            .iter()
            .map(|id| (*id, Criterion::new(*id, weight, Score::new(value))))
            .collect()
    }

    #[test]
    fn final_score_of_uniform_scores() {
        assert!((DecisionAggregator::final_score(&uniform_scores(10)) - 100.0).abs() < 1e-9);
        assert!((DecisionAggregator::final_score(&uniform_scores(5)) - 50.0).abs() < 1e-9);
        assert!(DecisionAggregator::final_score(&uniform_scores(0)).abs() < 1e-9);
    }

    #[test]
    fn final_score_empty_map_is_zero() {
        let empty = BTreeMap::new();
        assert_eq!(DecisionAggregator::final_score(&empty), 0.0);
    }

    #[test]
    fn final_score_respects_weights() {
        let mut scores = BTreeMap::new();
        scores.insert(
            CriterionId::Affordability,
            Criterion::new(CriterionId::Affordability, 0.75, Score::new(10)),
        );
        scores.insert(
            CriterionId::Necessity,
            Criterion::new(CriterionId::Necessity, 0.25, Score::new(2)),
        );
        // (0.75*10 + 0.25*2) / 1.0 * 10 = 80
        assert!((DecisionAggregator::final_score(&scores) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn decide_applies_hard_threshold() {
        assert_eq!(DecisionAggregator::decide(60.0), Decision::Buy);
        assert_eq!(DecisionAggregator::decide(59.999), Decision::DontBuy);
        assert_eq!(DecisionAggregator::decide(100.0), Decision::Buy);
        assert_eq!(DecisionAggregator::decide(0.0), Decision::DontBuy);
    }

    #[test]
    fn confidence_high_band_both_ends() {
        assert_eq!(Confidence::from_final_score(80.0), Confidence::High);
        assert_eq!(Confidence::from_final_score(95.0), Confidence::High);
        assert_eq!(Confidence::from_final_score(20.0), Confidence::High);
        assert_eq!(Confidence::from_final_score(5.0), Confidence::High);
    }

    #[test]
    fn confidence_medium_band_excludes_high() {
        assert_eq!(Confidence::from_final_score(65.0), Confidence::Medium);
        assert_eq!(Confidence::from_final_score(79.9), Confidence::Medium);
        assert_eq!(Confidence::from_final_score(35.0), Confidence::Medium);
        assert_eq!(Confidence::from_final_score(20.1), Confidence::Medium);
    }

    #[test]
    fn confidence_low_band_in_the_middle() {
        assert_eq!(Confidence::from_final_score(50.0), Confidence::Low);
        assert_eq!(Confidence::from_final_score(60.0), Confidence::Low);
        assert_eq!(Confidence::from_final_score(64.9), Confidence::Low);
        assert_eq!(Confidence::from_final_score(35.1), Confidence::Low);
    }

    #[test]
    fn decision_serializes_with_apostrophe_label() {
        assert_eq!(serde_json::to_string(&Decision::Buy).unwrap(), "\"Buy\"");
        assert_eq!(
            serde_json::to_string(&Decision::DontBuy).unwrap(),
            "\"Don't Buy\""
        );
        let back: Decision = serde_json::from_str("\"Don't Buy\"").unwrap();
        assert_eq!(back, Decision::DontBuy);
    }

    #[test]
    fn confidence_displays_label() {
        assert_eq!(Confidence::High.to_string(), "High");
        assert_eq!(Confidence::Low.label(), "Low");
    }
}
