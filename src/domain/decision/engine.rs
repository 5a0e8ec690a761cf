//! Decision engine - The primary entry point of the crate.
//!
//! One call runs the full pipeline: classify the item, pick the weight
//! table for the effective risk tolerance, score all twelve criteria,
//! and aggregate into a final verdict. The whole computation is pure and
//! synchronous; identical requests always produce identical results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::aggregator::{Confidence, Decision, DecisionAggregator};
use super::classifier::ItemClassifier;
use super::criteria::{criteria_table, Criterion, CriterionId};
use super::request::PurchaseRequest;
use super::scoring::score_criterion;

/// The outcome of one purchase evaluation. Constructed fresh per call
/// and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// All twelve scored criteria, keyed in canonical order.
    pub scores: BTreeMap<CriterionId, Criterion>,
    /// Weighted mean of the criterion scores on a 0-100 scale.
    pub final_score: f64,
    pub decision: Decision,
    pub confidence: Confidence,
}

/// The purchase decision engine.
pub struct DecisionEngine;

impl DecisionEngine {
    /// Evaluates a prospective purchase.
    ///
    /// Never fails: malformed optional input scores neutrally and
    /// invalid required input was already coerced by `PurchaseRequest`.
    pub fn score(request: &PurchaseRequest) -> DecisionResult {
        let item_type = ItemClassifier::classify(&request.item_name, &request.purpose);
        let tier = request.risk_tolerance();
        let table = criteria_table(tier);

        let scores: BTreeMap<CriterionId, Criterion> = table
            .iter()
            .map(|(id, weight)| {
                let score = score_criterion(id, request, item_type);
                (id, Criterion::new(id, weight, score))
            })
            .collect();

        let final_score = DecisionAggregator::final_score(&scores);
        let decision = DecisionAggregator::decide(final_score);
        let confidence = Confidence::from_final_score(final_score);

        debug!(
            item = %request.item_name,
            item_type = %item_type,
            tier = %tier,
            final_score,
            decision = %decision,
            confidence = %confidence,
            "Purchase evaluation complete"
        );

        DecisionResult {
            scores,
            final_score,
            decision,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::request::{Alternative, Frequency};
    use crate::domain::profile::{FinancialProfile, RiskTolerance};

    #[test]
    fn engine_scores_all_twelve_criteria() {
        let result = DecisionEngine::score(&PurchaseRequest::new("Lamp", 40.0));
        assert_eq!(result.scores.len(), 12);
        for id in CriterionId::ALL {
            assert!(result.scores.contains_key(&id), "missing {:?}", id);
        }
    }

    #[test]
    fn engine_final_score_stays_in_range() {
        let requests = [
            PurchaseRequest::new("Lamp", 40.0),
            PurchaseRequest::new("", 0.0),
            PurchaseRequest::new("Medicine", 50.0)
                .with_profile(FinancialProfile::new(0.0, 0.0, 0.0)),
            PurchaseRequest::new("Laptop", 1200.0)
                .with_purpose("work")
                .with_frequency(Frequency::Daily)
                .with_profile(FinancialProfile::new(17_000.0, 0.0, 8.0)),
        ];
        for request in &requests {
            let result = DecisionEngine::score(request);
            assert!(
                (0.0..=100.0).contains(&result.final_score),
                "{} scored {}",
                request.item_name,
                result.final_score
            );
        }
    }

    #[test]
    fn engine_decision_matches_threshold() {
        let result = DecisionEngine::score(
            &PurchaseRequest::new("Laptop", 500.0)
                .with_purpose("work")
                .with_frequency(Frequency::Daily)
                .with_profile(FinancialProfile::new(17_000.0, 0.0, 8.0)),
        );
        assert_eq!(result.decision == Decision::Buy, result.final_score >= 60.0);
    }

    #[test]
    fn engine_uses_override_tier_for_weights() {
        let base = PurchaseRequest::new("Lamp", 40.0);
        let low = base.clone().with_risk_tolerance(RiskTolerance::Low);
        let high = base.with_risk_tolerance(RiskTolerance::High);

        let low_weight = DecisionEngine::score(&low).scores[&CriterionId::FinancialRisk].weight;
        let high_weight = DecisionEngine::score(&high).scores[&CriterionId::FinancialRisk].weight;
        assert!(low_weight > high_weight);
    }

    #[test]
    fn engine_is_deterministic() {
        let request = PurchaseRequest::new("Espresso machine", 320.0)
            .with_purpose("morning coffee for the family")
            .with_frequency(Frequency::Daily)
            .with_alternative(Alternative::new("Moka pot", 35.0))
            .with_profile(FinancialProfile::new(3500.0, 12.0, 4.0));

        let first = DecisionEngine::score(&request);
        let second = DecisionEngine::score(&request);
        assert_eq!(first, second);
    }

    #[test]
    fn engine_weighted_scores_are_consistent() {
        let result = DecisionEngine::score(
            &PurchaseRequest::new("Lamp", 40.0)
                .with_profile(FinancialProfile::new(3000.0, 0.0, 6.0)),
        );
        for criterion in result.scores.values() {
            let expected = criterion.weight * criterion.score.as_f64();
            assert!((criterion.weighted_score - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn engine_result_serializes_with_camel_case_criterion_keys() {
        let result = DecisionEngine::score(&PurchaseRequest::new("Lamp", 40.0));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["scores"]["affordability"].is_object());
        assert!(json["scores"]["valueForMoney"].is_object());
        assert!(json["scores"]["alternativeAvailability"].is_object());
        assert!(json["final_score"].is_number());
    }
}
