//! Criteria and weight tables - The 12 scoring dimensions and their
//! per-tier weights.
//!
//! Weight derivation is deterministic: category weights shift with the
//! risk-tolerance tier, each criterion takes a fixed share of its
//! category, the first eleven absolute weights are rounded to four
//! decimals, and the final criterion in canonical order absorbs the
//! rounding residue so the twelve always sum to exactly 1.0.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{round4, Score};
use crate::domain::profile::RiskTolerance;

/// Tolerance for asserting the weight-sum invariant.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-4;

/// The four criterion categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Financial,
    Utility,
    Psychological,
    Risk,
}

impl Category {
    /// All categories, in base-weight order.
    pub const ALL: [Self; 4] = [
        Self::Financial,
        Self::Utility,
        Self::Psychological,
        Self::Risk,
    ];

    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Financial => "Financial",
            Category::Utility => "Utility",
            Category::Psychological => "Psychological",
            Category::Risk => "Risk",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The twelve scoring criteria. Declaration order is canonical: it fixes
/// iteration order everywhere and designates the last variant as the one
/// that absorbs weight-rounding error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum CriterionId {
    Affordability,
    ValueForMoney,
    OpportunityCost,
    FinancialGoalAlignment,
    Necessity,
    FrequencyOfUse,
    Longevity,
    EmotionalValue,
    SocialFactors,
    BuyersRemorse,
    FinancialRisk,
    AlternativeAvailability,
}

impl CriterionId {
    /// All criteria in canonical order.
    pub const ALL: [Self; 12] = [
        Self::Affordability,
        Self::ValueForMoney,
        Self::OpportunityCost,
        Self::FinancialGoalAlignment,
        Self::Necessity,
        Self::FrequencyOfUse,
        Self::Longevity,
        Self::EmotionalValue,
        Self::SocialFactors,
        Self::BuyersRemorse,
        Self::FinancialRisk,
        Self::AlternativeAvailability,
    ];

    /// Returns the display name for this criterion.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Affordability => "Affordability",
            Self::ValueForMoney => "Value for Money",
            Self::OpportunityCost => "Opportunity Cost",
            Self::FinancialGoalAlignment => "Financial Goal Alignment",
            Self::Necessity => "Necessity",
            Self::FrequencyOfUse => "Frequency of Use",
            Self::Longevity => "Longevity",
            Self::EmotionalValue => "Emotional Value",
            Self::SocialFactors => "Social Factors",
            Self::BuyersRemorse => "Buyer's Remorse",
            Self::FinancialRisk => "Financial Risk",
            Self::AlternativeAvailability => "Alternative Availability",
        }
    }

    /// Returns the category this criterion belongs to.
    pub fn category(&self) -> Category {
        match self {
            Self::Affordability
            | Self::ValueForMoney
            | Self::OpportunityCost
            | Self::FinancialGoalAlignment => Category::Financial,
            Self::Necessity | Self::FrequencyOfUse | Self::Longevity => Category::Utility,
            Self::EmotionalValue | Self::SocialFactors | Self::BuyersRemorse => {
                Category::Psychological
            }
            Self::FinancialRisk | Self::AlternativeAvailability => Category::Risk,
        }
    }

    /// The criterion's fixed share of its category's weight.
    fn relative_weight(&self) -> f64 {
        match self {
            Self::Affordability => 0.375,
            Self::ValueForMoney => 0.25,
            Self::OpportunityCost => 0.25,
            Self::FinancialGoalAlignment => 0.125,
            Self::Necessity => 0.333,
            Self::FrequencyOfUse => 0.333,
            Self::Longevity => 0.333,
            Self::EmotionalValue => 0.25,
            Self::SocialFactors => 0.25,
            Self::BuyersRemorse => 0.5,
            Self::FinancialRisk => 0.5,
            Self::AlternativeAvailability => 0.5,
        }
    }
}

impl std::fmt::Display for CriterionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A criterion with its computed weight and score for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
    pub category: Category,
    pub weight: f64,
    pub score: Score,
    pub weighted_score: f64,
}

impl Criterion {
    /// Creates a scored criterion, deriving name, category, and the
    /// weighted score.
    pub fn new(id: CriterionId, weight: f64, score: Score) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            category: id.category(),
            weight,
            score,
            weighted_score: weight * score.as_f64(),
        }
    }

    /// Impact of this criterion on the decision: distance from the
    /// neutral score, scaled by weight.
    pub fn impact(&self) -> f64 {
        (self.score.as_f64() - Score::NEUTRAL.as_f64()).abs() * self.weight
    }
}

/// The twelve criterion weights for one risk-tolerance tier, in
/// canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaTable {
    weights: Vec<(CriterionId, f64)>,
}

impl CriteriaTable {
    /// Builds the weight table for a tier.
    fn build(tier: RiskTolerance) -> Self {
        // Category weights: financial stays fixed, the other three shift
        // with the tier. Renormalized in case the constants ever drift.
        let (financial, utility, psychological, risk) = match tier {
            RiskTolerance::Low => (0.40, 0.27, 0.18, 0.15),
            RiskTolerance::Moderate => (0.40, 0.30, 0.20, 0.10),
            RiskTolerance::High => (0.40, 0.32, 0.21, 0.07),
        };
        let total = financial + utility + psychological + risk;

        let category_weight = |category: Category| -> f64 {
            let raw = match category {
                Category::Financial => financial,
                Category::Utility => utility,
                Category::Psychological => psychological,
                Category::Risk => risk,
            };
            raw / total
        };

        let mut weights = Vec::with_capacity(CriterionId::ALL.len());
        let mut allocated = 0.0;
        let last_index = CriterionId::ALL.len() - 1;

        for (index, id) in CriterionId::ALL.iter().enumerate() {
            if index < last_index {
                let weight = round4(category_weight(id.category()) * id.relative_weight());
                allocated += weight;
                weights.push((*id, weight));
            } else {
                // The canonical-order last criterion absorbs the rounding
                // residue so the twelve weights sum to exactly 1.0.
                // Distributing the residue instead would change every
                // downstream score.
                weights.push((*id, 1.0 - allocated));
            }
        }

        Self { weights }
    }

    /// The weight of one criterion.
    pub fn weight_of(&self, id: CriterionId) -> f64 {
        self.weights
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, weight)| *weight)
            .unwrap_or(0.0)
    }

    /// Iterates criteria and weights in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (CriterionId, f64)> + '_ {
        self.weights.iter().copied()
    }

    /// Sum of all twelve weights. 1.0 by construction.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().map(|(_, weight)| weight).sum()
    }
}

static TIER_TABLES: Lazy<HashMap<RiskTolerance, CriteriaTable>> = Lazy::new(|| {
    RiskTolerance::ALL
        .iter()
        .map(|tier| (*tier, CriteriaTable::build(*tier)))
        .collect()
});

/// Returns the precomputed weight table for a tier.
pub fn criteria_table(tier: RiskTolerance) -> &'static CriteriaTable {
    // Every tier is inserted at initialization; the fallback never runs
    // but keeps the lookup panic-free.
    TIER_TABLES
        .get(&tier)
        .unwrap_or_else(|| &TIER_TABLES[&RiskTolerance::Moderate])
}
