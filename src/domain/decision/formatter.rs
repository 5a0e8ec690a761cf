//! Recommendation formatter - Display-ready output for an evaluation.
//!
//! Extracts the top positive and negative factors, writes deterministic
//! reasoning and a two-sentence summary, and reshapes the scores into a
//! category-grouped matrix. Pure string assembly over a finished
//! `DecisionResult`; nothing here re-scores.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::Score;

use super::aggregator::{Confidence, Decision};
use super::criteria::{Category, Criterion};
use super::engine::DecisionResult;
use super::request::PurchaseRequest;

/// How many factors each side of the top-factors list carries.
const TOP_FACTOR_LIMIT: usize = 3;

/// Whether a criterion helped, hurt, or barely moved the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLabel {
    Positive,
    Negative,
    Neutral,
}

impl ImpactLabel {
    fn for_score(score: Score) -> Self {
        if score.is_strength() {
            ImpactLabel::Positive
        } else if score.is_weakness() {
            ImpactLabel::Negative
        } else {
            ImpactLabel::Neutral
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ImpactLabel::Positive => "Positive",
            ImpactLabel::Negative => "Negative",
            ImpactLabel::Neutral => "Neutral",
        }
    }
}

/// One factor in the top-factors list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub criterion: String,
    pub score: Score,
    pub weight: f64,
}

impl Factor {
    fn from_criterion(criterion: &Criterion) -> Self {
        Self {
            criterion: criterion.name.clone(),
            score: criterion.score,
            weight: criterion.weight,
        }
    }
}

/// The strongest points for and against the purchase, at most three each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopFactors {
    pub positives: Vec<Factor>,
    pub negatives: Vec<Factor>,
}

/// One row of the display matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixEntry {
    pub criterion: String,
    pub score: Score,
    /// Weight as a percent string, e.g. "12.5%".
    pub weight: String,
    pub impact: ImpactLabel,
}

/// Scores regrouped by category for presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryMatrix {
    pub financial: Vec<MatrixEntry>,
    pub utility: Vec<MatrixEntry>,
    pub psychological: Vec<MatrixEntry>,
    pub risk: Vec<MatrixEntry>,
}

/// The numbers behind the recommendation text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDetails {
    pub final_score: f64,
    pub confidence: Confidence,
    pub top_factors: TopFactors,
    pub matrix: CategoryMatrix,
}

/// A complete display-ready recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub decision: Decision,
    pub reasoning: String,
    pub summary: String,
    pub analysis: AnalysisDetails,
}

/// Formatter over finished decision results.
pub struct RecommendationFormatter;

impl RecommendationFormatter {
    /// Builds the display-ready recommendation for one evaluation.
    pub fn format(result: &DecisionResult, request: &PurchaseRequest) -> Recommendation {
        let strengths = Self::strengths(result);
        let weaknesses = Self::weaknesses(result);

        let headline_positive = Self::most_impactful(&strengths);
        let headline_negative = Self::most_impactful(&weaknesses);

        let reasoning = Self::reasoning(result, request, &strengths, &weaknesses);
        let summary = Self::summary(result, request, headline_positive, headline_negative);

        let top_factors = TopFactors {
            positives: strengths
                .iter()
                .take(TOP_FACTOR_LIMIT)
                .map(|c| Factor::from_criterion(c))
                .collect(),
            negatives: weaknesses
                .iter()
                .take(TOP_FACTOR_LIMIT)
                .map(|c| Factor::from_criterion(c))
                .collect(),
        };

        Recommendation {
            decision: result.decision,
            reasoning,
            summary,
            analysis: AnalysisDetails {
                final_score: result.final_score,
                confidence: result.confidence,
                top_factors,
                matrix: Self::matrix(result),
            },
        }
    }

    /// Criteria scoring 7 or above, strongest weighted contribution
    /// first. Stable sort keeps canonical order among ties.
    fn strengths(result: &DecisionResult) -> Vec<&Criterion> {
        let mut strengths: Vec<_> = result
            .scores
            .values()
            .filter(|c| c.score.is_strength())
            .collect();
        strengths.sort_by(|a, b| {
            b.weighted_score
                .partial_cmp(&a.weighted_score)
                .unwrap_or(Ordering::Equal)
        });
        strengths
    }

    /// Criteria scoring 4 or below, weakest weighted contribution first.
    fn weaknesses(result: &DecisionResult) -> Vec<&Criterion> {
        let mut weaknesses: Vec<_> = result
            .scores
            .values()
            .filter(|c| c.score.is_weakness())
            .collect();
        weaknesses.sort_by(|a, b| {
            a.weighted_score
                .partial_cmp(&b.weighted_score)
                .unwrap_or(Ordering::Equal)
        });
        weaknesses
    }

    /// The factor with the largest impact, first-in-order on ties.
    fn most_impactful<'a>(candidates: &[&'a Criterion]) -> Option<&'a Criterion> {
        let mut best: Option<&'a Criterion> = None;
        for candidate in candidates.iter().copied() {
            match best {
                Some(current) if candidate.impact() <= current.impact() => {}
                _ => best = Some(candidate),
            }
        }
        best
    }

    fn factor_phrase(criteria: &[&Criterion]) -> String {
        criteria
            .iter()
            .take(TOP_FACTOR_LIMIT)
            .map(|c| format!("{} ({}/10)", c.name, c.score))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn reasoning(
        result: &DecisionResult,
        request: &PurchaseRequest,
        strengths: &[&Criterion],
        weaknesses: &[&Criterion],
    ) -> String {
        let mut sentences = Vec::new();

        if !strengths.is_empty() {
            sentences.push(format!(
                "Working in favor: {}.",
                Self::factor_phrase(strengths)
            ));
        }
        if !weaknesses.is_empty() {
            sentences.push(format!(
                "Working against: {}.",
                Self::factor_phrase(weaknesses)
            ));
        }

        let closing = match result.decision {
            Decision::Buy => format!(
                "{} scores {:.0} out of 100, clearing the buy threshold with {} confidence.",
                request.item_name,
                result.final_score,
                result.confidence.label().to_lowercase()
            ),
            Decision::DontBuy => format!(
                "{} scores {:.0} out of 100, below the buy threshold, so holding off is the safer call.",
                request.item_name, result.final_score
            ),
        };
        sentences.push(closing);

        sentences.join(" ")
    }

    /// Exactly two sentences keyed off the headline factors, with
    /// fallbacks when one side is empty.
    fn summary(
        result: &DecisionResult,
        request: &PurchaseRequest,
        headline_positive: Option<&Criterion>,
        headline_negative: Option<&Criterion>,
    ) -> String {
        let item = &request.item_name;
        match result.decision {
            Decision::Buy => {
                let first = match headline_positive {
                    Some(factor) => format!(
                        "Buying {} looks reasonable, driven by {} scoring {}/10.",
                        item, factor.name, factor.score
                    ),
                    None => format!("Buying {} looks reasonable on balance.", item),
                };
                let second = match headline_negative {
                    Some(factor) => format!(
                        "The main caution is {} at {}/10.",
                        factor.name, factor.score
                    ),
                    None => "No single factor weighs strongly against it.".to_string(),
                };
                format!("{} {}", first, second)
            }
            Decision::DontBuy => {
                let first = match headline_negative {
                    Some(factor) => format!(
                        "Holding off on {} is advised, driven by {} scoring {}/10.",
                        item, factor.name, factor.score
                    ),
                    None => format!("Holding off on {} is advised on balance.", item),
                };
                let second = match headline_positive {
                    Some(factor) => format!(
                        "The strongest point in its favor is {} at {}/10.",
                        factor.name, factor.score
                    ),
                    None => "No single factor weighs strongly in its favor.".to_string(),
                };
                format!("{} {}", first, second)
            }
        }
    }

    /// Regroups the canonical-order scores by category.
    fn matrix(result: &DecisionResult) -> CategoryMatrix {
        let mut matrix = CategoryMatrix::default();
        for criterion in result.scores.values() {
            let entry = MatrixEntry {
                criterion: criterion.name.clone(),
                score: criterion.score,
                weight: format!("{:.1}%", criterion.weight * 100.0),
                impact: ImpactLabel::for_score(criterion.score),
            };
            match criterion.category {
                Category::Financial => matrix.financial.push(entry),
                Category::Utility => matrix.utility.push(entry),
                Category::Psychological => matrix.psychological.push(entry),
                Category::Risk => matrix.risk.push(entry),
            }
        }
        matrix
    }
}
