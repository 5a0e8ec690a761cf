//! SpendSense - Deterministic multi-criteria purchase decision engine.
//!
//! Takes a prospective purchase, an optional financial profile, an
//! optional cheaper alternative, and a risk-tolerance setting, and
//! produces a weighted Buy/Don't-Buy recommendation with explainable
//! per-criterion breakdowns. Every evaluation is a pure, synchronous
//! computation; the only stateful piece is the adjacent classification
//! cache used by embedding services.

pub mod cache;
pub mod domain;

pub use domain::decision::{
    Alternative, Confidence, Decision, DecisionEngine, DecisionResult, Frequency, ItemType,
    PurchaseRequest, Recommendation, RecommendationFormatter,
};
pub use domain::profile::{FinancialGoal, FinancialProfile, RiskTolerance};
