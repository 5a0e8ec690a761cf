//! Decision module - The multi-criteria purchase decision engine.
//!
//! The pipeline is classify → weight → score → aggregate → format.
//! Every step is a pure function over its inputs: no I/O, no shared
//! state, and no failure path once a `PurchaseRequest` exists.

mod aggregator;
mod classifier;
mod criteria;
mod engine;
mod formatter;
pub mod keywords;
mod request;
pub mod scoring;

pub use aggregator::{
    Confidence, Decision, DecisionAggregator, BUY_THRESHOLD, HIGH_CONFIDENCE_EDGES,
    MEDIUM_CONFIDENCE_EDGES,
};
pub use classifier::{ItemClassifier, ItemType};
pub use criteria::{
    criteria_table, Category, CriteriaTable, Criterion, CriterionId, WEIGHT_SUM_TOLERANCE,
};
pub use engine::{DecisionEngine, DecisionResult};
pub use formatter::{
    AnalysisDetails, CategoryMatrix, Factor, ImpactLabel, MatrixEntry, Recommendation,
    RecommendationFormatter, TopFactors,
};
pub use request::{Alternative, Frequency, PurchaseRequest};
