//! Profile module - The user's financial situation as the engine sees it.
//!
//! A profile is optional everywhere it is consumed: scoring degrades to
//! neutral defaults when it is absent rather than failing.

mod financial_goal;
mod financial_profile;
mod risk_tolerance;

pub use financial_goal::FinancialGoal;
pub use financial_profile::FinancialProfile;
pub use risk_tolerance::RiskTolerance;
