//! Financial profile summarizing a user's monthly money situation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{finite_or_zero, sanitize_amount};

use super::{FinancialGoal, RiskTolerance};

/// Fund months assigned when savings are positive but monthly burn is zero.
/// Anything at or above six months behaves identically in scoring.
const FULLY_FUNDED_MONTHS: f64 = 12.0;

/// Summary of a user's monthly financial situation.
///
/// All three numeric fields are derived summaries, not raw ledger data:
/// net income may be negative when spending exceeds income, the debt
/// ratio is a percentage, and fund months measure how long liquid
/// savings cover must-pay expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProfile {
    /// Income minus expenses minus debt payments. May be zero or negative.
    pub monthly_net_income: f64,
    /// Debt payments as a percentage of income; 0 when no debt or no income.
    pub debt_to_income_ratio: f64,
    /// Liquid savings divided by monthly must-pay burn.
    pub emergency_fund_months: f64,
    pub risk_tolerance: RiskTolerance,
    pub financial_goal: FinancialGoal,
}

impl FinancialProfile {
    /// Creates a profile from already-derived summary numbers.
    /// Non-finite input coerces to zero.
    pub fn new(
        monthly_net_income: f64,
        debt_to_income_ratio: f64,
        emergency_fund_months: f64,
    ) -> Self {
        Self {
            monthly_net_income: finite_or_zero(monthly_net_income),
            debt_to_income_ratio: sanitize_amount(debt_to_income_ratio),
            emergency_fund_months: sanitize_amount(emergency_fund_months),
            risk_tolerance: RiskTolerance::default(),
            financial_goal: FinancialGoal::default(),
        }
    }

    /// Derives the summary numbers from raw monthly figures.
    ///
    /// - net income = income − expenses − debt payments
    /// - debt ratio = debt payments ÷ income × 100 when both are positive
    /// - fund months = savings ÷ (expenses + debt payments); positive
    ///   savings against a zero burn count as fully funded
    pub fn from_monthly_figures(
        income: f64,
        expenses: f64,
        debt_payments: f64,
        liquid_savings: f64,
    ) -> Self {
        let income = sanitize_amount(income);
        let expenses = sanitize_amount(expenses);
        let debt_payments = sanitize_amount(debt_payments);
        let liquid_savings = sanitize_amount(liquid_savings);

        let net = income - expenses - debt_payments;

        let dti = if income > 0.0 && debt_payments > 0.0 {
            (debt_payments / income) * 100.0
        } else {
            0.0
        };

        let burn = expenses + debt_payments;
        let fund_months = if burn > 0.0 {
            liquid_savings / burn
        } else if liquid_savings > 0.0 {
            FULLY_FUNDED_MONTHS
        } else {
            0.0
        };

        Self {
            monthly_net_income: net,
            debt_to_income_ratio: dti,
            emergency_fund_months: fund_months,
            risk_tolerance: RiskTolerance::default(),
            financial_goal: FinancialGoal::default(),
        }
    }

    /// Sets the risk tolerance tier.
    pub fn with_risk_tolerance(mut self, tier: RiskTolerance) -> Self {
        self.risk_tolerance = tier;
        self
    }

    /// Sets the declared financial goal.
    pub fn with_financial_goal(mut self, goal: FinancialGoal) -> Self {
        self.financial_goal = goal;
        self
    }

    /// True when any debt payment shows up in the ratio.
    pub fn has_debt(&self) -> bool {
        self.debt_to_income_ratio > 0.0
    }
}
