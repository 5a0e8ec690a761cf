//! Purchase request - The input surface of the decision engine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{sanitize_amount, ValidationError};
use crate::domain::profile::{FinancialProfile, RiskTolerance};

/// How often the purchase would be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Rarely,
    OneTime,
}

impl Frequency {
    /// All frequencies, from most to least often used.
    pub const ALL: [Self; 5] = [
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Rarely,
        Self::OneTime,
    ];

    /// Parses a user-supplied frequency string. Case-insensitive; unknown
    /// input yields `None`, which the scoring layer treats as neutral.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "daily" | "every day" => Some(Self::Daily),
            "weekly" | "every week" => Some(Self::Weekly),
            "monthly" | "every month" => Some(Self::Monthly),
            "rarely" | "seldom" => Some(Self::Rarely),
            "one-time" | "one time" | "once" | "onetime" => Some(Self::OneTime),
            _ => None,
        }
    }

    /// Returns the display label for this frequency.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Rarely => "Rarely",
            Self::OneTime => "One-time",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A cheaper option the user could choose instead.
///
/// An alternative priced at or above the evaluated cost is carried but
/// never treated as a discount by the scoring layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub price: f64,
}

impl Alternative {
    /// Creates an alternative, coercing a non-finite or negative price to 0.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price: sanitize_amount(price),
        }
    }

    /// Creates an alternative, rejecting an invalid price instead of coercing.
    pub fn try_new(name: impl Into<String>, price: f64) -> Result<Self, ValidationError> {
        if !price.is_finite() {
            return Err(ValidationError::not_finite("price"));
        }
        if price < 0.0 {
            return Err(ValidationError::negative_amount("price", price));
        }
        Ok(Self {
            name: name.into(),
            price,
        })
    }

    /// True when this alternative is a genuine discount against `cost`.
    pub fn is_cheaper_than(&self, cost: f64) -> bool {
        cost > 0.0 && self.price < cost
    }
}

/// Everything the engine needs to evaluate one prospective purchase.
///
/// `new` coerces invalid required input (a non-finite or negative cost
/// becomes 0) so that every request produces a decision; the optional
/// fields default to absent and score neutrally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub item_name: String,
    pub cost: f64,
    pub purpose: String,
    pub frequency: Option<Frequency>,
    pub profile: Option<FinancialProfile>,
    pub alternative: Option<Alternative>,
    pub risk_tolerance_override: Option<RiskTolerance>,
}

impl PurchaseRequest {
    /// Creates a request for an item at a cost.
    pub fn new(item_name: impl Into<String>, cost: f64) -> Self {
        Self {
            item_name: item_name.into(),
            cost: sanitize_amount(cost),
            purpose: String::new(),
            frequency: None,
            profile: None,
            alternative: None,
            risk_tolerance_override: None,
        }
    }

    /// Sets the stated purpose of the purchase.
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    /// Sets the expected frequency of use.
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Attaches the user's financial profile.
    pub fn with_profile(mut self, profile: FinancialProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Attaches a cheaper alternative.
    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = Some(alternative);
        self
    }

    /// Overrides the risk tolerance used for weighting.
    pub fn with_risk_tolerance(mut self, tier: RiskTolerance) -> Self {
        self.risk_tolerance_override = Some(tier);
        self
    }

    /// The tier used for weight derivation: the explicit override wins,
    /// then the profile's tier, then the moderate default.
    pub fn risk_tolerance(&self) -> RiskTolerance {
        self.risk_tolerance_override
            .or_else(|| self.profile.as_ref().map(|p| p.risk_tolerance))
            .unwrap_or_default()
    }
}
