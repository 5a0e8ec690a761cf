//! Risk tolerance tiers that shift the criteria weight tables.

use serde::{Deserialize, Serialize};

/// How much weight the user wants placed on risk versus utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    /// Cautious spender: risk criteria weigh more, utility less.
    Low,
    /// Baseline weighting.
    Moderate,
    /// Comfortable with risk: utility weighs more, risk less.
    High,
}

impl RiskTolerance {
    /// All tiers, in ascending order of tolerance.
    pub const ALL: [Self; 3] = [Self::Low, Self::Moderate, Self::High];

    /// Parses a user-supplied tier string. Case-insensitive; unknown
    /// input yields `None` so callers can fall back to the default.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "moderate" | "medium" => Some(Self::Moderate),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl Default for RiskTolerance {
    fn default() -> Self {
        Self::Moderate
    }
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_tolerance_default_is_moderate() {
        assert_eq!(RiskTolerance::default(), RiskTolerance::Moderate);
    }

    #[test]
    fn risk_tolerance_parses_known_tiers() {
        assert_eq!(RiskTolerance::parse("low"), Some(RiskTolerance::Low));
        assert_eq!(RiskTolerance::parse("Moderate"), Some(RiskTolerance::Moderate));
        assert_eq!(RiskTolerance::parse(" HIGH "), Some(RiskTolerance::High));
    }

    #[test]
    fn risk_tolerance_parse_rejects_unknown_input() {
        assert_eq!(RiskTolerance::parse("reckless"), None);
        assert_eq!(RiskTolerance::parse(""), None);
    }

    #[test]
    fn risk_tolerance_serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&RiskTolerance::Low).unwrap(), "\"low\"");
        assert_eq!(serde_json::to_string(&RiskTolerance::High).unwrap(), "\"high\"");
    }

    #[test]
    fn risk_tolerance_deserializes_from_snake_case() {
        let tier: RiskTolerance = serde_json::from_str("\"moderate\"").unwrap();
        assert_eq!(tier, RiskTolerance::Moderate);
    }
}
