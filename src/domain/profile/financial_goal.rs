//! Primary financial goal declared on the user's profile.

use serde::{Deserialize, Serialize};

/// What the user is currently steering their money toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialGoal {
    /// Building savings; discretionary spending scores poorly.
    Save,
    /// Paying down debt; discretionary spending scores poorly.
    Debt,
    /// Growing investments; investment-flavored purchases score well.
    Invest,
    /// No single focus.
    Balance,
}

impl FinancialGoal {
    /// Parses a user-supplied goal string. Case-insensitive; unknown
    /// input yields `None` so callers can fall back to the default.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "save" | "saving" | "savings" => Some(Self::Save),
            "debt" | "pay off debt" => Some(Self::Debt),
            "invest" | "investing" => Some(Self::Invest),
            "balance" | "balanced" => Some(Self::Balance),
            _ => None,
        }
    }
}

impl Default for FinancialGoal {
    fn default() -> Self {
        Self::Balance
    }
}

impl std::fmt::Display for FinancialGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Save => write!(f, "Save"),
            Self::Debt => write!(f, "Pay off debt"),
            Self::Invest => write!(f, "Invest"),
            Self::Balance => write!(f, "Balance"),
        }
    }
}
