//! Per-criterion scoring functions.
//!
//! Twelve independent pure functions, one per criterion, each mapping
//! its inputs to a 0-10 score, plus the exhaustive dispatch that ties
//! them to `CriterionId`. None of them can panic, divide by zero, or
//! produce NaN: cost 0 and a missing profile are explicit cases with
//! defined results, and tier boundaries are preserved exactly because
//! behavioral tests pin them.

use crate::domain::foundation::{percent_of, Score};
use crate::domain::profile::{FinancialGoal, FinancialProfile};

use super::classifier::ItemType;
use super::criteria::CriterionId;
use super::keywords::{
    matches_any, DURABLE_GOODS_KEYWORDS, HEALTH_KEYWORDS, INVESTMENT_KEYWORDS, LUXURY_KEYWORDS,
    NECESSITY_KEYWORDS, NEGATIVE_EMOTION_KEYWORDS, PEER_PRESSURE_KEYWORDS,
    POSITIVE_EMOTION_KEYWORDS,
};
use super::request::{Alternative, Frequency, PurchaseRequest};

/// Scores one criterion for a request. The match is exhaustive, so every
/// criterion is guaranteed a scoring function at compile time.
pub fn score_criterion(id: CriterionId, request: &PurchaseRequest, item_type: ItemType) -> Score {
    let profile = request.profile.as_ref();
    match id {
        CriterionId::Affordability => affordability(request.cost, profile),
        CriterionId::ValueForMoney => value_for_money(request.cost, request.alternative.as_ref()),
        CriterionId::OpportunityCost => opportunity_cost(request.cost, profile),
        CriterionId::FinancialGoalAlignment => {
            financial_goal_alignment(&request.purpose, profile)
        }
        CriterionId::Necessity => necessity(&request.item_name, &request.purpose),
        CriterionId::FrequencyOfUse => frequency_of_use(request.frequency, item_type),
        CriterionId::Longevity => {
            longevity(&request.item_name, &request.purpose, request.cost, item_type)
        }
        CriterionId::EmotionalValue => emotional_value(&request.purpose),
        CriterionId::SocialFactors => social_factors(&request.item_name, &request.purpose),
        CriterionId::BuyersRemorse => {
            buyers_remorse(request.cost, profile, request.frequency, item_type)
        }
        CriterionId::FinancialRisk => financial_risk(profile),
        CriterionId::AlternativeAvailability => {
            alternative_availability(request.alternative.as_ref())
        }
    }
}

/// Cost as a share of monthly net income. A free item is perfectly
/// affordable regardless of profile; no income means nothing is.
pub fn affordability(cost: f64, profile: Option<&FinancialProfile>) -> Score {
    if cost == 0.0 {
        return Score::MAX;
    }
    let Some(profile) = profile else {
        return Score::NEUTRAL;
    };
    if profile.monthly_net_income <= 0.0 {
        return Score::MIN;
    }

    let ratio = percent_of(cost, profile.monthly_net_income);
    let value = if ratio <= 5.0 {
        10
    } else if ratio <= 10.0 {
        8
    } else if ratio <= 18.0 {
        7
    } else if ratio <= 20.0 {
        6
    } else if ratio <= 30.0 {
        4
    } else if ratio <= 50.0 {
        2
    } else {
        0
    };
    Score::new(value)
}

/// Savings available by taking the cheaper alternative. Deep discounts
/// mean the evaluated item is poor value.
pub fn value_for_money(cost: f64, alternative: Option<&Alternative>) -> Score {
    let Some(alternative) = alternative else {
        return Score::new(8);
    };
    if !alternative.is_cheaper_than(cost) {
        return Score::new(8);
    }

    let savings = percent_of(cost - alternative.price, cost);
    let value = if savings > 50.0 {
        2
    } else if savings > 30.0 {
        4
    } else if savings > 20.0 {
        6
    } else if savings > 10.0 {
        7
    } else {
        8
    };
    Score::new(value)
}

/// What else the money could do: emergency fund gaps and outstanding
/// debt make spending costly.
pub fn opportunity_cost(cost: f64, profile: Option<&FinancialProfile>) -> Score {
    if cost == 0.0 {
        return Score::MAX;
    }
    let Some(profile) = profile else {
        return Score::NEUTRAL;
    };

    let fund = profile.emergency_fund_months;
    let value = if fund < 3.0 && profile.has_debt() {
        2
    } else if fund < 3.0 {
        4
    } else if profile.debt_to_income_ratio > 30.0 {
        4
    } else if profile.has_debt() {
        6
    } else if fund >= 6.0 {
        10
    } else {
        8
    };
    Score::new(value)
}

/// Whether the purchase serves the declared financial goal.
pub fn financial_goal_alignment(purpose: &str, profile: Option<&FinancialProfile>) -> Score {
    let Some(profile) = profile else {
        return Score::NEUTRAL;
    };

    let value = match profile.financial_goal {
        FinancialGoal::Save | FinancialGoal::Debt => 3,
        FinancialGoal::Invest => {
            if matches_any(&purpose.to_lowercase(), INVESTMENT_KEYWORDS) {
                9
            } else {
                5
            }
        }
        FinancialGoal::Balance => 6,
    };
    Score::new(value)
}

/// Need versus want, read from the item and purpose text. Necessity
/// keywords win over luxury keywords when both match.
pub fn necessity(item_name: &str, purpose: &str) -> Score {
    let text = format!("{} {}", item_name, purpose).to_lowercase();
    let value = if matches_any(&text, NECESSITY_KEYWORDS) {
        9
    } else if matches_any(&text, LUXURY_KEYWORDS) {
        3
    } else {
        6
    };
    Score::new(value)
}

/// How often the item gets used. Consumables follow a flatter table
/// because repeat purchases are the category norm, not a bonus.
pub fn frequency_of_use(frequency: Option<Frequency>, item_type: ItemType) -> Score {
    let Some(frequency) = frequency else {
        return Score::NEUTRAL;
    };

    let value = match item_type {
        ItemType::Consumable => match frequency {
            Frequency::Daily => 9,
            Frequency::Weekly => 8,
            Frequency::Monthly => 6,
            Frequency::Rarely => 5,
            Frequency::OneTime => 5,
        },
        _ => match frequency {
            Frequency::Daily => 10,
            Frequency::Weekly => 8,
            Frequency::Monthly => 6,
            Frequency::Rarely => 3,
            Frequency::OneTime => 2,
        },
    };
    Score::new(value)
}

/// How long the purchase keeps delivering value.
pub fn longevity(item_name: &str, purpose: &str, cost: f64, item_type: ItemType) -> Score {
    let value = match item_type {
        ItemType::Consumable => {
            if cost <= 20.0 {
                8
            } else if cost <= 50.0 {
                6
            } else if cost <= 100.0 {
                4
            } else {
                2
            }
        }
        ItemType::Service => 5,
        ItemType::Digital => 8,
        ItemType::Durable => {
            let text = format!("{} {}", item_name, purpose).to_lowercase();
            if text.contains("medicine") {
                10
            } else if matches_any(&text, DURABLE_GOODS_KEYWORDS) {
                if cost > 100.0 {
                    9
                } else {
                    7
                }
            } else {
                6
            }
        }
    };
    Score::new(value)
}

/// Emotional payoff of the purchase, read from the purpose text.
/// Health terms outrank positive terms, which outrank impulse terms.
pub fn emotional_value(purpose: &str) -> Score {
    let text = purpose.to_lowercase();
    let value = if matches_any(&text, HEALTH_KEYWORDS) {
        9
    } else if matches_any(&text, POSITIVE_EMOTION_KEYWORDS) {
        8
    } else if matches_any(&text, NEGATIVE_EMOTION_KEYWORDS) {
        2
    } else {
        5
    };
    Score::new(value)
}

/// Whether the purchase is driven by social pressure.
pub fn social_factors(item_name: &str, purpose: &str) -> Score {
    let text = format!("{} {}", item_name, purpose).to_lowercase();
    if matches_any(&text, PEER_PRESSURE_KEYWORDS) {
        Score::new(3)
    } else {
        Score::new(7)
    }
}

/// Likelihood the buyer regrets the purchase. Consumables are tiered by
/// cost alone; everything else starts neutral and shifts with cost
/// relative to income and with usage frequency.
pub fn buyers_remorse(
    cost: f64,
    profile: Option<&FinancialProfile>,
    frequency: Option<Frequency>,
    item_type: ItemType,
) -> Score {
    if cost == 0.0 {
        return Score::MAX;
    }

    if item_type == ItemType::Consumable {
        let value = if cost <= 15.0 {
            9
        } else if cost <= 30.0 {
            8
        } else if cost <= 50.0 {
            7
        } else if cost <= 100.0 {
            5
        } else {
            3
        };
        return Score::new(value);
    }

    let mut working: i32 = 5;
    if let Some(profile) = profile {
        if profile.monthly_net_income <= 0.0 {
            return Score::MIN;
        }
        let ratio = percent_of(cost, profile.monthly_net_income);
        working += if ratio <= 5.0 {
            3
        } else if ratio <= 10.0 {
            2
        } else if ratio <= 20.0 {
            1
        } else if ratio <= 35.0 {
            -1
        } else if ratio <= 50.0 {
            -2
        } else {
            -3
        };
    }

    match frequency {
        Some(Frequency::Daily) => working += 2,
        Some(Frequency::Rarely) | Some(Frequency::OneTime) => working -= 2,
        _ => {}
    }

    Score::saturating_from(working)
}

/// Exposure of the user's finances: thin emergency fund and high debt
/// both deduct from a clean slate.
pub fn financial_risk(profile: Option<&FinancialProfile>) -> Score {
    let Some(profile) = profile else {
        return Score::NEUTRAL;
    };
    if profile.debt_to_income_ratio >= 100.0 {
        return Score::MIN;
    }

    let mut working: i32 = 10;
    if profile.emergency_fund_months < 3.0 {
        working -= 3;
    }
    let dti = profile.debt_to_income_ratio;
    if dti > 40.0 {
        working -= 3;
    } else if dti > 30.0 {
        working -= 2;
    } else if dti > 20.0 {
        working -= 1;
    }

    Score::saturating_from(working)
}

/// Whether a cheaper option exists at all.
pub fn alternative_availability(alternative: Option<&Alternative>) -> Score {
    match alternative {
        Some(alternative) if alternative.price > 0.0 => Score::new(3),
        _ => Score::MAX,
    }
}
