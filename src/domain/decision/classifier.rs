//! Item type classifier - Rule-based bucketing of free-text purchases.

use serde::{Deserialize, Serialize};

use super::keywords::{
    matches_any, CONSUMABLE_KEYWORDS, DIGITAL_KEYWORDS, SERVICE_KEYWORDS,
};

/// The four purchase buckets that select alternate scoring tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    /// Consumed and gone: food, drink, dining.
    Consumable,
    /// Subscriptions, memberships, and bookable services.
    Service,
    /// Software, streaming, licensed digital goods.
    Digital,
    /// Physical goods expected to persist. The fallback bucket.
    Durable,
}

impl ItemType {
    /// Returns the display label for this item type.
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Consumable => "Consumable",
            ItemType::Service => "Service",
            ItemType::Digital => "Digital",
            ItemType::Durable => "Durable",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rule-based classifier over item name and purpose text.
pub struct ItemClassifier;

impl ItemClassifier {
    /// Classifies a purchase from its name and stated purpose.
    ///
    /// Both strings are lowercased and concatenated, then checked against
    /// the keyword lists in priority order: consumable, then service,
    /// then digital. Anything unmatched (including empty or exotic text)
    /// is a durable good.
    pub fn classify(item_name: &str, purpose: &str) -> ItemType {
        let text = format!("{} {}", item_name, purpose).to_lowercase();

        if matches_any(&text, CONSUMABLE_KEYWORDS) {
            return ItemType::Consumable;
        }
        if matches_any(&text, SERVICE_KEYWORDS) {
            return ItemType::Service;
        }
        if matches_any(&text, DIGITAL_KEYWORDS) {
            return ItemType::Digital;
        }

        ItemType::Durable
    }
}
