//! Fixed keyword lists for the rule-based text heuristics.
//!
//! Every list is an ordered set of lowercase substrings. Matching order
//! matters: the classifier checks consumable before service before
//! digital, and the scoring heuristics check necessity before luxury and
//! health before positive before negative. List contents are frozen by
//! unit tests because reordering or editing them changes scores.

/// Food, drink, and dining terms. Checked first by the classifier.
pub const CONSUMABLE_KEYWORDS: &[&str] = &[
    "food", "coffee", "snack", "drink", "meal", "lunch", "dinner", "breakfast", "restaurant",
    "takeout", "grocer", "beer", "wine", "pizza", "dessert",
];

/// Subscriptions, memberships, and bookable services.
pub const SERVICE_KEYWORDS: &[&str] = &[
    "subscription", "membership", "gym", "haircut", "massage", "cleaning", "lesson", "class",
    "ticket", "booking", "appointment", "spa",
];

/// Software, streaming, and licensed digital goods.
pub const DIGITAL_KEYWORDS: &[&str] = &[
    "software", "app", "streaming", "netflix", "spotify", "license", "ebook", "e-book", "cloud",
    "saas", "digital", "download",
];

/// Terms that mark a purchase as a genuine need.
pub const NECESSITY_KEYWORDS: &[&str] = &[
    "medicine", "medication", "prescription", "grocer", "rent", "utilities", "electricity",
    "insurance", "repair", "hygiene", "toothpaste", "soap", "diaper", "essential", "need",
];

/// Terms that mark a purchase as discretionary luxury.
pub const LUXURY_KEYWORDS: &[&str] = &[
    "luxury", "designer", "premium", "deluxe", "fancy", "high-end", "jewelry", "yacht",
    "collector",
];

/// Purposes that read as investments in assets or skills.
pub const INVESTMENT_KEYWORDS: &[&str] = &[
    "invest", "portfolio", "stock", "bond", "asset", "business", "career", "skill", "education",
];

/// Health and wellbeing terms; the strongest emotional-value signal.
pub const HEALTH_KEYWORDS: &[&str] = &[
    "health", "medic", "doctor", "therapy", "fitness", "wellness", "safety",
];

/// Purposes with a sustainable positive emotional payoff.
pub const POSITIVE_EMOTION_KEYWORDS: &[&str] = &[
    "gift", "family", "hobby", "joy", "happy", "love", "celebrat", "birthday", "anniversary",
    "passion", "relax",
];

/// Purposes that signal impulse or mood-driven spending.
pub const NEGATIVE_EMOTION_KEYWORDS: &[&str] = &[
    "impulse", "bored", "stress", "sad", "lonely", "revenge", "fomo", "just because",
];

/// Purposes driven by what other people own or think.
pub const PEER_PRESSURE_KEYWORDS: &[&str] = &[
    "everyone has", "friends have", "keep up", "trend", "viral", "influencer", "show off",
    "impress", "status symbol",
];

/// Goods expected to last years; boosts the longevity score.
pub const DURABLE_GOODS_KEYWORDS: &[&str] = &[
    "furniture", "appliance", "laptop", "computer", "phone", "tool", "machine", "equipment",
    "car", "bike", "camera", "monitor", "desk", "chair", "mattress",
];

/// True when the lowercase haystack contains any keyword as a substring.
pub fn matches_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}
