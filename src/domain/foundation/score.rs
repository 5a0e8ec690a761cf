//! Criterion score value object (0-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A criterion score between 0 and 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// The lowest possible score.
    pub const MIN: Self = Self(0);

    /// The highest possible score.
    pub const MAX: Self = Self(10);

    /// The neutral midpoint, used when an input needed to judge a
    /// criterion is absent.
    pub const NEUTRAL: Self = Self(5);

    /// Creates a new Score, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(10))
    }

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 10 {
            return Err(ValidationError::out_of_range("score", 0, 10, value as i32));
        }
        Ok(Self(value))
    }

    /// Creates a Score from a signed working value, saturating at the
    /// scale endpoints. Used where adjustments may push a base score
    /// below 0 or above 10.
    pub fn saturating_from(value: i32) -> Self {
        Self(value.clamp(0, 10) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as f64, for weighting arithmetic.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }

    /// True when the score marks a clear point in favor (7 or above).
    pub fn is_strength(&self) -> bool {
        self.0 >= 7
    }

    /// True when the score marks a clear point against (4 or below).
    pub fn is_weakness(&self) -> bool {
        self.0 <= 4
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
