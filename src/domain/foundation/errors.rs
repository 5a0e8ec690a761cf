//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' must be a finite number")]
    NotFinite { field: String },

    #[error("Field '{field}' must not be negative, got {actual}")]
    NegativeAmount { field: String, actual: f64 },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a non-finite number validation error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite { field: field.into() }
    }

    /// Creates a negative amount validation error.
    pub fn negative_amount(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::NegativeAmount {
            field: field.into(),
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("score", 0, 10, 14);
        assert_eq!(
            format!("{}", err),
            "Field 'score' must be between 0 and 10, got 14"
        );
    }

    #[test]
    fn validation_error_not_finite_displays_correctly() {
        let err = ValidationError::not_finite("price");
        assert_eq!(format!("{}", err), "Field 'price' must be a finite number");
    }

    #[test]
    fn validation_error_negative_amount_displays_correctly() {
        let err = ValidationError::negative_amount("price", -4.5);
        assert_eq!(
            format!("{}", err),
            "Field 'price' must not be negative, got -4.5"
        );
    }
}
