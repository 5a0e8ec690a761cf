//! Numeric coercion helpers shared across the domain.
//!
//! Scoring never propagates NaN or infinity: malformed numeric input is
//! coerced to zero at the boundary and ratios over a non-positive base
//! resolve to zero instead of dividing.

/// Returns the value unchanged if finite, otherwise 0.0.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Coerces a monetary amount to a finite, non-negative number.
pub fn sanitize_amount(value: f64) -> f64 {
    let value = finite_or_zero(value);
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Computes `part` as a percentage of `whole`, or 0.0 when `whole` is not
/// positive.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole) * 100.0
    } else {
        0.0
    }
}

/// Rounds to four decimal places.
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_or_zero_passes_finite_values_through() {
        assert_eq!(finite_or_zero(42.5), 42.5);
        assert_eq!(finite_or_zero(-3.0), -3.0);
        assert_eq!(finite_or_zero(0.0), 0.0);
    }

    #[test]
    fn finite_or_zero_coerces_nan_and_infinities() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn sanitize_amount_clamps_negatives_to_zero() {
        assert_eq!(sanitize_amount(-50.0), 0.0);
        assert_eq!(sanitize_amount(50.0), 50.0);
    }

    #[test]
    fn sanitize_amount_coerces_nan_to_zero() {
        assert_eq!(sanitize_amount(f64::NAN), 0.0);
    }

    #[test]
    fn percent_of_computes_ratio() {
        assert_eq!(percent_of(50.0, 200.0), 25.0);
        assert_eq!(percent_of(500.0, 17_000.0), 500.0 / 17_000.0 * 100.0);
    }

    #[test]
    fn percent_of_zero_or_negative_whole_is_zero() {
        assert_eq!(percent_of(50.0, 0.0), 0.0);
        assert_eq!(percent_of(50.0, -100.0), 0.0);
    }

    #[test]
    fn round4_rounds_to_four_decimals() {
        assert_eq!(round4(0.099_99), 0.1);
        assert_eq!(round4(0.123_45), 0.1234);
        assert_eq!(round4(0.123_46), 0.1235);
    }
}
