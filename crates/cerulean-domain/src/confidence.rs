//! Confidence score rounding
//!
//! Remote services report scores with more precision than is useful for
//! display or comparison. Every score that leaves an adapter is rounded to
//! [`CONFIDENCE_DECIMALS`] places.

/// Number of decimal places kept on every confidence score
pub const CONFIDENCE_DECIMALS: usize = 4;

/// Round a confidence score to [`CONFIDENCE_DECIMALS`] places
///
/// Rounding works on the exact decimal value of the `f64`, ties to even.
/// `0.03335` is stored just below the tie and becomes `0.0333`. Repeated
/// rounding is stable:
/// `round_confidence(round_confidence(x)) == round_confidence(x)`.
///
/// # Examples
///
/// ```
/// use cerulean_domain::round_confidence;
///
/// assert_eq!(round_confidence(0.979999), 0.98);
/// assert_eq!(round_confidence(0.98), 0.98);
/// assert_eq!(round_confidence(0.12344), 0.1234);
/// ```
pub fn round_confidence(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // Formatting rounds the exact decimal value of the float
    format!("{:.*}", CONFIDENCE_DECIMALS, value)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_four_places() {
        assert_eq!(round_confidence(0.123456), 0.1235);
        assert_eq!(round_confidence(0.99999), 1.0);
        assert_eq!(round_confidence(0.0), 0.0);
    }

    #[test]
    fn test_near_value_collapses() {
        assert_eq!(round_confidence(0.979999), 0.98);
        assert_eq!(round_confidence(0.98), 0.98);
    }

    #[test]
    fn test_already_rounded_values_unchanged() {
        for value in [0.01, 0.95, 0.9876, 1.0] {
            assert_eq!(round_confidence(value), value);
        }
    }

    #[test]
    fn test_values_stored_below_a_tie_round_down() {
        assert_eq!(round_confidence(0.03335), 0.0333);
        assert_eq!(round_confidence(0.15845), 0.1585);
        assert_eq!(round_confidence(0.37245), 0.3725);
    }

    #[test]
    fn test_tiny_values_and_one() {
        assert_eq!(round_confidence(1.0), 1.0);
        assert_eq!(round_confidence(0.00004), 0.0);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_confidence(f64::NAN).is_nan());
        assert_eq!(round_confidence(f64::INFINITY), f64::INFINITY);
    }
}
