//! # Numeric Helpers
//!
//! Small helpers shared by every stage of the calculation.
//!
//! Raw text from a form field becomes a number here. Anything that is not a
//! finite, nonnegative number becomes `f64::NAN`, and that NaN is carried
//! through the rest of the pipeline as "no usable value". It is never
//! replaced with zero.
//!
//! ## Example
//!
//! ```rust
//! use tube_core::numeric::parse_dimension;
//!
//! assert_eq!(parse_dimension(" 50.8 "), 50.8);
//! assert!(parse_dimension("abc").is_nan());
//! assert!(parse_dimension("-2").is_nan());
//! ```

/// Parse raw text into a finite nonnegative number, or NaN.
///
/// Leading and trailing whitespace is ignored. Empty text, text that is not a
/// number, negative numbers, and infinities all yield NaN. Negative zero is
/// returned as plain zero.
pub fn parse_dimension(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) => sanitize(value),
        Err(_) => f64::NAN,
    }
}

/// Map any value that is not finite and nonnegative to NaN.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        // collapses -0.0
        value + 0.0
    } else {
        f64::NAN
    }
}

/// True when `value` is finite and strictly greater than zero.
#[inline]
pub fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Relative comparison with an absolute floor for values near zero.
///
/// NaN is never equal to anything, including NaN.
pub fn approx_eq(a: f64, b: f64, rel_tol: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= rel_tol * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_dimension("2"), 2.0);
        assert_eq!(parse_dimension("0.1"), 0.1);
        assert_eq!(parse_dimension("1e3"), 1000.0);
        assert_eq!(parse_dimension("\t12.5\n"), 12.5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_dimension("").is_nan());
        assert!(parse_dimension("   ").is_nan());
        assert!(parse_dimension("2 in").is_nan());
        assert!(parse_dimension("1,5").is_nan());
        assert!(parse_dimension("abc").is_nan());
    }

    #[test]
    fn test_parse_rejects_negative_and_non_finite() {
        assert!(parse_dimension("-0.5").is_nan());
        assert!(parse_dimension("inf").is_nan());
        assert!(parse_dimension("NaN").is_nan());
    }

    #[test]
    fn test_zero_is_a_number() {
        // Zero parses; it is the validator's job to reject it
        let zero = parse_dimension("0");
        assert!(!zero.is_nan());
        assert_eq!(zero, 0.0);

        let neg_zero = parse_dimension("-0");
        assert_eq!(neg_zero, 0.0);
        assert!(neg_zero.is_sign_positive());
    }

    #[test]
    fn test_is_positive_finite() {
        assert!(is_positive_finite(1e-12));
        assert!(!is_positive_finite(0.0));
        assert!(!is_positive_finite(-1.0));
        assert!(!is_positive_finite(f64::NAN));
        assert!(!is_positive_finite(f64::INFINITY));
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-12, 1e-9));
        assert!(!approx_eq(1.0, 1.001, 1e-9));
        assert!(!approx_eq(f64::NAN, f64::NAN, 1.0));
    }
}
