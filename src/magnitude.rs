//! Order-of-magnitude rounding and display precision for axis labels.

/// Round `x` to one significant digit, breaking exact .5 ties away from zero.
///
/// 1234 becomes 1000, 0.00456 becomes 0.005, 95 becomes 100. Zero and
/// non-finite inputs come back unchanged.
pub fn round_to_next_significant(x: f64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }

    let d = x.abs().log10().ceil();
    let scale = 10_f64.powf(1.0 - d);
    // f64::round already rounds half away from zero
    (x * scale).round() / scale
}

/// Number of decimals needed to print `x` at axis-label precision.
///
/// Computes `ceil(-log10(r)) + 2` where `r` is `x` rounded to one
/// significant digit. The `+ 2` is a display heuristic and is kept as is.
/// Large magnitudes drive the formula below zero; the result saturates at 0.
/// Zero and non-finite inputs yield 0.
pub fn decimal_places(x: f64) -> usize {
    if x == 0.0 || !x.is_finite() {
        return 0;
    }

    let rounded = round_to_next_significant(x);
    if !rounded.is_finite() {
        return 0;
    }

    // magnitude only: log10 of a negative value would be NaN
    let places = (-rounded.abs().log10()).ceil() + 2.0;
    if places.is_nan() || places <= 0.0 {
        0
    } else {
        places as usize
    }
}

/// Format `x` with [`decimal_places`] decimals, the way axis labels print values
pub fn format_value(x: f64) -> String {
    format!("{:.prec$}", x, prec = decimal_places(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== round_to_next_significant ====================

    #[test]
    fn rounds_to_leading_digit() {
        assert_eq!(round_to_next_significant(1234.0), 1000.0);
        assert_eq!(round_to_next_significant(-1234.0), -1000.0);
        assert_eq!(round_to_next_significant(95.0), 100.0);
        assert_eq!(round_to_next_significant(1.0), 1.0);
        assert_eq!(round_to_next_significant(10.0), 10.0);
    }

    #[test]
    fn rounds_small_magnitudes() {
        assert!((round_to_next_significant(0.00456) - 0.005).abs() < 1e-15);
        assert_eq!(round_to_next_significant(-0.5), -0.5);
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(round_to_next_significant(250.0), 300.0);
        assert_eq!(round_to_next_significant(-15.0), -20.0);
    }

    #[test]
    fn zero_and_non_finite_unchanged() {
        assert_eq!(round_to_next_significant(0.0), 0.0);
        assert!(round_to_next_significant(f64::NAN).is_nan());
        assert_eq!(round_to_next_significant(f64::INFINITY), f64::INFINITY);
        assert_eq!(
            round_to_next_significant(f64::NEG_INFINITY),
            f64::NEG_INFINITY
        );
    }

    // ==================== decimal_places ====================

    #[test]
    fn decimal_places_small_values() {
        assert_eq!(decimal_places(0.00456), 5);
        assert_eq!(decimal_places(0.5), 3);
        assert_eq!(decimal_places(-0.5), 3);
        assert_eq!(decimal_places(1.0), 2);
        assert_eq!(decimal_places(15.0), 1);
    }

    #[test]
    fn decimal_places_large_values_saturate() {
        assert_eq!(decimal_places(100.0), 0);
        assert_eq!(decimal_places(1234.0), 0);
        assert_eq!(decimal_places(-1e9), 0);
    }

    #[test]
    fn decimal_places_degenerate_inputs() {
        assert_eq!(decimal_places(0.0), 0);
        assert_eq!(decimal_places(f64::NAN), 0);
        assert_eq!(decimal_places(f64::INFINITY), 0);
    }

    // ==================== format_value ====================

    #[test]
    fn format_value_uses_decimal_places() {
        assert_eq!(format_value(1234.0), "1234");
        assert_eq!(format_value(0.25), "0.250");
        assert_eq!(format_value(-0.5), "-0.500");
        assert_eq!(format_value(0.0), "0");
    }
}
