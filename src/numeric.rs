//! Numeric helpers: clamping, angle unit conversion, angle wrapping

use crate::types::{Degrees, Radians};

/// Clamp `value` to the closed range `[low, high]`.
///
/// Only needs a partial order, so it works on `f64` as well as integers.
/// A NaN `value` compares false on both sides and comes back unchanged.
pub fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> T {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// `deg * pi / 180`
#[inline]
pub fn to_radians(deg: Degrees) -> Radians {
    deg.to_radians()
}

/// `rad * 180 / pi`
#[inline]
pub fn to_degrees(rad: Radians) -> Degrees {
    rad.to_degrees()
}

/// Wrap an angle in degrees into [0, 360).
///
/// Uses the truncating remainder (sign follows the dividend) and shifts
/// negative results forward by one turn.
pub fn normalized_angle(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 {
        // -1e-20 + 360 rounds to 360, which is outside the range
        let wrapped = r + 360.0;
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_inside_and_outside() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-3, 0, 10), 0);
        assert_eq!(clamp(42, 0, 10), 10);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
    }

    #[test]
    fn clamp_nan_passes_through() {
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn normalized_angle_known_values() {
        assert_eq!(normalized_angle(360.0), 0.0);
        assert_eq!(normalized_angle(-30.0), 330.0);
        assert_eq!(normalized_angle(725.0), 5.0);
        assert_eq!(normalized_angle(720.0), 0.0);
        assert_eq!(normalized_angle(-725.0), 355.0);
        assert_eq!(normalized_angle(-360.0), 0.0);
        assert_eq!(normalized_angle(90.0), 90.0);
    }

    #[test]
    fn normalized_angle_tiny_negative_stays_in_range() {
        assert_eq!(normalized_angle(-1e-20), 0.0);
    }

    #[test]
    fn normalized_angle_range_and_period() {
        let mut x = -1000.0;
        while x < 1000.0 {
            let n = normalized_angle(x);
            assert!((0.0..360.0).contains(&n), "normalized_angle({x}) = {n}");
            let shifted = normalized_angle(x + 360.0);
            assert!((n - shifted).abs() < 1e-9, "{x}: {n} vs {shifted}");
            x += 7.3;
        }
    }

    #[test]
    fn radian_degree_round_trip() {
        for x in [-1e4, -90.0, -0.001, 0.0, 12.5, 270.0, 1e5] {
            let back = to_degrees(to_radians(Degrees(x)));
            assert!((back.0 - x).abs() <= 1e-9 * x.abs().max(1.0));
        }
    }
}
