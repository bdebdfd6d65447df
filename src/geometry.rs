//! Geometry functions: rotated bounds and radial points

use glam::DVec2;

use crate::types::{Degrees, Point, Radians, Size};

/// Axis-aligned bounding size of a `w x h` rectangle rotated by `angle`
/// about its center.
///
/// `{ |w cos| + |h sin|, |w sin| + |h cos| }`. A square never shrinks; a
/// non-square rectangle trades width for height at right angles.
pub fn rotated_size(size: Size, angle: Radians) -> Size {
    // (cos, sin) of the angle
    let rot = DVec2::from_angle(angle.0);
    Size {
        w: (size.w * rot.x).abs() + (size.h * rot.y).abs(),
        h: (size.w * rot.y).abs() + (size.h * rot.x).abs(),
    }
}

/// [`rotated_size`] for an angle in degrees
pub fn rotated_size_deg(size: Size, angle: Degrees) -> Size {
    rotated_size(size, angle.to_radians())
}

/// Point at `distance` from `center` in direction `angle`.
///
/// 0° points along +x and increasing angles turn toward +y, so on a y-down
/// surface positive angles run clockwise. No y-flip correction is applied.
pub fn point_at(center: Point, distance: f64, angle: Degrees) -> Point {
    let dir = DVec2::from_angle(angle.to_radians().0);
    Point::from(center.to_dvec2() + dir * distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn rotated_size_zero_angle_is_identity() {
        let size = Size::new(40.0, 12.0);
        assert_eq!(rotated_size(size, Radians::ZERO), size);
    }

    #[test]
    fn rotated_square_by_right_angle_is_invariant() {
        let rotated = rotated_size_deg(Size::new(10.0, 10.0), Degrees(90.0));
        assert!(approx(rotated.w, 10.0) && approx(rotated.h, 10.0), "{rotated:?}");
    }

    #[test]
    fn rotated_rectangle_by_right_angle_swaps_dimensions() {
        let rotated = rotated_size_deg(Size::new(40.0, 10.0), Degrees(-90.0));
        assert!(approx(rotated.w, 10.0), "{rotated:?}");
        assert!(approx(rotated.h, 40.0), "{rotated:?}");
    }

    #[test]
    fn rotated_square_by_45_grows_to_diagonal() {
        let rotated = rotated_size_deg(Size::new(10.0, 10.0), Degrees(45.0));
        let diag = 10.0 * std::f64::consts::SQRT_2;
        assert!(approx(rotated.w, diag) && approx(rotated.h, diag));
    }

    #[test]
    fn rotated_square_never_shrinks() {
        let size = Size::new(12.0, 12.0);
        for step in -360..360 {
            let rotated = rotated_size_deg(size, Degrees(step as f64 * 0.5));
            assert!(rotated.w >= size.w - 1e-9, "{step}: {rotated:?}");
            assert!(rotated.h >= size.h - 1e-9, "{step}: {rotated:?}");
        }
    }

    #[test]
    fn rotated_bounds_cover_the_shorter_side() {
        let size = Size::new(30.0, 8.0);
        for step in 0..720 {
            let rotated = rotated_size_deg(size, Degrees(step as f64 * 0.5));
            assert!(rotated.w >= size.h - 1e-9);
            assert!(rotated.h >= size.h - 1e-9);
        }
    }

    #[test]
    fn rotated_size_via_size_method() {
        let a = Size::new(3.0, 4.0).rotated_by(Degrees(30.0));
        let b = rotated_size_deg(Size::new(3.0, 4.0), Degrees(30.0));
        assert_eq!(a, b);
    }

    #[test]
    fn point_at_cardinal_angles() {
        let p = point_at(Point::ORIGIN, 10.0, Degrees(0.0));
        assert_eq!(p, Point::new(10.0, 0.0));

        let p = point_at(Point::ORIGIN, 10.0, Degrees(90.0));
        assert!(approx(p.x, 0.0) && approx(p.y, 10.0), "{p:?}");

        let p = point_at(Point::new(5.0, 5.0), 2.0, Degrees(180.0));
        assert!(approx(p.x, 3.0) && approx(p.y, 5.0), "{p:?}");
    }

    #[test]
    fn point_at_zero_distance_is_center() {
        let center = Point::new(-3.0, 7.5);
        assert_eq!(point_at(center, 0.0, Degrees(123.0)), center);
    }
}
