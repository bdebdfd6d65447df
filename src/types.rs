//! Value types for label placement (all `Copy`, no identity).
//!
//! Angles carry their unit in the type: [`Degrees`] and [`Radians`] never
//! mix silently, every conversion goes through `From` or the explicit
//! `to_*` methods.

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use glam::{DVec2, dvec2};

use crate::errors::NumericError;

// ============================================================================
// Angles
// ============================================================================

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Radians(pub f64);

impl Degrees {
    pub const ZERO: Degrees = Degrees(0.0);

    /// Convert to radians (`deg * pi / 180`)
    #[inline]
    pub fn to_radians(self) -> Radians {
        Radians(self.0 * PI / 180.0)
    }

    /// Wrap into [0, 360)
    #[inline]
    pub fn normalized(self) -> Degrees {
        Degrees(crate::numeric::normalized_angle(self.0))
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Radians {
    pub const ZERO: Radians = Radians(0.0);

    /// Convert to degrees (`rad * 180 / pi`)
    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0 * 180.0 / PI)
    }

    /// True when this is exactly zero (the unrotated fast path)
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Radians {
        deg.to_radians()
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Degrees {
        rad.to_degrees()
    }
}

impl Neg for Degrees {
    type Output = Degrees;
    fn neg(self) -> Degrees { Degrees(-self.0) }
}

impl Neg for Radians {
    type Output = Radians;
    fn neg(self) -> Radians { Radians(-self.0) }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}

// ============================================================================
// Points, offsets, sizes
// ============================================================================

/// A coordinate on the drawing surface
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self { Point { x, y } }

    /// The displacement from the surface origin to this point
    pub fn to_offset(self) -> Offset {
        Offset { dx: self.x, dy: self.y }
    }

    pub fn to_dvec2(self) -> DVec2 {
        dvec2(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

/// A displacement vector (not an absolute position).
/// Use this for translations; Point + Offset = Point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Offset { dx, dy }
    }
}

impl Add<Offset> for Point {
    type Output = Point;
    fn add(self, rhs: Offset) -> Point {
        Point { x: self.x + rhs.dx, y: self.y + rhs.dy }
    }
}

impl Sub<Offset> for Point {
    type Output = Point;
    fn sub(self, rhs: Offset) -> Point {
        Point { x: self.x - rhs.dx, y: self.y - rhs.dy }
    }
}

impl AddAssign<Offset> for Point {
    fn add_assign(&mut self, rhs: Offset) {
        self.x += rhs.dx;
        self.y += rhs.dy;
    }
}

impl SubAssign<Offset> for Point {
    fn sub_assign(&mut self, rhs: Offset) {
        self.x -= rhs.dx;
        self.y -= rhs.dy;
    }
}

/// Subtract two points to get an offset
impl Sub<Point> for Point {
    type Output = Offset;
    fn sub(self, rhs: Point) -> Offset {
        Offset { dx: self.x - rhs.x, dy: self.y - rhs.y }
    }
}

impl Neg for Offset {
    type Output = Offset;
    fn neg(self) -> Offset { Offset { dx: -self.dx, dy: -self.dy } }
}

/// 2D size. Negative sizes are accepted and produce mirrored geometry.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const ZERO: Size = Size { w: 0.0, h: 0.0 };

    pub fn new(w: f64, h: f64) -> Self { Size { w, h } }

    /// Create a size with validation (rejects NaN, infinite and negative)
    pub fn try_new(w: f64, h: f64) -> Result<Self, NumericError> {
        Ok(Size {
            w: NumericError::check_non_negative(w)?,
            h: NumericError::check_non_negative(h)?,
        })
    }

    /// Half of this size as an offset, pointing from the center to the
    /// bottom-right corner
    pub fn half(self) -> Offset {
        Offset { dx: self.w / 2.0, dy: self.h / 2.0 }
    }

    /// Axis-aligned bounds of this size after rotation about its center
    pub fn rotated_by(self, angle: impl Into<Radians>) -> Size {
        crate::geometry::rotated_size(self, angle.into())
    }
}

/// Scale a size componentwise by an anchor fraction
impl Mul<Anchor> for Size {
    type Output = Offset;
    fn mul(self, rhs: Anchor) -> Offset {
        Offset { dx: self.w * rhs.x, dy: self.h * rhs.y }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// Rectangle given by its top-left origin and size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self { Rect { origin, size } }

    /// Rectangle of `size` centered on `center`
    pub fn centered(center: Point, size: Size) -> Self {
        Rect { origin: center - size.half(), size }
    }

    pub fn center(&self) -> Point {
        self.origin + self.size.half()
    }
}

// ============================================================================
// Anchor and alignment
// ============================================================================

/// Which point of a content's bounding box lands on the target coordinate.
///
/// Fractions are conventionally in [0, 1] per axis but never clamped:
/// (0, 0) is the top-left corner, (0.5, 0.5) the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub const TOP_LEFT: Anchor = Anchor { x: 0.0, y: 0.0 };
    pub const CENTER: Anchor = Anchor { x: 0.5, y: 0.5 };
    pub const BOTTOM_RIGHT: Anchor = Anchor { x: 1.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> Self { Anchor { x, y } }

    /// Create an anchor with validation (rejects NaN and infinite fractions)
    pub fn try_new(x: f64, y: f64) -> Result<Self, NumericError> {
        Ok(Anchor {
            x: NumericError::check_finite(x)?,
            y: NumericError::check_finite(y)?,
        })
    }

    /// This anchor relative to the center, so (0.5, 0.5) becomes (0, 0)
    pub fn from_center(self) -> Anchor {
        Anchor { x: self.x - 0.5, y: self.y - 0.5 }
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor::CENTER
    }
}

/// Horizontal alignment of single-line text relative to its target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Horizontal shift applied to a run of `width`
    pub fn shift(self, width: f64) -> f64 {
        match self {
            Alignment::Left => 0.0,
            Alignment::Center => width / 2.0,
            Alignment::Right => width,
        }
    }
}
