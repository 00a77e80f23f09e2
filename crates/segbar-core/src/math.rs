use std::ops::Mul;

pub use euclid;

/// Units in physical pixels.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Physical;

/// A point in units of logical points.
///
/// Alias for ```euclid::default::Point2D<f32>```.
pub type Point = euclid::default::Point2D<f32>;

/// A vector in units of logical points.
///
/// Alias for ```euclid::default::Vector2D<f32>```.
pub type Vector = euclid::default::Vector2D<f32>;

/// A size in units of logical points.
///
/// Alias for ```euclid::default::Size2D<f32>```.
pub type Size = euclid::default::Size2D<f32>;

/// A rectangle in units of logical points.
///
/// Alias for ```euclid::default::Rect<f32>```
pub type Rect = euclid::default::Rect<f32>;

/// An angle in radians (f32).
///
/// Alias for ```euclid::Angle<f32>```
pub type Angle = euclid::Angle<f32>;

/// A point in units of physical pixels.
pub type PhysicalPoint = euclid::Point2D<f32, Physical>;
/// A size in units of physical pixels.
pub type PhysicalSize = euclid::Size2D<f32, Physical>;
/// A rectangle in units of physical pixels.
pub type PhysicalRect = euclid::Rect<f32, Physical>;

/// Convert a rectangle from logical points to physical pixels.
#[inline]
pub fn to_physical_rect(rect: Rect, scale_factor: ScaleFactor) -> PhysicalRect {
    PhysicalRect::new(
        PhysicalPoint::new(rect.origin.x * scale_factor.0, rect.origin.y * scale_factor.0),
        PhysicalSize::new(rect.size.width * scale_factor.0, rect.size.height * scale_factor.0),
    )
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub const fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Size::new(x, y)`.
#[inline]
pub const fn size(w: f32, h: f32) -> Size {
    Size::new(w, h)
}

/// Shorthand for `Angle { radians: value * PI / 180.0 }`.
#[inline]
pub fn degrees(degrees: f32) -> Angle {
    Angle {
        radians: degrees * (std::f32::consts::PI / 180.0),
    }
}

/// Shorthand for `Rect::new(Point::new(x, y), Size::new(width, height))`.
#[inline]
pub const fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::new(Point::new(x, y), Size::new(width, height))
}

/// The horizontal shift of an edge of the given vertical `length` leaning
/// by `angle` away from the vertical axis.
///
/// The result carries the sign of the angle: a positive angle leans the top
/// of the edge to the right.
#[inline]
pub fn bevel_tangent(length: f32, angle: Angle) -> f32 {
    length * angle.radians.tan()
}

/// The length of a horizontal gap of `length` measured along an edge that
/// leans by `angle`.
///
/// This is the hypotenuse of `length` and its own [`bevel_tangent`], so it is
/// never shorter than `length`.
#[inline]
pub fn skewed_length(length: f32, angle: Angle) -> f32 {
    length.hypot(bevel_tangent(length, angle))
}

/// A scaling factor in points per pixel.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleFactor(pub f32);

impl ScaleFactor {
    pub fn new(scale_factor: f32) -> Self {
        Self(scale_factor)
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(1.0)
    }
}

impl From<f32> for ScaleFactor {
    fn from(s: f32) -> Self {
        Self(s)
    }
}

impl From<ScaleFactor> for f32 {
    fn from(s: ScaleFactor) -> Self {
        s.0
    }
}

impl Mul<ScaleFactor> for f32 {
    type Output = f32;
    fn mul(self, rhs: ScaleFactor) -> Self::Output {
        self * rhs.0
    }
}
