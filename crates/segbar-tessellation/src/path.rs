mod builder;

pub use builder::PathBuilder;

pub use lyon::path as lyon_path;

use segbar_core::math::{Point, Size};
use segbar_geometry::SegmentBox;

/// An immutable set of points that may or may not be connected.
#[derive(Debug, Clone)]
pub struct Path {
    pub raw: lyon::path::Path,
}

impl Path {
    pub fn builder() -> PathBuilder {
        PathBuilder::new()
    }

    /// Creates a new [`Path`] representing a rectangle given its top-left
    /// corner coordinate and its `Size`.
    pub fn rectangle(top_left: Point, size: Size) -> Self {
        PathBuilder::new().rectangle(top_left, size).build()
    }

    /// Creates a new closed [`Path`] through the given points.
    pub fn polygon(points: &[Point]) -> Self {
        PathBuilder::new().polygon(points).build()
    }

    /// Creates a new closed [`Path`] around a bevelled segment of a bar of
    /// the given `height`.
    pub fn segment(segment: &SegmentBox, height: f32) -> Self {
        Self::polygon(&segment.corners(height))
    }
}
