use super::Path;

use segbar_core::math::{Point, Size};

use lyon::math;
use lyon::path::builder::{self, SvgPathBuilder};

/// A [`Path`] builder.
///
/// Once a [`Path`] is built, it can no longer be mutated.
pub struct PathBuilder {
    pub raw: builder::WithSvg<lyon::path::path::BuilderImpl>,
}

impl PathBuilder {
    /// Creates a new [`PathBuilder`].
    pub fn new() -> Self {
        Self {
            raw: lyon::path::Path::builder().with_svg(),
        }
    }

    /// Moves the starting point of a new sub-path to the given `Point`.
    pub fn move_to(mut self, point: Point) -> Self {
        self.raw.move_to(math::Point::new(point.x, point.y));
        self
    }

    /// Connects the last point in the [`Path`] to the given `Point` with a
    /// straight line.
    pub fn line_to(mut self, point: Point) -> Self {
        self.raw.line_to(math::Point::new(point.x, point.y));
        self
    }

    /// Adds a rectangle to the [`Path`] given its top-left corner coordinate
    /// and its `Size`.
    pub fn rectangle(self, top_left: Point, size: Size) -> Self {
        self.polygon(&[
            top_left,
            Point::new(top_left.x + size.width, top_left.y),
            Point::new(top_left.x + size.width, top_left.y + size.height),
            Point::new(top_left.x, top_left.y + size.height),
        ])
    }

    /// Adds a closed sub-path through the given points.
    ///
    /// Nothing is added for an empty slice.
    pub fn polygon(self, points: &[Point]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return self;
        };

        rest.iter()
            .fold(self.move_to(*first), |builder, point| builder.line_to(*point))
            .close()
    }

    /// Closes the current sub-path in the [`Path`] with a straight line to
    /// the starting point.
    pub fn close(mut self) -> Self {
        self.raw.close();
        self
    }

    /// Builds the [`Path`] of this [`PathBuilder`].
    pub fn build(self) -> Path {
        Path {
            raw: self.raw.build(),
        }
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}
