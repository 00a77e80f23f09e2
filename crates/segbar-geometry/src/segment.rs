use segbar_core::math::Point;

/// The x coordinates of the four corners of a bevelled segment.
///
/// The top edge lies at `y = 0` and the bottom edge at the height of the bar.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentBox {
    pub top_left_x: f32,
    pub top_right_x: f32,
    pub bottom_left_x: f32,
    pub bottom_right_x: f32,
}

impl SegmentBox {
    /// An empty box collapsed onto the leading edge of the bar.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(
        top_left_x: f32,
        top_right_x: f32,
        bottom_left_x: f32,
        bottom_right_x: f32,
    ) -> Self {
        Self {
            top_left_x,
            top_right_x,
            bottom_left_x,
            bottom_right_x,
        }
    }

    /// The corners in the order a closed path visits them: top left, top
    /// right, bottom right and bottom left.
    pub fn corners(&self, height: f32) -> [Point; 4] {
        [
            Point::new(self.top_left_x, 0.0),
            Point::new(self.top_right_x, 0.0),
            Point::new(self.bottom_right_x, height),
            Point::new(self.bottom_left_x, height),
        ]
    }

    /// Whether the box covers no area at all.
    pub fn is_empty(&self) -> bool {
        self.top_right_x <= self.top_left_x && self.bottom_right_x <= self.bottom_left_x
    }
}
