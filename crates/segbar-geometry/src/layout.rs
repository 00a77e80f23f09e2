use crate::GeometryError;

/// The largest bevel angle in degrees, in either direction.
///
/// Past this angle the bevel nears the horizontal plane and segments break
/// apart.
pub const MAX_ANGLE: f32 = 60.0;

/// How the gap between two bevelled segments is measured.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpacingPolicy {
    /// The spacing is used as the horizontal gap between segments, whatever
    /// the bevel angle.
    #[default]
    Raw,
    /// The spacing is projected along the bevel, so the gap between two
    /// leaning edges widens with the angle.
    Skewed,
}

/// The parameters of one layout pass of the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// The number of segments, at least 1.
    pub segment_count: u32,
    /// The width of the drawing surface.
    pub width: f32,
    /// The height of the drawing surface.
    pub height: f32,
    /// The gap between two segments, in the same unit as `width`.
    pub spacing: f32,
    /// The bevel of every segment in degrees, within `-MAX_ANGLE..=MAX_ANGLE`.
    pub angle: f32,
}

impl Layout {
    pub const fn new(segment_count: u32, width: f32, height: f32, spacing: f32, angle: f32) -> Self {
        Self {
            segment_count,
            width,
            height,
            spacing,
            angle,
        }
    }

    /// Checks the parameters on their own, regardless of how they combine.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(self.width.is_finite()
            && self.height.is_finite()
            && self.spacing.is_finite()
            && self.angle.is_finite())
        {
            return Err(GeometryError::NonFinite);
        }

        if self.segment_count == 0 {
            return Err(GeometryError::InvalidSegmentCount);
        }

        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(GeometryError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }

        if self.spacing < 0.0 {
            return Err(GeometryError::NegativeSpacing(self.spacing));
        }

        if self.angle.abs() > MAX_ANGLE {
            return Err(GeometryError::AngleOutOfRange {
                angle: self.angle,
                max: MAX_ANGLE,
            });
        }

        Ok(())
    }
}
