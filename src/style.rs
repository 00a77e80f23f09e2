use segbar_core::color::SegmentColor;
use segbar_geometry::{GeometryError, SpacingPolicy, MAX_ANGLE};

/// The appearance of a [`SegmentedProgressBar`](crate::SegmentedProgressBar).
///
/// Angles are expressed in degrees and may be negative, but must stay within
/// `-MAX_ANGLE..=MAX_ANGLE`, otherwise the bevel breaks the segments apart.
///
/// `draw_segments_behind_progress` is worth enabling only when the progress
/// overlay is translucent and fades in or out: the segments it covers would
/// otherwise pop in and out of view. When the overlay is translucent and
/// static, keeping it disabled hides the gaps between the covered segments.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BarStyle {
    /// The number of segments, at least 1.
    pub segment_count: u32,
    /// The spacing between segments in logical points.
    pub spacing: f32,
    /// The bevel of every segment in degrees.
    pub angle: f32,
    pub segment_color: SegmentColor,
    pub progress_color: SegmentColor,
    /// Keep drawing the segments that the progress overlay fully covers.
    pub draw_segments_behind_progress: bool,
    pub spacing_policy: SpacingPolicy,
}

impl BarStyle {
    pub fn new(segment_count: u32) -> Self {
        Self {
            segment_count,
            ..Default::default()
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_segment_color(mut self, color: impl Into<SegmentColor>) -> Self {
        self.segment_color = color.into();
        self
    }

    pub fn with_progress_color(mut self, color: impl Into<SegmentColor>) -> Self {
        self.progress_color = color.into();
        self
    }

    pub fn with_draw_segments_behind_progress(mut self, draw: bool) -> Self {
        self.draw_segments_behind_progress = draw;
        self
    }

    pub fn with_spacing_policy(mut self, policy: SpacingPolicy) -> Self {
        self.spacing_policy = policy;
        self
    }

    /// The range of progress values the bar can display.
    pub fn progress_range(&self) -> std::ops::RangeInclusive<f32> {
        0.0..=self.segment_count as f32
    }

    /// Checks the parts of the style that do not depend on the size of the
    /// bar.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(self.spacing.is_finite() && self.angle.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        if self.segment_count == 0 {
            return Err(GeometryError::InvalidSegmentCount);
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

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            segment_count: 1,
            spacing: 0.0,
            angle: 0.0,
            segment_color: SegmentColor::default(),
            progress_color: SegmentColor::default(),
            draw_segments_behind_progress: false,
            spacing_policy: SpacingPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segbar_core::color::WHITE;

    #[test]
    fn test_builder() {
        let style = BarStyle::new(3)
            .with_spacing(10.0)
            .with_angle(-45.0)
            .with_segment_color(WHITE)
            .with_progress_color(SegmentColor::new(WHITE, 0.3))
            .with_draw_segments_behind_progress(true)
            .with_spacing_policy(SpacingPolicy::Skewed);

        assert_eq!(style.segment_count, 3);
        assert_eq!(style.spacing, 10.0);
        assert_eq!(style.angle, -45.0);
        assert_eq!(style.segment_color, SegmentColor::opaque(WHITE));
        assert_eq!(style.progress_color.alpha, 0.3);
        assert!(style.draw_segments_behind_progress);
        assert_eq!(style.spacing_policy, SpacingPolicy::Skewed);
        assert_eq!(style.progress_range(), 0.0..=3.0);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            BarStyle::new(0).validate(),
            Err(GeometryError::InvalidSegmentCount)
        );
        assert_eq!(
            BarStyle::new(2).with_spacing(-4.0).validate(),
            Err(GeometryError::NegativeSpacing(-4.0))
        );
        assert_eq!(
            BarStyle::new(2).with_angle(-80.0).validate(),
            Err(GeometryError::AngleOutOfRange {
                angle: -80.0,
                max: MAX_ANGLE
            })
        );
        assert_eq!(
            BarStyle::new(2).with_angle(f32::NAN).validate(),
            Err(GeometryError::NonFinite)
        );
        assert!(BarStyle::new(2).with_angle(MAX_ANGLE).validate().is_ok());
    }
}
