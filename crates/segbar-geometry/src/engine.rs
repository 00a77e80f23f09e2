use segbar_core::math::{bevel_tangent, degrees, skewed_length};

use crate::{GeometryError, Layout, SegmentBox, SpacingPolicy};

/// Computes the boxes of the segments and of the progress overlay.
///
/// The geometry holds no state other than its policy, so one instance can be
/// shared freely between bars and threads.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentGeometry {
    pub spacing_policy: SpacingPolicy,
}

impl SegmentGeometry {
    pub const fn new(spacing_policy: SpacingPolicy) -> Self {
        Self { spacing_policy }
    }

    /// Validates the layout and derives the quantities shared by every
    /// segment of it.
    pub fn metrics(&self, layout: &Layout) -> Result<SegmentMetrics, GeometryError> {
        layout.validate()?;

        let angle = degrees(layout.angle);
        let tangent = bevel_tangent(layout.height, angle);
        let spacing = match self.spacing_policy {
            SpacingPolicy::Raw => layout.spacing,
            SpacingPolicy::Skewed => skewed_length(layout.spacing, angle),
        };

        let count = layout.segment_count as f32;
        let segment_width = (layout.width - (spacing + tangent) * (count - 1.0)) / count;

        // A lone segment never shows its bevel, otherwise the narrowest edge of
        // a segment is its width shortened by a negative tangent.
        let narrowest = if layout.segment_count == 1 {
            segment_width
        } else {
            segment_width + tangent.min(0.0)
        };
        if !(narrowest > 0.0) {
            return Err(GeometryError::DegenerateSegments {
                segment_width: narrowest,
            });
        }

        Ok(SegmentMetrics {
            segment_count: layout.segment_count,
            segment_width,
            tangent,
            spacing,
        })
    }

    /// The box of the segment at `position`.
    pub fn segment(&self, position: u32, layout: &Layout) -> Result<SegmentBox, GeometryError> {
        let metrics = self.metrics(layout)?;

        if position >= metrics.segment_count {
            return Err(GeometryError::PositionOutOfRange {
                position,
                segment_count: metrics.segment_count,
            });
        }

        Ok(metrics.segment(position))
    }

    /// The box of the progress overlay for a progress within
    /// `0.0..=segment_count`.
    pub fn progress(&self, progress: f32, layout: &Layout) -> Result<SegmentBox, GeometryError> {
        let metrics = self.metrics(layout)?;

        if !progress.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        if !(0.0..=metrics.segment_count as f32).contains(&progress) {
            return Err(GeometryError::ProgressOutOfRange {
                progress,
                segment_count: metrics.segment_count,
            });
        }

        Ok(metrics.progress(progress))
    }
}

/// The quantities of a validated [`Layout`] shared by all of its segments.
///
/// Computing boxes from here skips validation, positions and progress
/// values are clamped into range instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentMetrics {
    segment_count: u32,
    segment_width: f32,
    tangent: f32,
    spacing: f32,
}

impl SegmentMetrics {
    pub fn segment_count(&self) -> u32 {
        self.segment_count
    }

    /// The width of a segment without its bevel.
    pub fn segment_width(&self) -> f32 {
        self.segment_width
    }

    /// The horizontal shift of a segment edge over the full height.
    pub fn tangent(&self) -> f32 {
        self.tangent
    }

    /// The gap between two segments after the spacing policy is applied.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// The box of the segment at `position`, clamped to the last segment.
    pub fn segment(&self, position: u32) -> SegmentBox {
        let position = position.min(self.segment_count - 1);
        let is_last = position == self.segment_count - 1;

        let w = self.segment_width;
        let t = self.tangent;
        let s = self.spacing;
        let p = position as f32;
        let previous = position.saturating_sub(1) as f32;

        // The last segment drops its trailing bevel so its top right corner
        // lands on the edge of the bar.
        let last_offset = if is_last { t } else { 0.0 };

        SegmentBox {
            top_left_x: (w + t + s) * p,
            top_right_x: (w + t) * (p + 1.0) + s * p - last_offset,
            bottom_left_x: (w + s) * p + t * previous,
            bottom_right_x: w * (p + 1.0) + (t + s) * p,
        }
    }

    /// The box of the progress overlay, with `progress` clamped into
    /// `0.0..=segment_count`.
    pub fn progress(&self, progress: f32) -> SegmentBox {
        let count = self.segment_count as f32;
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, count)
        };

        let w = self.segment_width;
        let t = self.tangent;
        let s = self.spacing;

        // Only the gaps behind the overlay count, it always starts at the
        // leading edge.
        let spacing_count = (progress - 1.0).max(0.0);

        // Across the last segment the trailing bevel fades out linearly, so
        // the overlay ends exactly on the edge of the bar.
        let is_last_segment = progress.ceil() as u32 == self.segment_count;
        let last_offset = if is_last_segment {
            t * (1.0 - (count - progress))
        } else {
            0.0
        };

        SegmentBox {
            top_left_x: 0.0,
            top_right_x: (w + t) * progress + s * spacing_count - last_offset,
            bottom_left_x: 0.0,
            bottom_right_x: w * progress + (t + s) * spacing_count,
        }
    }

    /// The boxes of all segments, from the leading edge on.
    pub fn segments(&self) -> impl Iterator<Item = SegmentBox> + '_ {
        (0..self.segment_count).map(|position| self.segment(position))
    }
}

/// Computes the box of the segment at `position` with the default
/// [`SpacingPolicy`].
pub fn compute_segment(
    position: u32,
    segment_count: u32,
    width: f32,
    height: f32,
    spacing: f32,
    angle: f32,
) -> Result<SegmentBox, GeometryError> {
    SegmentGeometry::default().segment(
        position,
        &Layout::new(segment_count, width, height, spacing, angle),
    )
}

/// Computes the box of the progress overlay with the default
/// [`SpacingPolicy`].
pub fn compute_progress(
    progress: f32,
    segment_count: u32,
    width: f32,
    height: f32,
    spacing: f32,
    angle: f32,
) -> Result<SegmentBox, GeometryError> {
    SegmentGeometry::default().progress(
        progress,
        &Layout::new(segment_count, width, height, spacing, angle),
    )
}
