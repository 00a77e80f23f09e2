use crate::geometry::{Layout, SegmentBox, SegmentGeometry};
use crate::math::{to_physical_rect, Rect, ScaleFactor};
use crate::painter::QuadPainter;
use crate::{BarError, BarStyle};

/// Reported by [`SegmentedProgressBar::draw`] while the displayed progress
/// moves towards the target progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressEvent {
    /// The displayed progress differs from the target.
    Changed {
        progress: f32,
        /// The progress box drawn in the previous frame.
        coordinates: SegmentBox,
    },
    /// The displayed progress settled onto the target.
    Finished { progress: f32 },
}

/// What was painted in a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    /// The progress box, relative to the top-left corner of the bar in
    /// physical pixels.
    pub progress_box: SegmentBox,
    pub segments_drawn: u32,
    /// Segments fully covered by the progress overlay that were not painted.
    pub segments_skipped: u32,
    pub event: Option<ProgressEvent>,
}

/// A horizontal progress bar split into bevelled segments.
///
/// The bar does not animate on its own. The caller drives some animation
/// from the current progress towards the one given to
/// [`SegmentedProgressBar::set_progress`] and draws every frame with the
/// animated value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SegmentedProgressBar {
    style: BarStyle,
    target_progress: f32,
    last_progress_box: SegmentBox,
    in_transition: bool,
}

impl SegmentedProgressBar {
    pub fn new(style: BarStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    pub fn style(&self) -> &BarStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: BarStyle) {
        self.style = style;
    }

    pub fn target_progress(&self) -> f32 {
        self.target_progress
    }

    /// Sets the progress the animation is heading to, in segments.
    pub fn set_progress(&mut self, progress: f32) {
        self.target_progress = progress;
    }

    /// The progress box painted by the last call to `draw`.
    pub fn last_progress_box(&self) -> SegmentBox {
        self.last_progress_box
    }

    pub fn in_transition(&self) -> bool {
        self.in_transition
    }

    /// Paints the bar into `bounds`, given in logical points, with the
    /// progress overlay reaching `animated_progress`.
    ///
    /// Segments are painted first and the overlay last. Segments the overlay
    /// fully covers are skipped unless the style asks to draw them.
    pub fn draw<P: QuadPainter>(
        &mut self,
        bounds: Rect,
        scale_factor: ScaleFactor,
        animated_progress: f32,
        mut painter: P,
    ) -> Result<FrameInfo, BarError> {
        if !(scale_factor.0.is_finite() && scale_factor.0 > 0.0) {
            return Err(BarError::InvalidScaleFactor(scale_factor.0));
        }

        self.style.validate()?;

        let bounds = to_physical_rect(bounds, scale_factor);
        let origin = bounds.origin.to_untyped();
        let height = bounds.height();

        let layout = Layout::new(
            self.style.segment_count,
            bounds.width(),
            height,
            self.style.spacing * scale_factor,
            self.style.angle,
        );
        let metrics = SegmentGeometry::new(self.style.spacing_policy).metrics(&layout)?;

        let progress = clamp_progress(animated_progress, self.style.segment_count);
        let (event, in_transition) = self.next_event(progress);

        let progress_box = metrics.progress(progress);

        let mut segments_drawn = 0;
        let mut segments_skipped = 0;
        for segment in metrics.segments() {
            if self.style.draw_segments_behind_progress
                || segment.top_right_x > progress_box.top_right_x
            {
                painter.fill_quad(&segment, height, origin, self.style.segment_color)?;
                segments_drawn += 1;
            } else {
                segments_skipped += 1;
            }
        }

        painter.fill_quad(&progress_box, height, origin, self.style.progress_color)?;

        log::trace!(
            "drew bar at progress {progress}: {segments_drawn} segments drawn, {segments_skipped} skipped, overlay {progress_box:?}"
        );

        self.last_progress_box = progress_box;
        self.in_transition = in_transition;
        if let Some(event) = &event {
            log::debug!("{event:?}");
        }

        Ok(FrameInfo {
            progress_box,
            segments_drawn,
            segments_skipped,
            event,
        })
    }

    /// The event of a frame drawn at `progress`, and whether the bar is still
    /// in transition afterwards.
    fn next_event(&self, progress: f32) -> (Option<ProgressEvent>, bool) {
        let target = self
            .target_progress
            .clamp(0.0, self.style.segment_count as f32);

        if progress != target {
            let event = ProgressEvent::Changed {
                progress,
                coordinates: self.last_progress_box,
            };

            (Some(event), true)
        } else if self.in_transition {
            (Some(ProgressEvent::Finished { progress }), false)
        } else {
            (None, false)
        }
    }
}

fn clamp_progress(progress: f32, segment_count: u32) -> f32 {
    let max = segment_count as f32;

    if progress.is_nan() {
        log::warn!("Progress is NaN, drawing an empty bar.");
        0.0
    } else if !(0.0..=max).contains(&progress) {
        log::warn!("Progress {progress} must be within 0.0..={max} range.");
        progress.clamp(0.0, max)
    } else {
        progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{SegmentColor, GRAY, WHITE};
    use crate::geometry::GeometryError;
    use crate::math::{point, rect};
    use crate::painter::MeshPainter;

    const EPSILON: f32 = 0.01;
    const ONE: ScaleFactor = ScaleFactor(1.0);

    fn style() -> BarStyle {
        BarStyle::new(3)
            .with_spacing(10.0)
            .with_segment_color(GRAY)
            .with_progress_color(SegmentColor::new(WHITE, 0.5))
    }

    #[test]
    fn test_skips_segments_behind_progress() {
        let mut bar = SegmentedProgressBar::new(style());
        let mut painter = MeshPainter::new();

        let frame = bar
            .draw(rect(0.0, 0.0, 100.0, 20.0), ONE, 1.5, &mut painter)
            .unwrap();

        assert_eq!(frame.segments_drawn, 2);
        assert_eq!(frame.segments_skipped, 1);
        assert_eq!(painter.group().len(), 3);
    }

    #[test]
    fn test_segment_ending_at_progress_is_skipped() {
        let mut bar = SegmentedProgressBar::new(style());

        let frame = bar
            .draw(rect(0.0, 0.0, 100.0, 20.0), ONE, 1.0, MeshPainter::new())
            .unwrap();

        assert_eq!(frame.segments_skipped, 1);
    }

    #[test]
    fn test_draws_segments_behind_progress_when_asked() {
        let mut bar =
            SegmentedProgressBar::new(style().with_draw_segments_behind_progress(true));
        let mut painter = MeshPainter::new();

        let frame = bar
            .draw(rect(0.0, 0.0, 100.0, 20.0), ONE, 3.0, &mut painter)
            .unwrap();

        assert_eq!(frame.segments_drawn, 3);
        assert_eq!(frame.segments_skipped, 0);
        assert_eq!(painter.group().len(), 4);
    }

    #[test]
    fn test_overlay_is_painted_last() {
        let mut bar = SegmentedProgressBar::new(style());
        let mut painter = MeshPainter::new();

        let frame = bar
            .draw(rect(0.0, 0.0, 100.0, 20.0), ONE, 2.0, &mut painter)
            .unwrap();

        let primitives = painter.group().primitives();
        let overlay = primitives.last().unwrap();
        let overlay_color = overlay.mesh.buffers.vertices[0].color;
        assert_eq!(overlay_color, SegmentColor::new(WHITE, 0.5).packed());
        assert_eq!(
            overlay.positions().collect::<Vec<_>>(),
            frame.progress_box.corners(20.0).to_vec()
        );

        for segment in &primitives[..primitives.len() - 1] {
            assert_eq!(
                segment.mesh.buffers.vertices[0].color,
                SegmentColor::opaque(GRAY).packed()
            );
        }
    }

    #[test]
    fn test_empty_overlay_is_not_painted() {
        let mut bar = SegmentedProgressBar::new(style());
        let mut painter = MeshPainter::new();

        let frame = bar
            .draw(rect(0.0, 0.0, 100.0, 20.0), ONE, 0.0, &mut painter)
            .unwrap();

        assert_eq!(frame.progress_box, SegmentBox::ZERO);
        assert_eq!(frame.segments_drawn, 3);
        assert_eq!(painter.group().len(), 3);
    }

    #[test]
    fn test_scale_factor_converts_to_physical_pixels() {
        let mut logical_bar = SegmentedProgressBar::new(style().with_spacing(5.0));
        let mut painter = MeshPainter::new();

        let frame = logical_bar
            .draw(rect(10.0, 20.0, 50.0, 10.0), ScaleFactor(2.0), 3.0, &mut painter)
            .unwrap();

        let expected = crate::geometry::compute_progress(3.0, 3, 100.0, 20.0, 10.0, 0.0).unwrap();
        assert!((frame.progress_box.top_right_x - expected.top_right_x).abs() < EPSILON);
        assert!((frame.progress_box.top_right_x - 100.0).abs() < EPSILON);

        let overlay = painter.group().primitives().last().unwrap();
        let first = overlay.positions().next().unwrap();
        assert_eq!(first, point(20.0, 40.0));
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut bar = SegmentedProgressBar::new(style());
        let bounds = rect(0.0, 0.0, 100.0, 20.0);

        let full = bar.draw(bounds, ONE, 3.0, MeshPainter::new()).unwrap();
        let over = bar.draw(bounds, ONE, 7.5, MeshPainter::new()).unwrap();
        assert_eq!(full.progress_box, over.progress_box);

        let under = bar.draw(bounds, ONE, -2.0, MeshPainter::new()).unwrap();
        assert_eq!(under.progress_box, SegmentBox::ZERO);

        let nan = bar.draw(bounds, ONE, f32::NAN, MeshPainter::new()).unwrap();
        assert_eq!(nan.progress_box, SegmentBox::ZERO);
    }

    #[test]
    fn test_progress_events() {
        let mut bar = SegmentedProgressBar::new(style());
        let bounds = rect(0.0, 0.0, 100.0, 20.0);

        let idle = bar.draw(bounds, ONE, 0.0, MeshPainter::new()).unwrap();
        assert_eq!(idle.event, None);

        bar.set_progress(2.0);

        let first = bar.draw(bounds, ONE, 0.5, MeshPainter::new()).unwrap();
        assert_eq!(
            first.event,
            Some(ProgressEvent::Changed {
                progress: 0.5,
                coordinates: SegmentBox::ZERO,
            })
        );
        assert!(bar.in_transition());

        let second = bar.draw(bounds, ONE, 1.0, MeshPainter::new()).unwrap();
        assert_eq!(
            second.event,
            Some(ProgressEvent::Changed {
                progress: 1.0,
                coordinates: first.progress_box,
            })
        );

        let last = bar.draw(bounds, ONE, 2.0, MeshPainter::new()).unwrap();
        assert_eq!(last.event, Some(ProgressEvent::Finished { progress: 2.0 }));
        assert!(!bar.in_transition());
        assert_eq!(bar.last_progress_box(), last.progress_box);

        let settled = bar.draw(bounds, ONE, 2.0, MeshPainter::new()).unwrap();
        assert_eq!(settled.event, None);
    }

    #[test]
    fn test_invalid_input() {
        let mut bar = SegmentedProgressBar::new(style());
        let bounds = rect(0.0, 0.0, 100.0, 20.0);

        assert!(matches!(
            bar.draw(bounds, ScaleFactor(0.0), 1.0, MeshPainter::new()),
            Err(BarError::InvalidScaleFactor(_))
        ));

        assert!(matches!(
            bar.draw(rect(0.0, 0.0, 0.0, 20.0), ONE, 1.0, MeshPainter::new()),
            Err(BarError::Geometry(GeometryError::InvalidSize { .. }))
        ));

        bar.set_style(style().with_angle(75.0));
        assert!(matches!(
            bar.draw(bounds, ONE, 1.0, MeshPainter::new()),
            Err(BarError::Geometry(GeometryError::AngleOutOfRange { .. }))
        ));

        bar.set_style(style().with_spacing(60.0));
        assert!(matches!(
            bar.draw(bounds, ONE, 1.0, MeshPainter::new()),
            Err(BarError::Geometry(GeometryError::DegenerateSegments { .. }))
        ));
    }

    #[test]
    fn test_failed_frame_keeps_transition_state() {
        struct FailingPainter;

        impl QuadPainter for FailingPainter {
            fn fill_quad(
                &mut self,
                _quad: &SegmentBox,
                _height: f32,
                _origin: crate::math::Point,
                _color: SegmentColor,
            ) -> Result<(), BarError> {
                Err(BarError::InvalidScaleFactor(0.0))
            }
        }

        let mut bar = SegmentedProgressBar::new(style());
        let bounds = rect(0.0, 0.0, 100.0, 20.0);
        bar.set_progress(2.0);

        assert!(bar.draw(bounds, ONE, 1.0, FailingPainter).is_err());
        assert!(!bar.in_transition());
        assert_eq!(bar.last_progress_box(), SegmentBox::ZERO);

        let moving = bar.draw(bounds, ONE, 1.0, MeshPainter::new()).unwrap();
        assert!(bar.in_transition());

        assert!(bar.draw(bounds, ONE, 2.0, FailingPainter).is_err());
        assert!(bar.in_transition());
        assert_eq!(bar.last_progress_box(), moving.progress_box);

        let settled = bar.draw(bounds, ONE, 2.0, MeshPainter::new()).unwrap();
        assert_eq!(settled.event, Some(ProgressEvent::Finished { progress: 2.0 }));
        assert!(!bar.in_transition());
    }

    #[cfg(feature = "tessellation")]
    #[test]
    fn test_tessellating_painter() {
        use crate::painter::TessellatingPainter;

        let mut bar = SegmentedProgressBar::new(style().with_angle(30.0));
        let mut painter = TessellatingPainter::new();

        bar.draw(rect(0.0, 0.0, 100.0, 20.0), ONE, 1.5, &mut painter)
            .unwrap();

        let primitive = painter.finish().unwrap();
        assert_eq!(primitive.mesh.buffers.triangle_count(), 6);
    }
}
