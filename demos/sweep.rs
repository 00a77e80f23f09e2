//! Sweeps a bar from empty to full and logs what every frame paints.
//!
//! Run with `LOG_LEVEL=trace` to see every frame.
use segbar::color::{SegmentColor, GRAY, WHITE};
use segbar::geometry::SpacingPolicy;
use segbar::math::{rect, ScaleFactor};
use segbar::{BarError, BarStyle, MeshPainter, ProgressEvent, SegmentedProgressBar};

const FRAMES: u32 = 24;

fn main() -> Result<(), BarError> {
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", "info");
    env_logger::init_from_env(env);

    let style = BarStyle::new(5)
        .with_spacing(4.0)
        .with_angle(30.0)
        .with_segment_color(SegmentColor::new(GRAY, 0.6))
        .with_progress_color(WHITE)
        .with_spacing_policy(SpacingPolicy::Skewed);

    let mut bar = SegmentedProgressBar::new(style);
    let bounds = rect(16.0, 16.0, 320.0, 12.0);
    let scale_factor = ScaleFactor::new(2.0);

    let target = style.segment_count as f32;
    bar.set_progress(target);

    let mut painter = MeshPainter::new();
    for frame in 0..=FRAMES {
        painter.clear();

        let progress = target * frame as f32 / FRAMES as f32;
        let info = bar.draw(bounds, scale_factor, progress, &mut painter)?;

        match info.event {
            Some(ProgressEvent::Finished { progress }) => {
                log::info!("finished at {progress}: {:?}", info.progress_box);
            }
            _ => log::info!(
                "frame {frame}: progress {progress:.2}, {} meshes, overlay ends at {:.1}",
                painter.group().len(),
                info.progress_box.top_right_x,
            ),
        }
    }

    Ok(())
}
