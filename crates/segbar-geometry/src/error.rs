#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("segment count must be at least 1")]
    InvalidSegmentCount,

    #[error("bar size must be positive, got {width}x{height}")]
    InvalidSize { width: f32, height: f32 },

    #[error("spacing between segments must not be negative, got {0}")]
    NegativeSpacing(f32),

    #[error("bevel angle {angle}° is outside of -{max}°..={max}°")]
    AngleOutOfRange { angle: f32, max: f32 },

    #[error("layout parameters must be finite numbers")]
    NonFinite,

    #[error("segment position {position} is out of range for {segment_count} segments")]
    PositionOutOfRange { position: u32, segment_count: u32 },

    #[error("progress {progress} is outside of 0..={segment_count}")]
    ProgressOutOfRange { progress: f32, segment_count: u32 },

    #[error("spacing and bevel leave no room for the segments (narrowest edge is {segment_width})")]
    DegenerateSegments { segment_width: f32 },
}
