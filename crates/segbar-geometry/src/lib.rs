//! Geometry of a horizontally segmented progress bar.
//!
//! Every segment is a quadrilateral spanning the full height of the bar. Its
//! vertical edges may lean by a bevel angle, and segments are separated by a
//! fixed spacing. The progress overlay always starts at the leading edge of
//! the bar and its trailing edge lines up with the segment boundaries for any
//! integral progress value.
//!
//! ```text
//!             tangent          spacing
//!               <->              <->
//!    --------------   -----------   ------------   ^
//!   |             /             /               |  |  height
//!   |            /             /                |  |
//!    -----------   -----------   ---------------   v
//!    <--------->
//!   segment width
//!
//!    <-------------------------------------------->
//!                        width
//! ```
mod engine;
mod error;
mod layout;
mod segment;

pub use engine::{compute_progress, compute_segment, SegmentGeometry, SegmentMetrics};
pub use error::GeometryError;
pub use layout::{Layout, SpacingPolicy, MAX_ANGLE};
pub use segment::SegmentBox;
