//! Geometry and meshes for horizontal progress bars made of bevelled
//! segments.
//!
//! The bar itself is drawn through a [`QuadPainter`]: [`MeshPainter`] turns
//! every segment into a small mesh, while `TessellatingPainter` fills them
//! with lyon when the `tessellation` feature is enabled.
mod bar;
mod painter;
mod primitive_group;
mod style;

pub mod error;

pub use bar::{FrameInfo, ProgressEvent, SegmentedProgressBar};
pub use error::BarError;
pub use painter::{MeshPainter, QuadPainter};
pub use primitive_group::PrimitiveGroup;
pub use style::BarStyle;

#[cfg(feature = "tessellation")]
pub use painter::TessellatingPainter;

pub use segbar_core::*;

pub use segbar_geometry as geometry;

pub use segbar_mesh as mesh;

#[cfg(feature = "tessellation")]
pub use segbar_tessellation as tessellation;
