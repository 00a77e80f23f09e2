use crate::color::SegmentColor;
use crate::geometry::SegmentBox;
use crate::math::Point;
use crate::mesh::SolidMeshPrimitive;
use crate::{BarError, PrimitiveGroup};

/// Something that can fill the bevelled quads of a bar.
///
/// `quad` is relative to `origin`, the top-left corner of the bar in physical
/// pixels, and spans from `y = 0` down to `height`.
pub trait QuadPainter {
    fn fill_quad(
        &mut self,
        quad: &SegmentBox,
        height: f32,
        origin: Point,
        color: SegmentColor,
    ) -> Result<(), BarError>;
}

impl<P: QuadPainter + ?Sized> QuadPainter for &mut P {
    fn fill_quad(
        &mut self,
        quad: &SegmentBox,
        height: f32,
        origin: Point,
        color: SegmentColor,
    ) -> Result<(), BarError> {
        (**self).fill_quad(quad, height, origin, color)
    }
}

/// Paints every quad as its own two-triangle mesh.
#[derive(Debug, Default, Clone)]
pub struct MeshPainter {
    group: PrimitiveGroup,
}

impl MeshPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The meshes painted so far, back to front.
    pub fn group(&self) -> &PrimitiveGroup {
        &self.group
    }

    pub fn clear(&mut self) {
        self.group.clear();
    }

    pub fn into_group(self) -> PrimitiveGroup {
        self.group
    }
}

impl QuadPainter for MeshPainter {
    fn fill_quad(
        &mut self,
        quad: &SegmentBox,
        height: f32,
        origin: Point,
        color: SegmentColor,
    ) -> Result<(), BarError> {
        if quad.is_empty() {
            return Ok(());
        }

        let mut primitive = SolidMeshPrimitive::from_quad(quad.corners(height), color);
        primitive.set_offset(origin);
        self.group.add(primitive);

        Ok(())
    }
}

#[cfg(feature = "tessellation")]
pub use tessellating::TessellatingPainter;

#[cfg(feature = "tessellation")]
mod tessellating {
    use super::*;
    use crate::tessellation::Tessellator;

    /// Fills quads as paths with lyon, merging all of them into a single mesh.
    ///
    /// The mesh is placed at the origin of the last filled quad, so a painter
    /// should only be used for one bar.
    #[derive(Default)]
    #[allow(missing_debug_implementations)]
    pub struct TessellatingPainter {
        tessellator: Tessellator,
        origin: Point,
    }

    impl TessellatingPainter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Finishes painting, or returns `None` if nothing visible was
        /// painted.
        pub fn finish(self) -> Option<SolidMeshPrimitive> {
            let origin = self.origin;

            self.tessellator.into_primitive().map(|mut primitive| {
                primitive.set_offset(origin);
                primitive
            })
        }
    }

    impl QuadPainter for TessellatingPainter {
        fn fill_quad(
            &mut self,
            quad: &SegmentBox,
            height: f32,
            origin: Point,
            color: SegmentColor,
        ) -> Result<(), BarError> {
            self.origin = origin;
            self.tessellator.fill_segment(quad, height, color)?;

            Ok(())
        }
    }
}
