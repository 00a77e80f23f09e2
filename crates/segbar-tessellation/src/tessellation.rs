use lyon::tessellation;
use std::rc::Rc;

use segbar_core::color::PackedSrgb;
use segbar_geometry::SegmentBox;
use segbar_mesh::{Indexed, MeshUniforms, SolidMesh, SolidMeshPrimitive, SolidVertex2D};

use crate::fill::{Fill, FillStyle};
use crate::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum TessellationError {
    #[error("failed to tessellate path: {0:?}")]
    Fill(#[from] tessellation::TessellationError),
}

/// Fills paths into a single mesh of solid colored triangles.
#[allow(missing_debug_implementations)]
pub struct Tessellator {
    buffers: tessellation::VertexBuffers<SolidVertex2D, u32>,
    fill_tessellator: tessellation::FillTessellator,
}

impl Default for Tessellator {
    fn default() -> Self {
        Self {
            buffers: tessellation::VertexBuffers::new(),
            fill_tessellator: tessellation::FillTessellator::new(),
        }
    }
}

impl Tessellator {
    /// Creates a new empty [`Tessellator`].
    ///
    /// The coordinate system has its origin at the top-left corner of the
    /// bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tessellates the given [`Path`] by filling it with the provided style.
    pub fn fill(&mut self, path: &Path, fill: impl Into<Fill>) -> Result<(), TessellationError> {
        let Fill { style, rule } = fill.into();
        let FillStyle::Solid(color) = style;

        let options = tessellation::FillOptions::default().with_fill_rule(rule.into());
        let mut builder =
            tessellation::BuffersBuilder::new(&mut self.buffers, SolidVertexBuilder(color));

        self.fill_tessellator
            .tessellate_path(&path.raw, &options, &mut builder)?;

        Ok(())
    }

    /// Tessellates a bevelled segment of a bar of the given `height`.
    ///
    /// Empty segments are skipped.
    pub fn fill_segment(
        &mut self,
        segment: &SegmentBox,
        height: f32,
        fill: impl Into<Fill>,
    ) -> Result<(), TessellationError> {
        if segment.is_empty() {
            return Ok(());
        }

        self.fill(&Path::segment(segment, height), fill)
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.indices.is_empty()
    }

    /// Moves everything tessellated so far into a mesh primitive, or returns
    /// `None` if nothing covering any area was filled.
    pub fn into_primitive(self) -> Option<SolidMeshPrimitive> {
        if self.is_empty() {
            return None;
        }

        Some(SolidMeshPrimitive {
            mesh: Rc::new(SolidMesh {
                buffers: Indexed {
                    vertices: self.buffers.vertices,
                    indices: self.buffers.indices,
                },
            }),
            uniform: MeshUniforms::default(),
        })
    }
}

struct SolidVertexBuilder(PackedSrgb);

impl tessellation::FillVertexConstructor<SolidVertex2D> for SolidVertexBuilder {
    fn new_vertex(&mut self, vertex: tessellation::FillVertex<'_>) -> SolidVertex2D {
        let position = vertex.position();

        SolidVertex2D {
            position: [position.x, position.y],
            color: self.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill::FillRule;
    use segbar_core::color::{SegmentColor, WHITE};
    use segbar_core::math::{point, size};

    #[test]
    fn test_rectangle_becomes_two_triangles() {
        let mut tessellator = Tessellator::new();
        tessellator
            .fill(
                &Path::rectangle(point(0.0, 0.0), size(10.0, 4.0)),
                PackedSrgb::WHITE,
            )
            .unwrap();

        let primitive = tessellator.into_primitive().unwrap();
        let buffers = &primitive.mesh.buffers;

        assert_eq!(buffers.vertices.len(), 4);
        assert_eq!(buffers.triangle_count(), 2);
    }

    #[test]
    fn test_segment_fill_carries_segment_color() {
        let color = SegmentColor::new(WHITE, 0.3);
        let segment = SegmentBox::new(0.0, 30.0, 0.0, 20.0);

        let mut tessellator = Tessellator::new();
        tessellator.fill_segment(&segment, 10.0, color).unwrap();

        let primitive = tessellator.into_primitive().unwrap();
        let buffers = &primitive.mesh.buffers;

        assert_eq!(buffers.triangle_count(), 2);
        assert!(buffers
            .vertices
            .iter()
            .all(|vertex| vertex.color == color.packed()));
        for corner in segment.corners(10.0) {
            assert!(buffers
                .vertices
                .iter()
                .any(|vertex| vertex.position == [corner.x, corner.y]));
        }
    }

    #[test]
    fn test_fill_from_segment_color() {
        let color = SegmentColor::new(WHITE, 0.3);
        let fill = Fill::from(color);

        assert_eq!(fill.style, FillStyle::Solid(color.packed()));
        assert_eq!(fill.rule, FillRule::NonZero);
    }

    #[test]
    fn test_even_odd_fill() {
        assert_eq!(
            tessellation::FillRule::from(FillRule::EvenOdd),
            tessellation::FillRule::EvenOdd
        );

        let mut tessellator = Tessellator::new();
        tessellator
            .fill(
                &Path::segment(&SegmentBox::new(0.0, 30.0, 10.0, 40.0), 10.0),
                Fill {
                    style: FillStyle::Solid(PackedSrgb::WHITE),
                    rule: FillRule::EvenOdd,
                },
            )
            .unwrap();

        let primitive = tessellator.into_primitive().unwrap();
        assert_eq!(primitive.mesh.buffers.triangle_count(), 2);
    }

    #[test]
    fn test_fills_share_one_mesh() {
        let mut tessellator = Tessellator::new();
        tessellator
            .fill_segment(&SegmentBox::new(0.0, 10.0, 0.0, 10.0), 4.0, PackedSrgb::BLACK)
            .unwrap();
        tessellator
            .fill_segment(&SegmentBox::new(20.0, 30.0, 20.0, 30.0), 4.0, PackedSrgb::WHITE)
            .unwrap();

        let primitive = tessellator.into_primitive().unwrap();
        assert_eq!(primitive.mesh.buffers.triangle_count(), 4);
    }

    #[test]
    fn test_empty_segment_yields_no_primitive() {
        let mut tessellator = Tessellator::new();
        tessellator
            .fill_segment(&SegmentBox::ZERO, 10.0, PackedSrgb::WHITE)
            .unwrap();

        assert!(tessellator.is_empty());
        assert!(tessellator.into_primitive().is_none());
    }
}
