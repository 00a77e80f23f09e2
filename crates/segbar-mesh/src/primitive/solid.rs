//! Draw triangles!
use bytemuck::{Pod, Zeroable};
use std::rc::Rc;

use segbar_core::color::PackedSrgb;
use segbar_core::math::{Point, Rect};

use super::{Indexed, MeshUniforms};

/// A low-level primitive to render a mesh of triangles with a solid color.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SolidMesh {
    /// The vertices and indices of the mesh.
    pub buffers: Indexed<SolidVertex2D>,
}

impl SolidMesh {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A two-dimensional vertex with a color.
#[derive(Copy, Clone, Debug, PartialEq, Zeroable, Pod)]
#[repr(C)]
pub struct SolidVertex2D {
    /// The vertex position in 2D space.
    pub position: [f32; 2],

    /// The color of the vertex, alpha included.
    pub color: PackedSrgb,
}

impl SolidVertex2D {
    pub fn new(position: impl Into<[f32; 2]>, color: impl Into<PackedSrgb>) -> Self {
        Self {
            position: position.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug)]
pub struct SolidMeshPrimitive {
    pub mesh: Rc<SolidMesh>,
    pub uniform: MeshUniforms,
}

impl SolidMeshPrimitive {
    pub fn new(mesh: &Rc<SolidMesh>) -> Self {
        Self {
            mesh: Rc::clone(mesh),
            uniform: MeshUniforms::default(),
        }
    }

    pub fn new_with_offset(mesh: &Rc<SolidMesh>, offset: Point) -> Self {
        Self {
            mesh: Rc::clone(mesh),
            uniform: MeshUniforms::new(offset),
        }
    }

    pub fn set_offset(&mut self, offset: Point) {
        self.uniform.offset = offset.into();
    }

    /// Construct a mesh of two triangles covering the quadrilateral with the
    /// given corners, listed in path order.
    ///
    /// This is more performant than using the `lyon` drawing API. The corners
    /// must describe a convex quadrilateral, which every bevelled segment is.
    pub fn from_quad(corners: [Point; 4], color: impl Into<PackedSrgb>) -> Self {
        let color = color.into();

        SolidMeshPrimitive {
            mesh: Rc::new(SolidMesh {
                buffers: Indexed {
                    vertices: corners
                        .iter()
                        .map(|corner| SolidVertex2D::new(*corner, color))
                        .collect(),
                    indices: vec![0, 1, 2, 0, 2, 3],
                },
            }),
            uniform: MeshUniforms::default(),
        }
    }

    /// Construct a non-rotated rectangle mesh with the given color.
    pub fn from_rect(rect: Rect, color: impl Into<PackedSrgb>) -> Self {
        Self::from_quad(
            [
                Point::new(rect.min_x(), rect.min_y()),
                Point::new(rect.max_x(), rect.min_y()),
                Point::new(rect.max_x(), rect.max_y()),
                Point::new(rect.min_x(), rect.max_y()),
            ],
            color,
        )
    }

    /// The vertex positions with the offset applied.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.mesh
            .buffers
            .vertices
            .iter()
            .map(|vertex| self.uniform.apply(vertex.position))
    }
}

impl Clone for SolidMeshPrimitive {
    fn clone(&self) -> Self {
        Self {
            mesh: Rc::clone(&self.mesh),
            uniform: self.uniform,
        }
    }
}

impl PartialEq for SolidMeshPrimitive {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.mesh, &other.mesh) && self.uniform == other.uniform
    }
}
