//! Draw triangles!
use segbar_core::math::{Point, Vector};

mod solid;
pub use solid::*;

/// A set of vertices and indices representing a list of triangles.
#[derive(Clone, Debug, PartialEq)]
pub struct Indexed<T> {
    /// The vertices of the mesh
    pub vertices: Vec<T>,

    /// The list of vertex indices that defines the triangles of the mesh.
    ///
    /// Therefore, this list should always have a length that is a multiple of 3.
    pub indices: Vec<u32>,
}

impl<T> Indexed<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// The number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl<T> Default for Indexed<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniforms {
    /// The offset in physical pixels, usually the origin of the bar.
    pub offset: [f32; 2],
}

impl MeshUniforms {
    pub fn new(offset: Point) -> Self {
        Self {
            offset: offset.into(),
        }
    }

    /// Where the vertex at `position` lands once the offset is applied.
    pub fn apply(&self, position: [f32; 2]) -> Point {
        Point::from(position) + Vector::from(self.offset)
    }
}
