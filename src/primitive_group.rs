use smallvec::SmallVec;

use crate::mesh::SolidMeshPrimitive;

const STATIC_ALLOC_PRIMITIVES: usize = 4;

/// A group of primitives in the order they must be drawn, back to front.
/// This is usually the output of a single bar.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PrimitiveGroup {
    primitives: SmallVec<[SolidMeshPrimitive; STATIC_ALLOC_PRIMITIVES]>,
}

impl PrimitiveGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    pub fn add(&mut self, primitive: impl Into<SolidMeshPrimitive>) {
        self.primitives.push(primitive.into());
    }

    pub fn primitives(&self) -> &[SolidMeshPrimitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SolidMeshPrimitive> {
        self.primitives.iter()
    }
}
