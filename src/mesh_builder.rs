/*!
Structs and traits used to customize mesh generation
*/

use crate::structs::Position;
use crate::traits::Density;

/// An index in the vertex buffer
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VertexIndex(pub usize);

/// Trait you need to implement to build a mesh
///
/// The extraction never shares vertices: every triangle corner it emits is a fresh vertex,
/// created right before the triangle using it.
pub trait MeshBuilder<F: Density> {
    /// Called by the extraction algorithm when a new vertex is created, where the surface crosses a cell edge.
    ///
    /// Must return the index in the vertex buffer of the created vertex.
    /// `normal` is the central difference estimate, unit length only if the configuration asks for it.
    fn add_vertex(&mut self, position: Position<F>, normal: [F; 3]) -> VertexIndex;

    /// Called by the extraction algorithm when a triangle is to be created, using 3 pre-created vertices.
    fn add_triangle(
        &mut self,
        vertex_1_index: VertexIndex,
        vertex_2_index: VertexIndex,
        vertex_3_index: VertexIndex,
    );
}
