/*!
A generic (engine independent) implementation of a Mesh, and an associated MeshBuilder
*/

use std::fmt::Debug;
use std::fmt::Display;

use crate::mesh_builder::MeshBuilder;
use crate::mesh_builder::VertexIndex;
use crate::structs::Position;
use crate::traits::Density;

/**
Mesh: a triangle soup ready to be handed to a renderer
*/
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh<F> {
    /// Vertex positions
    pub vertices: Vec<[F; 3]>,
    /// Vertex normals, one per vertex
    pub normals: Vec<[F; 3]>,
    /**
    Flat vector of the triangle indices. Each consecutive i,j,k define one triangle by 3 indices.
    Indices are referring to `vertices` and `normals`, so each index is in 0..vertices.len()
    */
    pub indices: Vec<usize>,
}

impl<F> Mesh<F>
where
    F: Density,
{
    /// Shorthand to get the triangles count
    pub fn num_tris(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh has no triangle
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Empty all buffers, keeping their allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.normals.clear();
        self.indices.clear();
    }

    /// Outputs a copy of triangles in a structured format
    pub fn tris(&self) -> Vec<Triangle<F>> {
        self.indices
            .chunks_exact(3)
            .map(|corners| Triangle {
                vertices: [
                    self.vertex(corners[0]),
                    self.vertex(corners[1]),
                    self.vertex(corners[2]),
                ],
            })
            .collect()
    }

    fn vertex(&self, index: usize) -> Vertex<F> {
        Vertex {
            position: self.vertices[index],
            normal: self.normals[index],
        }
    }
}

/// A MeshBuilder that builds Mesh
pub struct GenericMeshBuilder<F> {
    mesh: Mesh<F>,
}

#[allow(clippy::new_without_default)]
impl<F> GenericMeshBuilder<F>
where
    F: Density,
{
    /// Create a fresh builder
    pub fn new() -> Self {
        Self {
            mesh: Mesh {
                vertices: vec![],
                normals: vec![],
                indices: vec![],
            },
        }
    }

    /// Create a builder writing into the buffers of a previous mesh. Its content is discarded
    pub fn from_mesh(mut mesh: Mesh<F>) -> Self {
        mesh.clear();
        Self { mesh }
    }

    /// Output the Mesh
    pub fn build(self) -> Mesh<F> {
        self.mesh
    }
}

impl<F> MeshBuilder<F> for GenericMeshBuilder<F>
where
    F: Density,
{
    fn add_vertex(&mut self, position: Position<F>, normal: [F; 3]) -> VertexIndex {
        let index = self.mesh.vertices.len();
        self.mesh.vertices.push(position.to_array());
        self.mesh.normals.push(normal);
        VertexIndex(index)
    }

    fn add_triangle(
        &mut self,
        vertex_1_index: VertexIndex,
        vertex_2_index: VertexIndex,
        vertex_3_index: VertexIndex,
    ) {
        self.mesh.indices.push(vertex_1_index.0);
        self.mesh.indices.push(vertex_2_index.0);
        self.mesh.indices.push(vertex_3_index.0);
    }
}

/// A triangle, mostly for debugging or test purposes
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Triangle<F> {
    /// Vertices
    pub vertices: [Vertex<F>; 3],
}

/// A vertex, mostly for debugging or test purposes
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Vertex<F> {
    /// XYZ
    pub position: [F; 3],
    /// XYZ of the normal
    pub normal: [F; 3],
}

impl<F> Display for Triangle<F>
where
    F: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Triangle:")?;
        let [v1, v2, v3] = &self.vertices;
        writeln!(f, "    + Pos {:?}  Norm {:?}", v1.position, v1.normal)?;
        writeln!(f, "    + Pos {:?}  Norm {:?}", v2.position, v2.normal)?;
        writeln!(f, "    + Pos {:?}  Norm {:?}", v3.position, v3.normal)?;
        Ok(())
    }
}
