//! Mesh Data - Pure DOP
//!
//! Input meshes handed over by the host, plus the small helper meshes used
//! to draw emitters. All transformations happen in mesh_operations.rs

use glam::{Vec2, Vec3};

/// Primitive topology of a submesh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshTopology {
    Triangles,
    Quads,
    Lines,
    LineStrip,
    Points,
}

/// One index range of a mesh with its topology
#[derive(Debug, Clone, PartialEq)]
pub struct SubMesh {
    pub topology: MeshTopology,
    pub indices: Vec<u32>,
}

/// Indexed mesh as owned by the host
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriangleMesh {
    pub positions: Vec<Vec3>,
    pub submeshes: Vec<SubMesh>,
}

/// Three vertex indices, in the winding order given by the mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle(pub [u32; 3]);

impl Triangle {
    pub fn contains(&self, vertex: u32) -> bool {
        self.0.contains(&vertex)
    }
}

impl std::ops::Index<usize> for Triangle {
    type Output = u32;

    fn index(&self, corner: usize) -> &u32 {
        &self.0[corner]
    }
}

/// Screen-space quad used to draw an emitter
#[derive(Debug, Clone, PartialEq)]
pub struct QuadMesh {
    pub positions: [Vec3; 4],
    pub uvs: [Vec2; 4],
    pub indices: [u32; 6],
}
