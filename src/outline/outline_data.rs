//! Outline Data - Pure DOP
//!
//! NO METHODS. Just data.
//! Extraction and mesh building happen in outline_operations.rs

use crate::geometry::Triangle;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use static_assertions::assert_eq_size;

/// Vertex to triangle lookup in compressed-row form.
///
/// The triangles referencing vertex `v` are
/// `data[offsets[v]..offsets[v] + counts[v]]`, in ascending triangle order.
/// A triangle is listed once under each distinct vertex it references.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    pub triangles: Vec<Triangle>,
    pub counts: Vec<u32>,
    pub offsets: Vec<u32>,
    pub data: Vec<u32>,
}

/// Boundary walk. The first vertex is repeated at the end.
pub type OutlineLoop = Vec<u32>;

/// All outline loops of a mesh, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlineSet {
    pub loops: Vec<OutlineLoop>,
}

/// Line-list vertex carrying the position of the other end of its edge
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BlockerVertex {
    pub position: [f32; 3],
    /// xy of the outline neighbor
    pub neighbor: [f32; 2],
}

assert_eq_size!(BlockerVertex, [f32; 5]);

/// Neighbor-attributed line list fed to the shadow map pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockerMesh {
    pub vertices: Vec<BlockerVertex>,
    pub indices: Vec<u32>,
}

/// Plain closed perimeter per loop, as a line list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerimeterMesh {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// Which mesh to build from the outline loops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineMode {
    /// Each edge carries its neighbor position, for per-edge extrusion
    #[default]
    Blocker,
    /// Wireframe perimeter without neighbor attributes
    Perimeter,
}

/// Output of outline extraction in the requested mode
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineMesh {
    Blocker(BlockerMesh),
    Perimeter(PerimeterMesh),
}

/// Cached outline of one blocker, keyed by the source mesh generation
#[derive(Debug, Clone, Default)]
pub struct OutlineCache {
    pub built_generation: Option<u64>,
    pub built_mode: Option<OutlineMode>,
    pub mesh: Option<OutlineMesh>,
}
