//! Geometry Module - mesh input types and helper meshes

pub mod mesh_data;
pub mod mesh_operations;

pub use mesh_data::{MeshTopology, QuadMesh, SubMesh, Triangle, TriangleMesh};
pub use mesh_operations::{
    create_mesh, create_triangle_mesh, flatten_triangles, full_quad_mesh, half_quad_mesh,
    vertex_count,
};
