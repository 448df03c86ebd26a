/// Outline Module - Data-Oriented Programming (DOP) style
///
/// Extracts the silhouette of blocker meshes:
/// - outline_data.rs: adjacency, loops, output meshes and caches
/// - outline_operations.rs: pure functions that build them

pub mod outline_data;
pub mod outline_operations;

pub use outline_data::{
    AdjacencyIndex, BlockerMesh, BlockerVertex, OutlineCache, OutlineLoop, OutlineMesh,
    OutlineMode, OutlineSet, PerimeterMesh,
};

pub use outline_operations::{
    // Adjacency
    build_adjacency,
    triangles_of,

    // Classification
    connected_outline_vertex,
    is_outline_edge,

    // Extraction
    compute_outline_loops,
    extract_outlines,

    // Mesh generation
    build_blocker_mesh,
    build_perimeter_mesh,
    compute_outline,
    outline_index_count,
    outline_vertex_count,

    // Caching
    cached_outline,
    is_cache_current,
};
