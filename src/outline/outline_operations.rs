//! Outline operations - Pure DOP functions
//!
//! Turns an indexed triangle mesh into outline loops and then into the line
//! meshes consumed by the shadow map pass. An edge is on the outline when
//! exactly one triangle uses it.
//!
//! Loops are discovered by scanning vertices in ascending index order, so the
//! output depends on vertex numbering, not on geometry.

use super::outline_data::{
    AdjacencyIndex, BlockerMesh, BlockerVertex, OutlineCache, OutlineLoop, OutlineMesh,
    OutlineMode, OutlineSet, PerimeterMesh,
};
use crate::geometry::{flatten_triangles, Triangle, TriangleMesh};
use bit_vec::BitVec;
use glam::Vec3;

// ============================================================================
// ADJACENCY
// ============================================================================

/// Build the vertex to triangle index in one pass over the triangles
pub fn build_adjacency(triangles: Vec<Triangle>, vertex_count: usize) -> AdjacencyIndex {
    let mut counts = vec![0u32; vertex_count];
    for triangle in &triangles {
        for vertex in distinct_corners(triangle) {
            counts[vertex as usize] += 1;
        }
    }

    let mut offsets = Vec::with_capacity(vertex_count);
    let mut total = 0u32;
    for count in &counts {
        offsets.push(total);
        total += *count;
    }

    let mut data = vec![0u32; total as usize];
    let mut cursor = offsets.clone();
    for (triangle_index, triangle) in triangles.iter().enumerate() {
        for vertex in distinct_corners(triangle) {
            let slot = &mut cursor[vertex as usize];
            data[*slot as usize] = triangle_index as u32;
            *slot += 1;
        }
    }

    AdjacencyIndex {
        triangles,
        counts,
        offsets,
        data,
    }
}

/// Triangles referencing `vertex`, in ascending triangle order
pub fn triangles_of(adjacency: &AdjacencyIndex, vertex: u32) -> impl Iterator<Item = &Triangle> + '_ {
    let (start, count) = match (
        adjacency.offsets.get(vertex as usize),
        adjacency.counts.get(vertex as usize),
    ) {
        (Some(&start), Some(&count)) => (start as usize, count as usize),
        _ => (0, 0),
    };

    adjacency.data[start..start + count]
        .iter()
        .map(move |&t| &adjacency.triangles[t as usize])
}

/// Corners of a triangle with repeated indices removed
fn distinct_corners(triangle: &Triangle) -> impl Iterator<Item = u32> + '_ {
    (0..3)
        .filter(move |&j| !triangle.0[..j].contains(&triangle[j]))
        .map(move |j| triangle[j])
}

// ============================================================================
// EDGE CLASSIFICATION
// ============================================================================

/// True when exactly one triangle contains both `a` and `b`
pub fn is_outline_edge(adjacency: &AdjacencyIndex, a: u32, b: u32) -> bool {
    let mut shared = 0;
    for triangle in triangles_of(adjacency, a) {
        if triangle.contains(b) {
            shared += 1;
            if shared > 1 {
                break;
            }
        }
    }
    shared == 1
}

/// First unvisited vertex joined to `vertex` by an outline edge.
///
/// Candidates are taken in adjacency order (triangle order, then corner
/// order), the first match wins.
pub fn connected_outline_vertex(
    adjacency: &AdjacencyIndex,
    visited: &BitVec,
    vertex: u32,
) -> Option<u32> {
    for triangle in triangles_of(adjacency, vertex) {
        for corner in 0..3 {
            let candidate = triangle[corner];
            if candidate != vertex
                && !visited.get(candidate as usize).unwrap_or(false)
                && is_outline_edge(adjacency, vertex, candidate)
            {
                return Some(candidate);
            }
        }
    }
    None
}

// ============================================================================
// LOOP EXTRACTION
// ============================================================================

/// Walk every outline of the mesh
pub fn compute_outline_loops(adjacency: &AdjacencyIndex, vertex_count: usize) -> OutlineSet {
    let mut visited = BitVec::from_elem(vertex_count, false);
    let mut loops = Vec::new();

    for start in 0..vertex_count as u32 {
        if visited.get(start as usize).unwrap_or(false) {
            continue;
        }

        // Interior vertices have no outline edge and stay unvisited
        let Some(next) = connected_outline_vertex(adjacency, &visited, start) else {
            continue;
        };

        visited.set(start as usize, true);
        let mut outline: OutlineLoop = vec![start];
        follow_outline(adjacency, &mut visited, &mut outline, next);
        // Closing duplicate, appended even when the walk stopped early
        outline.push(start);
        loops.push(outline);
    }

    OutlineSet { loops }
}

/// Extend `outline` from `vertex` until no unvisited outline neighbor is left
fn follow_outline(
    adjacency: &AdjacencyIndex,
    visited: &mut BitVec,
    outline: &mut OutlineLoop,
    vertex: u32,
) {
    let mut current = vertex;
    loop {
        outline.push(current);
        visited.set(current as usize, true);
        match connected_outline_vertex(adjacency, visited, current) {
            Some(next) => current = next,
            None => break,
        }
    }
}

/// Flatten, index and walk a mesh in one call
pub fn extract_outlines(mesh: &TriangleMesh) -> OutlineSet {
    let vertex_count = mesh.positions.len();
    let adjacency = build_adjacency(flatten_triangles(mesh), vertex_count);
    compute_outline_loops(&adjacency, vertex_count)
}

// ============================================================================
// MESH GENERATION
// ============================================================================

/// One two-vertex line per outline edge, each end knowing the other.
///
/// Pairs are taken modulo the loop length; the zero-length pair formed by a
/// loop's closing duplicate and its start is left out.
pub fn build_blocker_mesh(positions: &[Vec3], outlines: &OutlineSet) -> BlockerMesh {
    let edge_count: usize = outlines.loops.iter().map(|l| l.len()).sum();
    let mut vertices = Vec::with_capacity(edge_count * 2);
    let mut indices = Vec::with_capacity(edge_count * 2);

    for outline in &outlines.loops {
        let count = outline.len();
        for i in 0..count {
            let a = outline[i];
            let b = outline[(i + 1) % count];
            if a == b {
                continue;
            }

            let pa = positions[a as usize];
            let pb = positions[b as usize];

            indices.push(vertices.len() as u32);
            vertices.push(BlockerVertex {
                position: pa.to_array(),
                neighbor: pb.truncate().to_array(),
            });

            indices.push(vertices.len() as u32);
            vertices.push(BlockerVertex {
                position: pb.to_array(),
                neighbor: pa.truncate().to_array(),
            });
        }
    }

    BlockerMesh { vertices, indices }
}

/// Closed perimeter per loop as a line list, without the closing duplicate
pub fn build_perimeter_mesh(positions: &[Vec3], outlines: &OutlineSet) -> PerimeterMesh {
    let mut mesh = PerimeterMesh::default();

    for outline in &outlines.loops {
        if outline.len() < 2 {
            continue;
        }

        let start = mesh.positions.len() as u32;
        for &vertex in &outline[..outline.len() - 1] {
            let offset = mesh.positions.len() as u32;
            mesh.positions.push(positions[vertex as usize].to_array());
            mesh.indices.extend_from_slice(&[offset, offset + 1]);
        }

        // Last segment wraps back to the first vertex of this loop
        if let Some(last) = mesh.indices.last_mut() {
            *last = start;
        }
    }

    mesh
}

/// Extract outlines and build the mesh for `mode`
pub fn compute_outline(mesh: &TriangleMesh, mode: OutlineMode) -> OutlineMesh {
    let outlines = extract_outlines(mesh);
    match mode {
        OutlineMode::Blocker => OutlineMesh::Blocker(build_blocker_mesh(&mesh.positions, &outlines)),
        OutlineMode::Perimeter => {
            OutlineMesh::Perimeter(build_perimeter_mesh(&mesh.positions, &outlines))
        }
    }
}

pub fn outline_vertex_count(mesh: &OutlineMesh) -> usize {
    match mesh {
        OutlineMesh::Blocker(blocker) => blocker.vertices.len(),
        OutlineMesh::Perimeter(perimeter) => perimeter.positions.len(),
    }
}

pub fn outline_index_count(mesh: &OutlineMesh) -> usize {
    match mesh {
        OutlineMesh::Blocker(blocker) => blocker.indices.len(),
        OutlineMesh::Perimeter(perimeter) => perimeter.indices.len(),
    }
}

// ============================================================================
// CACHING
// ============================================================================

/// True when the cache holds a mesh built from `generation` in `mode`
pub fn is_cache_current(cache: &OutlineCache, generation: u64, mode: OutlineMode) -> bool {
    cache.mesh.is_some()
        && cache.built_generation == Some(generation)
        && cache.built_mode == Some(mode)
}

/// Return the cached outline, rebuilding it when the source generation or
/// the mode changed since the last build
pub fn cached_outline<'a>(
    cache: &'a mut OutlineCache,
    source: &TriangleMesh,
    generation: u64,
    mode: OutlineMode,
) -> &'a OutlineMesh {
    if !is_cache_current(cache, generation, mode) {
        cache.mesh = None;
        cache.built_generation = Some(generation);
        cache.built_mode = Some(mode);
    }

    cache.mesh.get_or_insert_with(|| {
        let mesh = compute_outline(source, mode);
        log::debug!(
            "[cached_outline] Rebuilt {:?} outline for generation {} ({} vertices)",
            mode,
            generation,
            outline_vertex_count(&mesh)
        );
        mesh
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::create_triangle_mesh;

    fn quad_adjacency() -> AdjacencyIndex {
        build_adjacency(vec![Triangle([0, 1, 2]), Triangle([0, 2, 3])], 4)
    }

    #[test]
    fn test_adjacency_lists_triangles_per_vertex() {
        let adjacency = quad_adjacency();
        assert_eq!(adjacency.counts, vec![2, 1, 2, 1]);
        assert_eq!(triangles_of(&adjacency, 0).count(), 2);
        assert_eq!(
            triangles_of(&adjacency, 3).copied().collect::<Vec<_>>(),
            vec![Triangle([0, 2, 3])]
        );
    }

    #[test]
    fn test_adjacency_lists_degenerate_triangle_once() {
        let adjacency = build_adjacency(vec![Triangle([0, 0, 1])], 2);
        assert_eq!(adjacency.counts, vec![1, 1]);
    }

    #[test]
    fn test_unreferenced_vertex_has_no_triangles() {
        let adjacency = build_adjacency(vec![Triangle([0, 1, 2])], 4);
        assert_eq!(triangles_of(&adjacency, 3).count(), 0);
        assert_eq!(triangles_of(&adjacency, 99).count(), 0);
    }

    #[test]
    fn test_outline_edge_classification() {
        let adjacency = quad_adjacency();
        // Boundary edges belong to one triangle
        assert!(is_outline_edge(&adjacency, 0, 1));
        assert!(is_outline_edge(&adjacency, 3, 0));
        // Diagonal is shared by both triangles
        assert!(!is_outline_edge(&adjacency, 0, 2));
        assert!(!is_outline_edge(&adjacency, 2, 0));
        // Opposite corners never share a triangle
        assert!(!is_outline_edge(&adjacency, 1, 3));
    }

    #[test]
    fn test_connected_vertex_skips_visited() {
        let adjacency = quad_adjacency();
        let mut visited = BitVec::from_elem(4, false);
        assert_eq!(connected_outline_vertex(&adjacency, &visited, 0), Some(1));

        visited.set(1, true);
        assert_eq!(connected_outline_vertex(&adjacency, &visited, 0), Some(3));

        visited.set(3, true);
        assert_eq!(connected_outline_vertex(&adjacency, &visited, 0), None);
    }

    #[test]
    fn test_perimeter_mesh_closes_each_loop() {
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let outlines = OutlineSet {
            loops: vec![vec![0, 1, 2, 3, 0]],
        };

        let mesh = build_perimeter_mesh(&positions, &outlines);
        assert_eq!(mesh.positions.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 1, 2, 2, 3, 3, 0]);
    }

    #[test]
    fn test_blocker_vertices_know_their_neighbor() {
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 3.0, 0.0),
        ];
        let outlines = OutlineSet {
            loops: vec![vec![0, 1, 2, 0]],
        };

        let mesh = build_blocker_mesh(&positions, &outlines);
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);

        assert_eq!(mesh.vertices[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[0].neighbor, [2.0, 0.0]);
        assert_eq!(mesh.vertices[1].position, [2.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[1].neighbor, [0.0, 0.0]);
        // Closing edge 2 -> 0
        assert_eq!(mesh.vertices[4].position, [2.0, 3.0, 0.0]);
        assert_eq!(mesh.vertices[5].neighbor, [2.0, 3.0]);
    }

    #[test]
    fn test_cache_rebuilds_only_on_generation_change() {
        let mesh = create_triangle_mesh(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2],
        );
        let mut cache = OutlineCache::default();
        assert!(!is_cache_current(&cache, 0, OutlineMode::Blocker));

        let first = cached_outline(&mut cache, &mesh, 0, OutlineMode::Blocker).clone();
        assert!(is_cache_current(&cache, 0, OutlineMode::Blocker));

        // Same generation keeps the old result even if the source differs
        let empty = TriangleMesh::default();
        let reused = cached_outline(&mut cache, &empty, 0, OutlineMode::Blocker).clone();
        assert_eq!(reused, first);

        let rebuilt = cached_outline(&mut cache, &empty, 1, OutlineMode::Blocker);
        assert_eq!(outline_vertex_count(rebuilt), 0);
    }

    #[test]
    fn test_cache_rebuilds_on_mode_change() {
        let mesh = create_triangle_mesh(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2],
        );
        let mut cache = OutlineCache::default();
        cached_outline(&mut cache, &mesh, 0, OutlineMode::Blocker);

        let perimeter = cached_outline(&mut cache, &mesh, 0, OutlineMode::Perimeter);
        assert!(matches!(perimeter, OutlineMesh::Perimeter(_)));
        assert_eq!(outline_index_count(perimeter), 6);
    }
}
