//! Mesh operations - Pure DOP functions
//!
//! Constructors, triangle flattening and the emitter quad meshes.

use super::mesh_data::{MeshTopology, QuadMesh, SubMesh, Triangle, TriangleMesh};
use glam::{Vec2, Vec3};

/// Create a mesh from positions and submeshes
pub fn create_mesh(positions: Vec<Vec3>, submeshes: Vec<SubMesh>) -> TriangleMesh {
    TriangleMesh {
        positions,
        submeshes,
    }
}

/// Create a mesh with a single triangle-list submesh
pub fn create_triangle_mesh(positions: Vec<Vec3>, indices: Vec<u32>) -> TriangleMesh {
    create_mesh(
        positions,
        vec![SubMesh {
            topology: MeshTopology::Triangles,
            indices,
        }],
    )
}

pub fn vertex_count(mesh: &TriangleMesh) -> usize {
    mesh.positions.len()
}

/// Concatenate every submesh into one triangle list.
///
/// Panics when a submesh is not a triangle list or references a vertex that
/// does not exist: both mean the caller handed over a malformed mesh.
pub fn flatten_triangles(mesh: &TriangleMesh) -> Vec<Triangle> {
    let vertex_count = mesh.positions.len();
    let index_count: usize = mesh.submeshes.iter().map(|s| s.indices.len()).sum();
    let mut triangles = Vec::with_capacity(index_count / 3);

    for (submesh_index, submesh) in mesh.submeshes.iter().enumerate() {
        assert!(
            submesh.topology == MeshTopology::Triangles,
            "flatten_triangles: submesh {} has {:?} topology, blocker meshes must be triangle meshes",
            submesh_index,
            submesh.topology
        );
        assert!(
            submesh.indices.len() % 3 == 0,
            "flatten_triangles: submesh {} has {} indices, not a multiple of 3",
            submesh_index,
            submesh.indices.len()
        );

        for corners in submesh.indices.chunks_exact(3) {
            for &index in corners {
                assert!(
                    (index as usize) < vertex_count,
                    "flatten_triangles: index {} out of range for {} vertices",
                    index,
                    vertex_count
                );
            }
            triangles.push(Triangle([corners[0], corners[1], corners[2]]));
        }
    }

    triangles
}

/// Quad spanning the full clip square, used for spreads above 180 degrees
pub fn full_quad_mesh() -> QuadMesh {
    quad_mesh(-1.0)
}

/// Quad covering the positive x half, used for spreads up to 180 degrees
pub fn half_quad_mesh() -> QuadMesh {
    quad_mesh(0.0)
}

fn quad_mesh(left: f32) -> QuadMesh {
    QuadMesh {
        positions: [
            Vec3::new(left, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(left, -1.0, 0.0),
        ],
        uvs: [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ],
        indices: [0, 1, 2, 0, 2, 3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> TriangleMesh {
        create_triangle_mesh(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    #[test]
    fn test_flatten_concatenates_submeshes() {
        let mut mesh = unit_quad();
        mesh.submeshes.push(SubMesh {
            topology: MeshTopology::Triangles,
            indices: vec![1, 2, 3],
        });

        let triangles = flatten_triangles(&mesh);
        assert_eq!(
            triangles,
            vec![
                Triangle([0, 1, 2]),
                Triangle([0, 2, 3]),
                Triangle([1, 2, 3])
            ]
        );
    }

    #[test]
    #[should_panic(expected = "must be triangle meshes")]
    fn test_flatten_rejects_line_topology() {
        let mut mesh = unit_quad();
        mesh.submeshes.push(SubMesh {
            topology: MeshTopology::Lines,
            indices: vec![0, 1],
        });
        flatten_triangles(&mesh);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_flatten_rejects_out_of_range_index() {
        let mesh = create_triangle_mesh(vec![Vec3::ZERO; 3], vec![0, 1, 3]);
        flatten_triangles(&mesh);
    }

    #[test]
    fn test_triangle_lookup() {
        let triangle = Triangle([4, 7, 9]);
        assert_eq!(triangle[0], 4);
        assert_eq!(triangle[2], 9);
        assert!(triangle.contains(7));
        assert!(!triangle.contains(5));
    }

    #[test]
    fn test_half_quad_starts_at_origin() {
        let full = full_quad_mesh();
        let half = half_quad_mesh();

        assert_eq!(full.positions[0], Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(half.positions[0], Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(half.positions[2], full.positions[2]);
        assert_eq!(half.indices, [0, 1, 2, 0, 2, 3]);
    }
}
