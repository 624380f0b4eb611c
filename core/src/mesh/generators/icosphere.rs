//! Subdivided icosahedron.

use std::collections::HashMap;

use glam::Vec3;

use crate::mesh::{Drawable, MeshBuffers, MeshBuilder};

/// Highest subdivision level [`generate_icosphere`] will refine to.
///
/// Level 10 already yields 10,485,762 vertices.
pub const MAX_ICOSPHERE_SUBDIVISIONS: u32 = 10;

// Every vertex index of the finest sphere fits in a u32.
const _: () = assert!(10 * 4u64.pow(MAX_ICOSPHERE_SUBDIVISIONS) + 2 <= u32::MAX as u64);

const X: f32 = 0.525_731_1;
const Z: f32 = 0.850_650_8;

const BASE_VERTICES: [[f32; 3]; 12] = [
    [-X, 0.0, Z],
    [X, 0.0, Z],
    [-X, 0.0, -Z],
    [X, 0.0, -Z],
    [0.0, Z, X],
    [0.0, Z, -X],
    [0.0, -Z, X],
    [0.0, -Z, -X],
    [Z, X, 0.0],
    [-Z, X, 0.0],
    [Z, -X, 0.0],
    [-Z, -X, 0.0],
];

// Counter-clockwise as seen from outside.
const BASE_TRIANGLES: [[u32; 3]; 20] = [
    [0, 1, 4],
    [0, 4, 9],
    [9, 4, 5],
    [4, 8, 5],
    [4, 1, 8],
    [8, 1, 10],
    [8, 10, 3],
    [5, 8, 3],
    [5, 3, 2],
    [2, 3, 7],
    [7, 3, 10],
    [7, 10, 6],
    [7, 6, 11],
    [11, 6, 0],
    [0, 6, 1],
    [6, 10, 1],
    [9, 11, 0],
    [9, 2, 11],
    [9, 5, 2],
    [7, 11, 2],
];

/// Generate an icosphere mesh.
///
/// Starts from a regular icosahedron and splits every triangle into four
/// `subdivisions` times, pushing new vertices onto the unit sphere. Edges
/// shared by two triangles share their midpoint vertex. The result has
/// `10 * 4^n + 2` vertices and `60 * 4^n` indices.
///
/// `subdivisions` is clamped to [`MAX_ICOSPHERE_SUBDIVISIONS`].
///
/// # Arguments
///
/// * `center` - Center of the sphere
/// * `radius` - Sphere radius
/// * `subdivisions` - Number of refinement passes (0 yields the icosahedron)
pub fn generate_icosphere(center: Vec3, radius: f32, subdivisions: u32) -> MeshBuffers {
    let subdivisions = effective_subdivisions(subdivisions);
    let mut directions: Vec<Vec3> = BASE_VERTICES.iter().map(|&v| Vec3::from(v)).collect();
    let mut triangles: Vec<[u32; 3]> = BASE_TRIANGLES.to_vec();

    for _ in 0..subdivisions {
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::with_capacity(triangles.len() * 3 / 2);
        let mut refined = Vec::with_capacity(triangles.len() * 4);

        for [a, b, c] in triangles {
            let ab = midpoint(&mut directions, &mut midpoints, a, b);
            let bc = midpoint(&mut directions, &mut midpoints, b, c);
            let ca = midpoint(&mut directions, &mut midpoints, c, a);

            refined.push([a, ab, ca]);
            refined.push([b, bc, ab]);
            refined.push([c, ca, bc]);
            refined.push([ab, bc, ca]);
        }

        triangles = refined;
    }

    let mut builder = MeshBuilder::with_capacity("icosphere", directions.len(), triangles.len() * 3);
    for &normal in &directions {
        builder.push_vertex(center + normal * radius, normal);
    }
    for [a, b, c] in triangles {
        builder.push_triangle(a, b, c);
    }

    let mesh = builder.build();
    log::debug!(
        "Created icosphere with {} vertices ({} subdivisions)",
        mesh.vertex_count(),
        subdivisions
    );
    mesh
}

fn effective_subdivisions(subdivisions: u32) -> u32 {
    subdivisions.min(MAX_ICOSPHERE_SUBDIVISIONS)
}

/// Return the index of the normalized midpoint of edge `a`-`b`, creating it once per edge.
fn midpoint(
    directions: &mut Vec<Vec3>,
    cache: &mut HashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    *cache.entry(key).or_insert_with(|| {
        let index = u32::try_from(directions.len()).unwrap_or_else(|_| {
            unreachable!("vertex count is bounded by MAX_ICOSPHERE_SUBDIVISIONS")
        });
        let mid = (directions[a as usize] + directions[b as usize]).normalize();
        directions.push(mid);
        index
    })
}
