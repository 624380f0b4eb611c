//! Axis-aligned cube with flat-shaded faces.

use glam::Vec3;

use crate::mesh::{MeshBuffers, MeshBuilder};

/// Face normals paired with the face's first in-plane axis.
///
/// The second axis is `normal x first`, which keeps `first x second == normal`
/// so the quad corners below run counter-clockwise around the normal.
const FACES: [(Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z),
    (Vec3::Y, Vec3::Z),
    (Vec3::NEG_Y, Vec3::X),
    (Vec3::Z, Vec3::X),
    (Vec3::NEG_Z, Vec3::Y),
];

/// Generate a cube mesh.
///
/// Each face gets its own four vertices so normals stay flat, giving 24
/// vertices and 36 indices.
///
/// # Arguments
///
/// * `center` - Center of the cube
/// * `half_extent` - Half the edge length
pub fn generate_cube(center: Vec3, half_extent: f32) -> MeshBuffers {
    let mut builder = MeshBuilder::with_capacity("cube", 24, 36);

    for (normal, u) in FACES {
        push_face(&mut builder, center, normal, u, half_extent);
    }

    builder.build()
}

/// Append one quad facing `normal`, spanned by `u` and `normal x u`.
pub(super) fn push_face(
    builder: &mut MeshBuilder,
    center: Vec3,
    normal: Vec3,
    u: Vec3,
    half_extent: f32,
) {
    let v = normal.cross(u);
    let face_center = center + normal * half_extent;

    let base = builder.next_index();
    for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
        builder.push_vertex(face_center + (u * su + v * sv) * half_extent, normal);
    }

    builder.push_triangle(base, base + 1, base + 2);
    builder.push_triangle(base, base + 2, base + 3);
}
