//! Flat square facing +Z.

use glam::Vec3;

use super::cube::push_face;
use crate::mesh::{MeshBuffers, MeshBuilder};

/// Generate a square on the XY plane facing `+z`.
///
/// Used as a full-screen background quad when `half_extent` is 1.
///
/// # Arguments
///
/// * `center` - Center of the square
/// * `half_extent` - Half the edge length
pub fn generate_square(center: Vec3, half_extent: f32) -> MeshBuffers {
    let mut builder = MeshBuilder::with_capacity("square", 4, 6);
    // push_face offsets along the normal; undo that so the square sits on `center`.
    push_face(
        &mut builder,
        center - Vec3::Z * half_extent,
        Vec3::Z,
        Vec3::X,
        half_extent,
    );
    builder.build()
}
