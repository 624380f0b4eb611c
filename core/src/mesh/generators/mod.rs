//! Mesh generators for common shapes.
//!
//! These generators produce [`MeshBuffers`](super::MeshBuffers) values that
//! can be uploaded through any `RenderContext` in `meshforge-graphics`.
//! Every generator emits 4-component positions (`w = 1`) and normals
//! (`w = 0`) with triangles wound counter-clockwise as seen from outside.

mod cube;
mod cylinder;
mod icosphere;
mod square;

pub use cube::generate_cube;
pub use cylinder::{
    generate_cylinder, CylinderDescriptor, MIN_LENGTH_SEGMENTS, MIN_RADIAL_SEGMENTS,
};
pub use icosphere::{generate_icosphere, MAX_ICOSPHERE_SUBDIVISIONS};
pub use square::generate_square;

/// Convert a fractional segment count (e.g. a GUI slider value) to an integer.
///
/// The value is floored and clamped to `min`; NaN and negative values map
/// to `min`.
pub fn segment_count(value: f32, min: u32) -> u32 {
    let floored = value.floor();
    if floored.is_nan() || floored < min as f32 {
        min
    } else {
        // `as` saturates at u32::MAX for huge values.
        floored as u32
    }
}
