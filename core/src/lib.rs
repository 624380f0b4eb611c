//! # MeshForge Core
//!
//! Core crate for MeshForge: CPU-side mesh buffers, the [`mesh::Drawable`]
//! capability consumed by rendering backends, and procedural generators for
//! common shapes (cylinder, icosphere, cube, square).

pub mod math;
pub mod mesh;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core subsystem.
pub fn init() {
    log::info!("MeshForge Core v{} initialized", VERSION);
}
