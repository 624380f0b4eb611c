//! # MeshForge Demos
//!
//! Demo binaries showcasing MeshForge mesh generation.
//!
//! ## Available Demos
//!
//! - `shapes_demo` - Square, icosphere and cylinder rendered through the headless context

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
