//! # MeshForge Graphics
//!
//! Rendering layer for MeshForge built around an explicitly passed
//! [`RenderContext`].
//!
//! ## Overview
//!
//! This crate provides:
//! - [`RenderContext`] - Trait for rendering backends (mesh upload, clear, draw)
//! - [`DummyContext`] - Headless backend that records uploads and draw calls
//! - [`GpuMesh`] - Handle to a mesh uploaded through a context
//! - [`ShaderProgram`] - Named program with its uniform block
//! - [`Camera`] and [`Renderer`] - Per-frame view setup and draw submission
//!
//! ## Example
//!
//! ```ignore
//! use meshforge_graphics::{Camera, DummyContext, GpuMesh, Renderer, ShaderProgram};
//!
//! let mut ctx = DummyContext::new();
//! let mesh = GpuMesh::upload(&mut ctx, &cylinder)?;
//! let renderer = Renderer::new(1280, 720);
//! renderer.render(&mut ctx, &camera, &mut ShaderProgram::lambert(), color, 0.0, &[&mesh], 1.0, 1.0)?;
//! ```

pub mod camera;
pub mod context;
pub mod dummy;
pub mod error;
pub mod mesh;
pub mod renderer;
pub mod shader;

pub use camera::Camera;
pub use context::{DrawCall, MeshHandle, RenderContext};
pub use dummy::{DummyContext, UploadedMesh};
pub use error::{GraphicsError, GraphicsResult};
pub use mesh::GpuMesh;
pub use renderer::{FrameStats, Renderer};
pub use shader::{ShaderProgram, ShaderUniforms};

// Re-export core mesh types for convenience
pub use meshforge_core::mesh::{Drawable, MeshBuffers, MeshError};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
pub fn init() {
    log::info!("MeshForge Graphics v{} initialized", VERSION);
}
