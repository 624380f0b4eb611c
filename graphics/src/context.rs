//! Rendering context abstraction.
//!
//! Every operation that touches the rendering backend receives a
//! [`RenderContext`] explicitly; there is no process-wide graphics handle.

use std::fmt;

use meshforge_core::mesh::Drawable;

use crate::error::GraphicsResult;
use crate::shader::ShaderUniforms;

/// Handle to a mesh uploaded through a [`RenderContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub(crate) u64);

impl MeshHandle {
    /// Get the raw handle id.
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MeshHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One indexed draw of an uploaded mesh with a program's uniforms.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Name of the shader program.
    pub program: String,
    /// Mesh to draw.
    pub mesh: MeshHandle,
    /// Number of indices to draw.
    pub index_count: u32,
    /// Uniform values bound for this draw.
    pub uniforms: ShaderUniforms,
}

/// Trait for rendering backends.
///
/// A backend owns uploaded mesh buffers and executes clears and draws.
/// Callers pass the context into every operation that needs it.
pub trait RenderContext {
    /// Get the backend name.
    fn name(&self) -> &'static str;

    /// Upload the buffers of a mesh and return a handle to them.
    ///
    /// Fails with [`GraphicsError::InvalidMesh`](crate::GraphicsError::InvalidMesh)
    /// when the buffers break the mesh invariants.
    fn upload_mesh(&mut self, mesh: &dyn Drawable) -> GraphicsResult<MeshHandle>;

    /// Release an uploaded mesh.
    fn release_mesh(&mut self, handle: MeshHandle) -> GraphicsResult<()>;

    /// Set the color used by [`clear`](Self::clear).
    fn set_clear_color(&mut self, color: [f32; 4]);

    /// Set the viewport size in pixels.
    fn set_viewport(&mut self, width: u32, height: u32) -> GraphicsResult<()>;

    /// Clear color and depth.
    fn clear(&mut self);

    /// Issue an indexed draw.
    fn draw(&mut self, call: &DrawCall) -> GraphicsResult<()>;
}
