//! Meshes uploaded to a rendering context.

use meshforge_core::mesh::Drawable;

use crate::context::{MeshHandle, RenderContext};
use crate::error::GraphicsResult;

/// A mesh whose buffers live in a [`RenderContext`].
///
/// Holds only the handle and the counts needed to draw it; the CPU buffers
/// stay with their owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuMesh {
    handle: MeshHandle,
    label: String,
    vertex_count: u32,
    index_count: u32,
}

impl GpuMesh {
    /// Upload a drawable through the given context.
    pub fn upload(ctx: &mut dyn RenderContext, mesh: &dyn Drawable) -> GraphicsResult<Self> {
        let handle = ctx.upload_mesh(mesh)?;
        log::debug!(
            "Uploaded {} ({} vertices, {} indices) via {}",
            mesh.label(),
            mesh.vertex_count(),
            mesh.index_count(),
            ctx.name()
        );
        Ok(Self {
            handle,
            label: mesh.label().to_string(),
            vertex_count: mesh.vertex_count() as u32,
            index_count: mesh.index_count() as u32,
        })
    }

    /// Release the uploaded buffers.
    pub fn release(self, ctx: &mut dyn RenderContext) -> GraphicsResult<()> {
        ctx.release_mesh(self.handle)
    }

    /// Get the backend handle.
    pub fn handle(&self) -> MeshHandle {
        self.handle
    }

    /// Get the debug label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> u32 {
        self.index_count / 3
    }
}
