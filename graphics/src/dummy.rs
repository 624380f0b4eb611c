//! Dummy rendering backend for testing and headless runs.
//!
//! This backend doesn't touch a GPU. It validates and stores upload sizes,
//! and records clears and draw calls so callers can inspect a frame.

use std::collections::HashMap;

use meshforge_core::mesh::Drawable;

use crate::context::{DrawCall, MeshHandle, RenderContext};
use crate::error::{GraphicsError, GraphicsResult};

/// Bookkeeping for one uploaded mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMesh {
    /// Debug label of the source mesh.
    pub label: String,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of indices.
    pub index_count: usize,
    /// Total size of position, normal and index buffers in bytes.
    pub byte_size: usize,
}

/// Dummy rendering backend.
#[derive(Debug)]
pub struct DummyContext {
    next_handle: u64,
    meshes: HashMap<MeshHandle, UploadedMesh>,
    clear_color: [f32; 4],
    viewport: (u32, u32),
    clear_count: u64,
    total_draw_calls: u64,
    frame_draw_calls: Vec<DrawCall>,
}

impl Default for DummyContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DummyContext {
    /// Create a new dummy context.
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            meshes: HashMap::new(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            viewport: (0, 0),
            clear_count: 0,
            total_draw_calls: 0,
            frame_draw_calls: Vec::new(),
        }
    }

    /// Get bookkeeping for an uploaded mesh.
    pub fn mesh(&self, handle: MeshHandle) -> Option<&UploadedMesh> {
        self.meshes.get(&handle)
    }

    /// Number of meshes currently uploaded.
    pub fn live_mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Current clear color.
    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Current viewport size.
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Number of clears issued so far.
    pub fn clear_count(&self) -> u64 {
        self.clear_count
    }

    /// Number of draw calls issued so far.
    pub fn total_draw_calls(&self) -> u64 {
        self.total_draw_calls
    }

    /// Draw calls issued since the last clear.
    pub fn frame_draw_calls(&self) -> &[DrawCall] {
        &self.frame_draw_calls
    }
}

impl RenderContext for DummyContext {
    fn name(&self) -> &'static str {
        "Dummy"
    }

    fn upload_mesh(&mut self, mesh: &dyn Drawable) -> GraphicsResult<MeshHandle> {
        mesh.validate().map_err(|source| GraphicsError::InvalidMesh {
            label: mesh.label().to_string(),
            source,
        })?;

        let handle = MeshHandle(self.next_handle);
        self.next_handle += 1;

        let byte_size = std::mem::size_of_val(mesh.positions())
            + std::mem::size_of_val(mesh.normals())
            + std::mem::size_of_val(mesh.indices());
        log::trace!(
            "DummyContext: uploading mesh {:?} as {} ({} vertices, {} bytes)",
            mesh.label(),
            handle,
            mesh.vertex_count(),
            byte_size
        );

        self.meshes.insert(
            handle,
            UploadedMesh {
                label: mesh.label().to_string(),
                vertex_count: mesh.vertex_count(),
                index_count: mesh.index_count(),
                byte_size,
            },
        );
        Ok(handle)
    }

    fn release_mesh(&mut self, handle: MeshHandle) -> GraphicsResult<()> {
        match self.meshes.remove(&handle) {
            Some(mesh) => {
                log::trace!("DummyContext: released mesh {:?}", mesh.label);
                Ok(())
            }
            None => Err(GraphicsError::UnknownMesh(handle)),
        }
    }

    fn set_clear_color(&mut self, color: [f32; 4]) {
        self.clear_color = color;
    }

    fn set_viewport(&mut self, width: u32, height: u32) -> GraphicsResult<()> {
        if width == 0 || height == 0 {
            return Err(GraphicsError::InvalidViewport { width, height });
        }
        self.viewport = (width, height);
        Ok(())
    }

    fn clear(&mut self) {
        self.clear_count += 1;
        self.frame_draw_calls.clear();
    }

    fn draw(&mut self, call: &DrawCall) -> GraphicsResult<()> {
        if !self.meshes.contains_key(&call.mesh) {
            return Err(GraphicsError::UnknownMesh(call.mesh));
        }
        self.total_draw_calls += 1;
        self.frame_draw_calls.push(call.clone());
        Ok(())
    }
}
