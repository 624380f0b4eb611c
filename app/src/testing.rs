//! Rendering context that fails chosen operations, for error-path tests.

use std::cell::Cell;
use std::rc::Rc;

use meshforge_graphics::{
    DrawCall, Drawable, DummyContext, GraphicsError, GraphicsResult, MeshError, MeshHandle,
    RenderContext,
};

/// Wraps a [`DummyContext`] and fails the n-th upload or draw (1-based).
///
/// The live mesh count is shared so it can still be read after the context
/// has been moved into an `App`.
#[derive(Debug, Default)]
pub(crate) struct FailingContext {
    inner: DummyContext,
    fail_upload: Option<usize>,
    fail_draw: Option<usize>,
    uploads: usize,
    draws: usize,
    live: Rc<Cell<usize>>,
}

impl FailingContext {
    pub(crate) fn failing_upload(n: usize) -> Self {
        Self {
            fail_upload: Some(n),
            ..Self::default()
        }
    }

    pub(crate) fn failing_draw(n: usize) -> Self {
        Self {
            fail_draw: Some(n),
            ..Self::default()
        }
    }

    pub(crate) fn live_meshes(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.live)
    }
}

impl RenderContext for FailingContext {
    fn name(&self) -> &'static str {
        "Failing"
    }

    fn upload_mesh(&mut self, mesh: &dyn Drawable) -> GraphicsResult<MeshHandle> {
        self.uploads += 1;
        if self.fail_upload == Some(self.uploads) {
            return Err(GraphicsError::InvalidMesh {
                label: mesh.label().to_string(),
                source: MeshError::IncompleteTriangle {
                    index_count: mesh.index_count(),
                },
            });
        }
        let handle = self.inner.upload_mesh(mesh)?;
        self.live.set(self.live.get() + 1);
        Ok(handle)
    }

    fn release_mesh(&mut self, handle: MeshHandle) -> GraphicsResult<()> {
        self.inner.release_mesh(handle)?;
        self.live.set(self.live.get() - 1);
        Ok(())
    }

    fn set_clear_color(&mut self, color: [f32; 4]) {
        self.inner.set_clear_color(color);
    }

    fn set_viewport(&mut self, width: u32, height: u32) -> GraphicsResult<()> {
        self.inner.set_viewport(width, height)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn draw(&mut self, call: &DrawCall) -> GraphicsResult<()> {
        self.draws += 1;
        if self.fail_draw == Some(self.draws) {
            return Err(GraphicsError::UnknownMesh(call.mesh));
        }
        self.inner.draw(call)
    }
}
