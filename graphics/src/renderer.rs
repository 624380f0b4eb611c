//! Per-frame draw submission.

use std::ops::{Add, AddAssign};

use glam::{Mat4, Vec4};

use crate::camera::Camera;
use crate::context::{DrawCall, RenderContext};
use crate::error::GraphicsResult;
use crate::mesh::GpuMesh;
use crate::shader::ShaderProgram;

/// Counters for the work submitted in one or more render calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Number of draw calls issued.
    pub draw_calls: u32,
    /// Number of triangles submitted.
    pub triangles: u64,
}

impl Add for FrameStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            draw_calls: self.draw_calls + rhs.draw_calls,
            triangles: self.triangles + rhs.triangles,
        }
    }
}

impl AddAssign for FrameStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Renderer that binds a program's uniforms and draws meshes through a context.
#[derive(Debug, Clone)]
pub struct Renderer {
    clear_color: [f32; 4],
    width: u32,
    height: u32,
}

impl Renderer {
    /// Create a renderer for a surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            width,
            height,
        }
    }

    /// Set the clear color used by [`clear`](Self::clear).
    pub fn set_clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.clear_color = [r, g, b, a];
    }

    /// Get the clear color.
    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Resize the output and apply the viewport.
    pub fn set_size(
        &mut self,
        ctx: &mut dyn RenderContext,
        width: u32,
        height: u32,
    ) -> GraphicsResult<()> {
        ctx.set_viewport(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Get the output size.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the output aspect ratio.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Clear the frame with the renderer's clear color.
    pub fn clear(&self, ctx: &mut dyn RenderContext) {
        ctx.set_clear_color(self.clear_color);
        ctx.clear();
    }

    /// Draw meshes with a program.
    ///
    /// Sets the program's uniforms (identity model matrix, the camera's
    /// view-projection, color, time, intensity and speed) and issues one draw
    /// per mesh.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &self,
        ctx: &mut dyn RenderContext,
        camera: &Camera,
        program: &mut ShaderProgram,
        color: Vec4,
        time: f32,
        meshes: &[&GpuMesh],
        intensity: f32,
        speed: f32,
    ) -> GraphicsResult<FrameStats> {
        program.set_model_matrix(Mat4::IDENTITY);
        program.set_view_proj_matrix(camera.view_projection_matrix());
        program.set_geometry_color(color);
        program.set_time(time);
        program.set_intensity(intensity);
        program.set_speed(speed);

        let mut stats = FrameStats::default();
        for mesh in meshes {
            ctx.draw(&DrawCall {
                program: program.name().to_string(),
                mesh: mesh.handle(),
                index_count: mesh.index_count(),
                uniforms: *program.uniforms(),
            })?;
            stats.draw_calls += 1;
            stats.triangles += u64::from(mesh.triangle_count());
        }

        log::trace!(
            "Rendered {} meshes with '{}' ({} triangles)",
            stats.draw_calls,
            program.name(),
            stats.triangles
        );
        Ok(stats)
    }
}
