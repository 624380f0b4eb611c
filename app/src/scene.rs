//! The demo scene: a background square, a tessellated body and a cylinder.

use glam::{Vec3, Vec4};
use meshforge_core::math::lerp_color;
use meshforge_core::mesh::generators::{generate_cylinder, generate_icosphere, generate_square};
use meshforge_graphics::{
    Camera, FrameStats, GpuMesh, GraphicsError, GraphicsResult, RenderContext, Renderer,
    ShaderProgram,
};

use crate::controls::Controls;
use crate::error::{AppError, AppResult};

/// Seconds of animation time advanced per frame.
pub const TIME_STEP: f32 = 0.1;

const MIN_COLOR: Vec3 = Vec3::new(1.0, 0.0, 0.0);
const MAX_COLOR: Vec3 = Vec3::new(0.0, 0.0, 1.0);
const BACKGROUND_COLOR: Vec4 = Vec4::ONE;

const BODY_RADIUS: f32 = 1.0;
const CYLINDER_CENTER: Vec3 = Vec3::new(0.0, -1.5, 0.0);
const CYLINDER_RADIUS: f32 = 1.0;
const CYLINDER_LENGTH: f32 = 5.0;
const CYLINDER_RADIAL_SEGMENTS: u32 = 32;
const CYLINDER_LENGTH_SEGMENTS: u32 = 1;

/// Uploaded meshes and programs for the demo.
///
/// The body is regenerated whenever the tessellation level changes; the
/// square and the cylinder are uploaded once at load.
#[derive(Debug)]
pub struct Scene {
    square: GpuMesh,
    body: GpuMesh,
    cylinder: GpuMesh,
    body_tessellations: u32,
    background_program: ShaderProgram,
    body_program: ShaderProgram,
    lambert_program: ShaderProgram,
    frame: u64,
}

impl Scene {
    /// Generate and upload all scene meshes.
    ///
    /// If an upload fails, the meshes uploaded before it are released and
    /// the context is left as it was.
    pub fn load(ctx: &mut dyn RenderContext, controls: &Controls) -> AppResult<Self> {
        let square = GpuMesh::upload(ctx, &generate_square(Vec3::ZERO, 1.0))?;
        let body = match upload_body(ctx, controls.tessellations()) {
            Ok(body) => body,
            Err(err) => return Err(unwind(ctx, vec![square], err)),
        };
        let cylinder = generate_cylinder(
            CYLINDER_CENTER,
            CYLINDER_RADIUS,
            CYLINDER_LENGTH,
            CYLINDER_RADIAL_SEGMENTS,
            CYLINDER_LENGTH_SEGMENTS,
        );
        let cylinder = match GpuMesh::upload(ctx, &cylinder) {
            Ok(cylinder) => cylinder,
            Err(err) => return Err(unwind(ctx, vec![square, body], err)),
        };

        log::info!(
            "Scene loaded: body has {} vertices at tessellation {}",
            body.vertex_count(),
            controls.tessellations()
        );

        Ok(Self {
            square,
            body,
            cylinder,
            body_tessellations: controls.tessellations(),
            background_program: ShaderProgram::background(),
            body_program: ShaderProgram::body(),
            lambert_program: ShaderProgram::lambert(),
            frame: 0,
        })
    }

    /// Reset the controls to their defaults and reload every mesh.
    ///
    /// The scene and the controls are only replaced once the default scene
    /// has loaded; on failure both keep their current state.
    pub fn reset(&mut self, ctx: &mut dyn RenderContext, controls: &mut Controls) -> AppResult<()> {
        let defaults = Controls::default();
        let fresh = Self::load(ctx, &defaults)?;
        let stale = std::mem::replace(self, fresh);
        *controls = defaults;
        stale.release(ctx)
    }

    /// Advance one frame and draw the scene.
    pub fn tick(
        &mut self,
        ctx: &mut dyn RenderContext,
        renderer: &Renderer,
        camera: &Camera,
        controls: &Controls,
    ) -> AppResult<FrameStats> {
        self.frame += 1;
        let time = self.time();

        if controls.tessellations() != self.body_tessellations {
            let body = upload_body(ctx, controls.tessellations())?;
            log::debug!(
                "Body regenerated at tessellation {} ({} vertices)",
                controls.tessellations(),
                body.vertex_count()
            );
            std::mem::replace(&mut self.body, body).release(ctx)?;
            self.body_tessellations = controls.tessellations();
        }

        let color = lerp_color(MIN_COLOR, MAX_COLOR, controls.color()).extend(1.0);
        let intensity = controls.intensity();
        let speed = controls.speed();

        renderer.clear(ctx);
        let mut stats = renderer.render(
            ctx,
            camera,
            &mut self.background_program,
            BACKGROUND_COLOR,
            time,
            &[&self.square],
            intensity,
            speed,
        )?;
        stats += renderer.render(
            ctx,
            camera,
            &mut self.body_program,
            color,
            time,
            &[&self.body],
            intensity,
            speed,
        )?;
        stats += renderer.render(
            ctx,
            camera,
            &mut self.lambert_program,
            color,
            time,
            &[&self.cylinder],
            intensity,
            speed,
        )?;
        Ok(stats)
    }

    /// Release every uploaded mesh.
    pub fn release(self, ctx: &mut dyn RenderContext) -> AppResult<()> {
        self.square.release(ctx)?;
        self.body.release(ctx)?;
        self.cylinder.release(ctx)?;
        Ok(())
    }

    /// Number of frames ticked since load.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Animation time of the current frame.
    pub fn time(&self) -> f32 {
        self.frame as f32 * TIME_STEP
    }

    pub fn body(&self) -> &GpuMesh {
        &self.body
    }

    pub fn body_tessellations(&self) -> u32 {
        self.body_tessellations
    }

    pub fn square(&self) -> &GpuMesh {
        &self.square
    }

    pub fn cylinder(&self) -> &GpuMesh {
        &self.cylinder
    }
}

fn upload_body(ctx: &mut dyn RenderContext, tessellations: u32) -> GraphicsResult<GpuMesh> {
    let body = generate_icosphere(Vec3::ZERO, BODY_RADIUS, tessellations);
    GpuMesh::upload(ctx, &body)
}

/// Release meshes uploaded before `err` and return it as the load error.
fn unwind(ctx: &mut dyn RenderContext, uploaded: Vec<GpuMesh>, err: GraphicsError) -> AppError {
    for mesh in uploaded {
        let label = mesh.label().to_string();
        if let Err(release_err) = mesh.release(ctx) {
            log::warn!("Failed to release '{}' after load error: {}", label, release_err);
        }
    }
    err.into()
}
