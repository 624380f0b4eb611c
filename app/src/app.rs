//! Main application struct and frame loop.

use std::time::Instant;

use glam::Vec3;
use meshforge_graphics::{Camera, DummyContext, FrameStats, RenderContext, Renderer};

use crate::args::DemoArgs;
use crate::controls::Controls;
use crate::error::{AppError, AppResult};
use crate::scene::Scene;

const CLEAR_GRAY: f32 = 0.2;
const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 5.0);

/// Totals reported when a run finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of frames rendered.
    pub frames: u64,
    /// Work submitted across all frames.
    pub stats: FrameStats,
}

/// Main application: owns the rendering context, renderer, camera, controls
/// and scene.
///
/// # Example
///
/// ```ignore
/// use clap::Parser;
/// use meshforge_app::{App, DemoArgs};
///
/// fn main() {
///     let args = DemoArgs::parse();
///     App::run(args).unwrap();
/// }
/// ```
#[derive(Debug)]
pub struct App<C = DummyContext> {
    ctx: C,
    renderer: Renderer,
    camera: Camera,
    controls: Controls,
    scene: Scene,
    max_frames: u64,
}

impl App {
    /// Create a headless context, apply the window size and load the scene.
    pub fn new(args: &DemoArgs) -> AppResult<Self> {
        Self::with_context(DummyContext::new(), args)
    }

    /// Run the demo with the given arguments.
    ///
    /// This is the main entry point: it initializes logging, renders
    /// `max_frames` frames and releases the scene.
    pub fn run(args: DemoArgs) -> AppResult<RunSummary> {
        // Initialize logging
        let logger =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .try_init();
        if logger.is_err() {
            log::debug!("Logger already initialized");
        }

        meshforge_core::init();
        meshforge_graphics::init();
        crate::init();

        let start_time = Instant::now();
        let summary = Self::new(&args)?.finish()?;

        log::info!(
            "Rendered {} frames ({} draw calls, {} triangles) in {:.2?}",
            summary.frames,
            summary.stats.draw_calls,
            summary.stats.triangles,
            start_time.elapsed()
        );
        Ok(summary)
    }
}

impl<C: RenderContext> App<C> {
    /// Apply the window size to `ctx` and load the scene into it.
    pub fn with_context(mut ctx: C, args: &DemoArgs) -> AppResult<Self> {
        if args.width == 0 || args.height == 0 {
            return Err(AppError::InvalidWindowSize {
                width: args.width,
                height: args.height,
            });
        }

        let mut renderer = Renderer::new(args.width, args.height);
        renderer.set_clear_color(CLEAR_GRAY, CLEAR_GRAY, CLEAR_GRAY, 1.0);
        renderer.set_size(&mut ctx, args.width, args.height)?;

        let mut camera = Camera::new(CAMERA_EYE, Vec3::ZERO);
        camera.set_aspect_ratio(renderer.aspect_ratio());
        camera.update_projection_matrix();

        let controls = args.controls();
        let scene = Scene::load(&mut ctx, &controls)?;

        log::info!(
            "Context initialized: {} ({}x{})",
            ctx.name(),
            args.width,
            args.height
        );

        Ok(Self {
            ctx,
            renderer,
            camera,
            controls,
            scene,
            max_frames: args.max_frames,
        })
    }

    /// Render `max_frames` frames, then shut down.
    ///
    /// The scene is released even when a frame fails. The first error wins.
    pub fn finish(mut self) -> AppResult<RunSummary> {
        let frames = self.run_frames(self.max_frames);
        let frame_count = self.scene.frame();
        let shutdown = self.shutdown();
        let stats = frames?;
        shutdown?;
        Ok(RunSummary {
            frames: frame_count,
            stats,
        })
    }

    /// Tick the scene `frames` times and return the accumulated stats.
    pub fn run_frames(&mut self, frames: u64) -> AppResult<FrameStats> {
        let mut total = FrameStats::default();
        for _ in 0..frames {
            total += self.tick()?;
        }
        Ok(total)
    }

    /// Render one frame.
    pub fn tick(&mut self) -> AppResult<FrameStats> {
        self.scene
            .tick(&mut self.ctx, &self.renderer, &self.camera, &self.controls)
    }

    /// Resize the output and update the camera projection.
    pub fn resize(&mut self, width: u32, height: u32) -> AppResult<()> {
        self.renderer.set_size(&mut self.ctx, width, height)?;
        self.camera.set_aspect_ratio(self.renderer.aspect_ratio());
        self.camera.update_projection_matrix();
        log::debug!("Resized to {}x{}", width, height);
        Ok(())
    }

    /// Reset controls to defaults and reload the scene.
    pub fn reset(&mut self) -> AppResult<()> {
        self.scene.reset(&mut self.ctx, &mut self.controls)
    }

    /// Release the scene's uploads.
    pub fn shutdown(self) -> AppResult<()> {
        let Self {
            mut ctx, scene, ..
        } = self;
        scene.release(&mut ctx)?;
        log::debug!("Scene released from {}", ctx.name());
        Ok(())
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}
