//! Command line arguments.
//!
//! Uses clap for CLI parsing with:
//! - Help text (`--help`)
//! - Validation and clear error messages
//! - Initial values for the demo controls

use clap::Parser;

use crate::controls::Controls;

/// MeshForge shapes demo arguments.
///
/// # Examples
///
/// ```bash
/// # Show help
/// ./shapes_demo --help
///
/// # Render 10 frames of a coarse, blue body
/// ./shapes_demo --max-frames 10 --tessellations 2 --color 1.0
/// ```
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "shapes_demo",
    about = "Procedural mesh demo",
    long_about = "Generates a square, an icosphere and a cylinder, uploads them to a \
        headless rendering context and renders a fixed number of frames.\n\n\
        Log output is controlled with RUST_LOG (default: info).",
    version
)]
pub struct DemoArgs {
    /// Exit after rendering N frames.
    #[arg(long, default_value = "60")]
    pub max_frames: u64,

    /// Output width in pixels.
    #[arg(long, default_value = "1280")]
    pub width: u32,

    /// Output height in pixels.
    #[arg(long, default_value = "720")]
    pub height: u32,

    /// Icosphere subdivision level (0-8).
    #[arg(long)]
    pub tessellations: Option<u32>,

    /// Color blend from red (0.0) to blue (1.0).
    #[arg(long)]
    pub color: Option<f32>,

    /// Shader effect intensity (0.0-4.0).
    #[arg(long)]
    pub intensity: Option<f32>,

    /// Animation speed multiplier (0.1-2.0).
    #[arg(long)]
    pub speed: Option<f32>,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            max_frames: 60,
            width: 1280,
            height: 720,
            tessellations: None,
            color: None,
            intensity: None,
            speed: None,
        }
    }
}

impl DemoArgs {
    /// Set the output size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the number of frames to render.
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Build the initial controls, clamping any out-of-range values.
    pub fn controls(&self) -> Controls {
        let mut controls = Controls::default();
        if let Some(tessellations) = self.tessellations {
            controls.set_tessellations(tessellations);
            if controls.tessellations() != tessellations {
                log::warn!(
                    "--tessellations {} is out of range, using {}",
                    tessellations,
                    controls.tessellations()
                );
            }
        }
        if let Some(color) = self.color {
            controls.set_color(color);
        }
        if let Some(intensity) = self.intensity {
            controls.set_intensity(intensity);
        }
        if let Some(speed) = self.speed {
            controls.set_speed(speed);
        }
        controls
    }
}
