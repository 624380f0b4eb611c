//! # MeshForge App
//!
//! Demo application built on the MeshForge core and graphics crates.
//!
//! ## Overview
//!
//! - [`DemoArgs`] - Command line arguments (clap)
//! - [`Controls`] - User-adjustable parameters with clamped ranges
//! - [`Scene`] - Uploaded meshes and the per-frame draw sequence
//! - [`App`] - Owns the rendering context and runs the frame loop
//!
//! ## Example
//!
//! ```ignore
//! use clap::Parser;
//! use meshforge_app::{App, DemoArgs};
//!
//! fn main() {
//!     let args = DemoArgs::parse();
//!     if let Err(e) = App::run(args) {
//!         log::error!("{}", e);
//!     }
//! }
//! ```

mod app;
mod args;
mod controls;
mod error;
mod scene;
#[cfg(test)]
mod testing;

pub use app::{App, RunSummary};
pub use args::DemoArgs;
pub use controls::{Controls, COLOR_RANGE, INTENSITY_RANGE, SPEED_RANGE, TESSELLATION_RANGE};
pub use error::{AppError, AppResult};
pub use scene::{Scene, TIME_STEP};

/// App library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the app subsystem.
pub fn init() {
    log::info!("MeshForge App v{} initialized", VERSION);
}
