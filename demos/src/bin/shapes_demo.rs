//! # Shapes Demo
//!
//! Generates a background square, a tessellated icosphere and a cylinder,
//! then renders `--max-frames` frames through the headless context.
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin shapes_demo -- --max-frames 10 --tessellations 3
//! ```

use std::process::ExitCode;

use clap::Parser;
use meshforge_app::{App, DemoArgs};

fn main() -> ExitCode {
    let args = DemoArgs::parse();
    match App::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Shapes demo failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
