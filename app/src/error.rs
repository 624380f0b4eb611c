//! Application error types.

use meshforge_graphics::GraphicsError;
use thiserror::Error;

/// Errors raised while loading or running the demo.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    /// A rendering context operation failed.
    #[error("graphics error: {0}")]
    Graphics(#[from] GraphicsError),

    /// The requested window size cannot be rendered to.
    #[error("invalid window size {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
