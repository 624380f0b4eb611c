//! Graphics error types.

use thiserror::Error;

use meshforge_core::mesh::MeshError;

use crate::context::MeshHandle;

/// Errors that can occur in the graphics system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// A mesh handed to the backend breaks the buffer invariants.
    #[error("invalid mesh '{label}': {source}")]
    InvalidMesh {
        /// Label of the rejected mesh.
        label: String,
        /// The violated invariant.
        #[source]
        source: MeshError,
    },
    /// The handle does not name a live mesh in this context.
    #[error("unknown mesh handle {0}")]
    UnknownMesh(MeshHandle),
    /// A viewport with a zero dimension was requested.
    #[error("invalid viewport size {width}x{height}")]
    InvalidViewport {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

/// Result type for graphics operations.
pub type GraphicsResult<T> = Result<T, GraphicsError>;
