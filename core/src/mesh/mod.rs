//! CPU-side mesh types and generators.
//!
//! This module provides GPU-agnostic mesh data:
//!
//! - [`MeshBuffers`] - Immutable position/normal/index buffers of one mesh
//! - [`Drawable`] - Capability of anything that can hand those buffers to a backend
//! - [`MeshError`] - Buffer invariant violations reported by [`Drawable::validate`]
//! - Generators for common shapes (cylinder, icosphere, cube, square)
//!
//! These types are re-exported by `meshforge-graphics` for convenience.

mod data;
mod error;
pub mod generators;

pub use data::{Drawable, MeshBuffers, FLOATS_PER_VERTEX};
pub use error::MeshError;

pub(crate) use data::MeshBuilder;
