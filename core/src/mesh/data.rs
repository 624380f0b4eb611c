//! CPU-side mesh data structures.
//!
//! This module provides:
//! - [`MeshBuffers`] - Position, normal and index buffers produced by one generation pass
//! - [`Drawable`] - The capability a rendering backend needs to upload a mesh
//! - `MeshBuilder` - Crate-internal accumulator used by the generators

use glam::Vec3;

use super::error::MeshError;
use crate::math::{direction, point};

/// Number of floats per position or normal record (`x, y, z, w`).
pub const FLOATS_PER_VERTEX: usize = 4;

/// Anything that can provide vertex, normal and index buffers to a backend.
///
/// Positions are packed `(x, y, z, 1)` records, normals `(x, y, z, 0)`
/// records, and indices form a triangle list.
pub trait Drawable {
    /// Debug label of the mesh.
    fn label(&self) -> &str;

    /// Packed 4-component positions.
    fn positions(&self) -> &[f32];

    /// Packed 4-component normals, index-aligned with positions.
    fn normals(&self) -> &[f32];

    /// Triangle list indices.
    fn indices(&self) -> &[u32];

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.positions().len() / FLOATS_PER_VERTEX
    }

    /// Number of indices.
    fn index_count(&self) -> usize {
        self.indices().len()
    }

    /// Check the buffers against the mesh invariants.
    ///
    /// Positions and normals must be whole 4-component records of equal
    /// count, the index buffer must hold whole triangles, and every index
    /// must refer to an existing vertex.
    fn validate(&self) -> Result<(), MeshError> {
        validate_buffers(self.positions(), self.normals(), self.indices())
    }
}

/// A CPU-side mesh holding the buffers of one generation pass.
///
/// The buffers are produced together and never mutated afterwards; the
/// rendering backend borrows them for upload. Buffer access and counts come
/// from the [`Drawable`] impl.
#[derive(Clone, PartialEq)]
pub struct MeshBuffers {
    label: String,
    positions: Vec<f32>,
    normals: Vec<f32>,
    indices: Vec<u32>,
}

impl MeshBuffers {
    /// Create mesh buffers from raw packed data.
    ///
    /// The data is checked against the buffer invariants before it is accepted.
    pub fn from_raw(
        label: impl Into<String>,
        positions: Vec<f32>,
        normals: Vec<f32>,
        indices: Vec<u32>,
    ) -> Result<Self, MeshError> {
        let mesh = Self {
            label: label.into(),
            positions,
            normals,
            indices,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the position of a vertex as `[x, y, z, w]`.
    pub fn position(&self, vertex: usize) -> Option<[f32; 4]> {
        record(&self.positions, vertex)
    }

    /// Get the normal of a vertex as `[x, y, z, w]`.
    pub fn normal(&self, vertex: usize) -> Option<[f32; 4]> {
        record(&self.normals, vertex)
    }

    /// Iterate over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Get position data as bytes.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Get normal data as bytes.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Get index data as bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl Drawable for MeshBuffers {
    fn label(&self) -> &str {
        &self.label
    }

    fn positions(&self) -> &[f32] {
        &self.positions
    }

    fn normals(&self) -> &[f32] {
        &self.normals
    }

    fn indices(&self) -> &[u32] {
        &self.indices
    }
}

impl std::fmt::Debug for MeshBuffers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshBuffers")
            .field("label", &self.label)
            .field("vertex_count", &self.vertex_count())
            .field("index_count", &self.indices.len())
            .finish()
    }
}

fn validate_buffers(
    positions: &[f32],
    normals: &[f32],
    indices: &[u32],
) -> Result<(), MeshError> {
    for (buffer, data) in [("position", positions), ("normal", normals)] {
        if data.len() % FLOATS_PER_VERTEX != 0 {
            return Err(MeshError::PartialRecord {
                buffer,
                len: data.len(),
            });
        }
    }

    let vertex_count = positions.len() / FLOATS_PER_VERTEX;
    let normal_count = normals.len() / FLOATS_PER_VERTEX;
    if vertex_count != normal_count {
        return Err(MeshError::LengthMismatch {
            positions: vertex_count,
            normals: normal_count,
        });
    }

    if indices.len() % 3 != 0 {
        return Err(MeshError::IncompleteTriangle {
            index_count: indices.len(),
        });
    }

    if let Some((position, &index)) = indices
        .iter()
        .enumerate()
        .find(|&(_, &index)| index as usize >= vertex_count)
    {
        return Err(MeshError::IndexOutOfRange {
            index,
            position,
            vertex_count,
        });
    }

    Ok(())
}

fn record(data: &[f32], vertex: usize) -> Option<[f32; 4]> {
    let start = vertex.checked_mul(FLOATS_PER_VERTEX)?;
    let slice = data.get(start..start.checked_add(FLOATS_PER_VERTEX)?)?;
    Some([slice[0], slice[1], slice[2], slice[3]])
}

/// Accumulates vertices and triangles for a single generation pass.
#[derive(Debug)]
pub(crate) struct MeshBuilder {
    label: &'static str,
    positions: Vec<f32>,
    normals: Vec<f32>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    /// Create a builder with capacity for the expected vertex and index counts.
    pub(crate) fn with_capacity(label: &'static str, vertices: usize, indices: usize) -> Self {
        Self {
            label,
            positions: Vec::with_capacity(vertices * FLOATS_PER_VERTEX),
            normals: Vec::with_capacity(vertices * FLOATS_PER_VERTEX),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Index the next pushed vertex will receive.
    pub(crate) fn next_index(&self) -> u32 {
        (self.positions.len() / FLOATS_PER_VERTEX) as u32
    }

    /// Append a vertex and return its index.
    pub(crate) fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.next_index();
        self.positions.extend_from_slice(&point(position).to_array());
        self.normals.extend_from_slice(&direction(normal).to_array());
        index
    }

    /// Append one triangle.
    pub(crate) fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub(crate) fn build(self) -> MeshBuffers {
        let mesh = MeshBuffers {
            label: self.label.to_string(),
            positions: self.positions,
            normals: self.normals,
            indices: self.indices,
        };
        debug_assert!(mesh.validate().is_ok(), "generator produced invalid buffers");
        mesh
    }
}
