//! Mesh buffer error types.

use thiserror::Error;

/// Violations of the mesh buffer invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A vertex buffer is not a whole number of 4-component records.
    #[error("{buffer} buffer holds {len} floats, not a multiple of 4")]
    PartialRecord {
        /// Name of the offending buffer.
        buffer: &'static str,
        /// Number of floats in the buffer.
        len: usize,
    },
    /// Position and normal buffers describe a different number of vertices.
    #[error("position buffer has {positions} vertices but normal buffer has {normals}")]
    LengthMismatch {
        /// Vertex count implied by the position buffer.
        positions: usize,
        /// Vertex count implied by the normal buffer.
        normals: usize,
    },
    /// The index buffer does not contain whole triangles.
    #[error("index count {index_count} is not a multiple of 3")]
    IncompleteTriangle {
        /// Number of indices.
        index_count: usize,
    },
    /// An index refers past the end of the vertex buffer.
    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// The offending index value.
        index: u32,
        /// Position of the index in the index buffer.
        position: usize,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::IncompleteTriangle { index_count: 4 };
        assert_eq!(err.to_string(), "index count 4 is not a multiple of 3");

        let err = MeshError::IndexOutOfRange {
            index: 9,
            position: 2,
            vertex_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "index 9 at position 2 is out of range for 3 vertices"
        );
    }
}
