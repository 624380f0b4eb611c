//! Parametric cylinder along the X axis.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::mesh::{Drawable, MeshBuffers, MeshBuilder};

/// Smallest radial segment count (triangular cross-section).
pub const MIN_RADIAL_SEGMENTS: u32 = 3;

/// Smallest length segment count.
pub const MIN_LENGTH_SEGMENTS: u32 = 1;

/// Parameters of a right circular cylinder whose axis runs along X.
///
/// Segment counts below the minimums are clamped at generation time, so any
/// descriptor produces valid geometry. Radius and length are expected to be
/// positive; they are not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderDescriptor {
    /// Center of the cylinder.
    pub center: Vec3,
    /// Distance from the axis to the side surface.
    pub radius: f32,
    /// Extent along the X axis, split evenly around the center.
    pub length: f32,
    /// Number of segments around the circumference.
    pub radial_segments: u32,
    /// Number of segments along the axis.
    pub length_segments: u32,
}

impl CylinderDescriptor {
    /// Create a descriptor with 32 radial segments and a single length segment.
    pub fn new(center: Vec3, radius: f32, length: f32) -> Self {
        Self {
            center,
            radius,
            length,
            radial_segments: 32,
            length_segments: 1,
        }
    }

    /// Set the segment counts.
    #[must_use]
    pub fn with_segments(mut self, radial_segments: u32, length_segments: u32) -> Self {
        self.radial_segments = radial_segments;
        self.length_segments = length_segments;
        self
    }

    /// Radial segment count after clamping.
    pub fn effective_radial_segments(&self) -> u32 {
        self.radial_segments.max(MIN_RADIAL_SEGMENTS)
    }

    /// Length segment count after clamping.
    pub fn effective_length_segments(&self) -> u32 {
        self.length_segments.max(MIN_LENGTH_SEGMENTS)
    }

    /// Number of vertices [`generate`](Self::generate) will produce.
    ///
    /// The side grid duplicates the seam column; each cap adds a center
    /// vertex and its own ring.
    pub fn vertex_count(&self) -> usize {
        let radial = self.effective_radial_segments() as usize;
        let rings = self.effective_length_segments() as usize + 1;
        rings * (radial + 1) + 2 * (radial + 2)
    }

    /// Number of indices [`generate`](Self::generate) will produce.
    pub fn index_count(&self) -> usize {
        let radial = self.effective_radial_segments() as usize;
        let length = self.effective_length_segments() as usize;
        6 * radial * length + 2 * 3 * radial
    }

    /// Generate the side surface and both end caps in a single pass.
    pub fn generate(&self) -> MeshBuffers {
        let radial = self.effective_radial_segments();
        let length_segments = self.effective_length_segments();
        let half_length = self.length / 2.0;

        let mut builder =
            MeshBuilder::with_capacity("cylinder", self.vertex_count(), self.index_count());

        // Side vertices, ring-major. Normals are purely radial.
        for i in 0..=length_segments {
            let x = -half_length + (i as f32 / length_segments as f32) * self.length;
            for j in 0..=radial {
                let direction = radial_direction(j, radial);
                builder.push_vertex(self.ring_point(x, direction), direction);
            }
        }

        // Side indices. Every cell is split along the same b-c diagonal.
        let stride = radial + 1;
        for i in 0..length_segments {
            for j in 0..radial {
                let a = i * stride + j;
                let b = a + stride;
                let c = a + 1;
                let d = b + 1;

                builder.push_triangle(a, c, b);
                builder.push_triangle(c, d, b);
            }
        }

        self.push_cap(&mut builder, Cap::Positive, half_length, radial);
        self.push_cap(&mut builder, Cap::Negative, -half_length, radial);

        let mesh = builder.build();
        log::debug!("Created cylinder with {} vertices", mesh.vertex_count());
        mesh
    }

    fn ring_point(&self, x: f32, direction: Vec3) -> Vec3 {
        self.center + Vec3::new(x, 0.0, 0.0) + direction * self.radius
    }

    fn push_cap(&self, builder: &mut MeshBuilder, cap: Cap, x: f32, radial: u32) {
        let normal = cap.normal();
        let center_index = builder.push_vertex(self.center + Vec3::new(x, 0.0, 0.0), normal);

        for j in 0..=radial {
            builder.push_vertex(self.ring_point(x, radial_direction(j, radial)), normal);
        }

        for j in 0..radial {
            let first = center_index + 1 + j;
            let second = first + 1;
            match cap {
                Cap::Positive => builder.push_triangle(center_index, first, second),
                // Same angular traversal, so the fan must be mirrored to face -X.
                Cap::Negative => builder.push_triangle(center_index, second, first),
            }
        }
    }
}

/// Generate a cylinder mesh.
///
/// Convenience wrapper around [`CylinderDescriptor::generate`].
///
/// # Arguments
///
/// * `center` - Center of the cylinder
/// * `radius` - Radius of the side surface
/// * `length` - Extent along the X axis
/// * `radial_segments` - Segments around the circumference (clamped to at least 3)
/// * `length_segments` - Segments along the axis (clamped to at least 1)
pub fn generate_cylinder(
    center: Vec3,
    radius: f32,
    length: f32,
    radial_segments: u32,
    length_segments: u32,
) -> MeshBuffers {
    CylinderDescriptor::new(center, radius, length)
        .with_segments(radial_segments, length_segments)
        .generate()
}

#[derive(Debug, Clone, Copy)]
enum Cap {
    Positive,
    Negative,
}

impl Cap {
    fn normal(self) -> Vec3 {
        match self {
            Cap::Positive => Vec3::X,
            Cap::Negative => Vec3::NEG_X,
        }
    }
}

/// Unit direction from the axis to ring vertex `j`, in the YZ plane.
fn radial_direction(j: u32, radial: u32) -> Vec3 {
    let theta = (j as f32 / radial as f32) * TAU;
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(0.0, cos_theta, sin_theta)
}
