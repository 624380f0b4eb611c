//! Math type re-exports and helper functions.
//!
//! Mesh buffers store homogeneous 4-component records, so most helpers here
//! convert between `glam` vectors and the `[x, y, z, w]` layout.

pub use glam;

/// 3D vector (f32).
pub type Vec3 = glam::Vec3;

/// 4D vector (f32).
pub type Vec4 = glam::Vec4;

/// 4x4 matrix (f32).
pub type Mat4 = glam::Mat4;

/// Extend a point to homogeneous coordinates (`w = 1`).
pub fn point(v: Vec3) -> Vec4 {
    v.extend(1.0)
}

/// Extend a direction to homogeneous coordinates (`w = 0`).
pub fn direction(v: Vec3) -> Vec4 {
    v.extend(0.0)
}

/// Linearly interpolate between two colors.
///
/// `t` is not clamped; callers pass slider values already in `[0, 1]`.
pub fn lerp_color(min_color: Vec3, max_color: Vec3, t: f32) -> Vec3 {
    min_color.lerp(max_color, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homogeneous_w_components() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(point(v), Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(direction(v), Vec4::new(1.0, 2.0, 3.0, 0.0));
    }

    #[test]
    fn lerp_color_endpoints_and_midpoint() {
        let red = Vec3::new(1.0, 0.0, 0.0);
        let blue = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(lerp_color(red, blue, 0.0), red);
        assert_eq!(lerp_color(red, blue, 1.0), blue);
        let mid = lerp_color(red, blue, 0.5);
        assert!((mid - Vec3::new(0.5, 0.0, 0.5)).length() < 1e-6);
    }
}
