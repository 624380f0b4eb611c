//! Camera system

use glam::{Mat4, Vec3};

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: std::f32::consts::FRAC_PI_4, // 45 degrees
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Projection {
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}

/// Camera for viewing the scene
///
/// The view and projection matrices are cached; call [`update`](Self::update)
/// after moving the camera and
/// [`update_projection_matrix`](Self::update_projection_matrix) after changing
/// the projection.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
    view: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        let mut camera = Self {
            position,
            target,
            up: Vec3::Y,
            projection: Projection::default(),
            view: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        };
        camera.update();
        camera.update_projection_matrix();
        camera
    }

    /// Recompute the view matrix from position, target and up.
    pub fn update(&mut self) {
        self.view = Mat4::look_at_rh(self.position, self.target, self.up);
    }

    /// Set the aspect ratio (takes effect on the next projection update).
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        self.projection.aspect = aspect;
    }

    /// Recompute the projection matrix.
    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = self.projection.matrix();
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    /// Get combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view
    }

    /// Get the forward direction
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }
}
