//! Shader programs and their uniform blocks.
//!
//! Shader sources live with the backend; on this side a program is a name
//! plus the uniform values it will be drawn with.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

/// Uniform block shared by all demo programs.
///
/// Laid out for direct upload as a 160-byte uniform buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShaderUniforms {
    /// Model matrix.
    pub model: Mat4,
    /// Combined projection * view matrix.
    pub view_proj: Mat4,
    /// Geometry color (RGBA).
    pub color: Vec4,
    /// Animation time.
    pub time: f32,
    /// Effect intensity.
    pub intensity: f32,
    /// Animation speed multiplier.
    pub speed: f32,
    _padding: f32,
}

impl Default for ShaderUniforms {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY,
            view_proj: Mat4::IDENTITY,
            color: Vec4::ONE,
            time: 0.0,
            intensity: 1.0,
            speed: 1.0,
            _padding: 0.0,
        }
    }
}

impl ShaderUniforms {
    /// Get the uniform block as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// A named shader program with its current uniform values.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderProgram {
    name: String,
    uniforms: ShaderUniforms,
}

impl ShaderProgram {
    /// Create a program with default uniforms.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uniforms: ShaderUniforms::default(),
        }
    }

    /// Diffuse lighting program.
    pub fn lambert() -> Self {
        Self::new("lambert")
    }

    /// Animated program for the tessellated body.
    pub fn body() -> Self {
        Self::new("body")
    }

    /// Full-screen background program.
    pub fn background() -> Self {
        Self::new("background")
    }

    /// Get the program name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current uniform values.
    pub fn uniforms(&self) -> &ShaderUniforms {
        &self.uniforms
    }

    pub fn set_model_matrix(&mut self, model: Mat4) {
        self.uniforms.model = model;
    }

    pub fn set_view_proj_matrix(&mut self, view_proj: Mat4) {
        self.uniforms.view_proj = view_proj;
    }

    pub fn set_geometry_color(&mut self, color: Vec4) {
        self.uniforms.color = color;
    }

    pub fn set_time(&mut self, time: f32) {
        self.uniforms.time = time;
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.uniforms.intensity = intensity;
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.uniforms.speed = speed;
    }
}
