//! User-adjustable demo parameters.
//!
//! Every setter clamps its value into the parameter's range, so a
//! [`Controls`] value is always valid to render with.

use std::ops::RangeInclusive;

use meshforge_core::mesh::generators::segment_count;

/// Allowed icosphere subdivision levels.
pub const TESSELLATION_RANGE: RangeInclusive<u32> = 0..=8;
/// Allowed color blend factors (0 = red, 1 = blue).
pub const COLOR_RANGE: RangeInclusive<f32> = 0.0..=1.0;
/// Allowed effect intensities.
pub const INTENSITY_RANGE: RangeInclusive<f32> = 0.0..=4.0;
/// Allowed animation speed multipliers.
pub const SPEED_RANGE: RangeInclusive<f32> = 0.1..=2.0;

const DEFAULT_TESSELLATIONS: u32 = 5;
const DEFAULT_COLOR: f32 = 0.0;
const DEFAULT_INTENSITY: f32 = 1.2;
const DEFAULT_SPEED: f32 = 1.0;

/// Demo parameters driving mesh generation and shader uniforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    tessellations: u32,
    color: f32,
    intensity: f32,
    speed: f32,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            tessellations: DEFAULT_TESSELLATIONS,
            color: DEFAULT_COLOR,
            intensity: DEFAULT_INTENSITY,
            speed: DEFAULT_SPEED,
        }
    }
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every parameter to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn tessellations(&self) -> u32 {
        self.tessellations
    }

    pub fn color(&self) -> f32 {
        self.color
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_tessellations(&mut self, tessellations: u32) {
        self.tessellations = tessellations.clamp(
            *TESSELLATION_RANGE.start(),
            *TESSELLATION_RANGE.end(),
        );
    }

    /// Set the subdivision level from a slider position.
    ///
    /// The value is floored before clamping, so `4.9` selects level 4.
    pub fn set_tessellations_from_slider(&mut self, value: f32) {
        self.set_tessellations(segment_count(value, *TESSELLATION_RANGE.start()));
    }

    pub fn set_color(&mut self, color: f32) {
        self.color = clamp_to(color, &COLOR_RANGE);
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = clamp_to(intensity, &INTENSITY_RANGE);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = clamp_to(speed, &SPEED_RANGE);
    }
}

/// Clamp into `range`; NaN maps to the range start.
fn clamp_to(value: f32, range: &RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        *range.start()
    } else {
        value.clamp(*range.start(), *range.end())
    }
}
