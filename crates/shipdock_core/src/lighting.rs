//! Reflector light

use shipdock_math::Vec3;

/// A colored spot light hanging above the dock
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReflectorLight {
    /// RGB, each channel in 0.0-1.0
    pub color: [f32; 3],
    pub position: Vec3,
    /// Normalized aim direction
    pub direction: Vec3,
    /// Half-angle of the cone in degrees
    pub cutoff_degrees: f32,
}

impl Default for ReflectorLight {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            position: Vec3::new(0.0, 900.0, 0.0),
            direction: -Vec3::Y,
            cutoff_degrees: 30.0,
        }
    }
}

impl ReflectorLight {
    /// Set the color from 0-255 channels
    pub fn set_color_rgb8(&mut self, r: u8, g: u8, b: u8) {
        self.color = [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0];
    }

    /// Set the color, clamping each channel to 0.0-1.0
    pub fn set_color(&mut self, color: [f32; 3]) {
        self.color = color.map(|c| c.clamp(0.0, 1.0));
    }

    /// Cosine of the cone half-angle, as the shader compares it
    pub fn cos_cutoff(&self) -> f32 {
        self.cutoff_degrees.to_radians().cos()
    }
}
