//! Flat surface colors

use serde::{Serialize, Deserialize};

/// Material properties for a drawn part
///
/// The harbor is flat shaded, so a material is just a base color that the
/// lighting pass modulates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base color as RGBA (each component 0.0-1.0)
    pub base_color: [f32; 4],
}

impl Default for Material {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Material {
    /// Create a new material with the given RGBA color
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            base_color: [r, g, b, a],
        }
    }

    /// Create a new opaque material with the given RGB color
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
    pub const BLUE: Self = Self::from_rgb(0.0, 0.0, 1.0);

    /// Weathered timber of the dock deck
    pub const DOCK_TIMBER: Self = Self::from_rgb(0.4, 0.31, 0.31);

    /// Slightly lighter timber of the boarding ramp
    pub const RAMP_TIMBER: Self = Self::from_rgb(0.5, 0.31, 0.31);

    /// Dark concrete of the pillars
    pub const CONCRETE: Self = Self::from_rgb(0.2, 0.2, 0.2);

    /// Off-white hull paint
    pub const HULL: Self = Self::from_rgb(0.85, 0.85, 0.8);

    /// RGB part of the base color
    pub fn rgb(&self) -> [f32; 3] {
        [self.base_color[0], self.base_color[1], self.base_color[2]]
    }
}
