//! Harbor layout
//!
//! Every placement constant of the fixed scene lives in [`HarborLayout`].
//! The defaults reproduce the stock harbor; a RON file can override any part
//! of it.

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use std::io;

use crate::{Material, Transform};

/// Placement of a unit primitive: `translate · scale`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartLayout {
    pub translate: [f32; 3],
    pub scale: [f32; 3],
    pub material: Material,
}

impl PartLayout {
    pub fn new(translate: [f32; 3], scale: [f32; 3], material: Material) -> Self {
        Self {
            translate,
            scale,
            material,
        }
    }

    /// The part's model transform with no extra rotation
    pub fn transform(&self) -> Transform {
        let [tx, ty, tz] = self.translate;
        let [sx, sy, sz] = self.scale;
        Transform::identity().translate(tx, ty, tz).scale(sx, sy, sz)
    }
}

/// The flat water plane
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaterLayout {
    /// Extent along X
    pub width: f32,
    /// Extent along Z
    pub length: f32,
    /// Height of the surface
    pub height: f32,
    pub material: Material,
}

impl Default for WaterLayout {
    fn default() -> Self {
        Self {
            width: 3000.0,
            length: 2000.0,
            height: 20.0,
            material: Material::BLUE,
        }
    }
}

impl WaterLayout {
    /// Transform for a unit quad (XZ, -0.5..0.5) covering the water
    pub fn transform(&self) -> Transform {
        Transform::identity()
            .translate(0.0, self.height, 0.0)
            .scale(self.width, 1.0, self.length)
    }
}

/// Two rows of pillars under the dock
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PillarLayout {
    pub x_positions: Vec<f32>,
    pub z_positions: Vec<f32>,
    /// Radius and height scale: (radius, height, radius)
    pub scale: [f32; 3],
    /// Rotation about X standing the Z-aligned cylinder upright
    pub stand_up_degrees: f32,
    pub material: Material,
}

impl Default for PillarLayout {
    fn default() -> Self {
        Self {
            x_positions: vec![200.0, -200.0, -600.0, -1000.0, -1400.0],
            z_positions: vec![230.0, 370.0],
            scale: [20.0, 170.0, 20.0],
            stand_up_degrees: -90.0,
            material: Material::CONCRETE,
        }
    }
}

impl PillarLayout {
    /// Transform of one pillar lifted by `offset`
    ///
    /// The unit cylinder runs along +Z; after the stand-up rotation its axis is
    /// +Y, so the Y scale (second component) sets the height.
    pub fn transform(&self, x: f32, z: f32, offset: f32) -> Transform {
        let [sx, sy, sz] = self.scale;
        Transform::identity()
            .translate(x, offset, z)
            .scale(sx, sy, sz)
            .rotate_x(self.stand_up_degrees)
    }
}

/// The complete set of harbor constants
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarborLayout {
    pub water: WaterLayout,
    /// The dock deck (unit cube)
    pub port: PartLayout,
    /// The boarding ramp (unit cube, tilted by the live ramp angle)
    pub ramp: PartLayout,
    pub pillars: PillarLayout,
    /// Placement applied to the loaded boat mesh before its animation pose
    pub boat: PartLayout,
    /// Ramp angle the scene starts with, in degrees
    pub initial_ramp_angle: f32,
    /// Background color (RGBA)
    pub clear_color: [f32; 4],
}

impl Default for HarborLayout {
    fn default() -> Self {
        Self {
            water: WaterLayout::default(),
            port: PartLayout::new([-600.0, 120.0, 300.0], [900.0, 15.0, 60.0], Material::DOCK_TIMBER),
            ramp: PartLayout::new([0.0, 180.0, 160.0], [30.0, 8.0, 90.0], Material::RAMP_TIMBER),
            pillars: PillarLayout::default(),
            boat: PartLayout::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], Material::HULL),
            initial_ramp_angle: 10.0,
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl HarborLayout {
    /// Load a layout from a RON file
    ///
    /// Missing sections fall back to their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LayoutError> {
        let contents = fs::read_to_string(path)?;
        let layout = ron::from_str(&contents)?;
        Ok(layout)
    }

    /// Every (x, z) pillar position, rows of X for each Z
    pub fn pillar_positions(&self) -> Vec<(f32, f32)> {
        self.pillars
            .x_positions
            .iter()
            .flat_map(|&x| self.pillars.z_positions.iter().map(move |&z| (x, z)))
            .collect()
    }

    /// Dock deck transform
    pub fn port_transform(&self) -> Transform {
        self.port.transform()
    }

    /// Ramp transform for a given tilt
    ///
    /// The tilt is applied about the world X axis before the ramp is moved
    /// into place, so the whole ramp swings around the origin.
    pub fn ramp_transform(&self, angle_degrees: f32) -> Transform {
        Transform::identity()
            .rotate_x(angle_degrees)
            .then(&self.ramp.transform())
    }

    /// Boat transform for an animation pose
    pub fn boat_transform(&self, pose: &Transform) -> Transform {
        let [tx, ty, tz] = self.boat.translate;
        let [sx, sy, sz] = self.boat.scale;
        Transform::identity()
            .translate(tx, ty, tz)
            .then(pose)
            .scale(sx, sy, sz)
    }
}

/// Error loading a harbor layout
#[derive(Debug)]
pub enum LayoutError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for LayoutError {
    fn from(e: io::Error) -> Self {
        LayoutError::Io(e)
    }
}

impl From<ron::error::SpannedError> for LayoutError {
    fn from(e: ron::error::SpannedError) -> Self {
        LayoutError::Parse(e)
    }
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::Io(e) => write!(f, "IO error: {}", e),
            LayoutError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;

    const EPSILON: f32 = 0.01;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_pillar_positions() {
        let layout = HarborLayout::default();
        let positions = layout.pillar_positions();
        assert_eq!(positions.len(), 10);
        assert_eq!(positions[0], (200.0, 230.0));
        assert_eq!(positions[1], (200.0, 370.0));
        assert_eq!(positions[9], (-1400.0, 370.0));
    }

    #[test]
    fn test_port_spans_dock() {
        let layout = HarborLayout::default();
        let t = layout.port_transform();
        let min = t.transform_point(Vec3::new(-1.0, -1.0, -1.0));
        let max = t.transform_point(Vec3::new(1.0, 1.0, 1.0));
        assert!(vec_approx_eq(min, Vec3::new(-1500.0, 105.0, 240.0)), "got {:?}", min);
        assert!(vec_approx_eq(max, Vec3::new(300.0, 135.0, 360.0)), "got {:?}", max);
    }

    #[test]
    fn test_pillar_stands_up() {
        let layout = HarborLayout::default();
        let t = layout.pillars.transform(200.0, 230.0, 0.0);
        let base = t.transform_point(Vec3::ZERO);
        let top = t.transform_point(Vec3::new(0.0, 0.0, 1.0));
        assert!(vec_approx_eq(base, Vec3::new(200.0, 0.0, 230.0)));
        assert!(vec_approx_eq(top, Vec3::new(200.0, 170.0, 230.0)), "got {:?}", top);
    }

    #[test]
    fn test_pillar_offset_lifts() {
        let layout = HarborLayout::default();
        let t = layout.pillars.transform(-600.0, 370.0, 40.0);
        let base = t.transform_point(Vec3::ZERO);
        assert!(vec_approx_eq(base, Vec3::new(-600.0, 40.0, 370.0)));
    }

    #[test]
    fn test_ramp_zero_angle() {
        let layout = HarborLayout::default();
        let center = layout.ramp_transform(0.0).transform_point(Vec3::ZERO);
        assert!(vec_approx_eq(center, Vec3::new(0.0, 180.0, 160.0)));
    }

    #[test]
    fn test_ramp_tilt_swings_about_origin() {
        let layout = HarborLayout::default();
        let center = layout.ramp_transform(90.0).transform_point(Vec3::ZERO);
        // Rotating (0, 180, 160) by 90 degrees about X: y -> -z, z -> y
        assert!(vec_approx_eq(center, Vec3::new(0.0, -160.0, 180.0)), "got {:?}", center);
    }

    #[test]
    fn test_water_quad() {
        let layout = HarborLayout::default();
        let corner = layout.water.transform().transform_point(Vec3::new(0.5, 0.0, 0.5));
        assert!(vec_approx_eq(corner, Vec3::new(1500.0, 20.0, 1000.0)));
    }

    #[test]
    fn test_boat_transform_identity_pose() {
        let layout = HarborLayout::default();
        let p = Vec3::new(10.0, 20.0, 30.0);
        let t = layout.boat_transform(&Transform::identity());
        assert!(vec_approx_eq(t.transform_point(p), p));
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let layout: HarborLayout = ron::from_str("(initial_ramp_angle: 20.0)").unwrap();
        assert_eq!(layout.initial_ramp_angle, 20.0);
        assert_eq!(layout.water, WaterLayout::default());
        assert_eq!(layout.pillar_positions().len(), 10);
    }

    #[test]
    fn test_load_missing_file() {
        let result = HarborLayout::load("/nonexistent/harbor.ron");
        assert!(matches!(result, Err(LayoutError::Io(_))));
    }

    #[test]
    fn test_parse_error() {
        let result: Result<HarborLayout, _> = ron::from_str("(water: oops").map_err(LayoutError::from);
        assert!(matches!(result, Err(LayoutError::Parse(_))));
        let msg = format!("{}", result.unwrap_err());
        assert!(msg.contains("Parse error"));
    }
}
