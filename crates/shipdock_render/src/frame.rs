//! Frame planning
//!
//! [`build_frame`] turns the camera and the world into everything one frame
//! needs: matrices, lighting, an ordered draw list and the text overlay. It
//! touches no GPU state, so the whole scene composition is testable.

use shipdock_core::{ReflectorLight, Transform, World};
use shipdock_math::mat4::{self, Mat4};

use crate::camera::OrbitCamera;
use crate::pipeline::{DrawUniforms, SceneUniforms};

/// Which uploaded mesh a draw uses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// Unit cube, -1..1
    Cube,
    /// Unit cylinder along +Z, radius 1, height 1
    Cylinder,
    /// Unit quad in XZ, facing +Y
    Quad,
    /// The loaded boat model
    Boat,
}

/// One mesh drawn with one model matrix and color
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub label: &'static str,
    pub mesh: MeshKind,
    pub model: Mat4,
    pub color: [f32; 4],
}

impl DrawCall {
    fn new(label: &'static str, mesh: MeshKind, transform: Transform, color: [f32; 4]) -> Self {
        Self {
            label,
            mesh,
            model: transform.matrix(),
            color,
        }
    }
}

/// Window size in physical pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

/// A pixel rectangle, origin at the top-left of the window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Fixed text drawn over the scene
#[derive(Clone, Debug, PartialEq)]
pub struct TextOverlay {
    pub lines: Vec<String>,
    pub color: [f32; 4],
    /// Area the text is laid out in
    pub rect: PixelRect,
    /// Start of the first line as a fraction of `rect` (x from left, y from top)
    pub anchor: [f32; 2],
    /// Distance between baselines as a fraction of `rect.height`
    pub line_spacing: f32,
}

impl TextOverlay {
    /// Text anchored in the lower-right quarter of the viewport
    pub fn lower_right(lines: Vec<String>, color: [f32; 4], viewport: Viewport) -> Self {
        let width = viewport.width as f32;
        let height = viewport.height as f32;
        Self {
            lines,
            color,
            rect: PixelRect {
                x: width / 2.0,
                y: height / 2.0,
                width: width / 2.0,
                height: height / 2.0,
            },
            // Quarter viewport spans 23 text units across, 20 down; text
            // starts at unit 10 from the left and the middle row.
            anchor: [10.0 / 23.0, 0.5],
            line_spacing: 0.1,
        }
    }
}

/// Inputs to [`build_frame`] that come from configuration
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSettings {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Direction toward the fill light
    pub light_dir: [f32; 3],
    pub ambient_strength: f32,
    pub diffuse_strength: f32,
    pub reflector_strength: f32,
    pub overlay_lines: Vec<String>,
    pub overlay_color: [f32; 4],
    pub overlay_enabled: bool,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 1.0,
            far: 20000.0,
            light_dir: [0.3, 1.0, 0.5],
            ambient_strength: 0.35,
            diffuse_strength: 0.5,
            reflector_strength: 0.6,
            overlay_lines: Vec::new(),
            overlay_color: [1.0, 0.0, 0.0, 1.0],
            overlay_enabled: true,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    pub clear_color: [f32; 4],
    pub view: Mat4,
    pub projection: Mat4,
    pub reflector: ReflectorLight,
    pub light_dir: [f32; 3],
    pub ambient_strength: f32,
    pub diffuse_strength: f32,
    pub reflector_strength: f32,
    /// Boat, port, ramp, pillars, water, in that order
    pub draws: Vec<DrawCall>,
    pub overlay: Option<TextOverlay>,
}

impl FramePlan {
    /// Per-frame uniforms for the scene pass
    pub fn scene_uniforms(&self) -> SceneUniforms {
        SceneUniforms {
            view_matrix: self.view,
            projection_matrix: self.projection,
            light_dir: self.light_dir,
            ambient_strength: self.ambient_strength,
            reflector_position: self.reflector.position.to_array(),
            reflector_cos_cutoff: self.reflector.cos_cutoff(),
            reflector_direction: self.reflector.direction.normalized().to_array(),
            diffuse_strength: self.diffuse_strength,
            reflector_color: self.reflector.color,
            reflector_strength: self.reflector_strength,
        }
    }

    /// Per-draw uniforms, one entry per draw call
    pub fn draw_uniforms(&self) -> Vec<DrawUniforms> {
        self.draws
            .iter()
            .map(|d| DrawUniforms {
                model_matrix: d.model,
                normal_matrix: mat4::normal_matrix(d.model),
                color: d.color,
            })
            .collect()
    }
}

/// Compose one frame of the harbor
pub fn build_frame(
    camera: &OrbitCamera,
    world: &World,
    viewport: Viewport,
    settings: &FrameSettings,
) -> FramePlan {
    let layout = world.layout();
    let mut draws = Vec::with_capacity(4 + layout.pillar_positions().len());

    draws.push(DrawCall::new(
        "boat",
        MeshKind::Boat,
        world.boat_transform(),
        layout.boat.material.base_color,
    ));
    draws.push(DrawCall::new(
        "port",
        MeshKind::Cube,
        layout.port_transform(),
        layout.port.material.base_color,
    ));
    draws.push(DrawCall::new(
        "ramp",
        MeshKind::Cube,
        layout.ramp_transform(world.ramp_angle()),
        layout.ramp.material.base_color,
    ));
    for (x, z) in layout.pillar_positions() {
        draws.push(DrawCall::new(
            "pillar",
            MeshKind::Cylinder,
            layout.pillars.transform(x, z, world.pillar_offset()),
            layout.pillars.material.base_color,
        ));
    }
    draws.push(DrawCall::new(
        "water",
        MeshKind::Quad,
        layout.water.transform(),
        layout.water.material.base_color,
    ));

    let overlay = (settings.overlay_enabled && !settings.overlay_lines.is_empty()).then(|| {
        TextOverlay::lower_right(settings.overlay_lines.clone(), settings.overlay_color, viewport)
    });

    FramePlan {
        clear_color: layout.clear_color,
        view: camera.view_matrix(),
        projection: mat4::perspective(
            settings.fov_degrees.to_radians(),
            viewport.aspect_ratio(),
            settings.near,
            settings.far,
        ),
        reflector: *world.light(),
        light_dir: settings.light_dir,
        ambient_strength: settings.ambient_strength,
        diffuse_strength: settings.diffuse_strength,
        reflector_strength: settings.reflector_strength,
        draws,
        overlay,
    }
}
