//! GPU-compatible data types for the harbor pipelines
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// Per-frame uniforms for the scene pass
/// Layout: 192 bytes total (must match scene.wgsl SceneUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    /// View matrix (64 bytes)
    pub view_matrix: [[f32; 4]; 4],
    /// Projection matrix (64 bytes)
    pub projection_matrix: [[f32; 4]; 4],
    /// Direction toward the fill light + ambient strength (16 bytes)
    pub light_dir: [f32; 3],
    pub ambient_strength: f32,
    /// Reflector position + cosine of its cone half-angle (16 bytes)
    pub reflector_position: [f32; 3],
    pub reflector_cos_cutoff: f32,
    /// Reflector aim + diffuse strength of the fill light (16 bytes)
    pub reflector_direction: [f32; 3],
    pub diffuse_strength: f32,
    /// Reflector color + strength (16 bytes)
    pub reflector_color: [f32; 3],
    pub reflector_strength: f32,
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_matrix: shipdock_math::mat4::IDENTITY,
            projection_matrix: shipdock_math::mat4::IDENTITY,
            light_dir: [0.3, 1.0, 0.5],
            ambient_strength: 0.35,
            reflector_position: [0.0, 900.0, 0.0],
            reflector_cos_cutoff: 0.866,
            reflector_direction: [0.0, -1.0, 0.0],
            diffuse_strength: 0.5,
            reflector_color: [1.0, 1.0, 1.0],
            reflector_strength: 0.6,
        }
    }
}

/// Per-draw uniforms, bound with a dynamic offset
/// Layout: 144 bytes (must match scene.wgsl DrawUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct DrawUniforms {
    pub model_matrix: [[f32; 4]; 4],
    /// Normal transform (inverse transpose of the model rotation/scale)
    pub normal_matrix: [[f32; 4]; 4],
    /// RGBA base color
    pub color: [f32; 4],
}

impl Default for DrawUniforms {
    fn default() -> Self {
        Self {
            model_matrix: shipdock_math::mat4::IDENTITY,
            normal_matrix: shipdock_math::mat4::IDENTITY,
            color: [1.0; 4],
        }
    }
}

/// A vertex of the 2D overlay, already in clip space
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct OverlayVertex {
    /// Position in normalized device coordinates
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Round `size` up to the next multiple of `alignment`
pub fn align_to(size: u64, alignment: u64) -> u64 {
    let alignment = alignment.max(1);
    size.div_ceil(alignment) * alignment
}
