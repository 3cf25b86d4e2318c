//! Rendering pipeline components
//!
//! The scene pass draws the lit harbor with depth testing; the overlay pass
//! draws flat 2D quads on top of it.

pub mod types;
pub mod scene_pipeline;
pub mod overlay_pipeline;

// Re-export types
pub use types::{SceneUniforms, DrawUniforms, OverlayVertex, align_to};

// Re-export pipelines
pub use scene_pipeline::ScenePipeline;
pub use overlay_pipeline::OverlayPipeline;
