//! Harbor Rendering Library
//!
//! This crate provides the wgpu-based rendering of the harbor scene.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::OrbitCamera`] - Camera orbiting the harbor at a fixed pivot
//! - [`frame::build_frame`] - Turns camera + world into an ordered list of draws
//! - [`renderable::GpuMeshes`] - Vertex buffers for the primitives and the boat
//! - [`pipeline::ScenePipeline`] - Lit 3D pass with a colored reflector
//! - [`pipeline::OverlayPipeline`] - 2D text overlay
//!
//! [`build_frame`](frame::build_frame) is pure and holds every placement
//! decision; the GPU side only replays its draw list.

pub mod context;
pub mod camera;
pub mod frame;
pub mod overlay;
pub mod pipeline;
pub mod renderable;

pub use camera::OrbitCamera;
pub use frame::{build_frame, DrawCall, FramePlan, FrameSettings, MeshKind, TextOverlay, Viewport};
pub use renderable::GpuMeshes;

// Re-export core types for convenience
pub use shipdock_core::{World, Material, Transform, ReflectorLight};
