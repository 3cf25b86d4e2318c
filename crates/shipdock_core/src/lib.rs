//! Core types for the harbor viewer
//!
//! This crate holds every piece of scene state and the logic that mutates it:
//!
//! - [`Transform`] - Model matrix builder in immediate-mode call order
//! - [`Material`] - Flat color of a drawn part
//! - [`HarborLayout`] - The fixed dock, ramp, pillar, and water constants
//! - [`BoatModel`] - The externally loaded boat mesh
//! - [`AnimationSequencer`] - The scripted docking/sinking animation
//! - [`ControlFlags`] - Which live controls currently accept input
//! - [`ReflectorLight`] - The colored spot light over the boat
//! - [`World`] - Owns all of the above

mod transform;
mod material;
mod layout;
mod asset_error;
mod model;
mod animation;
mod controls;
mod lighting;
mod world;

pub use transform::Transform;
pub use material::Material;
pub use layout::{HarborLayout, PartLayout, PillarLayout, WaterLayout, LayoutError};
pub use asset_error::AssetError;
pub use model::BoatModel;
pub use animation::{
    advance, AnimationEvent, AnimationPhase, AnimationSequencer, AnimationState, AnimationStep,
    BoatPose,
};
pub use controls::{ControlFlags, ControlRanges, LightPalette};
pub use lighting::ReflectorLight;
pub use world::World;

// Re-export commonly used types from shipdock_math for convenience
pub use shipdock_math::{Vec3, Mat4, MeshVertex, TriangleMesh};
