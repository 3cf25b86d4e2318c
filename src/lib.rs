//! Shipdock - harbor scene viewer
//!
//! The binary wires these modules to a winit event loop:
//!
//! - [`config`] - layered TOML + environment configuration
//! - [`input`] - key to action mapping
//! - [`scene`] - building the harbor world from config
//! - [`state`] - world, camera, and status driven by actions
//! - [`systems`] - window, GPU, and animation timing

pub mod config;
pub mod input;
pub mod scene;
pub mod state;
pub mod systems;
