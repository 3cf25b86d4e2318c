//! Orbit camera input
//!
//! This crate maps keyboard input to the stepped orbit controls of the
//! harbor view: pitch, yaw, and zoom toward a fixed pivot.

mod camera_controller;

pub use camera_controller::{CameraController, CameraControl};
