//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like StartAnimation, Exit, etc.
//! Orbit keys (WASD, +/-) are NOT mapped here - they go directly to CameraController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not camera orbiting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Run the docking and sinking sequence (C)
    StartAnimation,
    /// Reload the boat model from the configured path (F2)
    ReloadModel,
    /// Tilt the ramp up one step (ArrowUp)
    RampUp,
    /// Tilt the ramp down one step (ArrowDown)
    RampDown,
    /// Raise the pillars one step (PageUp)
    PillarsUp,
    /// Lower the pillars one step (PageDown)
    PillarsDown,
    /// Next reflector color (L)
    CycleLight,
    /// Return the camera to its starting pose (R)
    ResetCamera,
    /// Toggle fullscreen mode (F11)
    ToggleFullscreen,
}

/// Maps raw input events to semantic actions
///
/// Orbit keys are NOT mapped here - they go directly to the
/// CameraController. This mapper handles "special" keys only.
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `None` for releases, orbit keys, and every key while the
    /// animation runs.
    pub fn map_keyboard(key: KeyCode, state: ElementState, animating: bool) -> Option<InputAction> {
        if state != ElementState::Pressed || animating {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyC => Some(InputAction::StartAnimation),
            KeyCode::F2 => Some(InputAction::ReloadModel),
            KeyCode::ArrowUp => Some(InputAction::RampUp),
            KeyCode::ArrowDown => Some(InputAction::RampDown),
            KeyCode::PageUp => Some(InputAction::PillarsUp),
            KeyCode::PageDown => Some(InputAction::PillarsDown),
            KeyCode::KeyL => Some(InputAction::CycleLight),
            KeyCode::KeyR => Some(InputAction::ResetCamera),
            KeyCode::F11 => Some(InputAction::ToggleFullscreen),
            _ => None,
        }
    }
}
