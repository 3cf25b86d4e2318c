//! Stepped orbit camera controller
//!
//! Controls:
//! - W/S: Tilt the view down/up (rotation about X)
//! - A/D: Turn the harbor left/right (rotation about Y)
//! - +/-: Move the camera closer/further (numpad or main row)
//!
//! Every key press moves the camera one fixed step. Tilt and distance stop at
//! their limits; yaw wraps around freely.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Camera controller for handling input
pub struct CameraController {
    enabled: bool,

    // Configuration
    pub pitch_step: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
    pub yaw_step: f32,
    pub zoom_step: f32,
    pub distance_min: f32,
    pub distance_max: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            enabled: true,
            pitch_step: 5.0,
            pitch_min: 5.0,
            pitch_max: 60.0,
            yaw_step: 5.0,
            zoom_step: 700.0,
            distance_min: 700.0,
            distance_max: 6300.0,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true when the key is one of the camera keys and the controller
    /// is enabled, even if the camera was already at a limit.
    pub fn process_keyboard<C: CameraControl>(
        &mut self,
        camera: &mut C,
        key: KeyCode,
        state: ElementState,
    ) -> bool {
        if !self.enabled || state != ElementState::Pressed {
            return false;
        }

        match key {
            KeyCode::KeyW => {
                let room = self.pitch_max - camera.rotation_x();
                if room > 0.0 {
                    camera.pitch(self.pitch_step.min(room));
                }
                true
            }
            KeyCode::KeyS => {
                let room = camera.rotation_x() - self.pitch_min;
                if room > 0.0 {
                    camera.pitch(-self.pitch_step.min(room));
                }
                true
            }
            KeyCode::KeyA => {
                camera.yaw(-self.yaw_step);
                true
            }
            KeyCode::KeyD => {
                camera.yaw(self.yaw_step);
                true
            }
            KeyCode::NumpadAdd | KeyCode::Equal => {
                let room = camera.distance() - self.distance_min;
                if room > 0.0 {
                    camera.zoom(-self.zoom_step.min(room));
                }
                true
            }
            KeyCode::NumpadSubtract | KeyCode::Minus => {
                let room = self.distance_max - camera.distance();
                if room > 0.0 {
                    camera.zoom(self.zoom_step.min(room));
                }
                true
            }
            _ => false,
        }
    }

    /// Enable or disable camera keys
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::debug!("Camera controls {}", if enabled { "enabled" } else { "disabled" });
        }
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Builder: set tilt step and limits
    pub fn with_pitch(mut self, step: f32, min: f32, max: f32) -> Self {
        self.pitch_step = step;
        self.pitch_min = min;
        self.pitch_max = max;
        self
    }

    /// Builder: set yaw step
    pub fn with_yaw_step(mut self, step: f32) -> Self {
        self.yaw_step = step;
        self
    }

    /// Builder: set zoom step and distance limits
    pub fn with_zoom(mut self, step: f32, min: f32, max: f32) -> Self {
        self.zoom_step = step;
        self.distance_min = min;
        self.distance_max = max;
        self
    }
}

/// Trait for camera control
/// Allows the controller to work with different camera implementations
pub trait CameraControl {
    /// Change the tilt about X by `delta` degrees
    fn pitch(&mut self, delta: f32);
    /// Change the turn about Y by `delta` degrees
    fn yaw(&mut self, delta: f32);
    /// Change the distance from the pivot
    fn zoom(&mut self, delta: f32);
    fn rotation_x(&self) -> f32;
    fn rotation_y(&self) -> f32;
    fn distance(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockCamera {
        rotation_x: f32,
        rotation_y: f32,
        distance: f32,
    }

    impl MockCamera {
        fn new() -> Self {
            Self { rotation_x: 10.0, rotation_y: 0.0, distance: 3500.0 }
        }
    }

    impl CameraControl for MockCamera {
        fn pitch(&mut self, delta: f32) {
            self.rotation_x += delta;
        }
        fn yaw(&mut self, delta: f32) {
            self.rotation_y = (self.rotation_y + delta).rem_euclid(360.0);
        }
        fn zoom(&mut self, delta: f32) {
            self.distance += delta;
        }
        fn rotation_x(&self) -> f32 {
            self.rotation_x
        }
        fn rotation_y(&self) -> f32 {
            self.rotation_y
        }
        fn distance(&self) -> f32 {
            self.distance
        }
    }

    fn press(controller: &mut CameraController, camera: &mut MockCamera, key: KeyCode, times: usize) {
        for _ in 0..times {
            controller.process_keyboard(camera, key, ElementState::Pressed);
        }
    }

    #[test]
    fn test_pitch_steps() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::new();
        press(&mut controller, &mut camera, KeyCode::KeyW, 1);
        assert_eq!(camera.rotation_x, 15.0);
        press(&mut controller, &mut camera, KeyCode::KeyS, 1);
        assert_eq!(camera.rotation_x, 10.0);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::new();
        press(&mut controller, &mut camera, KeyCode::KeyW, 50);
        assert_eq!(camera.rotation_x, 60.0);
        press(&mut controller, &mut camera, KeyCode::KeyS, 50);
        assert_eq!(camera.rotation_x, 5.0);
    }

    #[test]
    fn test_pitch_off_grid_stops_at_limit() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::new();
        camera.rotation_x = 58.0;
        press(&mut controller, &mut camera, KeyCode::KeyW, 1);
        assert_eq!(camera.rotation_x, 60.0);
    }

    #[test]
    fn test_yaw_wraps() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::new();
        press(&mut controller, &mut camera, KeyCode::KeyA, 1);
        assert_eq!(camera.rotation_y, 355.0);
        press(&mut controller, &mut camera, KeyCode::KeyD, 2);
        assert_eq!(camera.rotation_y, 5.0);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::new();
        press(&mut controller, &mut camera, KeyCode::NumpadAdd, 10);
        assert_eq!(camera.distance, 700.0);
        press(&mut controller, &mut camera, KeyCode::Minus, 20);
        assert_eq!(camera.distance, 6300.0);
        press(&mut controller, &mut camera, KeyCode::Equal, 1);
        assert_eq!(camera.distance, 5600.0);
    }

    #[test]
    fn test_release_ignored() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::new();
        assert!(!controller.process_keyboard(&mut camera, KeyCode::KeyW, ElementState::Released));
        assert_eq!(camera.rotation_x, 10.0);
    }

    #[test]
    fn test_unmapped_key() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::new();
        assert!(!controller.process_keyboard(&mut camera, KeyCode::KeyQ, ElementState::Pressed));
    }

    #[test]
    fn test_disabled_ignores_keys() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::new();
        controller.set_enabled(false);
        assert!(!controller.process_keyboard(&mut camera, KeyCode::KeyW, ElementState::Pressed));
        assert_eq!(camera.rotation_x, 10.0);

        controller.set_enabled(true);
        assert!(controller.process_keyboard(&mut camera, KeyCode::KeyW, ElementState::Pressed));
        assert_eq!(camera.rotation_x, 15.0);
    }

    #[test]
    fn test_builders() {
        let controller = CameraController::new()
            .with_pitch(10.0, 0.0, 80.0)
            .with_yaw_step(15.0)
            .with_zoom(100.0, 200.0, 900.0);
        assert_eq!(controller.pitch_step, 10.0);
        assert_eq!(controller.pitch_max, 80.0);
        assert_eq!(controller.yaw_step, 15.0);
        assert_eq!(controller.distance_min, 200.0);
    }
}
