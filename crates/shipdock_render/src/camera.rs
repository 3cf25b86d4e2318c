//! Orbit camera
//!
//! The camera never moves on its own: the whole harbor is pushed away from
//! the eye by `distance`, tilted about X, then turned about Y. The eye always
//! looks at the world origin.

use shipdock_input::CameraControl;
use shipdock_math::mat4::{self, Mat4};

/// Camera orbiting the world origin
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Tilt about X in degrees (positive looks down on the harbor)
    pub rotation_x: f32,
    /// Turn about Y in degrees, kept in [0, 360)
    pub rotation_y: f32,
    /// Distance from the eye to the origin
    pub distance: f32,

    start: (f32, f32, f32),
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(10.0, 0.0, 3500.0)
    }
}

impl OrbitCamera {
    pub fn new(rotation_x: f32, rotation_y: f32, distance: f32) -> Self {
        let rotation_y = rotation_y.rem_euclid(360.0);
        Self {
            rotation_x,
            rotation_y,
            distance,
            start: (rotation_x, rotation_y, distance),
        }
    }

    /// Return to the starting pose
    pub fn reset(&mut self) {
        let (rx, ry, d) = self.start;
        self.rotation_x = rx;
        self.rotation_y = ry;
        self.distance = d;
    }

    /// World-to-view matrix: `T(0, 0, -distance) · Rx · Ry`
    pub fn view_matrix(&self) -> Mat4 {
        let tilt_and_turn = mat4::mul(
            mat4::rotation_x(self.rotation_x),
            mat4::rotation_y(self.rotation_y),
        );
        mat4::mul(mat4::translation(0.0, 0.0, -self.distance), tilt_and_turn)
    }
}

impl CameraControl for OrbitCamera {
    fn pitch(&mut self, delta: f32) {
        self.rotation_x += delta;
    }

    fn yaw(&mut self, delta: f32) {
        self.rotation_y = (self.rotation_y + delta).rem_euclid(360.0);
    }

    fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance + delta).max(0.0);
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

#[cfg(test)]
mod tests {
    use super::*;
    use shipdock_input::CameraController;
    use shipdock_math::Vec3;
    use winit::event::ElementState;
    use winit::keyboard::KeyCode;

    const EPSILON: f32 = 0.01;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    /// Eye position in world space: the inverse view rotation applied to the
    /// view-space eye offset
    fn eye_position(camera: &OrbitCamera) -> Vec3 {
        let rotation = mat4::mul(
            mat4::rotation_x(camera.rotation_x),
            mat4::rotation_y(camera.rotation_y),
        );
        mat4::transform_direction(mat4::transpose(rotation), Vec3::new(0.0, 0.0, camera.distance))
    }

    #[test]
    fn test_default_pose() {
        let camera = OrbitCamera::default();
        assert_eq!(camera.rotation_x, 10.0);
        assert_eq!(camera.rotation_y, 0.0);
        assert_eq!(camera.distance, 3500.0);
    }

    #[test]
    fn test_origin_lands_in_front_of_eye() {
        let camera = OrbitCamera::new(30.0, 45.0, 1000.0);
        let p = mat4::transform_point(camera.view_matrix(), Vec3::ZERO);
        assert!(vec_approx_eq(p, Vec3::new(0.0, 0.0, -1000.0)), "got {:?}", p);
    }

    #[test]
    fn test_eye_maps_to_view_origin() {
        let camera = OrbitCamera::new(25.0, 120.0, 2000.0);
        let eye = eye_position(&camera);
        let p = mat4::transform_point(camera.view_matrix(), eye);
        assert!(vec_approx_eq(p, Vec3::ZERO), "got {:?}", p);
    }

    #[test]
    fn test_positive_tilt_looks_down() {
        let camera = OrbitCamera::new(10.0, 0.0, 3500.0);
        assert!(eye_position(&camera).y > 0.0);
    }

    #[test]
    fn test_yaw_wraps() {
        let mut camera = OrbitCamera::default();
        camera.yaw(-5.0);
        assert_eq!(camera.rotation_y, 355.0);
        camera.yaw(10.0);
        assert_eq!(camera.rotation_y, 5.0);
    }

    #[test]
    fn test_reset() {
        let mut camera = OrbitCamera::default();
        camera.pitch(20.0);
        camera.zoom(-700.0);
        camera.reset();
        assert_eq!(camera, OrbitCamera::default());
    }

    #[test]
    fn test_controller_clamps_real_camera() {
        let mut camera = OrbitCamera::default();
        let mut controller = CameraController::new();
        for _ in 0..20 {
            controller.process_keyboard(&mut camera, KeyCode::KeyW, ElementState::Pressed);
            controller.process_keyboard(&mut camera, KeyCode::NumpadAdd, ElementState::Pressed);
        }
        assert_eq!(camera.rotation_x, 60.0);
        assert_eq!(camera.distance, 700.0);

        for _ in 0..20 {
            controller.process_keyboard(&mut camera, KeyCode::KeyS, ElementState::Pressed);
            controller.process_keyboard(&mut camera, KeyCode::NumpadSubtract, ElementState::Pressed);
        }
        assert_eq!(camera.rotation_x, 5.0);
        assert_eq!(camera.distance, 6300.0);
    }
}
