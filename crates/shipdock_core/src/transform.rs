//! Model transform builder
//!
//! A [`Transform`] accumulates translate/rotate/scale calls the way an
//! immediate-mode matrix stack does: every call post-multiplies, so the last
//! call is the first one applied to a vertex.
//!
//! ```
//! use shipdock_core::{Transform, Vec3};
//! // Stand a unit cylinder up, make it 170 tall, then move it into place
//! let pillar = Transform::identity()
//!     .translate(200.0, 0.0, 230.0)
//!     .scale(20.0, 170.0, 20.0)
//!     .rotate_x(-90.0);
//! let top = pillar.transform_point(Vec3::new(0.0, 0.0, 1.0));
//! assert!((top.y - 170.0).abs() < 1e-3);
//! ```

use shipdock_math::mat4::{self, Mat4};
use shipdock_math::Vec3;

/// A 3D model transform backed by a column-major matrix
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            matrix: mat4::IDENTITY,
        }
    }

    /// Wrap an existing matrix
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// Append a translation
    pub fn translate(self, x: f32, y: f32, z: f32) -> Self {
        self.then(&Self::from_matrix(mat4::translation(x, y, z)))
    }

    /// Append a rotation about X (degrees)
    pub fn rotate_x(self, degrees: f32) -> Self {
        self.then(&Self::from_matrix(mat4::rotation_x(degrees)))
    }

    /// Append a rotation about Y (degrees)
    pub fn rotate_y(self, degrees: f32) -> Self {
        self.then(&Self::from_matrix(mat4::rotation_y(degrees)))
    }

    /// Append a rotation about Z (degrees)
    pub fn rotate_z(self, degrees: f32) -> Self {
        self.then(&Self::from_matrix(mat4::rotation_z(degrees)))
    }

    /// Append a non-uniform scale
    pub fn scale(self, x: f32, y: f32, z: f32) -> Self {
        self.then(&Self::from_matrix(mat4::scaling(x, y, z)))
    }

    /// Append another transform: result = self * other
    ///
    /// `other` is applied to vertices first.
    pub fn then(self, other: &Self) -> Self {
        Self {
            matrix: mat4::mul(self.matrix, other.matrix),
        }
    }

    /// The accumulated matrix
    #[inline]
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Transform a point from local space to world space
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        mat4::transform_point(self.matrix, p)
    }

    /// Transform a direction (ignores translation)
    pub fn transform_direction(&self, d: Vec3) -> Vec3 {
        mat4::transform_direction(self.matrix, d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity_transform() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(Transform::identity().transform_point(p), p));
    }

    #[test]
    fn test_translation() {
        let t = Transform::identity().translate(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(t.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_last_call_applies_first() {
        // translate then scale: the scale hits the vertex before the translation
        let t = Transform::identity().translate(10.0, 0.0, 0.0).scale(2.0, 2.0, 2.0);
        assert!(vec_approx_eq(t.transform_point(Vec3::X), Vec3::new(12.0, 0.0, 0.0)));

        // scale then translate: the translation is scaled as well
        let t = Transform::identity().scale(2.0, 2.0, 2.0).translate(10.0, 0.0, 0.0);
        assert!(vec_approx_eq(t.transform_point(Vec3::X), Vec3::new(22.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rotate_then_translate_orbits() {
        // Rotating before translating swings the translated offset around the origin
        let t = Transform::identity().rotate_y(90.0).translate(0.0, 0.0, 5.0);
        assert!(vec_approx_eq(t.transform_point(Vec3::ZERO), Vec3::new(5.0, 0.0, 0.0)));
    }

    #[test]
    fn test_cube_scaled_into_dock() {
        let dock = Transform::identity()
            .translate(-600.0, 120.0, 300.0)
            .scale(900.0, 15.0, 60.0);
        let corner = dock.transform_point(Vec3::new(1.0, 1.0, 1.0));
        assert!(vec_approx_eq(corner, Vec3::new(300.0, 135.0, 360.0)));
    }

    #[test]
    fn test_direction_ignores_translation() {
        let t = Transform::identity().translate(100.0, 100.0, 100.0);
        assert!(vec_approx_eq(t.transform_direction(Vec3::X), Vec3::X));
    }

    #[test]
    fn test_then() {
        let a = Transform::identity().translate(1.0, 0.0, 0.0);
        let b = Transform::identity().translate(0.0, 2.0, 0.0);
        let composed = a.then(&b);
        assert!(vec_approx_eq(composed.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 0.0)));
    }
}
