//! 4x4 Matrix utilities for 3D transformations
//!
//! Matrices are column-major (`m[col][row]`), the layout WGSL expects for
//! `mat4x4<f32>` uniforms. Rotation helpers take degrees, matching the
//! scene constants.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Translation matrix
pub fn translation(x: f32, y: f32, z: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = x;
    m[3][1] = y;
    m[3][2] = z;
    m
}

/// Non-uniform scale matrix
pub fn scaling(x: f32, y: f32, z: f32) -> Mat4 {
    let mut m = IDENTITY;
    m[0][0] = x;
    m[1][1] = y;
    m[2][2] = z;
    m
}

/// Right-handed rotation about the X axis
pub fn rotation_x(degrees: f32) -> Mat4 {
    let (sn, cs) = degrees.to_radians().sin_cos();
    let mut m = IDENTITY;
    m[1][1] = cs;
    m[1][2] = sn;
    m[2][1] = -sn;
    m[2][2] = cs;
    m
}

/// Right-handed rotation about the Y axis
pub fn rotation_y(degrees: f32) -> Mat4 {
    let (sn, cs) = degrees.to_radians().sin_cos();
    let mut m = IDENTITY;
    m[0][0] = cs;
    m[0][2] = -sn;
    m[2][0] = sn;
    m[2][2] = cs;
    m
}

/// Right-handed rotation about the Z axis
pub fn rotation_z(degrees: f32) -> Mat4 {
    let (sn, cs) = degrees.to_radians().sin_cos();
    let mut m = IDENTITY;
    m[0][0] = cs;
    m[0][1] = sn;
    m[1][0] = -sn;
    m[1][1] = cs;
    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a point (w = 1) by a 4x4 matrix
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

/// Transform a direction (w = 0) by a 4x4 matrix
pub fn transform_direction(m: Mat4, d: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * d.x + m[1][0] * d.y + m[2][0] * d.z,
        m[0][1] * d.x + m[1][1] * d.y + m[2][1] * d.z,
        m[0][2] * d.x + m[1][2] * d.y + m[2][2] * d.z,
    )
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

/// Matrix for transforming normals by `m`
///
/// This is the inverse transpose of the upper 3x3 block up to a positive
/// scale factor, so normals must be renormalized after use.
pub fn normal_matrix(m: Mat4) -> Mat4 {
    let c0 = Vec3::new(m[0][0], m[0][1], m[0][2]);
    let c1 = Vec3::new(m[1][0], m[1][1], m[1][2]);
    let c2 = Vec3::new(m[2][0], m[2][1], m[2][2]);

    let n0 = c1.cross(c2);
    let n1 = c2.cross(c0);
    let n2 = c0.cross(c1);
    let sign = if c0.dot(n0) < 0.0 { -1.0 } else { 1.0 };

    [
        [n0.x * sign, n0.y * sign, n0.z * sign, 0.0],
        [n1.x * sign, n1.y * sign, n1.z * sign, 0.0],
        [n2.x * sign, n2.y * sign, n2.z * sign, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Right-handed perspective projection with a 0..1 depth range
///
/// The camera looks down -Z; `near` maps to depth 0 and `far` to depth 1.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let range = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * range, -1.0],
        [0.0, 0.0, near * far * range, 0.0],
    ]
}
