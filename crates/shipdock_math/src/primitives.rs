//! Unit primitives
//!
//! The harbor is assembled from three shapes scaled into place:
//! - [`unit_cube`]: spans -1..1 on every axis
//! - [`unit_cylinder`]: radius 1, runs from z = 0 to z = 1
//! - [`unit_quad`]: XZ plane, -0.5..0.5, facing +Y

use std::f32::consts::TAU;

use crate::shape::{MeshBuilder, TriangleMesh};
use crate::Vec3;

/// Cube spanning -1..1 on every axis (6 faces, 36 vertices)
pub fn unit_cube() -> TriangleMesh {
    let mut b = MeshBuilder::new();

    // +Z
    b.add_quad(
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    );
    // -Z
    b.add_quad(
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
    );
    // +Y
    b.add_quad(
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
    );
    // -Y
    b.add_quad(
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
    );
    // +X
    b.add_quad(
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
    );
    // -X
    b.add_quad(
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
    );

    b.finish()
}

/// Capped cylinder of radius 1 along +Z, from z = 0 to z = 1
///
/// Side vertices carry smooth radial normals; caps are flat.
pub fn unit_cylinder(segments: u32) -> TriangleMesh {
    let segments = segments.max(3);
    let mut b = MeshBuilder::new();

    let bottom_center = Vec3::new(0.0, 0.0, 0.0);
    let top_center = Vec3::new(0.0, 0.0, 1.0);

    for i in 0..segments {
        let a1 = (i as f32 / segments as f32) * TAU;
        let a2 = ((i + 1) as f32 / segments as f32) * TAU;
        let (s1, c1) = a1.sin_cos();
        let (s2, c2) = a2.sin_cos();

        let n1 = Vec3::new(c1, s1, 0.0);
        let n2 = Vec3::new(c2, s2, 0.0);
        let b1 = Vec3::new(c1, s1, 0.0);
        let b2 = Vec3::new(c2, s2, 0.0);
        let t1 = Vec3::new(c1, s1, 1.0);
        let t2 = Vec3::new(c2, s2, 1.0);

        // Side
        b.add_triangle_with_normals(b1, n1, b2, n2, t2, n2);
        b.add_triangle_with_normals(b1, n1, t2, n2, t1, n1);

        // Caps
        b.add_triangle(top_center, t1, t2);
        b.add_triangle(bottom_center, b2, b1);
    }

    b.finish()
}

/// Square in the XZ plane spanning -0.5..0.5, facing +Y
pub fn unit_quad() -> TriangleMesh {
    let mut b = MeshBuilder::new();
    b.add_quad(
        Vec3::new(-0.5, 0.0, 0.5),
        Vec3::new(0.5, 0.0, 0.5),
        Vec3::new(0.5, 0.0, -0.5),
        Vec3::new(-0.5, 0.0, -0.5),
    );
    b.finish()
}
