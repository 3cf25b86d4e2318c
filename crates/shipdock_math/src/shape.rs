//! Triangle meshes
//!
//! Meshes are pure geometric data - no colors, materials, or rendering info.
//! That information lives with the draw calls that reference them.

use bytemuck::{Pod, Zeroable};
use crate::Vec3;

/// Vertex with position and normal
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    /// Create a new vertex
    #[inline]
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// A non-indexed triangle list
///
/// Every three consecutive vertices form one counter-clockwise triangle.
#[derive(Clone, Debug, Default)]
pub struct TriangleMesh {
    pub vertices: Vec<MeshVertex>,
}

impl TriangleMesh {
    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// True when the mesh has no triangles
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Axis-aligned bounds as (min, max)
    ///
    /// Returns `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = Vec3::from_array(self.vertices.first()?.position);
        let bounds = self.vertices.iter().fold((first, first), |(min, max), v| {
            let p = Vec3::from_array(v.position);
            (min.min_components(p), max.max_components(p))
        });
        Some(bounds)
    }
}

/// Fluent mesh builder for procedural geometry
#[derive(Default)]
pub struct MeshBuilder {
    vertices: Vec<MeshVertex>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triangle with a face normal computed from its winding
    pub fn add_triangle(&mut self, p1: Vec3, p2: Vec3, p3: Vec3) -> &mut Self {
        let normal = (p2 - p1).cross(p3 - p1).normalized();
        self.add_triangle_with_normals(p1, normal, p2, normal, p3, normal)
    }

    /// Add a triangle with explicit normals
    pub fn add_triangle_with_normals(
        &mut self,
        p1: Vec3,
        n1: Vec3,
        p2: Vec3,
        n2: Vec3,
        p3: Vec3,
        n3: Vec3,
    ) -> &mut Self {
        self.vertices.push(MeshVertex::new(p1, n1));
        self.vertices.push(MeshVertex::new(p2, n2));
        self.vertices.push(MeshVertex::new(p3, n3));
        self
    }

    /// Add a quad (two triangles) given counter-clockwise corners
    pub fn add_quad(&mut self, p1: Vec3, p2: Vec3, p3: Vec3, p4: Vec3) -> &mut Self {
        self.add_triangle(p1, p2, p3);
        self.add_triangle(p1, p3, p4);
        self
    }

    /// Current vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Build and consume the builder
    pub fn finish(self) -> TriangleMesh {
        TriangleMesh {
            vertices: self.vertices,
        }
    }
}
