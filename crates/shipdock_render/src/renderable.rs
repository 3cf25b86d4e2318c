//! Renderable geometry - uploads meshes to GPU vertex buffers
//!
//! The harbor needs only four meshes: the three unit primitives shared by all
//! fixed parts, and the boat. Only the boat buffer ever changes.

use wgpu::util::DeviceExt;

use shipdock_math::{unit_cube, unit_cylinder, unit_quad, MeshVertex, TriangleMesh};

use crate::frame::MeshKind;

/// A vertex buffer holding one triangle list
pub struct GpuMesh {
    pub buffer: wgpu::Buffer,
    pub vertex_count: u32,
}

impl GpuMesh {
    /// Upload a triangle list
    pub fn upload(device: &wgpu::Device, label: &str, mesh: &TriangleMesh) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: vertex_bytes(mesh),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            buffer,
            vertex_count: mesh.vertex_count() as u32,
        }
    }
}

/// Raw bytes of a mesh's vertices
pub fn vertex_bytes(mesh: &TriangleMesh) -> &[u8] {
    bytemuck::cast_slice::<MeshVertex, u8>(&mesh.vertices)
}

/// GPU copies of every mesh the scene draws
pub struct GpuMeshes {
    cube: GpuMesh,
    cylinder: GpuMesh,
    quad: GpuMesh,
    boat: GpuMesh,
}

impl GpuMeshes {
    /// Upload the unit primitives and the boat
    pub fn new(device: &wgpu::Device, cylinder_segments: u32, boat: &TriangleMesh) -> Self {
        let cube = GpuMesh::upload(device, "Cube Vertex Buffer", &unit_cube());
        let cylinder = GpuMesh::upload(device, "Cylinder Vertex Buffer", &unit_cylinder(cylinder_segments));
        let quad = GpuMesh::upload(device, "Quad Vertex Buffer", &unit_quad());
        let boat = GpuMesh::upload(device, "Boat Vertex Buffer", boat);

        log::info!(
            "Uploaded meshes: cube {} / cylinder {} / quad {} / boat {} vertices",
            cube.vertex_count,
            cylinder.vertex_count,
            quad.vertex_count,
            boat.vertex_count
        );

        Self {
            cube,
            cylinder,
            quad,
            boat,
        }
    }

    /// Swap in a newly loaded boat
    pub fn replace_boat(&mut self, device: &wgpu::Device, boat: &TriangleMesh) {
        self.boat = GpuMesh::upload(device, "Boat Vertex Buffer", boat);
        log::info!("Replaced boat mesh ({} vertices)", self.boat.vertex_count);
    }

    pub fn get(&self, kind: MeshKind) -> &GpuMesh {
        match kind {
            MeshKind::Cube => &self.cube,
            MeshKind::Cylinder => &self.cylinder,
            MeshKind::Quad => &self.quad,
            MeshKind::Boat => &self.boat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_bytes_length() {
        let cube = unit_cube();
        assert_eq!(vertex_bytes(&cube).len(), 36 * std::mem::size_of::<MeshVertex>());
    }

    #[test]
    fn test_vertex_bytes_first_position() {
        let quad = unit_quad();
        let bytes = vertex_bytes(&quad);
        let x = f32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        assert_eq!(x, quad.vertices[0].position[0]);
    }
}
