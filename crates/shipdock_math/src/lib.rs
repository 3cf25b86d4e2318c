//! 3D Mathematics Library
//!
//! This crate provides the vector, matrix, and mesh types used by the harbor scene.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - 4x4 column-major matrix for transformations
//!
//! ## Mesh Types
//!
//! - [`MeshVertex`] - Position + normal, laid out for GPU upload
//! - [`TriangleMesh`] - Non-indexed triangle list
//! - [`unit_cube`], [`unit_cylinder`], [`unit_quad`] - Unit primitives the scene is built from

mod vec3;
pub mod mat4;
pub mod shape;
pub mod primitives;

pub use vec3::Vec3;
pub use mat4::Mat4;
pub use shape::{MeshVertex, TriangleMesh, MeshBuilder};
pub use primitives::{unit_cube, unit_cylinder, unit_quad};
