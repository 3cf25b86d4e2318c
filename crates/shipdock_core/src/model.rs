//! Boat model loading
//!
//! The boat is the only externally authored mesh in the scene. It is read from
//! a Wavefront OBJ file and flattened into a single [`TriangleMesh`]. Material
//! libraries referenced by the file are ignored; the boat is drawn with the
//! layout's hull material.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use shipdock_math::{MeshBuilder, TriangleMesh, Vec3};

use crate::AssetError;

/// A loaded boat mesh
#[derive(Clone, Debug)]
pub struct BoatModel {
    name: String,
    mesh: TriangleMesh,
}

impl BoatModel {
    /// Build a model from an in-memory mesh
    pub fn from_mesh(name: impl Into<String>, mesh: TriangleMesh) -> Self {
        Self {
            name: name.into(),
            mesh,
        }
    }

    /// Load a model from an OBJ file
    ///
    /// Faces are triangulated. Normals from the file are kept when every
    /// vertex has one; otherwise each triangle gets its face normal.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if !path.is_file() {
            return Err(AssetError::NotFound(display));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or(display.clone());
        let mut reader = BufReader::new(File::open(path)?);
        let model = Self::parse(name, &display, &mut reader)?;

        log::info!(
            "Loaded model '{}' ({} triangles)",
            model.name,
            model.mesh.triangle_count()
        );
        Ok(model)
    }

    /// Parse OBJ text from `reader`; `source` names it in errors
    fn parse<B: BufRead>(name: String, source: &str, reader: &mut B) -> Result<Self, AssetError> {
        let (models, _) = tobj::load_obj_buf(reader, &load_options(), |mtl| {
            log::debug!("Skipping material library {} of {}", mtl.display(), source);
            Err(tobj::LoadError::OpenFileFailed)
        })?;

        let model = Self::from_mesh(name, flatten(&models));
        if model.mesh.is_empty() {
            return Err(AssetError::Empty(source.to_string()));
        }
        Ok(model)
    }

    /// File name (or given name) of the model
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The flattened triangle list
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    }
}

/// Merge every model of an OBJ file into one triangle list
fn flatten(models: &[tobj::Model]) -> TriangleMesh {
    let mut builder = MeshBuilder::new();

    for model in models {
        let mesh = &model.mesh;
        let has_normals = !mesh.normals.is_empty() && mesh.normals.len() == mesh.positions.len();
        let position = |i: u32| {
            let i = i as usize * 3;
            Vec3::new(mesh.positions[i], mesh.positions[i + 1], mesh.positions[i + 2])
        };
        let normal = |i: u32| {
            let i = i as usize * 3;
            Vec3::new(mesh.normals[i], mesh.normals[i + 1], mesh.normals[i + 2])
        };

        for tri in mesh.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0], tri[1], tri[2]);
            if has_normals {
                builder.add_triangle_with_normals(
                    position(a),
                    normal(a),
                    position(b),
                    normal(b),
                    position(c),
                    normal(c),
                );
            } else {
                builder.add_triangle(position(a), position(b), position(c));
            }
        }
    }

    builder.finish()
}
