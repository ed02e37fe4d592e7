//! glTF import into [`MeshData`]

use std::path::Path;

use glam::{Mat4, Vec3};

use super::{MeshData, MeshPartData, ModelError};
use crate::graphics::Vertex;

/// Normal used when a primitive has none
const DEFAULT_NORMAL: [f32; 3] = [0.0, 1.0, 0.0];

/// Read every mesh instance of the default scene with its global transform.
///
/// Files without scenes fall back to their meshes at the origin.
pub(super) fn load(path: &Path) -> Result<Vec<MeshData>, ModelError> {
    let (document, buffers, _images) = gltf::import(path).map_err(|source| ModelError::Gltf {
        path: path.to_path_buf(),
        source,
    })?;

    let mut meshes = Vec::new();
    match document.default_scene().or_else(|| document.scenes().next()) {
        Some(scene) => {
            for node in scene.nodes() {
                collect_node(&node, Mat4::IDENTITY, &buffers, &mut meshes);
            }
        }
        None => {
            for mesh in document.meshes() {
                if let Some(data) = read_mesh(&mesh, None, Mat4::IDENTITY, &buffers) {
                    meshes.push(data);
                }
            }
        }
    }

    if meshes.is_empty() {
        return Err(ModelError::Empty(path.display().to_string()));
    }
    Ok(meshes)
}

fn collect_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<MeshData>,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(mesh) = node.mesh()
        && let Some(data) = read_mesh(&mesh, node.name(), world, buffers)
    {
        out.push(data);
    }

    for child in node.children() {
        collect_node(&child, world, buffers, out);
    }
}

fn read_mesh(
    mesh: &gltf::Mesh,
    node_name: Option<&str>,
    world: Mat4,
    buffers: &[gltf::buffer::Data],
) -> Option<MeshData> {
    let name = mesh
        .name()
        .or(node_name)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Mesh {}", mesh.index()));

    let parts: Vec<MeshPartData> = mesh
        .primitives()
        .filter_map(|primitive| read_primitive(&name, &primitive, buffers))
        .collect();

    if parts.is_empty() {
        return None;
    }
    Some(MeshData { name, world, parts })
}

fn read_primitive(
    mesh_name: &str,
    primitive: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
) -> Option<MeshPartData> {
    if primitive.mode() != gltf::mesh::Mode::Triangles {
        tracing::warn!(
            "Skipping {:?} primitive {} of {}",
            primitive.mode(),
            primitive.index(),
            mesh_name
        );
        return None;
    }

    let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

    let Some(positions) = reader.read_positions() else {
        tracing::warn!("Primitive {} of {} has no positions", primitive.index(), mesh_name);
        return None;
    };
    let positions: Vec<[f32; 3]> = positions.collect();
    let normals: Vec<[f32; 3]> = reader
        .read_normals()
        .map(|iter| iter.collect())
        .unwrap_or_default();

    let vertices = positions
        .iter()
        .enumerate()
        .map(|(i, &position)| Vertex {
            position,
            normal: normals.get(i).copied().unwrap_or(DEFAULT_NORMAL),
        })
        .collect();

    let indices = reader
        .read_indices()
        .map(|iter| iter.into_u32().collect())
        .unwrap_or_else(|| (0..positions.len() as u32).collect());

    let [r, g, b, a] = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();

    Some(MeshPartData {
        vertices,
        indices,
        diffuse_color: Vec3::new(r, g, b),
        alpha: a,
    })
}
