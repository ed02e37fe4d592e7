//! Models drawn with the basic effect
//!
//! A [`Model`] is a list of named meshes, each made of parts that own their
//! GPU buffers and a [`BasicEffect`]. Geometry comes either from a glTF file
//! or from the built-in procedural scene; both produce [`MeshData`] first so
//! the CPU side can be built and tested without a device.

mod gltf_loader;
pub mod procedural;

use std::path::{Path, PathBuf};

use basic_fog_core::{BasicEffect, EffectHost};
use glam::{Mat4, Vec3};
use thiserror::Error;
use wgpu::util::DeviceExt;

use crate::graphics::{EffectPipeline, EffectUniforms, Vertex};

/// Errors from building a model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to import glTF {path}: {source}")]
    Gltf {
        path: PathBuf,
        #[source]
        source: gltf::Error,
    },
    #[error("{0} contains no triangle geometry")]
    Empty(String),
}

/// Geometry and material of one mesh part, before upload
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPartData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub diffuse_color: Vec3,
    pub alpha: f32,
}

/// A named mesh placed in the scene, before upload
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub name: String,
    pub world: Mat4,
    pub parts: Vec<MeshPartData>,
}

/// One draw call: buffers, effect and its uniform binding
pub struct ModelMeshPart {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    pub effect: BasicEffect,
}

pub struct ModelMesh {
    pub name: String,
    pub parts: Vec<ModelMeshPart>,
}

pub struct Model {
    pub meshes: Vec<ModelMesh>,
}

impl Model {
    /// Import every triangle primitive of a glTF/GLB file.
    pub fn load_gltf(
        device: &wgpu::Device,
        pipeline: &EffectPipeline,
        path: &Path,
    ) -> Result<Self, ModelError> {
        let meshes = gltf_loader::load(path)?;
        let model = Self::upload(device, pipeline, meshes, &path.display().to_string())?;
        tracing::info!(
            "Loaded {} ({} meshes, {} parts)",
            path.display(),
            model.meshes.len(),
            model.part_count()
        );
        Ok(model)
    }

    /// Built-in scene used when no model file is given.
    pub fn demo_scene(device: &wgpu::Device, pipeline: &EffectPipeline) -> Result<Self, ModelError> {
        let model = Self::upload(device, pipeline, procedural::demo_scene(), "demo scene")?;
        tracing::info!("Using procedural demo scene ({} meshes)", model.meshes.len());
        Ok(model)
    }

    /// Create GPU buffers for every part. Parts without indices are dropped.
    pub fn upload(
        device: &wgpu::Device,
        pipeline: &EffectPipeline,
        meshes: Vec<MeshData>,
        source: &str,
    ) -> Result<Self, ModelError> {
        let meshes: Vec<ModelMesh> = meshes
            .into_iter()
            .map(|mesh| ModelMesh {
                parts: mesh
                    .parts
                    .into_iter()
                    .filter(|part| !part.indices.is_empty())
                    .map(|part| ModelMeshPart::new(device, pipeline, &mesh.name, mesh.world, part))
                    .collect(),
                name: mesh.name,
            })
            .filter(|mesh| !mesh.parts.is_empty())
            .collect();

        if meshes.is_empty() {
            return Err(ModelError::Empty(source.to_string()));
        }
        Ok(Self { meshes })
    }

    pub fn part_count(&self) -> usize {
        self.meshes.iter().map(|mesh| mesh.parts.len()).sum()
    }

    /// Upload the current effect parameters of every part.
    pub fn prepare(&self, queue: &wgpu::Queue) {
        for part in self.meshes.iter().flat_map(|mesh| &mesh.parts) {
            let uniforms = EffectUniforms::from_effect(&part.effect);
            queue.write_buffer(&part.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        }
    }

    /// Record draw calls for every part.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>, pipeline: &EffectPipeline) {
        render_pass.set_pipeline(pipeline.pipeline());
        for part in self.meshes.iter().flat_map(|mesh| &mesh.parts) {
            render_pass.set_bind_group(0, &part.bind_group, &[]);
            render_pass.set_vertex_buffer(0, part.vertex_buffer.slice(..));
            render_pass.set_index_buffer(part.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..part.index_count, 0, 0..1);
        }
    }
}

impl EffectHost for Model {
    fn for_each_effect(&mut self, f: &mut dyn FnMut(&mut BasicEffect)) {
        for part in self.meshes.iter_mut().flat_map(|mesh| &mut mesh.parts) {
            f(&mut part.effect);
        }
    }
}

impl ModelMeshPart {
    fn new(
        device: &wgpu::Device,
        pipeline: &EffectPipeline,
        mesh_name: &str,
        world: Mat4,
        data: MeshPartData,
    ) -> Self {
        let effect = part_effect(world, &data);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertices", mesh_name)),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Indices", mesh_name)),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Effect", mesh_name)),
            contents: bytemuck::bytes_of(&EffectUniforms::from_effect(&effect)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = pipeline.create_bind_group(device, &uniform_buffer);

        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
            uniform_buffer,
            bind_group,
            effect,
        }
    }
}

/// Initial effect of a part: its mesh transform and material color
fn part_effect(world: Mat4, data: &MeshPartData) -> BasicEffect {
    BasicEffect {
        world,
        diffuse_color: data.diffuse_color,
        alpha: data.alpha,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_effect_takes_world_and_material() {
        let data = MeshPartData {
            vertices: Vec::new(),
            indices: Vec::new(),
            diffuse_color: Vec3::new(0.2, 0.4, 0.6),
            alpha: 0.75,
        };
        let world = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));

        let effect = part_effect(world, &data);
        assert_eq!(effect.world, world);
        assert_eq!(effect.diffuse_color, data.diffuse_color);
        assert_eq!(effect.alpha, 0.75);
        assert!(!effect.fog_enabled);
        assert!(!effect.lighting_enabled);
    }

    #[test]
    fn test_empty_error_names_source() {
        let err = ModelError::Empty("demo scene".to_string());
        assert_eq!(err.to_string(), "demo scene contains no triangle geometry");
    }
}
