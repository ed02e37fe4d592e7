//! Procedural demo scene
//!
//! A ground plane with a field of cubes spread from near the camera out to
//! the far plane, so every fog distance setting has something to show.

use glam::{Mat4, Vec3};

use super::{MeshData, MeshPartData};
use crate::graphics::Vertex;

/// Height of the ground plane
pub const GROUND_Y: f32 = -10.0;

const GROUND_SIZE_X: f32 = 120.0;
const GROUND_SIZE_Z: f32 = 120.0;
const GROUND_CENTER_Z: f32 = -5.0;
const GROUND_SUBDIVISIONS: u32 = 12;
const GROUND_COLOR: Vec3 = Vec3::new(0.35, 0.55, 0.3);

const CUBE_HALF_EXTENT: f32 = 2.0;
const CUBE_COLUMNS: [f32; 4] = [-24.0, -8.0, 8.0, 24.0];
const CUBE_ROW_START_Z: f32 = 40.0;
const CUBE_ROW_SPACING: f32 = 10.0;
const CUBE_ROWS: u32 = 9;

const CUBE_COLORS: [Vec3; 4] = [
    Vec3::new(0.8, 0.3, 0.25),
    Vec3::new(0.9, 0.75, 0.3),
    Vec3::new(0.3, 0.5, 0.85),
    Vec3::new(0.75, 0.75, 0.75),
];

/// Ground plus `CUBE_ROWS` rows of cubes
pub fn demo_scene() -> Vec<MeshData> {
    let mut meshes = vec![MeshData {
        name: "Ground".to_string(),
        world: Mat4::from_translation(Vec3::new(0.0, GROUND_Y, GROUND_CENTER_Z)),
        parts: vec![solid(
            generate_plane(GROUND_SIZE_X, GROUND_SIZE_Z, GROUND_SUBDIVISIONS),
            GROUND_COLOR,
        )],
    }];

    for row in 0..CUBE_ROWS {
        let z = CUBE_ROW_START_Z - row as f32 * CUBE_ROW_SPACING;
        for (column, &x) in CUBE_COLUMNS.iter().enumerate() {
            let color = CUBE_COLORS[(row as usize + column) % CUBE_COLORS.len()];
            meshes.push(MeshData {
                name: format!("Cube {}-{}", row, column),
                world: Mat4::from_translation(Vec3::new(x, GROUND_Y + CUBE_HALF_EXTENT, z)),
                parts: vec![solid(generate_cube(CUBE_HALF_EXTENT), color)],
            });
        }
    }

    meshes
}

fn solid((vertices, indices): (Vec<Vertex>, Vec<u32>), color: Vec3) -> MeshPartData {
    MeshPartData {
        vertices,
        indices,
        diffuse_color: color,
        alpha: 1.0,
    }
}

/// Subdivided plane in XZ centered at the origin, facing +Y
pub fn generate_plane(size_x: f32, size_z: f32, subdivisions: u32) -> (Vec<Vertex>, Vec<u32>) {
    let subdivisions = subdivisions.max(1);
    let normal = Vec3::Y;

    let mut vertices = Vec::with_capacity(((subdivisions + 1) * (subdivisions + 1)) as usize);
    for z in 0..=subdivisions {
        for x in 0..=subdivisions {
            let u = x as f32 / subdivisions as f32;
            let v = z as f32 / subdivisions as f32;
            let position = Vec3::new(-size_x * 0.5 + u * size_x, 0.0, -size_z * 0.5 + v * size_z);
            vertices.push(Vertex::new(position, normal));
        }
    }

    let mut indices = Vec::with_capacity((subdivisions * subdivisions * 6) as usize);
    for z in 0..subdivisions {
        for x in 0..subdivisions {
            let i0 = z * (subdivisions + 1) + x;
            let i1 = i0 + 1;
            let i2 = (z + 1) * (subdivisions + 1) + x;
            let i3 = i2 + 1;

            // CCW seen from +Y
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    (vertices, indices)
}

/// Axis-aligned cube with flat-shaded faces (4 vertices each)
pub fn generate_cube(half_extent: f32) -> (Vec<Vertex>, Vec<u32>) {
    let s = half_extent;
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        // Front (+Z)
        (
            Vec3::Z,
            [
                Vec3::new(-s, -s, s),
                Vec3::new(s, -s, s),
                Vec3::new(s, s, s),
                Vec3::new(-s, s, s),
            ],
        ),
        // Back (-Z)
        (
            Vec3::NEG_Z,
            [
                Vec3::new(s, -s, -s),
                Vec3::new(-s, -s, -s),
                Vec3::new(-s, s, -s),
                Vec3::new(s, s, -s),
            ],
        ),
        // Top (+Y)
        (
            Vec3::Y,
            [
                Vec3::new(-s, s, s),
                Vec3::new(s, s, s),
                Vec3::new(s, s, -s),
                Vec3::new(-s, s, -s),
            ],
        ),
        // Bottom (-Y)
        (
            Vec3::NEG_Y,
            [
                Vec3::new(-s, -s, -s),
                Vec3::new(s, -s, -s),
                Vec3::new(s, -s, s),
                Vec3::new(-s, -s, s),
            ],
        ),
        // Right (+X)
        (
            Vec3::X,
            [
                Vec3::new(s, -s, s),
                Vec3::new(s, -s, -s),
                Vec3::new(s, s, -s),
                Vec3::new(s, s, s),
            ],
        ),
        // Left (-X)
        (
            Vec3::NEG_X,
            [
                Vec3::new(-s, -s, -s),
                Vec3::new(-s, -s, s),
                Vec3::new(-s, s, s),
                Vec3::new(-s, s, -s),
            ],
        ),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, corners) in faces {
        let base = vertices.len() as u32;
        vertices.extend(corners.iter().map(|&corner| Vertex::new(corner, normal)));
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}
