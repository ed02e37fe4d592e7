//! Basic effect parameter block
//!
//! [`BasicEffect`] is the CPU side of the fixed-function style material every
//! mesh part is drawn with: transforms, material colors, a three-light
//! directional rig and linear fog. The renderer packs it into a uniform
//! buffer each frame; the controller only ever touches the fog fields.

use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::fog::FogParameters;

/// One directional light of the effect's light rig
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Direction the light travels (normalized)
    pub direction: Vec3,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    pub enabled: bool,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::NEG_Y,
            diffuse_color: Vec3::ONE,
            specular_color: Vec3::ZERO,
            enabled: false,
        }
    }
}

/// Ambient color installed by [`BasicEffect::enable_default_lighting`]
pub const DEFAULT_AMBIENT: Vec3 = Vec3::new(0.053_333_32, 0.098_823_54, 0.181_960_8);

/// Key, fill and back lights installed by [`BasicEffect::enable_default_lighting`]
pub const DEFAULT_LIGHTS: [DirectionalLight; 3] = [
    // Key light
    DirectionalLight {
        direction: Vec3::new(-0.526_540_8, -0.573_576_5, -0.627_506_9),
        diffuse_color: Vec3::new(1.0, 0.960_784_4, 0.807_843_2),
        specular_color: Vec3::new(1.0, 0.960_784_4, 0.807_843_2),
        enabled: true,
    },
    // Fill light
    DirectionalLight {
        direction: Vec3::new(0.719_846_4, 0.342_020_1, 0.604_022_7),
        diffuse_color: Vec3::new(0.964_705_9, 0.760_784_4, 0.407_843_2),
        specular_color: Vec3::ZERO,
        enabled: true,
    },
    // Back light
    DirectionalLight {
        direction: Vec3::new(0.454_519_5, -0.766_044_4, 0.454_519_5),
        diffuse_color: Vec3::new(0.323_137_3, 0.360_784_4, 0.393_725_5),
        specular_color: Vec3::new(0.323_137_3, 0.360_784_4, 0.393_725_5),
        enabled: true,
    },
];

/// Specular power installed by default lighting
pub const DEFAULT_SPECULAR_POWER: f32 = 16.0;

/// Material, transform, lighting and fog state of one mesh part
#[derive(Debug, Clone, PartialEq)]
pub struct BasicEffect {
    pub world: Mat4,
    pub view: Mat4,
    pub projection: Mat4,

    pub diffuse_color: Vec3,
    pub emissive_color: Vec3,
    pub specular_color: Vec3,
    pub specular_power: f32,
    pub alpha: f32,

    pub lighting_enabled: bool,
    pub ambient_light_color: Vec3,
    pub lights: [DirectionalLight; 3],

    pub fog_enabled: bool,
    pub fog_color: Vec3,
    pub fog_start: f32,
    pub fog_end: f32,
}

impl Default for BasicEffect {
    fn default() -> Self {
        Self {
            world: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            diffuse_color: Vec3::ONE,
            emissive_color: Vec3::ZERO,
            specular_color: Vec3::ONE,
            specular_power: DEFAULT_SPECULAR_POWER,
            alpha: 1.0,
            lighting_enabled: false,
            ambient_light_color: Vec3::ZERO,
            lights: [DirectionalLight::default(); 3],
            fog_enabled: false,
            fog_color: Vec3::ZERO,
            fog_start: 0.0,
            fog_end: 1.0,
        }
    }
}

impl BasicEffect {
    /// Turn lighting on with the standard three-light rig.
    pub fn enable_default_lighting(&mut self) {
        self.lighting_enabled = true;
        self.ambient_light_color = DEFAULT_AMBIENT;
        self.specular_power = DEFAULT_SPECULAR_POWER;
        self.lights = DEFAULT_LIGHTS;
    }

    /// Copy the fog fields from the menu state.
    pub fn set_fog(&mut self, fog: &FogParameters) {
        self.fog_enabled = fog.enabled;
        self.fog_color = fog.color;
        self.fog_start = fog.start;
        self.fog_end = fog.end;
    }

    /// Plane that maps an object-space position to its fog factor.
    ///
    /// `saturate(dot(vec4(position, 1), fog_vector))` is 0 at `fog_start`
    /// view depth and 1 at `fog_end`. Disabled fog yields the zero vector;
    /// coincident start and end yield a constant factor of one.
    pub fn fog_vector(&self) -> Vec4 {
        if !self.fog_enabled {
            return Vec4::ZERO;
        }
        if self.fog_start == self.fog_end {
            return Vec4::W;
        }

        let world_view = self.view * self.world;
        let scale = 1.0 / (self.fog_start - self.fog_end);

        // Row of world_view producing view-space z (negative in front of the camera)
        let row_z = world_view.row(2);
        Vec4::new(
            row_z.x * scale,
            row_z.y * scale,
            row_z.z * scale,
            (row_z.w + self.fog_start) * scale,
        )
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        self.view.inverse().w_axis.truncate()
    }

    /// Normal matrix for the world transform
    pub fn world_inverse_transpose(&self) -> Mat4 {
        self.world.inverse().transpose()
    }
}

/// Anything that owns a set of effects, typically a loaded model.
pub trait EffectHost {
    fn for_each_effect(&mut self, f: &mut dyn FnMut(&mut BasicEffect));
}

impl EffectHost for BasicEffect {
    fn for_each_effect(&mut self, f: &mut dyn FnMut(&mut BasicEffect)) {
        f(self)
    }
}

impl EffectHost for Vec<BasicEffect> {
    fn for_each_effect(&mut self, f: &mut dyn FnMut(&mut BasicEffect)) {
        self.iter_mut().for_each(f)
    }
}

/// Fixed camera the scene is viewed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSetup {
    #[serde(default = "default_position")]
    pub position: Vec3,
    #[serde(default = "default_target")]
    pub target: Vec3,
    #[serde(default = "default_fov")]
    pub fov_degrees: f32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,
}

fn default_position() -> Vec3 {
    Vec3::new(0.0, 30.0, 50.0)
}

fn default_target() -> Vec3 {
    Vec3::new(0.0, -10.0, 0.0)
}

fn default_fov() -> f32 {
    45.0
}

fn default_near() -> f32 {
    1.0
}

fn default_far() -> f32 {
    100.0
}

impl Default for CameraSetup {
    fn default() -> Self {
        Self {
            position: default_position(),
            target: default_target(),
            fov_degrees: default_fov(),
            near: default_near(),
            far: default_far(),
        }
    }
}

impl CameraSetup {
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Perspective projection with a [0, 1] depth range
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), aspect, self.near, self.far)
    }
}

/// One-time scene setup: default lighting, view and projection on every effect.
///
/// Fog is left alone; the controller commits it every frame.
pub fn configure_effects(host: &mut impl EffectHost, camera: &CameraSetup, aspect: f32) {
    let view = camera.view();
    let projection = camera.projection(aspect);
    host.for_each_effect(&mut |effect| {
        effect.enable_default_lighting();
        effect.view = view;
        effect.projection = projection;
    });
}

/// Re-apply only the projection after the viewport changed shape.
pub fn update_aspect(host: &mut impl EffectHost, camera: &CameraSetup, aspect: f32) {
    let projection = camera.projection(aspect);
    host.for_each_effect(&mut |effect| effect.projection = projection);
}
