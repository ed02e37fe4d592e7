//! GPU layout of the basic effect parameters
//!
//! Mirrors `struct Effect` in `basic_effect.wgsl`. Every member is a vec4 or
//! mat4, so the Rust and WGSL layouts agree without explicit padding.

use basic_fog_core::BasicEffect;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightUniform {
    /// xyz: normalized travel direction
    pub direction: Vec4,
    /// rgb: diffuse color, zero when the light is off
    pub diffuse: Vec4,
    /// rgb: specular color, zero when the light is off
    pub specular: Vec4,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct EffectUniforms {
    pub world: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub world_inverse_transpose: Mat4,
    /// xyz: camera position in world space
    pub eye_position: Vec4,
    /// rgb: diffuse color premultiplied by alpha, w: alpha.
    /// Unlit effects fold the emissive color in here.
    pub diffuse_color: Vec4,
    /// rgb: emissive plus ambient * diffuse, premultiplied. Zero when unlit.
    pub emissive_color: Vec4,
    /// rgb: specular color, w: specular power
    pub specular: Vec4,
    /// x: 1.0 when lighting is enabled
    pub flags: Vec4,
    pub lights: [LightUniform; 3],
    /// rgb: fog color
    pub fog_color: Vec4,
    /// Fog plane, see [`BasicEffect::fog_vector`]
    pub fog_vector: Vec4,
}

impl EffectUniforms {
    pub fn from_effect(effect: &BasicEffect) -> Self {
        let alpha = effect.alpha;
        let (diffuse, emissive) = if effect.lighting_enabled {
            (
                effect.diffuse_color * alpha,
                (effect.emissive_color + effect.ambient_light_color * effect.diffuse_color) * alpha,
            )
        } else {
            ((effect.diffuse_color + effect.emissive_color) * alpha, Vec3::ZERO)
        };

        let lights = effect.lights.map(|light| {
            let (diffuse, specular) = if light.enabled {
                (light.diffuse_color, light.specular_color)
            } else {
                (Vec3::ZERO, Vec3::ZERO)
            };
            LightUniform {
                direction: light.direction.normalize_or_zero().extend(0.0),
                diffuse: diffuse.extend(0.0),
                specular: specular.extend(0.0),
            }
        });

        Self {
            world: effect.world,
            view: effect.view,
            projection: effect.projection,
            world_inverse_transpose: effect.world_inverse_transpose(),
            eye_position: effect.eye_position().extend(1.0),
            diffuse_color: diffuse.extend(alpha),
            emissive_color: emissive.extend(0.0),
            specular: effect.specular_color.extend(effect.specular_power),
            flags: Vec4::new(f32::from(u8::from(effect.lighting_enabled)), 0.0, 0.0, 0.0),
            lights,
            fog_color: effect.fog_color.extend(0.0),
            fog_vector: effect.fog_vector(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basic_fog_core::FogParameters;

    #[test]
    fn test_uniform_size_matches_shader() {
        // 4 mat4 + 5 vec4 + 3 lights * 3 vec4 + 2 vec4
        assert_eq!(std::mem::size_of::<EffectUniforms>(), 512);
        assert_eq!(std::mem::size_of::<EffectUniforms>() % 16, 0);
    }

    #[test]
    fn test_disabled_lights_are_black() {
        let effect = BasicEffect::default();
        let uniforms = EffectUniforms::from_effect(&effect);
        for light in &uniforms.lights {
            assert_eq!(light.diffuse, Vec4::ZERO);
            assert_eq!(light.specular, Vec4::ZERO);
        }
        assert_eq!(uniforms.flags.x, 0.0);
    }

    #[test]
    fn test_default_lighting_packed() {
        let mut effect = BasicEffect::default();
        effect.enable_default_lighting();
        effect.diffuse_color = Vec3::new(0.5, 0.5, 0.5);

        let uniforms = EffectUniforms::from_effect(&effect);
        assert_eq!(uniforms.flags.x, 1.0);
        assert_eq!(uniforms.specular.w, 16.0);
        assert_eq!(uniforms.lights[0].diffuse.truncate(), effect.lights[0].diffuse_color);
        let expected = effect.ambient_light_color * 0.5;
        assert!(uniforms.emissive_color.truncate().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_alpha_premultiplies_diffuse() {
        let effect = BasicEffect {
            diffuse_color: Vec3::new(1.0, 0.5, 0.0),
            alpha: 0.5,
            ..Default::default()
        };
        let uniforms = EffectUniforms::from_effect(&effect);
        assert_eq!(uniforms.diffuse_color, Vec4::new(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn test_unlit_effect_keeps_emissive() {
        let effect = BasicEffect {
            diffuse_color: Vec3::new(0.25, 0.5, 0.0),
            emissive_color: Vec3::new(0.5, 0.0, 0.25),
            alpha: 0.5,
            ..Default::default()
        };
        assert!(!effect.lighting_enabled);

        let uniforms = EffectUniforms::from_effect(&effect);
        assert_eq!(uniforms.diffuse_color, Vec4::new(0.375, 0.25, 0.125, 0.5));
        assert_eq!(uniforms.emissive_color, Vec4::ZERO);
    }

    #[test]
    fn test_lit_effect_separates_emissive() {
        let mut effect = BasicEffect {
            diffuse_color: Vec3::ONE,
            emissive_color: Vec3::new(0.5, 0.0, 0.0),
            ..Default::default()
        };
        effect.enable_default_lighting();

        let uniforms = EffectUniforms::from_effect(&effect);
        assert_eq!(uniforms.diffuse_color, Vec4::ONE);
        let expected = effect.emissive_color + effect.ambient_light_color;
        assert!(uniforms.emissive_color.truncate().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_fog_fields_packed() {
        let mut effect = BasicEffect::default();
        effect.set_fog(&FogParameters::default());

        let uniforms = EffectUniforms::from_effect(&effect);
        assert_eq!(uniforms.fog_color.truncate(), Vec3::ONE);
        assert_eq!(uniforms.fog_vector, effect.fog_vector());

        effect.fog_enabled = false;
        assert_eq!(EffectUniforms::from_effect(&effect).fog_vector, Vec4::ZERO);
    }

    #[test]
    fn test_bytes_cast() {
        let uniforms = EffectUniforms::from_effect(&BasicEffect::default());
        let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), 512);
    }
}
