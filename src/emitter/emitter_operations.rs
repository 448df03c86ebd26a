//! Emitter operations - Pure DOP functions
//!
//! Encodes emitters into the uniforms read by the shadow map pass and the
//! light pass.

use super::emitter_data::{
    EmitterData, EmitterLightUniform, EmitterQuad, EmitterQuadKind, ShadowCasterUniform,
};
use crate::constants::emitter::{
    DEFAULT_COLOR, DEFAULT_SPREAD_DEGREES, HALF_QUAD_MAX_SPREAD_DEGREES, MAX_FALLOFF_EXPONENT,
    MAX_SPREAD_DEGREES, MIN_QUAD_SCALE_Y,
};
use crate::geometry::{full_quad_mesh, half_quad_mesh, QuadMesh};
use crate::slots::{shadow_map_params_vec4, ShadowMapParams};
use glam::Vec2;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Create an emitter, clamping ranged fields into their valid ranges
pub fn create_emitter(
    position: Vec2,
    angle_degrees: f32,
    spread_degrees: f32,
    radius: f32,
) -> EmitterData {
    clamp_emitter(EmitterData {
        position,
        angle_degrees,
        spread_degrees,
        radius,
        ..EmitterData::default()
    })
}

/// Bring every ranged field back into range
pub fn clamp_emitter(emitter: EmitterData) -> EmitterData {
    EmitterData {
        spread_degrees: emitter.spread_degrees.clamp(0.0, MAX_SPREAD_DEGREES),
        falloff_exponent: emitter.falloff_exponent.clamp(0.0, MAX_FALLOFF_EXPONENT),
        angle_falloff_exponent: emitter
            .angle_falloff_exponent
            .clamp(0.0, MAX_FALLOFF_EXPONENT),
        full_bright_radius: emitter.full_bright_radius.clamp(0.0, 1.0),
        radius: emitter.radius.max(0.0),
        ..emitter
    }
}

impl Default for EmitterData {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            angle_degrees: 0.0,
            spread_degrees: DEFAULT_SPREAD_DEGREES,
            radius: 1.0,
            color: DEFAULT_COLOR,
            falloff_exponent: 1.0,
            angle_falloff_exponent: 1.0,
            full_bright_radius: 0.0,
        }
    }
}

// ============================================================================
// UNIFORMS
// ============================================================================

/// Values bound for every blocker drawn into this emitter's row
pub fn shadow_caster_uniform(emitter: &EmitterData, params: ShadowMapParams) -> ShadowCasterUniform {
    ShadowCasterUniform {
        emitter_params: [
            emitter.position.x,
            emitter.position.y,
            emitter.angle_degrees.to_radians(),
            emitter.radius,
        ],
        shadow_map_params: shadow_map_params_vec4(params),
    }
}

/// Values bound when shading the light itself
pub fn emitter_light_uniform(
    emitter: &EmitterData,
    params: ShadowMapParams,
    shadow_map_resolution: u32,
) -> EmitterLightUniform {
    let full_bright_distance = emitter.full_bright_radius * emitter.radius;
    // Kept finite when the whole radius is at full brightness
    let falloff_distance =
        ((1.0 - emitter.full_bright_radius) * emitter.radius).max(f32::EPSILON);

    EmitterLightUniform {
        color: emitter.color,
        light_position: [
            emitter.position.x,
            emitter.position.y,
            emitter.falloff_exponent,
            emitter.angle_falloff_exponent,
        ],
        params: [
            emitter.angle_degrees.to_radians(),
            emitter.spread_degrees.to_radians() * 0.5,
            1.0 / falloff_distance,
            full_bright_distance,
        ],
        light_radius: [emitter.radius, 0.0, 0.0, 0.0],
        shadow_map_params: shadow_map_params_vec4(params),
        shadow_map_resolution: [shadow_map_resolution as f32, 0.0, 0.0, 0.0],
    }
}

// ============================================================================
// EMITTER QUAD
// ============================================================================

/// Pick the helper quad for the emitter's spread and fit it to the cone.
///
/// `parent_scale_y` is the y scale inherited from the host's transform
/// hierarchy, divided out so the quad fits the cone in world space.
pub fn emitter_quad(emitter: &EmitterData, parent_scale_y: f32) -> EmitterQuad {
    let (kind, extent) = if emitter.spread_degrees > HALF_QUAD_MAX_SPREAD_DEGREES {
        (EmitterQuadKind::Full, 1.0)
    } else {
        (
            EmitterQuadKind::Half,
            (emitter.spread_degrees * 0.5).to_radians().sin(),
        )
    };

    let parent_scale_y = if parent_scale_y.abs() > f32::EPSILON {
        parent_scale_y
    } else {
        1.0
    };

    EmitterQuad {
        kind,
        scale_y: (extent * emitter.radius / parent_scale_y).max(MIN_QUAD_SCALE_Y),
    }
}

pub fn emitter_quad_mesh(quad: &EmitterQuad) -> QuadMesh {
    match quad.kind {
        EmitterQuadKind::Full => full_quad_mesh(),
        EmitterQuadKind::Half => half_quad_mesh(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::{shadow_map_params, EmitterSlot};

    #[test]
    fn test_create_clamps_ranges() {
        let emitter = create_emitter(Vec2::new(1.0, 2.0), 45.0, 400.0, -3.0);
        assert_eq!(emitter.spread_degrees, 360.0);
        assert_eq!(emitter.radius, 0.0);

        let emitter = clamp_emitter(EmitterData {
            falloff_exponent: 50.0,
            full_bright_radius: 2.0,
            ..EmitterData::default()
        });
        assert_eq!(emitter.falloff_exponent, 20.0);
        assert_eq!(emitter.full_bright_radius, 1.0);
    }

    #[test]
    fn test_shadow_caster_uniform() {
        let emitter = create_emitter(Vec2::new(3.0, -1.0), 90.0, 60.0, 5.0);
        let params = shadow_map_params(EmitterSlot(0), 64, false);
        let uniform = shadow_caster_uniform(&emitter, params);

        assert_eq!(uniform.emitter_params[0], 3.0);
        assert_eq!(uniform.emitter_params[1], -1.0);
        assert!((uniform.emitter_params[2] - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(uniform.emitter_params[3], 5.0);
        assert_eq!(uniform.shadow_map_params[0], params.read);
        assert_eq!(uniform.shadow_map_params[1], params.write);
    }

    #[test]
    fn test_light_uniform_falloff_terms() {
        let emitter = EmitterData {
            radius: 4.0,
            full_bright_radius: 0.25,
            spread_degrees: 90.0,
            ..EmitterData::default()
        };
        let params = shadow_map_params(EmitterSlot(3), 64, true);
        let uniform = emitter_light_uniform(&emitter, params, 1024);

        assert!((uniform.params[1] - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        assert!((uniform.params[2] - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(uniform.params[3], 1.0);
        assert_eq!(uniform.light_radius[0], 4.0);
        assert_eq!(uniform.shadow_map_resolution[0], 1024.0);
    }

    #[test]
    fn test_light_uniform_stays_finite_at_full_brightness() {
        let emitter = EmitterData {
            full_bright_radius: 1.0,
            ..EmitterData::default()
        };
        let params = shadow_map_params(EmitterSlot(0), 64, false);
        let uniform = emitter_light_uniform(&emitter, params, 1024);
        assert!(uniform.params[2].is_finite());
    }

    #[test]
    fn test_wide_spread_uses_full_quad() {
        let emitter = create_emitter(Vec2::ZERO, 0.0, 270.0, 2.0);
        let quad = emitter_quad(&emitter, 1.0);
        assert_eq!(quad.kind, EmitterQuadKind::Full);
        assert_eq!(quad.scale_y, 2.0);
        assert_eq!(emitter_quad_mesh(&quad), full_quad_mesh());
    }

    #[test]
    fn test_narrow_spread_uses_fitted_half_quad() {
        let emitter = create_emitter(Vec2::ZERO, 0.0, 60.0, 2.0);
        let quad = emitter_quad(&emitter, 2.0);
        assert_eq!(quad.kind, EmitterQuadKind::Half);
        // sin(30 deg) * 2 / 2
        assert!((quad.scale_y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_spread_keeps_minimum_scale() {
        let emitter = create_emitter(Vec2::ZERO, 0.0, 0.0, 2.0);
        assert_eq!(emitter_quad(&emitter, 1.0).scale_y, MIN_QUAD_SCALE_Y);
    }
}
