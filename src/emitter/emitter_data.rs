//! Emitter data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in emitter_operations.rs

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Point or cone light in the 2D plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterData {
    /// World position
    pub position: Vec2,

    /// Facing direction (degrees, counter-clockwise from +x)
    pub angle_degrees: f32,

    /// Cone width (degrees, 0..=360)
    pub spread_degrees: f32,

    /// Reach of the light in world units
    pub radius: f32,

    pub color: [f32; 4],

    /// Distance falloff exponent (0..=20)
    pub falloff_exponent: f32,

    /// Angular falloff exponent (0..=20)
    pub angle_falloff_exponent: f32,

    /// Fraction of the radius lit at full brightness (0..=1)
    pub full_bright_radius: f32,
}

/// Per-draw values for the shadow map pass
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShadowCasterUniform {
    /// (x, y, angle in radians, radius)
    pub emitter_params: [f32; 4],
    /// (read, write, 0, 0)
    pub shadow_map_params: [f32; 4],
}

/// Values for the light pass that samples the final shadow map
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct EmitterLightUniform {
    pub color: [f32; 4],
    /// (x, y, falloff exponent, angle falloff exponent)
    pub light_position: [f32; 4],
    /// (angle rad, half spread rad, 1 / falloff distance, full bright distance)
    pub params: [f32; 4],
    /// (radius, 0, 0, 0)
    pub light_radius: [f32; 4],
    pub shadow_map_params: [f32; 4],
    /// (resolution, 0, 0, 0)
    pub shadow_map_resolution: [f32; 4],
}

/// Which helper quad covers the light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterQuadKind {
    Full,
    Half,
}

/// Quad selection and local y scale for drawing an emitter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterQuad {
    pub kind: EmitterQuadKind,
    pub scale_y: f32,
}
