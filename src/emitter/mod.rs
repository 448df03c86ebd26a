/// Emitter Module - Data-Oriented Programming (DOP) style
///
/// - emitter_data.rs: emitter description and GPU uniform layouts
/// - emitter_operations.rs: uniform encoding and emitter quad fitting

pub mod emitter_data;
pub mod emitter_operations;

pub use emitter_data::{
    EmitterData, EmitterLightUniform, EmitterQuad, EmitterQuadKind, ShadowCasterUniform,
};
pub use emitter_operations::{
    clamp_emitter, create_emitter, emitter_light_uniform, emitter_quad, emitter_quad_mesh,
    shadow_caster_uniform,
};
