//! Frame Module - per-frame shadow pass planning

pub mod frame_data;
pub mod frame_operations;

pub use frame_data::{
    ShadowDrawCommand, ShadowFramePlan, ShadowMapFormat, ShadowMapTargetDesc, ShadowMapTargets,
    TextureFilter, TextureWrap,
};
pub use frame_operations::{fold_shadow_row, plan_shadow_frame, shadow_map_targets};
