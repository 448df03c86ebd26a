//! Shadow frame operations - Pure DOP functions
//!
//! Builds the per-frame plan: refresh stale blocker outlines, then one draw
//! per (blocker, emitter) pair into the initial map, then the reduction of
//! the initial map into the final 0-360 degree map.

use super::frame_data::{
    ShadowDrawCommand, ShadowFramePlan, ShadowMapFormat, ShadowMapTargetDesc, ShadowMapTargets,
    TextureFilter, TextureWrap,
};
use crate::config::ShadowConfig;
use crate::constants::shadow_map::CLEAR_DEPTH;
use crate::emitter::shadow_caster_uniform;
use crate::registry::{refresh_blocker_outlines, ShadowRegistry};
use crate::slots::shadow_map_params;

/// Targets sized from the config. Both have one row per emitter slot.
pub fn shadow_map_targets(config: &ShadowConfig) -> ShadowMapTargets {
    let initial_width =
        (config.shadow_map_resolution as f32 * config.initial_map_scale).round() as u32;

    ShadowMapTargets {
        initial: ShadowMapTargetDesc {
            label: "Shadow Map Initial",
            width: initial_width,
            height: config.max_emitter_slots,
            format: ShadowMapFormat::R16Float,
            filter: TextureFilter::Nearest,
            wrap: TextureWrap::Repeat,
            clear_value: Some(CLEAR_DEPTH),
        },
        reduced: ShadowMapTargetDesc {
            label: "Shadow Map Final",
            width: config.shadow_map_resolution,
            height: config.max_emitter_slots,
            format: ShadowMapFormat::R16Float,
            filter: TextureFilter::Nearest,
            wrap: TextureWrap::Repeat,
            clear_value: None,
        },
    }
}

/// Plan the shadow map passes for the current registry state
pub fn plan_shadow_frame(registry: &mut ShadowRegistry) -> ShadowFramePlan {
    let rebuilt_outlines = refresh_blocker_outlines(registry);
    let config = &registry.config;

    let slotted: Vec<_> = registry
        .emitters
        .iter()
        .filter_map(|entry| {
            entry.slot.map(|slot| {
                let params =
                    shadow_map_params(slot, config.max_emitter_slots, config.row_origin_flipped);
                (entry.id, slot, shadow_caster_uniform(&entry.emitter, params))
            })
        })
        .collect();
    let skipped_emitters = registry.emitters.len() - slotted.len();

    let mut draws = Vec::with_capacity(registry.blockers.len() * slotted.len());
    for blocker in &registry.blockers {
        for &(emitter, slot, uniform) in &slotted {
            draws.push(ShadowDrawCommand {
                blocker: blocker.id,
                emitter,
                slot,
                transform: blocker.transform,
                uniform,
            });
        }
    }

    if skipped_emitters > 0 {
        log::warn!(
            "[plan_shadow_frame] {} emitters hold no shadow map row and cast no shadows",
            skipped_emitters
        );
    }
    log::debug!(
        "[plan_shadow_frame] {} blockers x {} emitters = {} draws, {} outlines rebuilt",
        registry.blockers.len(),
        slotted.len(),
        draws.len(),
        rebuilt_outlines
    );

    ShadowFramePlan {
        targets: shadow_map_targets(config),
        draws,
        skipped_emitters,
        rebuilt_outlines,
    }
}

/// CPU reference of the reduction pass for one row.
///
/// Texel `i` of the final row takes the nearest blocker of angle `i` and of
/// the same angle one full turn later (`i + resolution`) in the initial row.
pub fn fold_shadow_row(initial_row: &[f32], resolution: usize) -> Vec<f32> {
    (0..resolution)
        .map(|i| {
            let first = initial_row.get(i).copied().unwrap_or(CLEAR_DEPTH);
            match initial_row.get(i + resolution) {
                Some(&wrapped) => first.min(wrapped),
                None => first,
            }
        })
        .collect()
}
