//! Shadow Registry operations - Pure DOP functions
//!
//! Explicit register/unregister calls replace engine enable/disable hooks.
//! Registering an emitter takes a shadow map row, unregistering returns it.
//! Passing an id that is not registered is a caller bug and panics.

use super::registry_data::{
    BlockerEntry, BlockerId, EmitterEntry, EmitterId, ShadowRegistry, SharedShadowRegistry,
};
use crate::config::{validate_config, ShadowConfig};
use crate::emitter::{clamp_emitter, EmitterData};
use crate::error::ShadowResult;
use crate::geometry::TriangleMesh;
use crate::outline::{cached_outline, is_cache_current, OutlineCache, OutlineMesh, OutlineMode};
use crate::slots::{
    allocate_slot, create_slot_allocator, free_slot, shadow_map_params, EmitterSlot,
    ShadowMapParams,
};
use glam::Mat4;
use parking_lot::RwLock;
use std::sync::Arc;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Create an empty registry for a validated config
pub fn create_registry(config: ShadowConfig) -> ShadowResult<ShadowRegistry> {
    validate_config(&config)?;
    Ok(ShadowRegistry {
        slots: create_slot_allocator(config.max_emitter_slots),
        config,
        blockers: Vec::new(),
        emitters: Vec::new(),
        next_blocker_id: 0,
        next_emitter_id: 0,
    })
}

pub fn create_shared_registry(config: ShadowConfig) -> ShadowResult<SharedShadowRegistry> {
    Ok(Arc::new(RwLock::new(create_registry(config)?)))
}

// ============================================================================
// BLOCKERS
// ============================================================================

/// Register a blocker using the config's default outline mode
pub fn register_blocker(
    registry: &mut ShadowRegistry,
    mesh: Arc<TriangleMesh>,
    transform: Mat4,
) -> BlockerId {
    let mode = registry.config.default_outline_mode;
    register_blocker_with_mode(registry, mesh, transform, mode)
}

pub fn register_blocker_with_mode(
    registry: &mut ShadowRegistry,
    mesh: Arc<TriangleMesh>,
    transform: Mat4,
    mode: OutlineMode,
) -> BlockerId {
    let id = BlockerId(registry.next_blocker_id);
    registry.next_blocker_id += 1;

    registry.blockers.push(BlockerEntry {
        id,
        mesh,
        generation: 0,
        transform,
        mode,
        outline: OutlineCache::default(),
    });
    id
}

pub fn unregister_blocker(registry: &mut ShadowRegistry, id: BlockerId) {
    let index = blocker_index(registry, id);
    registry.blockers.remove(index);
}

/// Replace a blocker's mesh. The outline is rebuilt on next access.
pub fn set_blocker_mesh(registry: &mut ShadowRegistry, id: BlockerId, mesh: Arc<TriangleMesh>) {
    let index = blocker_index(registry, id);
    let blocker = &mut registry.blockers[index];
    blocker.mesh = mesh;
    blocker.generation += 1;
}

pub fn set_blocker_transform(registry: &mut ShadowRegistry, id: BlockerId, transform: Mat4) {
    let index = blocker_index(registry, id);
    registry.blockers[index].transform = transform;
}

pub fn blocker_generation(registry: &ShadowRegistry, id: BlockerId) -> u64 {
    registry.blockers[blocker_index(registry, id)].generation
}

/// Outline mesh of a blocker, rebuilt first if its mesh changed
pub fn blocker_outline(registry: &mut ShadowRegistry, id: BlockerId) -> &OutlineMesh {
    let index = blocker_index(registry, id);
    let blocker = &mut registry.blockers[index];
    cached_outline(
        &mut blocker.outline,
        &blocker.mesh,
        blocker.generation,
        blocker.mode,
    )
}

/// Rebuild every stale outline, returning how many were rebuilt
pub fn refresh_blocker_outlines(registry: &mut ShadowRegistry) -> usize {
    let mut rebuilt = 0;
    for blocker in &mut registry.blockers {
        if !is_cache_current(&blocker.outline, blocker.generation, blocker.mode) {
            cached_outline(
                &mut blocker.outline,
                &blocker.mesh,
                blocker.generation,
                blocker.mode,
            );
            rebuilt += 1;
        }
    }
    rebuilt
}

pub fn active_blocker_count(registry: &ShadowRegistry) -> usize {
    registry.blockers.len()
}

fn blocker_index(registry: &ShadowRegistry, id: BlockerId) -> usize {
    registry
        .blockers
        .iter()
        .position(|b| b.id == id)
        .unwrap_or_else(|| panic!("blocker {:?} is not registered", id))
}

// ============================================================================
// EMITTERS
// ============================================================================

/// Register an emitter and give it a shadow map row.
///
/// When no row is free the emitter is still registered but casts no
/// shadows until `retry_emitter_slots` finds it a row.
pub fn register_emitter(registry: &mut ShadowRegistry, emitter: EmitterData) -> EmitterId {
    let id = EmitterId(registry.next_emitter_id);
    registry.next_emitter_id += 1;

    let slot = allocate_slot(&mut registry.slots).ok();
    if slot.is_none() {
        log::warn!(
            "[register_emitter] Emitter {:?} registered without a shadow map row",
            id
        );
    }

    registry.emitters.push(EmitterEntry {
        id,
        emitter: clamp_emitter(emitter),
        slot,
    });
    id
}

/// Remove an emitter and release its row
pub fn unregister_emitter(registry: &mut ShadowRegistry, id: EmitterId) {
    let index = emitter_index(registry, id);
    let entry = registry.emitters.remove(index);
    if let Some(slot) = entry.slot {
        free_slot(&mut registry.slots, slot);
    }
}

pub fn update_emitter(registry: &mut ShadowRegistry, id: EmitterId, emitter: EmitterData) {
    let index = emitter_index(registry, id);
    registry.emitters[index].emitter = clamp_emitter(emitter);
}

pub fn emitter_data(registry: &ShadowRegistry, id: EmitterId) -> &EmitterData {
    &registry.emitters[emitter_index(registry, id)].emitter
}

pub fn emitter_slot(registry: &ShadowRegistry, id: EmitterId) -> Option<EmitterSlot> {
    registry.emitters[emitter_index(registry, id)].slot
}

/// Row parameters for an emitter, None while it holds no row
pub fn emitter_shadow_map_params(
    registry: &ShadowRegistry,
    id: EmitterId,
) -> Option<ShadowMapParams> {
    emitter_slot(registry, id).map(|slot| {
        shadow_map_params(
            slot,
            registry.config.max_emitter_slots,
            registry.config.row_origin_flipped,
        )
    })
}

/// Hand freed rows to emitters that registered while the pool was full,
/// in registration order. Returns how many emitters received a row.
pub fn retry_emitter_slots(registry: &mut ShadowRegistry) -> usize {
    let mut assigned = 0;
    for entry in registry.emitters.iter_mut().filter(|e| e.slot.is_none()) {
        match allocate_slot(&mut registry.slots) {
            Ok(slot) => {
                entry.slot = Some(slot);
                assigned += 1;
            }
            Err(_) => break,
        }
    }
    assigned
}

pub fn active_emitter_count(registry: &ShadowRegistry) -> usize {
    registry.emitters.len()
}

fn emitter_index(registry: &ShadowRegistry, id: EmitterId) -> usize {
    registry
        .emitters
        .iter()
        .position(|e| e.id == id)
        .unwrap_or_else(|| panic!("emitter {:?} is not registered", id))
}
