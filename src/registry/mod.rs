/// Registry Module - active blockers and emitters
///
/// Host-owned replacement for process-wide blocker/emitter lists. Construct
/// one per renderer (or per test) and pass it by reference.

pub mod registry_data;
pub mod registry_operations;

pub use registry_data::{
    BlockerEntry, BlockerId, EmitterEntry, EmitterId, ShadowRegistry, SharedShadowRegistry,
};

pub use registry_operations::{
    // Initialization
    create_registry,
    create_shared_registry,

    // Blockers
    active_blocker_count,
    blocker_generation,
    blocker_outline,
    refresh_blocker_outlines,
    register_blocker,
    register_blocker_with_mode,
    set_blocker_mesh,
    set_blocker_transform,
    unregister_blocker,

    // Emitters
    active_emitter_count,
    emitter_data,
    emitter_shadow_map_params,
    emitter_slot,
    register_emitter,
    retry_emitter_slots,
    unregister_emitter,
    update_emitter,
};
