//! Slots Module - shadow map row allocation
//!
//! Each registered emitter owns one row of the shared shadow map. The row
//! count must match the height of the shadow map textures.

pub mod slot_data;
pub mod slot_operations;

pub use slot_data::{EmitterSlot, ShadowMapParams, SlotAllocatorData};
pub use slot_operations::{
    allocate_slot, allocated_slot_count, create_slot_allocator, free_slot, free_slot_count,
    is_slot_allocated, shadow_map_params, shadow_map_params_vec4,
};
