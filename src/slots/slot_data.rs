//! Shadow map slot data - Pure DOP
//!
//! NO METHODS. Just data.
//! Allocation and row parameters live in slot_operations.rs

use bytemuck::{Pod, Zeroable};

/// Row of the shared shadow map owned by one emitter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmitterSlot(pub u32);

/// Bitmask pool of shadow map rows. Bit i set means row i is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotAllocatorData {
    pub mask: u64,
    pub max_slots: u32,
}

/// Parameters used to address an emitter's row of the shadow map
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShadowMapParams {
    /// Row center in UV space (0..1), flipped for bottom-up backends
    pub read: f32,
    /// Row center in clip space (-1..+1)
    pub write: f32,
}
