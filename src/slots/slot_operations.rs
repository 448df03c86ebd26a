//! Shadow map slot operations - Pure DOP functions
//!
//! Allocation scans bits in ascending order and hands out the first free
//! row. Running out of rows is reported, freeing a row that is not held is a
//! caller bug and panics.

use super::slot_data::{EmitterSlot, ShadowMapParams, SlotAllocatorData};
use crate::constants::slots::SLOT_MASK_BITS;
use crate::error::{ShadowError, ShadowResult};

/// Create an empty allocator with `max_slots` rows
pub fn create_slot_allocator(max_slots: u32) -> SlotAllocatorData {
    assert!(
        max_slots > 0 && max_slots <= SLOT_MASK_BITS,
        "create_slot_allocator: max_slots {} must be in 1..={}",
        max_slots,
        SLOT_MASK_BITS
    );
    SlotAllocatorData { mask: 0, max_slots }
}

/// Take the lowest free row
pub fn allocate_slot(allocator: &mut SlotAllocatorData) -> ShadowResult<EmitterSlot> {
    for index in 0..allocator.max_slots {
        let bit = 1u64 << index;
        if allocator.mask & bit == 0 {
            allocator.mask |= bit;
            return Ok(EmitterSlot(index));
        }
    }

    log::error!(
        "[allocate_slot] Unable to allocate slot: all {} shadow map rows are held",
        allocator.max_slots
    );
    Err(ShadowError::SlotsExhausted {
        max_slots: allocator.max_slots,
    })
}

/// Release a held row
pub fn free_slot(allocator: &mut SlotAllocatorData, slot: EmitterSlot) {
    assert!(
        slot.0 < allocator.max_slots,
        "free_slot: slot {} out of range for {} slots",
        slot.0,
        allocator.max_slots
    );
    let bit = 1u64 << slot.0;
    assert!(
        allocator.mask & bit != 0,
        "free_slot: slot {} is not allocated",
        slot.0
    );
    allocator.mask &= !bit;
}

pub fn is_slot_allocated(allocator: &SlotAllocatorData, slot: EmitterSlot) -> bool {
    slot.0 < allocator.max_slots && allocator.mask & (1u64 << slot.0) != 0
}

pub fn allocated_slot_count(allocator: &SlotAllocatorData) -> u32 {
    allocator.mask.count_ones()
}

pub fn free_slot_count(allocator: &SlotAllocatorData) -> u32 {
    allocator.max_slots - allocated_slot_count(allocator)
}

/// Read/write coordinates of a slot's row.
///
/// `row_origin_flipped` comes from the rendering backend: set it when texture
/// rows are addressed from the opposite end to clip space.
pub fn shadow_map_params(
    slot: EmitterSlot,
    max_slots: u32,
    row_origin_flipped: bool,
) -> ShadowMapParams {
    let read = (slot.0 as f32 + 0.5) / max_slots as f32;
    let write = (read - 0.5) * 2.0;

    ShadowMapParams {
        read: if row_origin_flipped { 1.0 - read } else { read },
        write,
    }
}

/// Params packed the way the shaders expect them: (read, write, 0, 0)
pub fn shadow_map_params_vec4(params: ShadowMapParams) -> [f32; 4] {
    [params.read, params.write, 0.0, 0.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::slots::MAX_EMITTER_SLOTS;
    use std::collections::HashSet;

    #[test]
    fn test_allocates_until_exhausted() {
        let mut allocator = create_slot_allocator(MAX_EMITTER_SLOTS);
        let mut seen = HashSet::new();

        for _ in 0..MAX_EMITTER_SLOTS {
            let slot = allocate_slot(&mut allocator).expect("slot available");
            assert!(slot.0 < MAX_EMITTER_SLOTS);
            assert!(seen.insert(slot));
        }

        assert!(matches!(
            allocate_slot(&mut allocator),
            Err(ShadowError::SlotsExhausted { max_slots: 64 })
        ));
        assert_eq!(free_slot_count(&allocator), 0);
    }

    #[test]
    fn test_ascending_first_fit() {
        let mut allocator = create_slot_allocator(8);
        assert_eq!(allocate_slot(&mut allocator).ok(), Some(EmitterSlot(0)));
        assert_eq!(allocate_slot(&mut allocator).ok(), Some(EmitterSlot(1)));
        assert_eq!(allocate_slot(&mut allocator).ok(), Some(EmitterSlot(2)));
    }

    #[test]
    fn test_freed_slot_is_reused() {
        let mut allocator = create_slot_allocator(4);
        for _ in 0..4 {
            allocate_slot(&mut allocator).expect("slot available");
        }

        free_slot(&mut allocator, EmitterSlot(2));
        assert!(!is_slot_allocated(&allocator, EmitterSlot(2)));
        assert_eq!(allocate_slot(&mut allocator).ok(), Some(EmitterSlot(2)));
        assert_eq!(allocated_slot_count(&allocator), 4);
    }

    #[test]
    #[should_panic(expected = "is not allocated")]
    fn test_double_free_panics() {
        let mut allocator = create_slot_allocator(4);
        let slot = allocate_slot(&mut allocator).expect("slot available");
        free_slot(&mut allocator, slot);
        free_slot(&mut allocator, slot);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_free_panics() {
        let mut allocator = create_slot_allocator(4);
        free_slot(&mut allocator, EmitterSlot(4));
    }

    #[test]
    #[should_panic(expected = "must be in 1..=64")]
    fn test_allocator_wider_than_mask_panics() {
        create_slot_allocator(65);
    }

    #[test]
    fn test_row_params() {
        let params = shadow_map_params(EmitterSlot(0), 64, false);
        assert!((params.read - 0.0078125).abs() < 1e-7);
        assert!((params.write + 0.984375).abs() < 1e-7);

        let flipped = shadow_map_params(EmitterSlot(0), 64, true);
        assert!((flipped.read - 0.9921875).abs() < 1e-7);
        assert_eq!(flipped.write, params.write);
    }

    #[test]
    fn test_last_row_params() {
        let params = shadow_map_params(EmitterSlot(63), 64, false);
        assert!((params.read - 0.9921875).abs() < 1e-7);
        assert!((params.write - 0.984375).abs() < 1e-7);
        assert_eq!(shadow_map_params_vec4(params), [params.read, params.write, 0.0, 0.0]);
    }
}
