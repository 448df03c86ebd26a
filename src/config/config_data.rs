//! Shadow configuration data - Pure DOP
//!
//! NO METHODS. Just data.
//! Loading and validation happen in config_operations.rs

use crate::constants::{shadow_map, slots};
use crate::outline::OutlineMode;
use serde::{Deserialize, Serialize};

/// Shadow system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Number of shadow map rows (and emitters that can cast shadows at once)
    pub max_emitter_slots: u32,

    /// Width of the final shadow map in texels
    pub shadow_map_resolution: u32,

    /// Width multiplier of the initial (540 degree) shadow map
    pub initial_map_scale: f32,

    /// Set when the backend addresses texture rows bottom-up
    pub row_origin_flipped: bool,

    /// Output mode used when a blocker does not ask for one
    pub default_outline_mode: OutlineMode,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            max_emitter_slots: slots::MAX_EMITTER_SLOTS,
            shadow_map_resolution: shadow_map::SHADOW_MAP_RESOLUTION,
            initial_map_scale: shadow_map::INITIAL_MAP_SCALE,
            row_origin_flipped: false,
            default_outline_mode: OutlineMode::Blocker,
        }
    }
}
