//! Shadow system constants
//!
//! Defaults shared by the slot allocator, the frame planner and the emitter
//! encoders. Runtime overrides go through `config::ShadowConfig`.

use static_assertions::const_assert;

/// Shadow map row allocation
pub mod slots {
    /// Maximum number of emitters holding a shadow map row at once.
    /// Must match the height of the shadow map textures.
    pub const MAX_EMITTER_SLOTS: u32 = 64;

    /// Width of the allocation bitmask in bits
    pub const SLOT_MASK_BITS: u32 = u64::BITS;
}

/// Shadow map texture layout
pub mod shadow_map {
    /// Width of the final (0-360 degree) shadow map in texels
    pub const SHADOW_MAP_RESOLUTION: u32 = 1024;

    /// The initial map covers 540 degrees so edges crossing 360 are not clipped
    pub const INITIAL_MAP_SCALE: f32 = 1.5;

    /// Clear value of the initial map (no blocker along the ray)
    pub const CLEAR_DEPTH: f32 = 1.0;
}

/// Emitter parameter ranges
pub mod emitter {
    pub const MAX_SPREAD_DEGREES: f32 = 360.0;
    pub const MAX_FALLOFF_EXPONENT: f32 = 20.0;

    /// Spread above which the emitter is drawn with the full quad
    pub const HALF_QUAD_MAX_SPREAD_DEGREES: f32 = 180.0;

    /// Lower bound of the emitter quad y scale
    pub const MIN_QUAD_SCALE_Y: f32 = 0.001;

    pub const DEFAULT_COLOR: [f32; 4] = [0.2, 0.72, 0.2, 1.0];
    pub const DEFAULT_SPREAD_DEGREES: f32 = 180.0;
}

const_assert!(slots::MAX_EMITTER_SLOTS <= slots::SLOT_MASK_BITS);
const_assert!(slots::MAX_EMITTER_SLOTS > 0);
