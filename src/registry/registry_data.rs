//! Shadow Registry Data - Pure DOP
//!
//! NO METHODS. Just data.
//! The registry is owned by the host and passed to every operation in
//! registry_operations.rs. There is no global state.

use crate::config::ShadowConfig;
use crate::emitter::EmitterData;
use crate::geometry::TriangleMesh;
use crate::outline::{OutlineCache, OutlineMode};
use crate::slots::{EmitterSlot, SlotAllocatorData};
use glam::Mat4;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockerId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmitterId(pub u32);

/// Registered blocker and its cached outline
#[derive(Debug, Clone)]
pub struct BlockerEntry {
    pub id: BlockerId,

    /// Source mesh as handed over by the host
    pub mesh: Arc<TriangleMesh>,

    /// Bumped every time `mesh` is replaced
    pub generation: u64,

    /// Local to world transform used when drawing the outline
    pub transform: Mat4,

    pub mode: OutlineMode,
    pub outline: OutlineCache,
}

/// Registered emitter and the shadow map row it holds
#[derive(Debug, Clone)]
pub struct EmitterEntry {
    pub id: EmitterId,
    pub emitter: EmitterData,

    /// None when every row was taken at registration time
    pub slot: Option<EmitterSlot>,
}

/// All active blockers and emitters, in registration order
#[derive(Debug, Clone)]
pub struct ShadowRegistry {
    pub config: ShadowConfig,
    pub slots: SlotAllocatorData,
    pub blockers: Vec<BlockerEntry>,
    pub emitters: Vec<EmitterEntry>,
    pub next_blocker_id: u32,
    pub next_emitter_id: u32,
}

/// Registry shared between threads; allocate and free go through the lock
pub type SharedShadowRegistry = Arc<RwLock<ShadowRegistry>>;
