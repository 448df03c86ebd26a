//! Shadow frame data - Pure DOP
//!
//! Describes the render targets and draws a backend must issue for one
//! frame. Nothing here owns GPU resources.

use crate::emitter::ShadowCasterUniform;
use crate::registry::{BlockerId, EmitterId};
use crate::slots::EmitterSlot;
use glam::Mat4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowMapFormat {
    /// Single channel half float
    R16Float,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureWrap {
    Repeat,
}

/// One render target, one row per emitter slot
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowMapTargetDesc {
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
    pub format: ShadowMapFormat,
    pub filter: TextureFilter,
    pub wrap: TextureWrap,
    /// Value the target is cleared to before drawing, if any
    pub clear_value: Option<f32>,
}

/// Initial (540 degree) and final (360 degree) shadow maps
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowMapTargets {
    pub initial: ShadowMapTargetDesc,
    pub reduced: ShadowMapTargetDesc,
}

/// Draw of one blocker outline into one emitter's row of the initial map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowDrawCommand {
    pub blocker: BlockerId,
    pub emitter: EmitterId,
    pub slot: EmitterSlot,
    pub transform: Mat4,
    pub uniform: ShadowCasterUniform,
}

/// Everything the backend needs to render the shadow maps for a frame
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowFramePlan {
    pub targets: ShadowMapTargets,

    /// Initial map draws, blockers outer, emitters inner
    pub draws: Vec<ShadowDrawCommand>,

    /// Emitters left out because they hold no row
    pub skipped_emitters: usize,

    /// Blocker outlines rebuilt while planning
    pub rebuilt_outlines: usize,
}
