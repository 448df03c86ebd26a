// Hearth Shadow2D - Data-Oriented Programming (DOP) Architecture
//
// 2D dynamic shadow geometry for top-down lighting:
// - Blocker meshes are reduced to their outline edges
// - Every emitter owns one row of a shared 1D polar shadow map
//
// Data lives in *_data modules, transformations in *_operations modules.
// The host owns a ShadowRegistry and passes it to every call; there is no
// global state.

// Constants module
pub mod constants;

// Core modules
pub mod config;
pub mod error;

// Geometry and outline extraction
pub mod geometry;
pub mod outline;

// Shadow map rows and emitters
pub mod emitter;
pub mod slots;

// Host integration
pub mod frame;
pub mod registry;

pub use config::{load_config_from_file, load_config_from_str, ShadowConfig};
pub use error::{ShadowError, ShadowResult};

// === Core Types ===
pub use geometry::{MeshTopology, SubMesh, Triangle, TriangleMesh};
pub use outline::{
    compute_outline, extract_outlines, BlockerMesh, BlockerVertex, OutlineMesh, OutlineMode,
    OutlineSet, PerimeterMesh,
};
pub use slots::{
    allocate_slot, create_slot_allocator, free_slot, shadow_map_params, EmitterSlot,
    ShadowMapParams, SlotAllocatorData,
};

// === Host Integration ===
pub use emitter::{EmitterData, EmitterLightUniform, ShadowCasterUniform};
pub use frame::{plan_shadow_frame, ShadowDrawCommand, ShadowFramePlan, ShadowMapTargets};
pub use registry::{
    create_registry, create_shared_registry, BlockerId, EmitterId, ShadowRegistry,
    SharedShadowRegistry,
};
