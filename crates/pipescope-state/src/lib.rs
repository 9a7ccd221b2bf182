//! Backend-neutral pipeline-state queries.
//!
//! [`PipelineState`] wraps whichever backend [`Snapshot`] the replay engine published and answers
//! the same questions for all of them: which shader is bound at a stage, which constant buffer
//! backs a reflected block, which textures and images a stage can see, what the vertex layout
//! looks like, and which render targets are bound.
//!
//! Every query is a pure function of the current snapshot. Nothing is cached between calls, and no
//! query fails: when nothing is loaded, or the caller asks for something that is not bound, the
//! result is the type's unbound default (`ResourceId::NULL`, an empty `Vec`, ...).
//!
//! The binding models being reconciled:
//! - D3D11: flat per-stage register arrays.
//! - D3D12: per-stage register spaces laid out by the root signature, possibly with gaps.
//! - OpenGL: context-global texture/image/uniform-buffer units.
//! - Vulkan: descriptor sets of the bound graphics or compute pipeline.

mod buffers;
mod config;
mod raster;
mod resolve;
mod resources;
mod stage;
mod state;
mod vertex;

pub use config::{ConfigError, PipelineStateConfig};
pub use pipescope_snapshot::Snapshot;
pub use resolve::{ResolveError, PUSH_CONSTANT_NOMINAL_SIZE};
pub use stage::{ResourceNames, StageDescriptor};
pub use state::PipelineState;
pub use vertex::{reconstruct_layout, MAX_INPUT_SLOTS};
