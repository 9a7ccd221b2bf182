//! Backend-neutral queries over captured graphics pipeline state.
//!
//! This crate only re-exports the workspace members:
//! - [`types`]: the neutral vocabulary (stages, resource ids, bindings, formats).
//! - [`snapshot`]: the per-API snapshot object models and the [`Snapshot`] union.
//! - [`state`]: [`PipelineState`], the query surface.

pub use pipescope_snapshot as snapshot;
pub use pipescope_state as state;
pub use pipescope_types as types;

pub use pipescope_snapshot::{Snapshot, SnapshotError};
pub use pipescope_state::{PipelineState, PipelineStateConfig};
