//! Backend-neutral pipeline-state data model.
//!
//! These are the plain value types that every pipeline-state query produces, plus the shader
//! reflection / bindpoint-mapping tables that snapshots carry. Nothing in here knows which
//! graphics API a capture came from.

mod bound;
mod format;
mod id;
mod reflection;
mod stage;

pub use bound::{
    Bindpoint, BoundCBuffer, BoundResource, BoundResourceArray, BoundVBuffer, Scissor,
    VertexInputAttribute, Viewport,
};
pub use format::{CompType, PixelValue, ResourceFormat, ResourceFormatType};
pub use id::ResourceId;
pub use reflection::{ConstantBlock, ShaderBindpointMapping, ShaderReflection, SigParameter};
pub use stage::{ApiFamily, GraphicsApi, ShaderStage, ShaderStageMask, StageError};
