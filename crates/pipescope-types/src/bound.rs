use serde::{Deserialize, Serialize};

use crate::format::{CompType, PixelValue, ResourceFormat};
use crate::id::ResourceId;

/// Logical `(space, slot)` coordinate of a shader binding.
///
/// `space` is the register space (D3D12) or descriptor set (Vulkan) and `0` elsewhere. Mapping
/// tables use negative values for bindings the compiler never assigned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Bindpoint {
    pub space: i32,
    pub slot: i32,
}

impl Bindpoint {
    pub const fn new(space: i32, slot: i32) -> Self {
        Self { space, slot }
    }

    /// `(space, slot)` as table indices, or `None` if either half is negative.
    pub fn indices(&self) -> Option<(usize, usize)> {
        Some((
            usize::try_from(self.space).ok()?,
            usize::try_from(self.slot).ok()?,
        ))
    }
}

/// One view binding as seen by a shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundResource {
    pub resource_id: ResourceId,
    pub first_mip: i32,
    pub first_slice: i32,
    pub type_hint: CompType,
}

impl Default for BoundResource {
    fn default() -> Self {
        Self {
            resource_id: ResourceId::NULL,
            first_mip: -1,
            first_slice: -1,
            type_hint: CompType::Typeless,
        }
    }
}

impl BoundResource {
    pub fn is_bound(&self) -> bool {
        !self.resource_id.is_null()
    }
}

/// All physical resources behind one bindpoint (more than one for descriptor arrays).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoundResourceArray {
    pub bind_point: Bindpoint,
    pub resources: Vec<BoundResource>,
}

impl BoundResourceArray {
    pub fn new(bind_point: Bindpoint, resources: Vec<BoundResource>) -> Self {
        Self {
            bind_point,
            resources,
        }
    }

    pub fn single(bind_point: Bindpoint, resource: BoundResource) -> Self {
        Self::new(bind_point, vec![resource])
    }
}

/// A vertex or index buffer binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BoundVBuffer {
    pub resource_id: ResourceId,
    pub byte_offset: u64,
    pub byte_stride: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BoundCBuffer {
    pub resource_id: ResourceId,
    pub byte_offset: u64,
    pub byte_size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scissor {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub enabled: bool,
}

/// A vertex shader input as reconstructed from the input-assembly state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VertexInputAttribute {
    pub name: String,
    pub vertex_buffer: i32,
    pub byte_offset: u32,
    pub per_instance: bool,
    pub instance_rate: i32,
    pub format: ResourceFormat,
    /// Set when the bound vertex shader actually reads this attribute.
    pub used: bool,
    /// Set when `generic_value` replaces buffer data (attribute fetch disabled).
    pub generic_enabled: bool,
    pub generic_value: PixelValue,
}
