//! D3D12 pipeline snapshot.
//!
//! Per-stage bindings are grouped by register space. A root signature may declare ranges that
//! leave holes in a space; those registers are still present in the arrays but carry
//! [`UNASSIGNED_ROOT_ELEMENT`].

use pipescope_types::{
    ResourceFormat, ResourceId, Scissor, ShaderBindpointMapping, ShaderReflection, Viewport,
};
use serde::{Deserialize, Serialize};

use crate::layout::LayoutElement;

/// Root element index of a register no root-signature element covers.
pub const UNASSIGNED_ROOT_ELEMENT: u32 = u32::MAX;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct View {
    pub root_element: u32,
    pub table_index: u32,
    pub resource_id: ResourceId,
    pub view_format: ResourceFormat,
    pub first_mip: u32,
    pub num_mips: u32,
    pub first_slice: u32,
    pub num_slices: u32,
}

impl View {
    pub fn is_assigned(&self) -> bool {
        self.root_element != UNASSIGNED_ROOT_ELEMENT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantBuffer {
    pub root_element: u32,
    pub table_index: u32,
    pub resource_id: ResourceId,
    pub byte_offset: u64,
    pub byte_size: u32,
}

impl ConstantBuffer {
    pub fn is_assigned(&self) -> bool {
        self.root_element != UNASSIGNED_ROOT_ELEMENT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterSpace {
    pub space_index: u32,
    pub constant_buffers: Vec<ConstantBuffer>,
    pub srvs: Vec<View>,
    pub uavs: Vec<View>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Shader {
    pub resource_id: ResourceId,
    pub reflection: Option<ShaderReflection>,
    pub bindpoint_mapping: ShaderBindpointMapping,
    pub spaces: Vec<RegisterSpace>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexBuffer {
    pub resource_id: ResourceId,
    pub byte_offset: u64,
    pub byte_size: u32,
    pub byte_stride: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexBuffer {
    pub resource_id: ResourceId,
    pub byte_offset: u64,
    pub byte_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputAssembly {
    pub layouts: Vec<LayoutElement>,
    pub vertex_buffers: Vec<VertexBuffer>,
    pub index_buffer: IndexBuffer,
    /// `0` when strip cuts are disabled, otherwise `0xFFFF` or `0xFFFF_FFFF`.
    pub index_strip_cut_value: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rasterizer {
    pub viewports: Vec<Viewport>,
    pub scissors: Vec<Scissor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputMerger {
    pub render_targets: Vec<View>,
    pub depth_target: View,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceState {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceData {
    pub resource_id: ResourceId,
    pub states: Vec<ResourceState>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    pub pipeline_resource_id: ResourceId,
    pub root_signature_resource_id: ResourceId,
    pub vertex_shader: Shader,
    pub hull_shader: Shader,
    pub domain_shader: Shader,
    pub geometry_shader: Shader,
    pub pixel_shader: Shader,
    pub compute_shader: Shader,
    pub input_assembly: InputAssembly,
    pub rasterizer: Rasterizer,
    pub output_merger: OutputMerger,
    pub resource_states: Vec<ResourceData>,
}
