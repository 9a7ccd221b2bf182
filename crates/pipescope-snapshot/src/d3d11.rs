//! D3D11 pipeline snapshot.
//!
//! D3D11 binds everything in flat per-stage register arrays (`b#`, `t#`, `u#`). Pixel-stage UAVs
//! live on the output merger and share slot numbering with render targets, so the output merger
//! only stores UAVs from `uav_start_slot` onward.

use pipescope_types::{
    ResourceFormat, ResourceId, Scissor, ShaderBindpointMapping, ShaderReflection, Viewport,
};
use serde::{Deserialize, Serialize};

use crate::layout::LayoutElement;

/// A shader resource, unordered access, render target or depth-stencil view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct View {
    pub view_resource_id: ResourceId,
    pub resource_resource_id: ResourceId,
    pub view_format: ResourceFormat,
    pub first_mip: u32,
    pub num_mips: u32,
    pub first_slice: u32,
    pub num_slices: u32,
}

/// A `b#` binding. Offset and size are counted in 16-byte constant vectors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantBuffer {
    pub resource_id: ResourceId,
    pub vec_offset: u32,
    pub vec_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Shader {
    pub resource_id: ResourceId,
    pub reflection: Option<ShaderReflection>,
    pub bindpoint_mapping: ShaderBindpointMapping,
    pub srvs: Vec<View>,
    pub uavs: Vec<View>,
    pub constant_buffers: Vec<ConstantBuffer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexBuffer {
    pub resource_id: ResourceId,
    pub byte_stride: u32,
    pub byte_offset: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexBuffer {
    pub resource_id: ResourceId,
    pub byte_offset: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputAssembly {
    pub layouts: Vec<LayoutElement>,
    /// Reflection of the shader the input layout was created against.
    pub bytecode: Option<ShaderReflection>,
    pub vertex_buffers: Vec<VertexBuffer>,
    pub index_buffer: IndexBuffer,
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
    pub uav_start_slot: u32,
    pub uavs: Vec<View>,
    pub depth_target: View,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    pub vertex_shader: Shader,
    pub hull_shader: Shader,
    pub domain_shader: Shader,
    pub geometry_shader: Shader,
    pub pixel_shader: Shader,
    pub compute_shader: Shader,
    pub input_assembly: InputAssembly,
    pub rasterizer: Rasterizer,
    pub output_merger: OutputMerger,
}
