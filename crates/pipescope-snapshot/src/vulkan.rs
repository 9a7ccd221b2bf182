//! Vulkan pipeline snapshot.
//!
//! Resources are reached through the descriptor sets bound to the graphics or compute pipeline;
//! render targets through the current render pass's attachment references into the framebuffer.

use pipescope_types::{
    ResourceFormat, ResourceId, Scissor, ShaderBindpointMapping, ShaderReflection,
    ShaderStageMask, Viewport,
};
use serde::{Deserialize, Serialize};

/// Descriptor type of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BindType {
    #[default]
    Unknown,
    ConstantBuffer,
    Sampler,
    ImageSampler,
    ReadOnlyImage,
    ReadWriteImage,
    ReadOnlyTBuffer,
    ReadWriteTBuffer,
    ReadOnlyBuffer,
    ReadWriteBuffer,
    InputAttachment,
}

impl BindType {
    pub fn is_read_only_resource(self) -> bool {
        matches!(
            self,
            Self::ImageSampler | Self::InputAttachment | Self::ReadOnlyImage | Self::ReadOnlyTBuffer
        )
    }

    pub fn is_read_write_resource(self) -> bool {
        matches!(
            self,
            Self::ReadWriteBuffer | Self::ReadWriteImage | Self::ReadWriteTBuffer
        )
    }
}

/// One array element of a descriptor binding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingElement {
    pub view_resource_id: ResourceId,
    pub resource_resource_id: ResourceId,
    pub sampler_resource_id: ResourceId,
    pub view_format: ResourceFormat,
    pub first_mip: u32,
    pub num_mips: u32,
    pub first_slice: u32,
    pub num_slices: u32,
    pub byte_offset: u64,
    pub byte_size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptorBinding {
    pub descriptor_count: u32,
    pub stage_flags: ShaderStageMask,
    pub bind_type: BindType,
    pub binds: Vec<BindingElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptorSet {
    pub layout_resource_id: ResourceId,
    pub descriptor_set_resource_id: ResourceId,
    pub bindings: Vec<DescriptorBinding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pipeline {
    pub pipeline_resource_id: ResourceId,
    pub pipeline_layout_resource_id: ResourceId,
    pub descriptor_sets: Vec<DescriptorSet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Shader {
    pub resource_id: ResourceId,
    pub entry_point: String,
    pub reflection: Option<ShaderReflection>,
    pub bindpoint_mapping: ShaderBindpointMapping,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexAttribute {
    pub location: u32,
    pub binding: u32,
    pub format: ResourceFormat,
    pub byte_offset: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexBinding {
    pub vertex_buffer_binding: u32,
    pub byte_stride: u32,
    pub per_instance: bool,
    pub instance_divisor: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexBuffer {
    pub resource_id: ResourceId,
    pub byte_offset: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexInput {
    pub attributes: Vec<VertexAttribute>,
    pub bindings: Vec<VertexBinding>,
    pub vertex_buffers: Vec<VertexBuffer>,
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
    pub primitive_restart_enable: bool,
    pub index_buffer: IndexBuffer,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportScissor {
    pub vp: Viewport,
    pub scissor: Scissor,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub viewport_scissors: Vec<ViewportScissor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderPass {
    pub resource_id: ResourceId,
    pub subpass: u32,
    pub input_attachments: Vec<u32>,
    pub color_attachments: Vec<u32>,
    pub resolve_attachments: Vec<u32>,
    /// Framebuffer attachment index of the depth-stencil attachment, or `-1`.
    pub depthstencil_attachment: i32,
}

impl Default for RenderPass {
    fn default() -> Self {
        Self {
            resource_id: ResourceId::NULL,
            subpass: 0,
            input_attachments: Vec::new(),
            color_attachments: Vec::new(),
            resolve_attachments: Vec::new(),
            depthstencil_attachment: -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    pub view_resource_id: ResourceId,
    pub image_resource_id: ResourceId,
    pub view_format: ResourceFormat,
    pub first_mip: u32,
    pub num_mips: u32,
    pub first_slice: u32,
    pub num_slices: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Framebuffer {
    pub resource_id: ResourceId,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentPass {
    pub renderpass: RenderPass,
    pub framebuffer: Framebuffer,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageLayout {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageData {
    pub resource_id: ResourceId,
    pub layouts: Vec<ImageLayout>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    pub compute: Pipeline,
    pub graphics: Pipeline,
    pub vertex_shader: Shader,
    pub tess_control_shader: Shader,
    pub tess_eval_shader: Shader,
    pub geometry_shader: Shader,
    pub fragment_shader: Shader,
    pub compute_shader: Shader,
    pub vertex_input: VertexInput,
    pub input_assembly: InputAssembly,
    pub viewport_scissor: ViewState,
    pub current_pass: CurrentPass,
    pub images: Vec<ImageData>,
}
