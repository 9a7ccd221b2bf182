//! OpenGL pipeline snapshot.
//!
//! Textures, images and uniform buffers are bound to context-global units rather than per stage;
//! shaders reach them through the program's bindpoint mapping.

use pipescope_types::{
    PixelValue, ResourceFormat, ResourceId, Scissor, ShaderBindpointMapping, ShaderReflection,
    Viewport,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Shader {
    pub program_resource_id: ResourceId,
    pub shader_resource_id: ResourceId,
    pub reflection: Option<ShaderReflection>,
    pub bindpoint_mapping: ShaderBindpointMapping,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexAttribute {
    /// `false` when the attribute array is disabled and `generic_value` is read instead.
    pub enabled: bool,
    pub format: ResourceFormat,
    pub generic_value: PixelValue,
    pub vertex_buffer_slot: u32,
    pub byte_offset: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexBuffer {
    pub resource_id: ResourceId,
    pub byte_stride: u32,
    pub byte_offset: u64,
    pub instance_divisor: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexInput {
    pub vertex_array_object: ResourceId,
    pub attributes: Vec<VertexAttribute>,
    pub vertex_buffers: Vec<VertexBuffer>,
    pub index_buffer: ResourceId,
    pub primitive_restart: bool,
    pub restart_index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Texture {
    pub resource_id: ResourceId,
    pub first_mip: u32,
    pub first_slice: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageLoadStore {
    pub resource_id: ResourceId,
    pub mip_level: u32,
    pub slice: u32,
    pub image_format: ResourceFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Buffer {
    pub resource_id: ResourceId,
    pub byte_offset: u64,
    pub byte_size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    pub resource_id: ResourceId,
    pub slice: u32,
    pub mip_level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fbo {
    pub resource_id: ResourceId,
    pub color_attachments: Vec<Attachment>,
    pub depth_attachment: Attachment,
    pub stencil_attachment: Attachment,
    /// Color attachment index per draw buffer; negative for `GL_NONE`.
    pub draw_buffers: Vec<i32>,
    pub read_buffer: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Framebuffer {
    pub draw_fbo: Fbo,
    pub read_fbo: Fbo,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rasterizer {
    pub viewports: Vec<Viewport>,
    pub scissors: Vec<Scissor>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    pub vertex_shader: Shader,
    pub tess_control_shader: Shader,
    pub tess_eval_shader: Shader,
    pub geometry_shader: Shader,
    pub fragment_shader: Shader,
    pub compute_shader: Shader,
    pub vertex_input: VertexInput,
    pub textures: Vec<Texture>,
    pub images: Vec<ImageLoadStore>,
    pub uniform_buffers: Vec<Buffer>,
    pub framebuffer: Framebuffer,
    pub rasterizer: Rasterizer,
}
