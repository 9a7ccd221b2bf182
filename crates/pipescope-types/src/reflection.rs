//! Shader reflection and the per-bind bindpoint mapping that accompanies it.
//!
//! Reflection lists what a shader *declares* (input signature, constant blocks) in the shader's
//! own numbering. The bindpoint mapping translates that numbering to the API's binding
//! coordinates for the particular pipeline the shader was bound in.

use serde::{Deserialize, Serialize};

use crate::bound::Bindpoint;
use crate::format::CompType;

/// One element of a shader's input or output signature.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SigParameter {
    /// Source-level variable name (GLSL) or a generated name.
    pub var_name: String,
    /// The semantic name (e.g. `"POSITION"` or `"TEXCOORD"`).
    pub semantic_name: String,
    /// The semantic index (e.g. `0` for `TEXCOORD0`).
    pub semantic_index: u32,
    pub reg_index: u32,
    pub comp_count: u8,
    pub comp_type: CompType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantBlock {
    pub name: String,
    /// Index into [`ShaderBindpointMapping::constant_blocks`]; negative when unassigned.
    pub bind_point: i32,
    pub byte_size: u32,
    /// `false` for push-constant style blocks that have no backing buffer.
    pub buffer_backed: bool,
}

impl Default for ConstantBlock {
    fn default() -> Self {
        Self {
            name: String::new(),
            bind_point: 0,
            byte_size: 0,
            buffer_backed: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderReflection {
    pub entry_point: String,
    pub input_signature: Vec<SigParameter>,
    pub constant_blocks: Vec<ConstantBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderBindpointMapping {
    /// Attribute (GL) or location (Vulkan) index to input-signature index; `-1` if unused.
    pub input_attributes: Vec<i32>,
    pub constant_blocks: Vec<Bindpoint>,
    pub read_only_resources: Vec<Bindpoint>,
    pub read_write_resources: Vec<Bindpoint>,
}

impl ShaderBindpointMapping {
    pub fn input_attribute(&self, index: usize) -> Option<i32> {
        self.input_attributes.get(index).copied()
    }

    /// Looks up a constant block's bindpoint by the block's reflected `bind_point`.
    pub fn constant_block(&self, bind_point: i32) -> Option<Bindpoint> {
        let idx = usize::try_from(bind_point).ok()?;
        self.constant_blocks.get(idx).copied()
    }
}
