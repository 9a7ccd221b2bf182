use pipescope_types::ResourceFormat;
use serde::{Deserialize, Serialize};

/// `D3D11_APPEND_ALIGNED_ELEMENT`: the element starts where the previous element in the same input
/// slot ended.
pub const APPEND_ALIGNED_ELEMENT: u32 = u32::MAX;

/// One element of a D3D-style input layout declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutElement {
    pub semantic_name: String,
    pub semantic_index: u32,
    pub format: ResourceFormat,
    pub input_slot: u32,
    /// Either an explicit byte offset or [`APPEND_ALIGNED_ELEMENT`].
    pub byte_offset: u32,
    pub per_instance: bool,
    pub instance_data_step_rate: u32,
}

impl LayoutElement {
    pub fn is_append_aligned(&self) -> bool {
        self.byte_offset == APPEND_ALIGNED_ELEMENT
    }
}
