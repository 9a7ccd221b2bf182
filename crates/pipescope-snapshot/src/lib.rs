//! Backend-specific pipeline snapshots.
//!
//! A snapshot is the fully decoded pipeline state of one captured API at one event, exactly as the
//! replay engine hands it over. Each API gets its own object model (see the per-backend modules);
//! [`Snapshot`] is the tagged union the query layer dispatches on.
//!
//! Snapshots are plain data: once published they are never mutated, so they can be shared between
//! threads behind an `Arc` without further synchronization.

pub mod d3d11;
pub mod d3d12;
pub mod gl;
mod layout;
pub mod vulkan;

use std::path::Path;

use pipescope_types::GraphicsApi;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use layout::{LayoutElement, APPEND_ALIGNED_ELEMENT};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Snapshot {
    D3D11(d3d11::State),
    D3D12(d3d12::State),
    OpenGl(gl::State),
    Vulkan(vulkan::State),
}

impl Snapshot {
    pub fn api(&self) -> GraphicsApi {
        match self {
            Self::D3D11(_) => GraphicsApi::D3D11,
            Self::D3D12(_) => GraphicsApi::D3D12,
            Self::OpenGl(_) => GraphicsApi::OpenGL,
            Self::Vulkan(_) => GraphicsApi::Vulkan,
        }
    }

    /// Decodes a snapshot from its JSON form, e.g. `{"Vulkan": {...}}`.
    ///
    /// Missing fields take their defaults so fixtures only need to spell out the state they care
    /// about.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<d3d11::State> for Snapshot {
    fn from(state: d3d11::State) -> Self {
        Self::D3D11(state)
    }
}

impl From<d3d12::State> for Snapshot {
    fn from(state: d3d12::State) -> Self {
        Self::D3D12(state)
    }
}

impl From<gl::State> for Snapshot {
    fn from(state: gl::State) -> Self {
        Self::OpenGl(state)
    }
}

impl From<vulkan::State> for Snapshot {
    fn from(state: vulkan::State) -> Self {
        Self::Vulkan(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipescope_types::{CompType, ResourceId, ShaderStageMask};
    use pretty_assertions::assert_eq;

    #[test]
    fn sparse_json_fills_defaults() {
        let snapshot = Snapshot::from_json(
            r#"{
                "D3D12": {
                    "pipeline_resource_id": 17,
                    "input_assembly": { "index_strip_cut_value": 65535 }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.api(), GraphicsApi::D3D12);
        let Snapshot::D3D12(state) = snapshot else {
            panic!("expected a D3D12 snapshot");
        };
        assert_eq!(state.pipeline_resource_id, ResourceId::new(17));
        assert_eq!(state.input_assembly.index_strip_cut_value, 0xFFFF);
        assert!(state.vertex_shader.reflection.is_none());
        assert!(state.output_merger.render_targets.is_empty());
    }

    #[test]
    fn stage_flags_and_formats_decode() {
        let snapshot = Snapshot::from_json(
            r#"{
                "Vulkan": {
                    "graphics": {
                        "descriptor_sets": [{
                            "bindings": [{
                                "descriptor_count": 1,
                                "stage_flags": "VERTEX | FRAGMENT",
                                "bind_type": "ReadOnlyImage",
                                "binds": [{
                                    "resource_resource_id": 5,
                                    "view_format": { "kind": "Regular", "comp_count": 4, "comp_byte_width": 1, "comp_type": "UNorm" }
                                }]
                            }]
                        }]
                    }
                }
            }"#,
        )
        .unwrap();

        let Snapshot::Vulkan(state) = snapshot else {
            panic!("expected a Vulkan snapshot");
        };
        let binding = &state.graphics.descriptor_sets[0].bindings[0];
        assert_eq!(
            binding.stage_flags,
            ShaderStageMask::VERTEX | ShaderStageMask::FRAGMENT
        );
        assert_eq!(binding.bind_type, vulkan::BindType::ReadOnlyImage);
        assert_eq!(binding.binds[0].view_format.comp_type, CompType::UNorm);
        assert_eq!(state.current_pass.renderpass.depthstencil_attachment, -1);
    }

    #[test]
    fn json_round_trip_preserves_state() {
        let mut state = gl::State::default();
        state.vertex_input.primitive_restart = true;
        state.vertex_input.restart_index = 0xFFFF;
        state.textures.push(gl::Texture {
            resource_id: ResourceId::new(3),
            first_mip: 1,
            first_slice: 0,
        });
        let snapshot = Snapshot::from(state);

        let json = snapshot.to_json().unwrap();
        assert_eq!(Snapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = Snapshot::from_json(r#"{"Metal": {}}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::Decode(_)));
    }
}
