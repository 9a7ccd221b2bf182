use pipescope_snapshot::Snapshot;
use pipescope_types::BoundVBuffer;

use crate::state::PipelineState;

/// Restart index for APIs where it is fixed (all bits set, whatever the index width).
const FIXED_RESTART_INDEX: u32 = u32::MAX;

impl PipelineState {
    /// The bound index buffer. The stride is always zero; the index width lives on the draw.
    pub fn index_buffer(&self) -> BoundVBuffer {
        let (resource_id, byte_offset) = match self.snapshot() {
            None => return BoundVBuffer::default(),
            Some(Snapshot::D3D11(state)) => {
                let ib = &state.input_assembly.index_buffer;
                (ib.resource_id, ib.byte_offset)
            }
            Some(Snapshot::D3D12(state)) => {
                let ib = &state.input_assembly.index_buffer;
                (ib.resource_id, ib.byte_offset)
            }
            // GL only has a per-draw index offset.
            Some(Snapshot::OpenGl(state)) => (state.vertex_input.index_buffer, 0),
            Some(Snapshot::Vulkan(state)) => {
                let ib = &state.input_assembly.index_buffer;
                (ib.resource_id, ib.byte_offset)
            }
        };
        BoundVBuffer {
            resource_id,
            byte_offset,
            byte_stride: 0,
        }
    }

    /// Bound vertex buffers by input slot.
    pub fn vertex_buffers(&self) -> Vec<BoundVBuffer> {
        match self.snapshot() {
            None => Vec::new(),
            Some(Snapshot::D3D11(state)) => state
                .input_assembly
                .vertex_buffers
                .iter()
                .map(|vb| BoundVBuffer {
                    resource_id: vb.resource_id,
                    byte_offset: vb.byte_offset,
                    byte_stride: vb.byte_stride,
                })
                .collect(),
            Some(Snapshot::D3D12(state)) => state
                .input_assembly
                .vertex_buffers
                .iter()
                .map(|vb| BoundVBuffer {
                    resource_id: vb.resource_id,
                    byte_offset: vb.byte_offset,
                    byte_stride: vb.byte_stride,
                })
                .collect(),
            Some(Snapshot::OpenGl(state)) => state
                .vertex_input
                .vertex_buffers
                .iter()
                .map(|vb| BoundVBuffer {
                    resource_id: vb.resource_id,
                    byte_offset: vb.byte_offset,
                    byte_stride: vb.byte_stride,
                })
                .collect(),
            // Binding descriptions define the slots; a binding may have no buffer bound yet.
            Some(Snapshot::Vulkan(state)) => {
                let input = &state.vertex_input;
                input
                    .bindings
                    .iter()
                    .enumerate()
                    .map(|(i, binding)| {
                        let buffer = input.vertex_buffers.get(i);
                        BoundVBuffer {
                            resource_id: buffer.map(|vb| vb.resource_id).unwrap_or_default(),
                            byte_offset: buffer.map_or(0, |vb| vb.byte_offset),
                            byte_stride: binding.byte_stride,
                        }
                    })
                    .collect()
            }
        }
    }

    pub fn is_strip_restart_enabled(&self) -> bool {
        match self.snapshot() {
            None => false,
            Some(Snapshot::D3D11(_)) => true,
            Some(Snapshot::D3D12(state)) => state.input_assembly.index_strip_cut_value != 0,
            Some(Snapshot::OpenGl(state)) => state.vertex_input.primitive_restart,
            Some(Snapshot::Vulkan(state)) => state.input_assembly.primitive_restart_enable,
        }
    }

    pub fn strip_restart_index(&self) -> u32 {
        match self.snapshot() {
            None | Some(Snapshot::D3D11(_)) | Some(Snapshot::Vulkan(_)) => FIXED_RESTART_INDEX,
            Some(Snapshot::D3D12(state)) => state.input_assembly.index_strip_cut_value,
            Some(Snapshot::OpenGl(state)) => state.vertex_input.restart_index,
        }
    }
}
