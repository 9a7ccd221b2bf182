//! Constant-block resolution: reflected block index → physical buffer binding.
//!
//! The reflected block carries an index into the stage's bindpoint mapping; the mapping gives the
//! API-level `(space, slot)`; each backend then has its own way of turning that into the bound
//! buffer. A result is either fully populated from one binding or the unbound default.

use pipescope_snapshot::Snapshot;
use pipescope_types::{BoundCBuffer, ShaderStage};
use thiserror::Error;
use tracing::debug;

use crate::stage::{d3d11_shader, d3d12_shader, stage_descriptor_of, vulkan_pipeline};
use crate::state::PipelineState;

/// Size reported for Vulkan blocks that are not buffer backed (push constants), which have no
/// buffer to measure.
pub const PUSH_CONSTANT_NOMINAL_SIZE: u64 = 1024;

/// D3D11 constant buffer offsets and sizes are counted in `float4` registers.
const D3D11_CONSTANT_VECTOR_BYTES: u64 = 16;

/// Why a constant block did not resolve to a bound buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no capture is loaded")]
    NotLoaded,
    #[error("{stage} shader has no reflection")]
    NoReflection { stage: ShaderStage },
    #[error("constant block {index} is out of range ({count} blocks reflected)")]
    BlockOutOfRange { index: u32, count: usize },
    #[error("constant block {index} has no bindpoint mapping entry (bind point {bind_point})")]
    Unmapped { index: u32, bind_point: i32 },
    #[error("bindpoint ({space}, {slot}) has no physical binding")]
    NoPhysicalSlot { space: i32, slot: i32 },
    #[error("bindpoint ({space}, {slot}) is not covered by the root signature")]
    SparseGap { space: i32, slot: i32 },
    #[error("descriptor array element {array_index} is out of range at ({space}, {slot})")]
    ArrayOutOfRange {
        space: i32,
        slot: i32,
        array_index: u32,
    },
}

impl PipelineState {
    /// The buffer backing reflected constant block `block_index` of `stage`.
    ///
    /// `array_index` selects the element of an arrayed Vulkan binding and is ignored elsewhere.
    /// Anything that does not resolve yields `BoundCBuffer::default()`; use
    /// [`resolve_constant_buffer`](Self::resolve_constant_buffer) to find out why.
    pub fn constant_buffer(
        &self,
        stage: ShaderStage,
        block_index: u32,
        array_index: u32,
    ) -> BoundCBuffer {
        match self.resolve_constant_buffer(stage, block_index, array_index) {
            Ok(buffer) => buffer,
            Err(ResolveError::NotLoaded) => BoundCBuffer::default(),
            Err(err) => {
                debug!(%stage, block_index, array_index, %err, "constant block is unbound");
                BoundCBuffer::default()
            }
        }
    }

    pub fn resolve_constant_buffer(
        &self,
        stage: ShaderStage,
        block_index: u32,
        array_index: u32,
    ) -> Result<BoundCBuffer, ResolveError> {
        let snapshot = self.snapshot().ok_or(ResolveError::NotLoaded)?;
        let desc = stage_descriptor_of(snapshot, stage);
        let reflection = desc
            .reflection
            .ok_or(ResolveError::NoReflection { stage })?;
        let block = reflection
            .constant_blocks
            .get(block_index as usize)
            .ok_or(ResolveError::BlockOutOfRange {
                index: block_index,
                count: reflection.constant_blocks.len(),
            })?;

        // Push constants have no descriptor, and typically no mapping entry either.
        if matches!(snapshot, Snapshot::Vulkan(_)) && !block.buffer_backed {
            return Ok(BoundCBuffer {
                byte_size: PUSH_CONSTANT_NOMINAL_SIZE,
                ..BoundCBuffer::default()
            });
        }

        let bind = desc
            .bindpoint_mapping
            .constant_block(block.bind_point)
            .ok_or(ResolveError::Unmapped {
                index: block_index,
                bind_point: block.bind_point,
            })?;
        let no_slot = ResolveError::NoPhysicalSlot {
            space: bind.space,
            slot: bind.slot,
        };
        let (space, slot) = bind.indices().ok_or_else(|| no_slot.clone())?;

        match snapshot {
            Snapshot::D3D11(state) => {
                let cb = d3d11_shader(state, stage)
                    .constant_buffers
                    .get(slot)
                    .ok_or(no_slot)?;
                Ok(BoundCBuffer {
                    resource_id: cb.resource_id,
                    byte_offset: u64::from(cb.vec_offset) * D3D11_CONSTANT_VECTOR_BYTES,
                    byte_size: u64::from(cb.vec_count) * D3D11_CONSTANT_VECTOR_BYTES,
                })
            }
            Snapshot::D3D12(state) => {
                let cb = d3d12_shader(state, stage)
                    .spaces
                    .get(space)
                    .and_then(|s| s.constant_buffers.get(slot))
                    .ok_or(no_slot)?;
                if !cb.is_assigned() {
                    return Err(ResolveError::SparseGap {
                        space: bind.space,
                        slot: bind.slot,
                    });
                }
                Ok(BoundCBuffer {
                    resource_id: cb.resource_id,
                    byte_offset: cb.byte_offset,
                    byte_size: u64::from(cb.byte_size),
                })
            }
            // Uniform buffer units are global; the mapped slot is the unit.
            Snapshot::OpenGl(state) => {
                let ubo = state.uniform_buffers.get(slot).ok_or(no_slot)?;
                Ok(BoundCBuffer {
                    resource_id: ubo.resource_id,
                    byte_offset: ubo.byte_offset,
                    byte_size: ubo.byte_size,
                })
            }
            Snapshot::Vulkan(state) => {
                let binding = vulkan_pipeline(state, stage)
                    .descriptor_sets
                    .get(space)
                    .and_then(|set| set.bindings.get(slot))
                    .ok_or(no_slot)?;
                let element = binding.binds.get(array_index as usize).ok_or(
                    ResolveError::ArrayOutOfRange {
                        space: bind.space,
                        slot: bind.slot,
                        array_index,
                    },
                )?;
                Ok(BoundCBuffer {
                    resource_id: element.resource_resource_id,
                    byte_offset: element.byte_offset,
                    byte_size: element.byte_size,
                })
            }
        }
    }
}
