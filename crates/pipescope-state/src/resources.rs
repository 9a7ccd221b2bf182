use pipescope_snapshot::{d3d11, d3d12, gl, vulkan, Snapshot};
use pipescope_types::{
    Bindpoint, BoundResource, BoundResourceArray, CompType, ResourceId, ShaderStage,
    ShaderStageMask,
};
use tracing::debug;

use crate::stage::{d3d11_shader, d3d12_shader, vulkan_pipeline};
use crate::state::PipelineState;

const UNKNOWN_LAYOUT: &str = "Unknown";

/// Capture data stores mips and slices unsigned; the neutral model uses `-1` for "none", so
/// anything that does not fit saturates instead of wrapping negative.
fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn index_i32(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

fn d3d11_view(view: &d3d11::View) -> BoundResource {
    BoundResource {
        resource_id: view.resource_resource_id,
        first_mip: to_i32(view.first_mip),
        first_slice: to_i32(view.first_slice),
        type_hint: view.view_format.comp_type,
    }
}

fn d3d12_view(view: &d3d12::View) -> BoundResource {
    BoundResource {
        resource_id: view.resource_id,
        first_mip: to_i32(view.first_mip),
        first_slice: to_i32(view.first_slice),
        type_hint: view.view_format.comp_type,
    }
}

fn gl_attachment(attachment: &gl::Attachment) -> BoundResource {
    BoundResource {
        resource_id: attachment.resource_id,
        first_mip: to_i32(attachment.mip_level),
        first_slice: to_i32(attachment.slice),
        type_hint: CompType::Typeless,
    }
}

fn vulkan_element(element: &vulkan::BindingElement) -> BoundResource {
    BoundResource {
        resource_id: element.resource_resource_id,
        first_mip: to_i32(element.first_mip),
        first_slice: to_i32(element.first_slice),
        type_hint: element.view_format.comp_type,
    }
}

fn vulkan_attachment(attachment: &vulkan::Attachment) -> BoundResource {
    BoundResource {
        resource_id: attachment.image_resource_id,
        first_mip: to_i32(attachment.first_mip),
        first_slice: to_i32(attachment.first_slice),
        type_hint: attachment.view_format.comp_type,
    }
}

/// One singleton array per flat slot, bound at `(0, i)`.
fn flat_slots<T>(views: &[T], project: impl Fn(&T) -> BoundResource) -> Vec<BoundResourceArray> {
    views
        .iter()
        .enumerate()
        .map(|(i, view)| BoundResourceArray::single(Bindpoint::new(0, index_i32(i)), project(view)))
        .collect()
}

/// Every assigned register of every space; registers the root signature leaves uncovered are
/// skipped.
fn d3d12_registers(
    shader: &d3d12::Shader,
    views: impl Fn(&d3d12::RegisterSpace) -> &[d3d12::View],
) -> Vec<BoundResourceArray> {
    let mut ret = Vec::new();
    for (space, registers) in shader.spaces.iter().enumerate() {
        for (reg, view) in views(registers).iter().enumerate() {
            if !view.is_assigned() {
                debug!(space, reg, "skipping register outside the root signature");
                continue;
            }
            ret.push(BoundResourceArray::single(
                Bindpoint::new(index_i32(space), index_i32(reg)),
                d3d12_view(view),
            ));
        }
    }
    ret
}

/// Descriptor bindings of the stage's pipeline whose type passes `wanted` and which are visible to
/// `stage`. Every array element is reported; elements without captured data are unbound.
fn vulkan_descriptors(
    state: &vulkan::State,
    stage: ShaderStage,
    wanted: impl Fn(vulkan::BindType) -> bool,
) -> Vec<BoundResourceArray> {
    let mask = ShaderStageMask::from(stage);
    let mut ret = Vec::new();
    for (set, descriptor_set) in vulkan_pipeline(state, stage).descriptor_sets.iter().enumerate() {
        for (slot, binding) in descriptor_set.bindings.iter().enumerate() {
            if !wanted(binding.bind_type) || !binding.stage_flags.contains(mask) {
                continue;
            }
            let resources = (0..binding.descriptor_count as usize)
                .map(|i| binding.binds.get(i).map(vulkan_element).unwrap_or_default())
                .collect();
            ret.push(BoundResourceArray::new(
                Bindpoint::new(index_i32(set), index_i32(slot)),
                resources,
            ));
        }
    }
    ret
}

/// Output-merger UAVs share the register range with render targets: slots below
/// `uav_start_slot` are reported as unbound, and UAV `i` appears at slot `i + uav_start_slot`.
fn d3d11_output_merger_uavs(om: &d3d11::OutputMerger) -> Vec<BoundResourceArray> {
    let start = om.uav_start_slot as usize;
    let placeholders = (0..start)
        .map(|i| BoundResourceArray::single(Bindpoint::new(0, index_i32(i)), BoundResource::default()));
    let bound = om
        .uavs
        .iter()
        .take(om.uavs.len().saturating_sub(start))
        .enumerate()
        .map(|(i, view)| {
            BoundResourceArray::single(Bindpoint::new(0, index_i32(i + start)), d3d11_view(view))
        });
    placeholders.chain(bound).collect()
}

fn vulkan_framebuffer_attachment(state: &vulkan::State, index: u32) -> BoundResource {
    state
        .current_pass
        .framebuffer
        .attachments
        .get(index as usize)
        .map(vulkan_attachment)
        .unwrap_or_default()
}

impl PipelineState {
    /// Textures, sampled images and other read-only views visible to `stage`.
    pub fn read_only_resources(&self, stage: ShaderStage) -> Vec<BoundResourceArray> {
        match self.snapshot() {
            None => Vec::new(),
            Some(Snapshot::D3D11(state)) => flat_slots(&d3d11_shader(state, stage).srvs, d3d11_view),
            Some(Snapshot::D3D12(state)) => {
                d3d12_registers(d3d12_shader(state, stage), |space| space.srvs.as_slice())
            }
            Some(Snapshot::OpenGl(state)) => flat_slots(&state.textures, |texture| BoundResource {
                resource_id: texture.resource_id,
                first_mip: to_i32(texture.first_mip),
                first_slice: to_i32(texture.first_slice),
                type_hint: CompType::Typeless,
            }),
            Some(Snapshot::Vulkan(state)) => {
                vulkan_descriptors(state, stage, vulkan::BindType::is_read_only_resource)
            }
        }
    }

    /// Storage images, storage buffers and other writable views visible to `stage`.
    pub fn read_write_resources(&self, stage: ShaderStage) -> Vec<BoundResourceArray> {
        match self.snapshot() {
            None => Vec::new(),
            Some(Snapshot::D3D11(state)) if stage == ShaderStage::Compute => {
                flat_slots(&state.compute_shader.uavs, d3d11_view)
            }
            Some(Snapshot::D3D11(state)) => d3d11_output_merger_uavs(&state.output_merger),
            Some(Snapshot::D3D12(state)) => {
                d3d12_registers(d3d12_shader(state, stage), |space| space.uavs.as_slice())
            }
            Some(Snapshot::OpenGl(state)) => flat_slots(&state.images, |image| BoundResource {
                resource_id: image.resource_id,
                first_mip: to_i32(image.mip_level),
                first_slice: to_i32(image.slice),
                type_hint: image.image_format.comp_type,
            }),
            Some(Snapshot::Vulkan(state)) => {
                vulkan_descriptors(state, stage, vulkan::BindType::is_read_write_resource)
            }
        }
    }

    pub fn depth_target(&self) -> BoundResource {
        match self.snapshot() {
            None => BoundResource::default(),
            Some(Snapshot::D3D11(state)) => d3d11_view(&state.output_merger.depth_target),
            Some(Snapshot::D3D12(state)) => d3d12_view(&state.output_merger.depth_target),
            Some(Snapshot::OpenGl(state)) => {
                gl_attachment(&state.framebuffer.draw_fbo.depth_attachment)
            }
            Some(Snapshot::Vulkan(state)) => {
                match u32::try_from(state.current_pass.renderpass.depthstencil_attachment) {
                    Ok(index) => vulkan_framebuffer_attachment(state, index),
                    Err(_) => BoundResource::default(),
                }
            }
        }
    }

    /// Bound colour targets in output order. Unbound entries keep their position.
    pub fn output_targets(&self) -> Vec<BoundResource> {
        match self.snapshot() {
            None => Vec::new(),
            Some(Snapshot::D3D11(state)) => state
                .output_merger
                .render_targets
                .iter()
                .map(d3d11_view)
                .collect(),
            Some(Snapshot::D3D12(state)) => state
                .output_merger
                .render_targets
                .iter()
                .map(d3d12_view)
                .collect(),
            Some(Snapshot::OpenGl(state)) => {
                let fbo = &state.framebuffer.draw_fbo;
                fbo.draw_buffers
                    .iter()
                    .map(|&draw_buffer| {
                        usize::try_from(draw_buffer)
                            .ok()
                            .and_then(|i| fbo.color_attachments.get(i))
                            .map(gl_attachment)
                            .unwrap_or_default()
                    })
                    .collect()
            }
            Some(Snapshot::Vulkan(state)) => {
                let rp = &state.current_pass.renderpass;
                rp.color_attachments
                    .iter()
                    .chain(&rp.resolve_attachments)
                    .map(|&index| vulkan_framebuffer_attachment(state, index))
                    .collect()
            }
        }
    }

    /// Current layout (Vulkan) or resource state (D3D12) of `id`, `"Unknown"` elsewhere.
    pub fn resource_layout(&self, id: ResourceId) -> String {
        let name = match self.snapshot() {
            Some(Snapshot::Vulkan(state)) => state
                .images
                .iter()
                .find(|image| image.resource_id == id)
                .and_then(|image| image.layouts.first())
                .map(|layout| layout.name.as_str()),
            Some(Snapshot::D3D12(state)) => state
                .resource_states
                .iter()
                .find(|data| data.resource_id == id)
                .and_then(|data| data.states.first())
                .map(|s| s.name.as_str()),
            _ => None,
        };
        name.unwrap_or(UNKNOWN_LAYOUT).to_owned()
    }
}
