//! Vertex input reconstruction.
//!
//! D3D-style backends describe vertex input as an input layout (semantic name + slot + offset,
//! with append-aligned offsets left implicit), so the layout is replayed to recover concrete
//! offsets. GL-style backends describe it per attribute; those attributes are matched against the
//! vertex shader's input signature through the bindpoint mapping.

use pipescope_snapshot::{gl, vulkan, LayoutElement, Snapshot};
use pipescope_types::{
    CompType, PixelValue, ResourceFormat, ShaderBindpointMapping, ShaderReflection, SigParameter,
    VertexInputAttribute,
};
use tracing::debug;

use crate::state::PipelineState;

/// Number of vertex buffer slots tracked when resolving append-aligned offsets.
pub const MAX_INPUT_SLOTS: usize = 128;

/// Generic attribute values are always reported as 32-bit components.
const GENERIC_COMPONENT_BYTES: u8 = 4;

fn needs_semantic_index(elements: &[LayoutElement], index: usize, name: &str) -> bool {
    elements
        .iter()
        .enumerate()
        .any(|(j, other)| j != index && other.semantic_name.eq_ignore_ascii_case(name))
}

fn signature_reads(signature: &[SigParameter], element: &LayoutElement) -> bool {
    signature.iter().any(|sig| {
        sig.semantic_name
            .eq_ignore_ascii_case(&element.semantic_name)
            && sig.semantic_index == element.semantic_index
    })
}

/// Replays an input layout into concrete attributes.
///
/// Each input slot keeps a byte cursor: an append-aligned element is placed at the cursor, an
/// explicit offset moves the cursor there, and either way the cursor then advances past the
/// element. Semantic names shared by several elements (compared ignoring ASCII case) get their
/// semantic index appended. `used` reports whether `signature` reads the element; with no
/// signature every element counts as used.
pub fn reconstruct_layout(
    elements: &[LayoutElement],
    signature: Option<&[SigParameter]>,
) -> Vec<VertexInputAttribute> {
    let mut cursors = [0u32; MAX_INPUT_SLOTS];

    elements
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let byte_offset = match cursors.get_mut(element.input_slot as usize) {
                Some(cursor) => {
                    if !element.is_append_aligned() {
                        *cursor = element.byte_offset;
                    }
                    let offset = *cursor;
                    *cursor = cursor.wrapping_add(element.format.element_byte_size());
                    offset
                }
                None => {
                    debug!(
                        input_slot = element.input_slot,
                        semantic = %element.semantic_name,
                        "input slot outside the tracked range"
                    );
                    if element.is_append_aligned() {
                        0
                    } else {
                        element.byte_offset
                    }
                }
            };

            let name = if needs_semantic_index(elements, i, &element.semantic_name) {
                format!("{}{}", element.semantic_name, element.semantic_index)
            } else {
                element.semantic_name.clone()
            };

            VertexInputAttribute {
                name,
                vertex_buffer: i32::try_from(element.input_slot).unwrap_or(i32::MAX),
                byte_offset,
                per_instance: element.per_instance,
                instance_rate: i32::try_from(element.instance_data_step_rate).unwrap_or(i32::MAX),
                format: element.format,
                used: signature.map_or(true, |sig| signature_reads(sig, element)),
                generic_enabled: false,
                generic_value: PixelValue::ZERO,
            }
        })
        .collect()
}

/// Input-signature index that attribute `index` feeds, or `None` if the shader does not read it.
///
/// Without reflection there is nothing to map through, so attributes map to themselves.
fn resolve_attribute(
    reflection: Option<&ShaderReflection>,
    mapping: &ShaderBindpointMapping,
    index: usize,
) -> Option<usize> {
    match reflection {
        Some(_) => usize::try_from(mapping.input_attribute(index)?).ok(),
        None => Some(index),
    }
}

fn attribute_name(index: usize, reflection: Option<&ShaderReflection>, sig: usize) -> String {
    reflection
        .and_then(|r| r.input_signature.get(sig))
        .map_or_else(|| format!("attr{index}"), |param| param.var_name.clone())
}

/// Copies the components of a disabled attribute's current generic value that the shader reads,
/// converting scaled integer formats to float.
fn generic_value(value: &PixelValue, param: &SigParameter) -> PixelValue {
    let (floats, uints, ints) = (value.f32s(), value.u32s(), value.i32s());
    let mut ret = PixelValue::ZERO;
    for c in 0..usize::from(param.comp_count).min(4) {
        match param.comp_type {
            CompType::Float => ret.set_f32(c, floats[c]),
            CompType::UInt => ret.set_u32(c, uints[c]),
            CompType::SInt => ret.set_i32(c, ints[c]),
            CompType::UScaled => ret.set_f32(c, uints[c] as f32),
            CompType::SScaled => ret.set_f32(c, ints[c] as f32),
            _ => {}
        }
    }
    ret
}

fn gl_vertex_inputs(state: &gl::State) -> Vec<VertexInputAttribute> {
    let shader = &state.vertex_shader;
    let reflection = shader.reflection.as_ref();
    let input = &state.vertex_input;

    input
        .attributes
        .iter()
        .enumerate()
        .filter_map(|(i, attr)| {
            let sig = resolve_attribute(reflection, &shader.bindpoint_mapping, i)?;
            let divisor = input
                .vertex_buffers
                .get(attr.vertex_buffer_slot as usize)
                .map_or(0, |vb| vb.instance_divisor);

            let mut ret = VertexInputAttribute {
                name: attribute_name(i, reflection, sig),
                vertex_buffer: i32::try_from(attr.vertex_buffer_slot).unwrap_or(i32::MAX),
                byte_offset: attr.byte_offset,
                per_instance: divisor > 0,
                instance_rate: i32::try_from(divisor).unwrap_or(i32::MAX),
                format: attr.format,
                used: true,
                generic_enabled: false,
                generic_value: PixelValue::ZERO,
            };

            let param = reflection.and_then(|r| r.input_signature.get(sig));
            if let (false, Some(param)) = (attr.enabled, param) {
                ret.generic_value = generic_value(&attr.generic_value, param);
                ret.generic_enabled = true;
                ret.per_instance = false;
                ret.instance_rate = 0;
                ret.format = ResourceFormat::regular(
                    param.comp_count,
                    GENERIC_COMPONENT_BYTES,
                    param.comp_type,
                );
            }

            Some(ret)
        })
        .collect()
}

fn vulkan_vertex_inputs(state: &vulkan::State) -> Vec<VertexInputAttribute> {
    let shader = &state.vertex_shader;
    let reflection = shader.reflection.as_ref();
    let input = &state.vertex_input;

    input
        .attributes
        .iter()
        .enumerate()
        .filter_map(|(i, attr)| {
            let sig = match reflection {
                Some(_) => {
                    resolve_attribute(reflection, &shader.bindpoint_mapping, attr.location as usize)?
                }
                None => i,
            };
            let (per_instance, instance_rate) = input
                .bindings
                .get(attr.binding as usize)
                .map_or((false, 1), |b| {
                    (b.per_instance, i32::try_from(b.instance_divisor).unwrap_or(i32::MAX))
                });

            Some(VertexInputAttribute {
                name: attribute_name(i, reflection, sig),
                vertex_buffer: i32::try_from(attr.binding).unwrap_or(i32::MAX),
                byte_offset: attr.byte_offset,
                per_instance,
                instance_rate,
                format: attr.format,
                used: true,
                generic_enabled: false,
                generic_value: PixelValue::ZERO,
            })
        })
        .collect()
}

impl PipelineState {
    /// The vertex shader's inputs as described by the bound input state.
    pub fn vertex_inputs(&self) -> Vec<VertexInputAttribute> {
        match self.snapshot() {
            None => Vec::new(),
            Some(Snapshot::D3D11(state)) => reconstruct_layout(
                &state.input_assembly.layouts,
                state
                    .input_assembly
                    .bytecode
                    .as_ref()
                    .map(|r| r.input_signature.as_slice()),
            ),
            Some(Snapshot::D3D12(state)) => reconstruct_layout(
                &state.input_assembly.layouts,
                state
                    .vertex_shader
                    .reflection
                    .as_ref()
                    .map(|r| r.input_signature.as_slice()),
            ),
            Some(Snapshot::OpenGl(state)) => gl_vertex_inputs(state),
            Some(Snapshot::Vulkan(state)) => vulkan_vertex_inputs(state),
        }
    }
}
