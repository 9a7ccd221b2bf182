use std::collections::HashMap;

use pipescope_snapshot::{d3d11, d3d12, gl, vulkan, Snapshot};
use pipescope_types::{
    ApiFamily, ResourceId, ShaderBindpointMapping, ShaderReflection, ShaderStage,
};
use tracing::error;

use crate::state::PipelineState;

static EMPTY_MAPPING: ShaderBindpointMapping = ShaderBindpointMapping {
    input_attributes: Vec::new(),
    constant_blocks: Vec::new(),
    read_only_resources: Vec::new(),
    read_write_resources: Vec::new(),
};

/// The shader bound at one stage, viewed uniformly across backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDescriptor<'a> {
    pub resource_id: ResourceId,
    pub entry_point: &'a str,
    pub reflection: Option<&'a ShaderReflection>,
    pub bindpoint_mapping: &'a ShaderBindpointMapping,
}

/// Resource-name lookup provided by the external resource catalog.
pub trait ResourceNames {
    fn resource_name(&self, id: ResourceId) -> String;
}

impl ResourceNames for HashMap<ResourceId, String> {
    fn resource_name(&self, id: ResourceId) -> String {
        self.get(&id).cloned().unwrap_or_else(|| id.to_string())
    }
}

pub(crate) fn d3d11_shader(state: &d3d11::State, stage: ShaderStage) -> &d3d11::Shader {
    match stage {
        ShaderStage::Vertex => &state.vertex_shader,
        ShaderStage::TessControl => &state.hull_shader,
        ShaderStage::TessEval => &state.domain_shader,
        ShaderStage::Geometry => &state.geometry_shader,
        ShaderStage::Fragment => &state.pixel_shader,
        ShaderStage::Compute => &state.compute_shader,
    }
}

pub(crate) fn d3d12_shader(state: &d3d12::State, stage: ShaderStage) -> &d3d12::Shader {
    match stage {
        ShaderStage::Vertex => &state.vertex_shader,
        ShaderStage::TessControl => &state.hull_shader,
        ShaderStage::TessEval => &state.domain_shader,
        ShaderStage::Geometry => &state.geometry_shader,
        ShaderStage::Fragment => &state.pixel_shader,
        ShaderStage::Compute => &state.compute_shader,
    }
}

pub(crate) fn gl_shader(state: &gl::State, stage: ShaderStage) -> &gl::Shader {
    match stage {
        ShaderStage::Vertex => &state.vertex_shader,
        ShaderStage::TessControl => &state.tess_control_shader,
        ShaderStage::TessEval => &state.tess_eval_shader,
        ShaderStage::Geometry => &state.geometry_shader,
        ShaderStage::Fragment => &state.fragment_shader,
        ShaderStage::Compute => &state.compute_shader,
    }
}

pub(crate) fn vulkan_shader(state: &vulkan::State, stage: ShaderStage) -> &vulkan::Shader {
    match stage {
        ShaderStage::Vertex => &state.vertex_shader,
        ShaderStage::TessControl => &state.tess_control_shader,
        ShaderStage::TessEval => &state.tess_eval_shader,
        ShaderStage::Geometry => &state.geometry_shader,
        ShaderStage::Fragment => &state.fragment_shader,
        ShaderStage::Compute => &state.compute_shader,
    }
}

/// Compute shaders see the compute pipeline's descriptor sets, every other stage the graphics
/// pipeline's.
pub(crate) fn vulkan_pipeline(state: &vulkan::State, stage: ShaderStage) -> &vulkan::Pipeline {
    if stage == ShaderStage::Compute {
        &state.compute
    } else {
        &state.graphics
    }
}

fn reflected_entry_point(reflection: Option<&ShaderReflection>) -> &str {
    reflection.map_or("", |r| r.entry_point.as_str())
}

pub(crate) fn stage_descriptor_of(snapshot: &Snapshot, stage: ShaderStage) -> StageDescriptor<'_> {
    match snapshot {
        Snapshot::D3D11(state) => {
            let shader = d3d11_shader(state, stage);
            StageDescriptor {
                resource_id: shader.resource_id,
                entry_point: reflected_entry_point(shader.reflection.as_ref()),
                reflection: shader.reflection.as_ref(),
                bindpoint_mapping: &shader.bindpoint_mapping,
            }
        }
        Snapshot::D3D12(state) => {
            let shader = d3d12_shader(state, stage);
            StageDescriptor {
                resource_id: shader.resource_id,
                entry_point: reflected_entry_point(shader.reflection.as_ref()),
                reflection: shader.reflection.as_ref(),
                bindpoint_mapping: &shader.bindpoint_mapping,
            }
        }
        Snapshot::OpenGl(state) => {
            let shader = gl_shader(state, stage);
            StageDescriptor {
                resource_id: shader.shader_resource_id,
                entry_point: reflected_entry_point(shader.reflection.as_ref()),
                reflection: shader.reflection.as_ref(),
                bindpoint_mapping: &shader.bindpoint_mapping,
            }
        }
        Snapshot::Vulkan(state) => {
            let shader = vulkan_shader(state, stage);
            StageDescriptor {
                resource_id: shader.resource_id,
                entry_point: &shader.entry_point,
                reflection: shader.reflection.as_ref(),
                bindpoint_mapping: &shader.bindpoint_mapping,
            }
        }
    }
}

fn hlsl_abbrev(stage: ShaderStage) -> &'static str {
    match stage {
        ShaderStage::Vertex => "VS",
        ShaderStage::TessControl => "HS",
        ShaderStage::TessEval => "DS",
        ShaderStage::Geometry => "GS",
        ShaderStage::Fragment => "PS",
        ShaderStage::Compute => "CS",
    }
}

fn glsl_abbrev(stage: ShaderStage) -> &'static str {
    match stage {
        ShaderStage::Vertex => "VS",
        ShaderStage::TessControl => "TCS",
        ShaderStage::TessEval => "TES",
        ShaderStage::Geometry => "GS",
        ShaderStage::Fragment => "FS",
        ShaderStage::Compute => "CS",
    }
}

impl PipelineState {
    /// Short stage name in the active (or configured default) API's terminology, `"?S"` if neither
    /// is known.
    pub fn abbrev(&self, stage: ShaderStage) -> &'static str {
        match self.family() {
            Some(ApiFamily::Hlsl) => hlsl_abbrev(stage),
            Some(ApiFamily::Glsl) => glsl_abbrev(stage),
            None => "?S",
        }
    }

    /// `"FB"` for framebuffer-based APIs, `"RT"` otherwise.
    pub fn output_abbrev(&self) -> &'static str {
        match self.family() {
            Some(ApiFamily::Glsl) => "FB",
            Some(ApiFamily::Hlsl) | None => "RT",
        }
    }

    pub fn shader_extension(&self) -> &'static str {
        match self.family() {
            Some(ApiFamily::Glsl) => "glsl",
            Some(ApiFamily::Hlsl) | None => "hlsl",
        }
    }

    /// The shader bound at `stage`, or `None` when no capture is loaded.
    pub fn stage_descriptor(&self, stage: ShaderStage) -> Option<StageDescriptor<'_>> {
        self.snapshot()
            .map(|snapshot| stage_descriptor_of(snapshot, stage))
    }

    /// Like [`stage_descriptor`](Self::stage_descriptor) for a raw stage index from capture data.
    pub fn stage_descriptor_raw(&self, raw_stage: u32) -> Option<StageDescriptor<'_>> {
        match ShaderStage::try_from(raw_stage) {
            Ok(stage) => self.stage_descriptor(stage),
            Err(err) => {
                error!(%err, api = ?self.active_api(), "pipeline state queried for an invalid stage");
                None
            }
        }
    }

    pub fn shader(&self, stage: ShaderStage) -> ResourceId {
        self.stage_descriptor(stage)
            .map(|desc| desc.resource_id)
            .unwrap_or_default()
    }

    pub fn shader_entry_point(&self, stage: ShaderStage) -> String {
        self.stage_descriptor(stage)
            .map(|desc| desc.entry_point.to_owned())
            .unwrap_or_default()
    }

    pub fn shader_reflection(&self, stage: ShaderStage) -> Option<&ShaderReflection> {
        self.stage_descriptor(stage)?.reflection
    }

    /// The stage's bindpoint mapping; an empty mapping when no capture is loaded.
    pub fn bindpoint_mapping(&self, stage: ShaderStage) -> &ShaderBindpointMapping {
        self.stage_descriptor(stage)
            .map_or(&EMPTY_MAPPING, |desc| desc.bindpoint_mapping)
    }

    /// Display name of the shader at `stage`.
    ///
    /// D3D12 shaders have no identity of their own, so they are named after the pipeline state
    /// object with the stage abbreviation appended.
    pub fn shader_name(&self, stage: ShaderStage, names: &impl ResourceNames) -> String {
        match self.snapshot() {
            None => String::new(),
            Some(Snapshot::D3D12(state)) => format!(
                "{} {}",
                names.resource_name(state.pipeline_resource_id),
                hlsl_abbrev(stage)
            ),
            Some(snapshot) => names.resource_name(stage_descriptor_of(snapshot, stage).resource_id),
        }
    }

    pub fn graphics_pipeline_object(&self) -> ResourceId {
        match self.snapshot() {
            Some(Snapshot::Vulkan(state)) => state.graphics.pipeline_resource_id,
            Some(Snapshot::D3D12(state)) => state.pipeline_resource_id,
            _ => ResourceId::NULL,
        }
    }

    pub fn compute_pipeline_object(&self) -> ResourceId {
        match self.snapshot() {
            Some(Snapshot::Vulkan(state)) => state.compute.pipeline_resource_id,
            Some(Snapshot::D3D12(state)) => state.pipeline_resource_id,
            _ => ResourceId::NULL,
        }
    }
}
