use std::collections::HashMap;

use pipescope::types::{
    BoundCBuffer, BoundResource, BoundVBuffer, GraphicsApi, ResourceId, Scissor, ShaderStage,
    Viewport,
};
use pipescope::{PipelineState, PipelineStateConfig};
use pretty_assertions::assert_eq;

#[test]
fn every_query_defaults_without_a_capture() {
    let state = PipelineState::new(PipelineStateConfig::default());
    assert!(!state.is_loaded());
    assert_eq!(state.active_api(), None);

    for stage in ShaderStage::ALL {
        assert_eq!(state.abbrev(stage), "?S");
        assert!(state.stage_descriptor(stage).is_none());
        assert_eq!(state.shader(stage), ResourceId::NULL);
        assert_eq!(state.shader_entry_point(stage), "");
        assert!(state.shader_reflection(stage).is_none());
        assert!(state.bindpoint_mapping(stage).constant_blocks.is_empty());
        assert_eq!(state.shader_name(stage, &HashMap::new()), "");
        assert_eq!(state.constant_buffer(stage, 0, 0), BoundCBuffer::default());
        assert!(state.read_only_resources(stage).is_empty());
        assert!(state.read_write_resources(stage).is_empty());
    }

    assert_eq!(state.output_abbrev(), "RT");
    assert_eq!(state.shader_extension(), "hlsl");
    assert!(state.vertex_inputs().is_empty());
    assert!(state.vertex_buffers().is_empty());
    assert_eq!(state.index_buffer(), BoundVBuffer::default());
    assert!(!state.is_strip_restart_enabled());
    assert_eq!(state.strip_restart_index(), u32::MAX);
    assert_eq!(state.depth_target(), BoundResource::default());
    assert!(state.output_targets().is_empty());
    assert_eq!(state.viewport(0), Viewport::default());
    assert_eq!(state.scissor(0), Scissor::default());
    assert_eq!(state.resource_layout(ResourceId::new(1)), "Unknown");
    assert_eq!(state.graphics_pipeline_object(), ResourceId::NULL);
    assert_eq!(state.compute_pipeline_object(), ResourceId::NULL);
}

#[test]
fn default_api_hint_picks_terminology() {
    let config = PipelineStateConfig::from_json(r#"{ "default_api": "Vulkan" }"#).unwrap();
    let state = PipelineState::new(config);
    assert_eq!(config.default_api, Some(GraphicsApi::Vulkan));
    assert_eq!(state.abbrev(ShaderStage::TessControl), "TCS");
    assert_eq!(state.output_abbrev(), "FB");
    assert_eq!(state.shader_extension(), "glsl");
    // The hint only affects naming.
    assert!(state.vertex_inputs().is_empty());
}

#[test]
fn invalid_raw_stage_is_logged_and_rejected() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let state = PipelineState::default();
    assert!(state.stage_descriptor_raw(6).is_none());
    assert!(state.stage_descriptor_raw(u32::MAX).is_none());
}
