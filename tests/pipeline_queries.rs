use pipescope::types::{
    Bindpoint, BoundCBuffer, BoundResource, CompType, GraphicsApi, PixelValue, ResourceId,
    ShaderStage,
};
use pipescope::{PipelineState, PipelineStateConfig, Snapshot};
use pretty_assertions::assert_eq;

fn load(json: &str) -> PipelineState {
    let snapshot = Snapshot::from_json(json).unwrap();
    PipelineState::with_snapshot(snapshot, PipelineStateConfig::default())
}

const D3D11_FIXTURE: &str = r#"{
  "D3D11": {
    "vertex_shader": {
      "resource_id": 100,
      "reflection": {
        "entry_point": "VSMain",
        "constant_blocks": [{ "name": "PerFrame", "bind_point": 0, "byte_size": 64 }]
      },
      "bindpoint_mapping": { "constant_blocks": [{ "space": 0, "slot": 1 }] },
      "constant_buffers": [
        {},
        { "resource_id": 7, "vec_offset": 2, "vec_count": 4 }
      ]
    },
    "pixel_shader": {
      "resource_id": 101,
      "srvs": [
        { "resource_resource_id": 20, "view_format": { "kind": "Regular", "comp_count": 4, "comp_byte_width": 1, "comp_type": "UNormSRGB" } }
      ]
    },
    "input_assembly": {
      "layouts": [
        { "semantic_name": "POSITION", "format": { "kind": "Regular", "comp_count": 3, "comp_byte_width": 4, "comp_type": "Float" }, "byte_offset": 4294967295 },
        { "semantic_name": "TEXCOORD", "semantic_index": 0, "format": { "kind": "Regular", "comp_count": 2, "comp_byte_width": 4, "comp_type": "Float" }, "byte_offset": 4294967295 },
        { "semantic_name": "TEXCOORD", "semantic_index": 1, "format": { "kind": "Regular", "comp_count": 2, "comp_byte_width": 4, "comp_type": "Float" }, "byte_offset": 4294967295 }
      ],
      "bytecode": {
        "input_signature": [
          { "semantic_name": "POSITION", "semantic_index": 0 },
          { "semantic_name": "TEXCOORD", "semantic_index": 0 }
        ]
      },
      "vertex_buffers": [{ "resource_id": 30, "byte_stride": 28, "byte_offset": 0 }],
      "index_buffer": { "resource_id": 31, "byte_offset": 12 }
    },
    "output_merger": {
      "render_targets": [{ "resource_resource_id": 40 }],
      "depth_target": { "resource_resource_id": 41, "first_slice": 2 }
    }
  }
}"#;

#[test]
fn d3d11_capture() {
    let state = load(D3D11_FIXTURE);
    assert_eq!(state.active_api(), Some(GraphicsApi::D3D11));
    assert_eq!(state.abbrev(ShaderStage::PIXEL), "PS");
    assert_eq!(state.shader(ShaderStage::Vertex), ResourceId::new(100));
    assert_eq!(state.shader_entry_point(ShaderStage::Vertex), "VSMain");

    assert_eq!(
        state.constant_buffer(ShaderStage::Vertex, 0, 0),
        BoundCBuffer {
            resource_id: ResourceId::new(7),
            byte_offset: 32,
            byte_size: 64,
        }
    );

    let srvs = state.read_only_resources(ShaderStage::PIXEL);
    assert_eq!(srvs.len(), 1);
    assert_eq!(srvs[0].bind_point, Bindpoint::new(0, 0));
    assert_eq!(srvs[0].resources[0].type_hint, CompType::UNormSRGB);

    let inputs = state.vertex_inputs();
    let summary: Vec<_> = inputs
        .iter()
        .map(|a| (a.name.as_str(), a.byte_offset, a.used))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("POSITION", 0, true),
            ("TEXCOORD0", 12, true),
            ("TEXCOORD1", 20, false),
        ]
    );

    assert_eq!(state.index_buffer().resource_id, ResourceId::new(31));
    assert_eq!(state.vertex_buffers()[0].byte_stride, 28);
    assert!(state.is_strip_restart_enabled());
    assert_eq!(
        state.output_targets()[0].resource_id,
        ResourceId::new(40)
    );
    assert_eq!(state.depth_target().first_slice, 2);
}

const D3D12_FIXTURE: &str = r#"{
  "D3D12": {
    "pipeline_resource_id": 500,
    "pixel_shader": {
      "reflection": {
        "constant_blocks": [
          { "bind_point": 0 },
          { "bind_point": 1 }
        ]
      },
      "bindpoint_mapping": {
        "constant_blocks": [{ "space": 0, "slot": 0 }, { "space": 0, "slot": 1 }]
      },
      "spaces": [
        {
          "constant_buffers": [
            { "root_element": 0, "resource_id": 60, "byte_offset": 256, "byte_size": 128 },
            { "root_element": 4294967295, "resource_id": 61 }
          ],
          "srvs": [
            { "root_element": 1, "resource_id": 62 },
            { "root_element": 4294967295, "resource_id": 63 },
            { "root_element": 1, "table_index": 2, "resource_id": 64 }
          ]
        }
      ]
    },
    "input_assembly": { "index_strip_cut_value": 65535 },
    "resource_states": [
      { "resource_id": 62, "states": [{ "name": "PIXEL_SHADER_RESOURCE" }] }
    ]
  }
}"#;

#[test]
fn d3d12_capture_skips_sparse_gaps() {
    let state = load(D3D12_FIXTURE);

    let srvs: Vec<_> = state
        .read_only_resources(ShaderStage::PIXEL)
        .into_iter()
        .map(|a| (a.bind_point.slot, a.resources[0].resource_id.raw()))
        .collect();
    assert_eq!(srvs, vec![(0, 62), (2, 64)]);

    assert_eq!(
        state.constant_buffer(ShaderStage::PIXEL, 0, 0),
        BoundCBuffer {
            resource_id: ResourceId::new(60),
            byte_offset: 256,
            byte_size: 128,
        }
    );
    assert_eq!(
        state.constant_buffer(ShaderStage::PIXEL, 1, 0),
        BoundCBuffer::default()
    );

    assert!(state.is_strip_restart_enabled());
    assert_eq!(state.strip_restart_index(), 0xFFFF);
    assert_eq!(state.graphics_pipeline_object(), ResourceId::new(500));
    assert_eq!(
        state.resource_layout(ResourceId::new(62)),
        "PIXEL_SHADER_RESOURCE"
    );
}

const GL_FIXTURE: &str = r#"{
  "OpenGl": {
    "vertex_shader": {
      "shader_resource_id": 70,
      "reflection": {
        "input_signature": [
          { "var_name": "in_position", "comp_count": 3, "comp_type": "Float" },
          { "var_name": "in_color", "comp_count": 4, "comp_type": "Float" }
        ]
      },
      "bindpoint_mapping": { "input_attributes": [0, 1, -1] }
    },
    "vertex_input": {
      "attributes": [
        { "enabled": true, "format": { "kind": "Regular", "comp_count": 3, "comp_byte_width": 4, "comp_type": "Float" } },
        {
          "enabled": false,
          "generic_value": [1065353216, 1073741824, 1077936128, 1082130432],
          "vertex_buffer_slot": 1
        },
        { "enabled": true }
      ],
      "vertex_buffers": [{ "resource_id": 71, "byte_stride": 12 }, { "instance_divisor": 1 }],
      "index_buffer": 72,
      "primitive_restart": true,
      "restart_index": 65535
    },
    "textures": [{ "resource_id": 73 }],
    "uniform_buffers": [{}, {}, { "resource_id": 74, "byte_offset": 64, "byte_size": 256 }],
    "fragment_shader": {
      "reflection": { "constant_blocks": [{ "bind_point": 0 }] },
      "bindpoint_mapping": { "constant_blocks": [{ "space": 0, "slot": 2 }] }
    },
    "framebuffer": {
      "draw_fbo": {
        "color_attachments": [{ "resource_id": 75 }],
        "depth_attachment": { "resource_id": 76 },
        "draw_buffers": [0, -1]
      }
    }
  }
}"#;

#[test]
fn gl_capture() {
    let state = load(GL_FIXTURE);
    assert_eq!(state.abbrev(ShaderStage::Fragment), "FS");
    assert_eq!(state.output_abbrev(), "FB");

    let inputs = state.vertex_inputs();
    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs[0].name, "in_position");
    assert!(!inputs[0].generic_enabled);

    let color = &inputs[1];
    assert_eq!(color.name, "in_color");
    assert!(color.generic_enabled);
    assert!(!color.per_instance);
    assert_eq!(color.format.comp_count, 4);
    assert_eq!(
        color.generic_value,
        PixelValue::from_f32([1.0, 2.0, 3.0, 4.0])
    );

    assert_eq!(
        state.constant_buffer(ShaderStage::Fragment, 0, 0),
        BoundCBuffer {
            resource_id: ResourceId::new(74),
            byte_offset: 64,
            byte_size: 256,
        }
    );
    assert_eq!(
        state.read_only_resources(ShaderStage::Compute)[0].resources[0].resource_id,
        ResourceId::new(73)
    );

    let index = state.index_buffer();
    assert_eq!(index.resource_id, ResourceId::new(72));
    assert_eq!(index.byte_offset, 0);
    assert_eq!(state.strip_restart_index(), 0xFFFF);

    let targets = state.output_targets();
    assert_eq!(targets[0].resource_id, ResourceId::new(75));
    assert_eq!(targets[1], BoundResource::default());
    assert_eq!(state.depth_target().resource_id, ResourceId::new(76));
}

const VULKAN_FIXTURE: &str = r#"{
  "Vulkan": {
    "graphics": {
      "pipeline_resource_id": 80,
      "descriptor_sets": [
        {
          "bindings": [
            {
              "descriptor_count": 1,
              "stage_flags": "VERTEX | FRAGMENT",
              "bind_type": "ConstantBuffer",
              "binds": [{ "resource_resource_id": 81, "byte_offset": 0, "byte_size": 192 }]
            },
            {
              "descriptor_count": 2,
              "stage_flags": "FRAGMENT",
              "bind_type": "ImageSampler",
              "binds": [{ "resource_resource_id": 82 }]
            }
          ]
        }
      ]
    },
    "compute": { "pipeline_resource_id": 90 },
    "vertex_shader": {
      "entry_point": "main",
      "reflection": {
        "constant_blocks": [
          { "bind_point": 0 },
          { "name": "push", "bind_point": -1, "buffer_backed": false }
        ]
      },
      "bindpoint_mapping": { "constant_blocks": [{ "space": 0, "slot": 0 }] }
    },
    "current_pass": {
      "renderpass": {
        "color_attachments": [0, 5],
        "depthstencil_attachment": 1
      },
      "framebuffer": {
        "attachments": [
          { "image_resource_id": 83 },
          { "image_resource_id": 84 }
        ]
      }
    },
    "images": [{ "resource_id": 83, "layouts": [{ "name": "COLOR_ATTACHMENT_OPTIMAL" }] }]
  }
}"#;

#[test]
fn vulkan_capture() {
    let state = load(VULKAN_FIXTURE);
    assert_eq!(state.shader_entry_point(ShaderStage::Vertex), "main");
    assert_eq!(state.graphics_pipeline_object(), ResourceId::new(80));
    assert_eq!(state.compute_pipeline_object(), ResourceId::new(90));

    assert_eq!(
        state.constant_buffer(ShaderStage::Vertex, 0, 0),
        BoundCBuffer {
            resource_id: ResourceId::new(81),
            byte_offset: 0,
            byte_size: 192,
        }
    );
    assert_eq!(
        state.constant_buffer(ShaderStage::Vertex, 1, 0).byte_size,
        1024
    );

    let samplers = state.read_only_resources(ShaderStage::Fragment);
    assert_eq!(samplers.len(), 1);
    assert_eq!(samplers[0].bind_point, Bindpoint::new(0, 1));
    assert_eq!(samplers[0].resources.len(), 2);
    assert_eq!(samplers[0].resources[0].resource_id, ResourceId::new(82));
    assert!(!samplers[0].resources[1].is_bound());
    assert!(state.read_only_resources(ShaderStage::Vertex).is_empty());

    let targets: Vec<_> = state
        .output_targets()
        .iter()
        .map(|t| t.resource_id)
        .collect();
    assert_eq!(targets, vec![ResourceId::new(83), ResourceId::NULL]);
    assert_eq!(state.depth_target().resource_id, ResourceId::new(84));
    assert_eq!(
        state.resource_layout(ResourceId::new(83)),
        "COLOR_ATTACHMENT_OPTIMAL"
    );
    assert_eq!(state.strip_restart_index(), u32::MAX);
}

#[test]
fn queries_are_idempotent() {
    for fixture in [D3D11_FIXTURE, D3D12_FIXTURE, GL_FIXTURE, VULKAN_FIXTURE] {
        let state = load(fixture);
        for stage in ShaderStage::ALL {
            assert_eq!(
                state.read_only_resources(stage),
                state.read_only_resources(stage)
            );
            assert_eq!(
                state.read_write_resources(stage),
                state.read_write_resources(stage)
            );
            assert_eq!(
                state.constant_buffer(stage, 0, 0),
                state.constant_buffer(stage, 0, 0)
            );
            assert!(!state.abbrev(stage).is_empty());
        }
        assert_eq!(state.vertex_inputs(), state.vertex_inputs());
        assert_eq!(state.output_targets(), state.output_targets());
    }
}
