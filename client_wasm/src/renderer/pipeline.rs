use super::resources::InstanceData;
use super::shaders::PONG_SHADER;
use crate::mesh::Vertex;
use wgpu::*;

pub struct PipelineState {
    pub flat_pipeline: RenderPipeline,
    pub camera_layout: BindGroupLayout,
}

pub fn create_pipelines(device: &Device, format: TextureFormat) -> PipelineState {
    // 1. Camera Bind Group Layout
    let camera_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("Playfield Camera Layout"),
        entries: &[BindGroupLayoutEntry {
            binding: 0,
            visibility: ShaderStages::VERTEX,
            ty: BindingType::Buffer {
                ty: BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    // 2. Flat-colour pipeline: unit mesh per-vertex, rect + tint per-instance
    let shader = device.create_shader_module(ShaderModuleDescriptor {
        label: Some("Pong Shader"),
        source: ShaderSource::Wgsl(PONG_SHADER.into()),
    });

    let flat_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("Flat Instanced Layout"),
        bind_group_layouts: &[&camera_layout],
        push_constant_ranges: &[],
    });

    let flat_pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some("Flat Instanced Pipeline"),
        layout: Some(&flat_layout),
        vertex: VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::layout(), InstanceData::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(ColorTargetState {
                format,
                blend: Some(BlendState::REPLACE),
                write_mask: ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: PrimitiveState {
            topology: PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: MultisampleState::default(),
        multiview: None,
        cache: None,
    });

    PipelineState {
        flat_pipeline,
        camera_layout,
    }
}
