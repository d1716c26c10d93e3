pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use game_core::{Config, Match};
use resources::{GameBuffers, InstanceData, RECT_INSTANCES};
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    pub flat_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle
    pub background: Color,

    // Skip buffer writes when nothing moved (countdown)
    pub last_instance_data: Option<([InstanceData; RECT_INSTANCES], InstanceData)>,
}

impl Renderer {
    pub async fn new(canvas: web_sys::HtmlCanvasElement, config: &Config) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::orthographic(config.screen_width, config.screen_height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let rect_mesh = create_rectangle(&ctx.device);
        let circle_mesh = create_circle(&ctx.device, 48);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        let [r, g, b, a] = config.background_color.to_linear();

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            flat_pipeline: pipes.flat_pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
            background: Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            },
            last_instance_data: None,
        })
    }

    pub fn draw(&mut self, game: &Match) -> Result<(), String> {
        draw::draw_frame(self, game)
    }
}
