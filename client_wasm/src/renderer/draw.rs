use super::resources::{InstanceData, RECT_INSTANCES};
use super::Renderer;
use game_core::{Match, Params, Rect, Rgb, Side};
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, game: &Match) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Canvas was resized or the context dropped; try again next frame
            log::warn!("Surface lost, reconfiguring");
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, game);
    render_basic(renderer, &mut encoder, &view);

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn instance(rect: &Rect, color: Rgb) -> InstanceData {
    InstanceData {
        transform: [rect.pos.x, rect.pos.y, rect.size.x, rect.size.y],
        tint: color.to_linear(),
    }
}

fn update_buffers(renderer: &mut Renderer, game: &Match) {
    let config = game.config();
    let map = game.map();

    let mut rects = [InstanceData {
        transform: [0.0; 4],
        tint: [0.0; 4],
    }; RECT_INSTANCES];

    for (slot, side) in [Side::Near, Side::Far].into_iter().enumerate() {
        if let Some(paddle) = game.paddle(side) {
            rects[slot] = instance(&paddle.rect, config.paddle_color(side));
        }
    }

    let divider = Rect::new(
        glam::Vec2::new(map.width / 2.0 - Params::DIVIDER_WIDTH / 2.0, 0.0),
        glam::Vec2::new(Params::DIVIDER_WIDTH, map.height),
    );
    rects[2] = instance(&divider, config.foreground_color);

    let ball = match game.ball() {
        Some(ball) => instance(&ball.rect, config.ball_color),
        None => InstanceData {
            transform: [0.0; 4],
            tint: [0.0; 4],
        },
    };

    let current = (rects, ball);
    if renderer.last_instance_data != Some(current) {
        renderer
            .queue
            .write_buffer(&renderer.buffers.rects, 0, bytemuck::cast_slice(&rects));
        renderer
            .queue
            .write_buffer(&renderer.buffers.ball, 0, bytemuck::cast_slice(&[ball]));
        renderer.last_instance_data = Some(current);
    }
}

fn render_basic(renderer: &Renderer, encoder: &mut CommandEncoder, view: &TextureView) {
    let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
        label: Some("Main Pass"),
        color_attachments: &[Some(RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: Operations {
                load: LoadOp::Clear(renderer.background),
                store: StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    draw_objects(renderer, &mut pass);
}

fn draw_objects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>) {
    pass.set_pipeline(&renderer.flat_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects (paddles, divider)
    pass.set_vertex_buffer(0, renderer.meshes.0.vertex_buffer.slice(..));
    pass.set_index_buffer(renderer.meshes.0.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
    pass.draw_indexed(
        0..renderer.meshes.0.index_count,
        0,
        0..RECT_INSTANCES as u32,
    );

    // Circle (ball), stretched to its rect
    pass.set_vertex_buffer(0, renderer.meshes.1.vertex_buffer.slice(..));
    pass.set_index_buffer(renderer.meshes.1.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.ball.slice(..));
    pass.draw_indexed(0..renderer.meshes.1.index_count, 0, 0..1);
}
