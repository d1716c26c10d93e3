use crate::camera::{Camera, CameraUniform};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, width, height (top-left anchored)
    pub tint: [f32; 4],      // rgba, linear
}

impl InstanceData {
    // transform at location 1, tint at location 2
    const ATTRIBUTES: [VertexAttribute; 2] = vertex_attr_array![1 => Float32x4, 2 => Float32x4];

    pub fn layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceData>() as BufferAddress,
            step_mode: VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Rectangles drawn each frame: near paddle, far paddle, divider
pub const RECT_INSTANCES: usize = 3;

pub struct GameBuffers {
    pub camera: Buffer,
    pub rects: Buffer,
    pub ball: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let instance_size = std::mem::size_of::<InstanceData>() as u64;

    let rects = device.create_buffer(&BufferDescriptor {
        label: Some("Rect Instance Buffer"),
        size: instance_size * RECT_INSTANCES as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let ball = device.create_buffer(&BufferDescriptor {
        label: Some("Ball Instance Buffer"),
        size: instance_size,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        rects,
        ball,
    }
}
