//! Mesh generation for Pong
//!
//! Unit meshes in a 1x1 box anchored at the top-left: a quad for paddles and
//! the divider, a disc for the ball. Instances scale them to their rectangle.

use wgpu::util::DeviceExt;
use wgpu::*;

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [VertexAttribute; 1] = vertex_attr_array![0 => Float32x3];

    pub fn layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Unit square covering (0, 0) to (1, 1)
pub fn rectangle_geometry() -> (Vec<Vertex>, Vec<u16>) {
    let vertices = vec![
        Vertex {
            position: [0.0, 0.0, 0.0],
        },
        Vertex {
            position: [1.0, 0.0, 0.0],
        },
        Vertex {
            position: [1.0, 1.0, 0.0],
        },
        Vertex {
            position: [0.0, 1.0, 0.0],
        },
    ];
    let indices = vec![0, 1, 2, 2, 3, 0];

    (vertices, indices)
}

/// Disc inscribed in the unit square, as a triangle fan around its centre
pub fn circle_geometry(segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::with_capacity(segments as usize + 1);
    let mut indices = Vec::with_capacity(segments as usize * 3);

    vertices.push(Vertex {
        position: [0.5, 0.5, 0.0],
    });
    for i in 0..segments {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        vertices.push(Vertex {
            position: [0.5 + 0.5 * angle.cos(), 0.5 + 0.5 * angle.sin(), 0.0],
        });
    }

    for i in 0..segments {
        let current = i + 1;
        let next = (i + 1) % segments + 1;
        indices.extend_from_slice(&[0, current, next]);
    }

    (vertices, indices)
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn new(device: &Device, label: &str, vertices: &[Vertex], indices: &[u16]) -> Self {
        let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", label)),
            contents: bytemuck::cast_slice(vertices),
            usage: BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", label)),
            contents: bytemuck::cast_slice(indices),
            usage: BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

pub fn create_rectangle(device: &Device) -> Mesh {
    let (vertices, indices) = rectangle_geometry();
    Mesh::new(device, "Rectangle", &vertices, &indices)
}

pub fn create_circle(device: &Device, segments: u16) -> Mesh {
    let (vertices, indices) = circle_geometry(segments);
    Mesh::new(device, "Circle", &vertices, &indices)
}
