//! Camera for Pong game
//!
//! Simple 2D orthographic camera

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Create an orthographic camera for the playfield.
    /// Origin at the top-left, y pointing down, `width` x `height` units.
    pub fn orthographic(width: f32, height: f32) -> Self {
        let view = Mat4::IDENTITY;
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);

        Self { view, projection }
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_playfield_corners_map_to_clip_space() {
        let camera = Camera::orthographic(640.0, 480.0);
        let view_proj = camera.projection * camera.view;

        let top_left = view_proj.project_point3(Vec3::new(0.0, 0.0, 0.0));
        assert!((top_left.x + 1.0).abs() < 1e-6);
        assert!((top_left.y - 1.0).abs() < 1e-6);

        let bottom_right = view_proj.project_point3(Vec3::new(640.0, 480.0, 0.0));
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
        assert!((bottom_right.y + 1.0).abs() < 1e-6);
    }
}
