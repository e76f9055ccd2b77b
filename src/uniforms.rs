use glam::{Mat4, Vec2};

/// Uniform block of `shaders/projection.wgsl` (80 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ProjectionUniforms {
    pub mvp: [[f32; 4]; 4],
    pub rotation: [f32; 2],
    pub resolution: [f32; 2],
}

impl ProjectionUniforms {
    pub fn new(mvp: Mat4, rotation: Vec2, resolution: [f32; 2]) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            rotation: rotation.to_array(),
            resolution,
        }
    }
}

/// Uniform block of `shaders/textured.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadUniforms {
    pub mvp: [[f32; 4]; 4],
}

impl QuadUniforms {
    pub fn new(mvp: Mat4) -> Self {
        Self { mvp: mvp.to_cols_array_2d() }
    }
}
