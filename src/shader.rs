pub const PROJECTION_SHADER_SOURCE: &str = include_str!("shaders/projection.wgsl");
pub const TEXTURED_SHADER_SOURCE: &str = include_str!("shaders/textured.wgsl");

pub struct ShaderManager;

impl ShaderManager {
    /// MVP passthrough plus the spherical remap of the map texture.
    pub fn create_projection_shader(device: &wgpu::Device) -> wgpu::ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Projection Shader"),
            source: wgpu::ShaderSource::Wgsl(PROJECTION_SHADER_SOURCE.into()),
        })
    }

    /// MVP passthrough drawing a texture unchanged.
    pub fn create_textured_shader(device: &wgpu::Device) -> wgpu::ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Textured Shader"),
            source: wgpu::ShaderSource::Wgsl(TEXTURED_SHADER_SOURCE.into()),
        })
    }
}
