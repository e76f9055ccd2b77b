pub mod camera;
pub mod config;
pub mod fps;
pub mod gpu;
pub mod input;
pub mod loader;
pub mod overlay;
pub mod projection;
pub mod quad;
pub mod render_loop;
pub mod resources;
pub mod shader;
pub mod texture;
pub mod uniforms;
pub mod view;

use anyhow::{Context, Result};
use camera::{screen_projection, Camera2D};
use config::{clear_color, ViewerConfig, MAP_TEXTURE};
use gpu::GpuContext;
use overlay::FpsOverlay;
use quad::{quad_vertices, Rect, TexturedQuad};
use resources::ResourceManager;
use shader::ShaderManager;
use texture::{OffscreenTarget, TEXTURE_FORMAT};
use uniforms::{ProjectionUniforms, QuadUniforms};
use view::ViewState;

/// Owns every GPU resource of the viewer. Created once at startup and dropped
/// at shutdown.
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    camera: Camera2D,
    resolution: [f32; 2],

    blit_pipeline: wgpu::RenderPipeline,
    projection_pipeline: wgpu::RenderPipeline,
    overlay_pipeline: wgpu::RenderPipeline,

    // Source image copied into the target, unscaled.
    blit_quad: TexturedQuad,
    // Target drawn flipped through the projection shader.
    projection_quad: TexturedQuad,
    overlay: FpsOverlay,

    target: OffscreenTarget,
    resources: ResourceManager,
}

impl Renderer {
    pub fn new(
        surface: wgpu::Surface<'static>,
        gpu: &GpuContext,
        viewer: &ViewerConfig,
        view: &ViewState,
    ) -> Result<Self> {
        let config = Self::create_surface_config(&surface, gpu, viewer)?;
        surface.configure(&gpu.device, &config);

        let mut resources = ResourceManager::new();
        let map = resources
            .add_texture(gpu, MAP_TEXTURE, &viewer.texture_path)
            .context("Failed to load the map texture")?;
        let (map_width, map_height) = (map.width, map.height);
        let target = OffscreenTarget::new(gpu, map_width, map_height);

        let bind_group_layout = quad::create_bind_group_layout(gpu);
        let textured_shader = ShaderManager::create_textured_shader(&gpu.device);
        let projection_shader = ShaderManager::create_projection_shader(&gpu.device);

        let blit_pipeline =
            quad::create_render_pipeline(gpu, &textured_shader, &bind_group_layout, TEXTURE_FORMAT, "Blit");
        let projection_pipeline =
            quad::create_render_pipeline(gpu, &projection_shader, &bind_group_layout, config.format, "Projection");
        let overlay_pipeline =
            quad::create_render_pipeline(gpu, &textured_shader, &bind_group_layout, config.format, "Overlay");

        let map_rect = Rect::from_size(map_width as f32, map_height as f32);
        let blit_quad = TexturedQuad::new(
            gpu,
            &bind_group_layout,
            resources.texture(MAP_TEXTURE)?,
            &QuadUniforms::new(screen_projection(map_rect.width, map_rect.height)),
            &quad_vertices(map_rect, map_rect.width, map_rect.height, map_rect),
            "Blit",
        );

        let camera = Camera2D::centered(viewer.width as f32, viewer.height as f32);
        let resolution = viewer.resolution();
        let flipped = Rect::new(0.0, 0.0, map_rect.width, -map_rect.height);
        let screen_rect = Rect::from_size(viewer.width as f32, viewer.height as f32);
        let projection_quad = TexturedQuad::new(
            gpu,
            &bind_group_layout,
            target.texture(),
            &Self::projection_uniforms(&camera, view, resolution),
            &quad_vertices(flipped, map_rect.width, map_rect.height, screen_rect),
            "Projection",
        );

        let overlay = FpsOverlay::new(gpu, &bind_group_layout, screen_rect.width, screen_rect.height);

        Ok(Self {
            surface,
            config,
            camera,
            resolution,
            blit_pipeline,
            projection_pipeline,
            overlay_pipeline,
            blit_quad,
            projection_quad,
            overlay,
            target,
            resources,
        })
    }

    /// Re-uploads the uniforms that depend on the view.
    pub fn update_view(&self, gpu: &GpuContext, view: &ViewState) {
        let uniforms = Self::projection_uniforms(&self.camera, view, self.resolution);
        self.projection_quad.write_uniforms(gpu, &uniforms);
    }

    pub fn update_fps(&mut self, gpu: &GpuContext, fps: u32) {
        self.overlay.update(gpu, fps);
    }

    pub fn render(&self, gpu: &GpuContext) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let surface_view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        self.encode_blit_pass(&mut encoder);
        self.encode_screen_pass(&mut encoder, &surface_view);

        gpu.queue.submit(Some(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Reconfigures the surface. The `resolution` uniform keeps its startup
    /// value.
    pub fn resize(&mut self, gpu: &GpuContext, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&gpu.device, &self.config);
        }
    }

    pub fn resources(&self) -> &ResourceManager {
        &self.resources
    }

    pub fn target_size(&self) -> (u32, u32) {
        self.target.size()
    }

    fn projection_uniforms(camera: &Camera2D, view: &ViewState, resolution: [f32; 2]) -> ProjectionUniforms {
        ProjectionUniforms::new(camera.view_projection_matrix(view.zoom()), view.rotation(), resolution)
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        gpu: &GpuContext,
        viewer: &ViewerConfig,
    ) -> Result<wgpu::SurfaceConfiguration> {
        let surface_caps = surface.get_capabilities(&gpu.adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .context("Surface reports no supported formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        log::info!("Surface format {:?}", surface_format);

        Ok(wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: viewer.width,
            height: viewer.height,
            present_mode: viewer.present_mode(),
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        })
    }

    fn encode_blit_pass(&self, encoder: &mut wgpu::CommandEncoder) {
        let mut render_pass = begin_cleared_pass(encoder, self.target.view(), "Blit Pass");
        render_pass.set_pipeline(&self.blit_pipeline);
        self.blit_quad.draw(&mut render_pass);
    }

    fn encode_screen_pass(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let mut render_pass = begin_cleared_pass(encoder, view, "Screen Pass");

        render_pass.set_pipeline(&self.projection_pipeline);
        self.projection_quad.draw(&mut render_pass);

        render_pass.set_pipeline(&self.overlay_pipeline);
        self.overlay.draw(&mut render_pass);
    }
}

fn begin_cleared_pass<'a>(
    encoder: &'a mut wgpu::CommandEncoder,
    view: &'a wgpu::TextureView,
    label: &str,
) -> wgpu::RenderPass<'a> {
    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear_color()),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    })
}
