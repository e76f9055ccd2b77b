//! GPU textures: the uploaded map, the off-screen target it is copied into
//! each frame, and small CPU-written textures such as the fps label.

use crate::{gpu::GpuContext, loader::SourceImage};

pub const TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    pub fn from_image(gpu: &GpuContext, image: &SourceImage, label: &str) -> Self {
        let texture = Self::with_usage(
            gpu,
            image.width(),
            image.height(),
            wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            &clamped_sampler(wgpu::FilterMode::Linear),
            label,
        );
        texture.write(gpu, image.pixels());
        texture
    }

    /// Empty texture the CPU rewrites in place, sampled with nearest filtering.
    pub fn writable(gpu: &GpuContext, width: u32, height: u32, label: &str) -> Self {
        Self::with_usage(
            gpu,
            width,
            height,
            wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            &clamped_sampler(wgpu::FilterMode::Nearest),
            label,
        )
    }

    fn with_usage(
        gpu: &GpuContext,
        width: u32,
        height: u32,
        usage: wgpu::TextureUsages,
        sampler: &wgpu::SamplerDescriptor,
        label: &str,
    ) -> Self {
        let texture = gpu.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: extent(width, height),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: TEXTURE_FORMAT,
            usage,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = gpu.device.create_sampler(sampler);

        Self {
            texture,
            view,
            sampler,
            width,
            height,
        }
    }

    /// Replaces the whole texture with tightly packed RGBA8 rows.
    pub fn write(&self, gpu: &GpuContext, pixels: &[u8]) {
        gpu.queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.width),
                rows_per_image: Some(self.height),
            },
            extent(self.width, self.height),
        );
    }
}

/// Render target sized to the source image. Written by the blit pass and
/// read by the projection pass every frame.
pub struct OffscreenTarget {
    texture: Texture,
}

impl OffscreenTarget {
    pub fn new(gpu: &GpuContext, width: u32, height: u32) -> Self {
        let texture = Texture::with_usage(
            gpu,
            width,
            height,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            &map_sampler(),
            "Offscreen Target",
        );
        Self { texture }
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.texture.view
    }

    pub fn size(&self) -> (u32, u32) {
        (self.texture.width, self.texture.height)
    }
}

/// Longitude wraps around the map horizontally; latitude stops at the poles.
pub fn map_sampler() -> wgpu::SamplerDescriptor<'static> {
    wgpu::SamplerDescriptor {
        label: Some("Map Sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    }
}

fn clamped_sampler(filter: wgpu::FilterMode) -> wgpu::SamplerDescriptor<'static> {
    wgpu::SamplerDescriptor {
        label: Some("Clamped Sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: filter,
        min_filter: filter,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    }
}

fn extent(width: u32, height: u32) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    }
}
