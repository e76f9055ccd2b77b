//! Viewer defaults. Command-line flags in `main.rs` override the fields that
//! are meant to vary; the window geometry stays fixed.

use std::path::PathBuf;

pub const WINDOW_WIDTH: u32 = 500;
pub const WINDOW_HEIGHT: u32 = 450;
pub const WINDOW_TITLE: &str = "wowers";
pub const DEFAULT_TEXTURE_PATH: &str = "res/map.png";
pub const MAP_TEXTURE: &str = "map";

/// Dark blue behind the map, sRGB bytes.
pub const BACKGROUND_RGBA: [u8; 4] = [0, 82, 172, 255];

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub texture_path: PathBuf,
    pub vsync: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            title: WINDOW_TITLE.to_string(),
            texture_path: PathBuf::from(DEFAULT_TEXTURE_PATH),
            vsync: true,
        }
    }
}

impl ViewerConfig {
    pub fn with_texture_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.texture_path = path.into();
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }

    pub fn resolution(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

/// Background as a clear color for sRGB render targets, which expect linear
/// components.
pub fn clear_color() -> wgpu::Color {
    let [r, g, b, a] = BACKGROUND_RGBA;
    wgpu::Color {
        r: srgb_to_linear(r),
        g: srgb_to_linear(g),
        b: srgb_to_linear(b),
        a: a as f64 / 255.0,
    }
}

fn srgb_to_linear(component: u8) -> f64 {
    let c = component as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
