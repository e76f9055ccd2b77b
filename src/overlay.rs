//! Frame-rate label drawn over the projected map.
//!
//! Text is rasterized on the CPU with a 5x7 bitmap font and uploaded into a
//! fixed-size texture; the upload only happens when the shown value changes.

use crate::{
    camera::screen_projection,
    gpu::GpuContext,
    quad::{quad_vertices, Rect, TexturedQuad},
    texture::Texture,
    uniforms::QuadUniforms,
};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
const GLYPH_SPACING: u32 = 1;
pub const LABEL_SCALE: u32 = 2;
pub const MAX_LABEL_CHARS: usize = 8;
pub const LABEL_POSITION: (f32, f32) = (10.0, 10.0);

const LIME: [u8; 4] = [0, 158, 47, 255];
const ORANGE: [u8; 4] = [255, 161, 0, 255];
const RED: [u8; 4] = [230, 41, 55, 255];

/// RGBA8 bitmap of a rendered line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Label {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ]
    }
}

pub fn fps_text(fps: u32) -> String {
    format!("{:2} FPS", fps)
}

pub fn fps_color(fps: u32) -> [u8; 4] {
    match fps {
        0..=14 => RED,
        15..=29 => ORANGE,
        _ => LIME,
    }
}

pub fn label_size(max_chars: usize, scale: u32) -> (u32, u32) {
    let advance = (GLYPH_WIDTH + GLYPH_SPACING) * scale;
    (max_chars as u32 * advance, GLYPH_HEIGHT * scale)
}

/// Draws `text` into a transparent `max_chars`-wide label. Extra characters
/// are dropped; characters without a glyph render as blanks.
pub fn rasterize_label(text: &str, color: [u8; 4], max_chars: usize, scale: u32) -> Label {
    let (width, height) = label_size(max_chars, scale);
    let mut pixels = vec![0u8; (width * height * 4) as usize];
    let advance = (GLYPH_WIDTH + GLYPH_SPACING) * scale;

    for (index, character) in text.chars().take(max_chars).enumerate() {
        let origin_x = index as u32 * advance;
        for (row, bits) in glyph(character).iter().enumerate() {
            for column in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - column)) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let x = origin_x + column * scale + dx;
                        let y = row as u32 * scale + dy;
                        let offset = ((y * width + x) * 4) as usize;
                        pixels[offset..offset + 4].copy_from_slice(&color);
                    }
                }
            }
        }
    }

    Label { width, height, pixels }
}

fn glyph(character: char) -> [u8; 7] {
    match character {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        _ => [0; 7],
    }
}

/// GPU side of the fps label.
pub struct FpsOverlay {
    texture: Texture,
    quad: TexturedQuad,
    shown_fps: Option<u32>,
}

impl FpsOverlay {
    pub fn new(
        gpu: &GpuContext,
        layout: &wgpu::BindGroupLayout,
        screen_width: f32,
        screen_height: f32,
    ) -> Self {
        let (width, height) = label_size(MAX_LABEL_CHARS, LABEL_SCALE);
        let texture = Texture::writable(gpu, width, height, "FPS Label Texture");

        let (x, y) = LABEL_POSITION;
        let vertices = quad_vertices(
            Rect::from_size(width as f32, height as f32),
            width as f32,
            height as f32,
            Rect::new(x, y, width as f32, height as f32),
        );
        let uniforms = QuadUniforms::new(screen_projection(screen_width, screen_height));
        let quad = TexturedQuad::new(gpu, layout, &texture, &uniforms, &vertices, "FPS Label");

        let mut overlay = Self {
            texture,
            quad,
            shown_fps: None,
        };
        overlay.update(gpu, 0);
        overlay
    }

    pub fn update(&mut self, gpu: &GpuContext, fps: u32) {
        if self.shown_fps == Some(fps) {
            return;
        }
        let label = rasterize_label(&fps_text(fps), fps_color(fps), MAX_LABEL_CHARS, LABEL_SCALE);
        self.texture.write(gpu, &label.pixels);
        self.shown_fps = Some(fps);
    }

    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        self.quad.draw(render_pass);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fps_character_has_a_glyph() {
        for character in "0123456789FPS".chars() {
            assert!(glyph(character).iter().any(|row| *row != 0), "{}", character);
        }
        assert_eq!(glyph(' '), [0; 7]);
    }
}
