//! Spherical projection on the CPU.
//!
//! `spherical_projection` is the same closed-form remap the fragment stage in
//! `shaders/projection.wgsl` runs per pixel. `render_view` replays the whole
//! frame (blit, zoomed flipped quad, projection, sampling) in software for
//! headless snapshots.

use crate::{
    camera::Camera2D,
    config::BACKGROUND_RGBA,
    quad::Rect,
    view::ViewState,
};
use glam::{Vec2, Vec4};
use image::{Rgba, RgbaImage};
use std::f32::consts::{PI, TAU};

/// Maps a quad texture coordinate to a v-up sample coordinate on the map.
///
/// Points outside the unit disk collapse onto its rim instead of producing NaN.
pub fn spherical_projection(uv: Vec2, rotation: Vec2) -> Vec2 {
    let x = uv.x * 2.0 - 1.0;
    let y = uv.y * 2.0 - 1.0;

    let depth = (1.0 - x * x - y * y).max(0.0).sqrt();
    let longitude = x.atan2(depth) + rotation.x;
    let latitude = y.clamp(-1.0, 1.0).asin() + rotation.y;

    Vec2::new(longitude / TAU, latitude / PI + 0.5)
}

/// Bilinear sample in v-down texture space, wrapping `u` and clamping `v`.
pub fn sample_bilinear(image: &RgbaImage, u: f32, v: f32) -> Vec4 {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Vec4::ZERO;
    }
    let u = if u.is_finite() { u } else { 0.0 };
    let v = if v.is_finite() { v } else { 0.0 };

    let tx = u * width as f32 - 0.5;
    let ty = v * height as f32 - 0.5;
    let x0 = tx.floor();
    let y0 = ty.floor();
    let fx = tx - x0;
    let fy = ty - y0;

    let column = |x: f32| (x as i64).rem_euclid(width as i64) as u32;
    let row = |y: f32| (y as i64).clamp(0, height as i64 - 1) as u32;
    let texel = |x: u32, y: u32| to_unit(image.get_pixel(x, y));

    let (left, right) = (column(x0), column(x0 + 1.0));
    let (top, bottom) = (row(y0), row(y0 + 1.0));

    let upper = texel(left, top).lerp(texel(right, top), fx);
    let lower = texel(left, bottom).lerp(texel(right, bottom), fx);
    upper.lerp(lower, fy)
}

/// Copies `source` onto a background-cleared target of the same size.
pub fn blit_to_target(source: &RgbaImage) -> RgbaImage {
    let background = to_unit(&Rgba(BACKGROUND_RGBA));
    RgbaImage::from_fn(source.width(), source.height(), |x, y| {
        to_pixel(blend_over(to_unit(source.get_pixel(x, y)), background))
    })
}

/// Renders one `width`×`height` frame of `source` as seen through `view`.
pub fn render_view(source: &RgbaImage, view: &ViewState, width: u32, height: u32) -> RgbaImage {
    let target = blit_to_target(source);
    let camera = Camera2D::centered(width as f32, height as f32);
    let dest = Rect::from_size(width as f32, height as f32);
    let background = to_unit(&Rgba(BACKGROUND_RGBA));
    let rotation = view.rotation();

    RgbaImage::from_fn(width, height, |px, py| {
        let pixel_center = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
        let world = camera.screen_to_world(pixel_center, view.zoom());
        if !dest.contains(world.x, world.y) {
            return Rgba(BACKGROUND_RGBA);
        }

        // The target is drawn flipped, so quad v grows upwards.
        let uv = Vec2::new(
            (world.x - dest.x) / dest.width,
            1.0 - (world.y - dest.y) / dest.height,
        );
        let sample = spherical_projection(uv, rotation);
        let color = sample_bilinear(&target, sample.x, 1.0 - sample.y);
        to_pixel(blend_over(color, background))
    })
}

fn blend_over(source: Vec4, destination: Vec4) -> Vec4 {
    let alpha = source.w;
    let rgb = source.truncate() * alpha + destination.truncate() * (1.0 - alpha);
    rgb.extend(alpha + destination.w * (1.0 - alpha))
}

fn to_unit(pixel: &Rgba<u8>) -> Vec4 {
    Vec4::new(
        pixel[0] as f32,
        pixel[1] as f32,
        pixel[2] as f32,
        pixel[3] as f32,
    ) / 255.0
}

fn to_pixel(color: Vec4) -> Rgba<u8> {
    let scaled = (color.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
    Rgba([scaled.x as u8, scaled.y as u8, scaled.z as u8, scaled.w as u8])
}
