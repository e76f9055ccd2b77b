use approx::assert_relative_eq;
use glam::Vec2;
use image::{Rgba, RgbaImage};
use spherical_viewer::{
    config::BACKGROUND_RGBA,
    projection::{render_view, sample_bilinear, spherical_projection},
    view::ViewState,
};
use std::f32::consts::TAU;

fn uv_grid(steps: u32) -> Vec<Vec2> {
    let mut points = Vec::new();
    for i in 0..=steps {
        for j in 0..=steps {
            points.push(Vec2::new(i as f32 / steps as f32, j as f32 / steps as f32));
        }
    }
    points
}

#[test]
fn test_center_maps_to_equator_at_origin() {
    let sample = spherical_projection(Vec2::new(0.5, 0.5), Vec2::ZERO);

    // longitude 0 lands on u = 0, the wrap seam of the map
    assert_eq!(sample.x, 0.0);
    assert_eq!(sample.y, 0.5);
}

#[test]
fn test_rotation_offsets_center() {
    let rotation = Vec2::new(std::f32::consts::PI, 0.25);
    let sample = spherical_projection(Vec2::new(0.5, 0.5), rotation);

    assert_relative_eq!(sample.x, 0.5, epsilon = 1e-6);
    assert_relative_eq!(sample.y, 0.5 + 0.25 / std::f32::consts::PI, epsilon = 1e-6);
}

#[test]
fn test_outside_unit_disk_is_clamped() {
    let corner = spherical_projection(Vec2::new(1.0, 1.0), Vec2::ZERO);
    assert!(corner.is_finite());
    assert_relative_eq!(corner.x, 0.25, epsilon = 1e-6);
    assert_relative_eq!(corner.y, 1.0, epsilon = 1e-6);

    let opposite = spherical_projection(Vec2::new(0.0, 0.0), Vec2::ZERO);
    assert_relative_eq!(opposite.x, -0.25, epsilon = 1e-6);
    assert_relative_eq!(opposite.y, 0.0, epsilon = 1e-6);
}

#[test]
fn test_projection_is_finite_everywhere() {
    let rotations = [Vec2::ZERO, Vec2::new(3.0, -2.0), Vec2::new(-100.0, 2.0)];
    for rotation in rotations {
        for uv in uv_grid(20) {
            let sample = spherical_projection(uv, rotation);
            assert!(sample.is_finite(), "uv {:?} rotation {:?} -> {:?}", uv, rotation, sample);
        }
    }
}

#[test]
fn test_longitude_period() {
    for uv in uv_grid(10) {
        for rotation_x in [-3.0f32, 0.0, 0.7, 5.0] {
            let base = spherical_projection(uv, Vec2::new(rotation_x, 0.1));
            let turned = spherical_projection(uv, Vec2::new(rotation_x + TAU, 0.1));

            assert_relative_eq!(turned.x - base.x, 1.0, epsilon = 1e-5);
            assert_eq!(turned.y, base.y);
        }
    }
}

#[test]
fn test_longitude_period_through_sampler() {
    let mut map = RgbaImage::new(8, 4);
    for (x, y, pixel) in map.enumerate_pixels_mut() {
        *pixel = Rgba([(x * 30) as u8, (y * 60) as u8, 90, 255]);
    }

    for uv in uv_grid(6) {
        let base = spherical_projection(uv, Vec2::new(0.3, 0.0));
        let turned = spherical_projection(uv, Vec2::new(0.3 + TAU, 0.0));

        let a = sample_bilinear(&map, base.x, 1.0 - base.y);
        let b = sample_bilinear(&map, turned.x, 1.0 - turned.y);
        assert!((a - b).abs().max_element() < 1e-3, "{:?} vs {:?}", a, b);
    }
}

#[test]
fn test_sampler_clamps_vertically() {
    let mut map = RgbaImage::new(1, 2);
    map.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    map.put_pixel(0, 1, Rgba([0, 0, 255, 255]));

    let above = sample_bilinear(&map, 0.5, -3.0);
    let below = sample_bilinear(&map, 0.5, 4.0);
    assert_eq!(above.x, 1.0);
    assert_eq!(below.z, 1.0);
}

#[test]
fn test_render_uniform_map() {
    let color = Rgba([200, 120, 40, 255]);
    let map = RgbaImage::from_pixel(32, 16, color);

    let mut view = ViewState::new();
    view.apply_drag(40.0, 0.0);
    let frame = render_view(&map, &view, 50, 45);

    assert_eq!(frame.dimensions(), (50, 45));
    assert!(frame.pixels().all(|p| *p == color));
}

#[test]
fn test_transparent_map_shows_background() {
    let map = RgbaImage::from_pixel(16, 8, Rgba([255, 255, 255, 0]));
    let frame = render_view(&map, &ViewState::new(), 20, 18);
    assert!(frame.pixels().all(|p| *p == Rgba(BACKGROUND_RGBA)));
}

#[test]
fn test_north_is_up() {
    let mut map = RgbaImage::new(16, 8);
    for (_, y, pixel) in map.enumerate_pixels_mut() {
        *pixel = if y < 4 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        };
    }

    let frame = render_view(&map, &ViewState::new(), 50, 45);
    let top = frame.get_pixel(25, 2);
    let bottom = frame.get_pixel(25, 42);

    assert!(top[0] > 200 && top[2] < 50, "top pixel {:?}", top);
    assert!(bottom[2] > 200 && bottom[0] < 50, "bottom pixel {:?}", bottom);
}
