//! 2D screen camera zooming about the window center.
//!
//! Pixel space, origin top-left, Y down. The view transform is
//! `T(offset) * S(zoom) * T(-target)` with offset and target both at the
//! screen center, so zooming scales the scene about the middle of the window.

use glam::{Mat4, Vec2, Vec3};

const NEAR_PLANE: f32 = -1.0;
const FAR_PLANE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    offset: Vec2,
    target: Vec2,
    screen_size: Vec2,
}

impl Camera2D {
    pub fn centered(width: f32, height: f32) -> Self {
        let center = Vec2::new(width / 2.0, height / 2.0);
        Self {
            offset: center,
            target: center,
            screen_size: Vec2::new(width, height),
        }
    }

    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }

    pub fn view_matrix(&self, zoom: f32) -> Mat4 {
        Mat4::from_translation(self.offset.extend(0.0))
            * Mat4::from_scale(Vec3::new(zoom, zoom, 1.0))
            * Mat4::from_translation((-self.target).extend(0.0))
    }

    /// Model-view-projection for geometry given in world pixels.
    pub fn view_projection_matrix(&self, zoom: f32) -> Mat4 {
        screen_projection(self.screen_size.x, self.screen_size.y) * self.view_matrix(zoom)
    }

    /// Maps a window pixel back to the world pixel drawn there.
    pub fn screen_to_world(&self, point: Vec2, zoom: f32) -> Vec2 {
        (point - self.offset) / zoom + self.target
    }
}

/// Orthographic projection of a `width`×`height` pixel area into clip space.
pub fn screen_projection(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh(0.0, width, height, 0.0, NEAR_PLANE, FAR_PLANE)
}
