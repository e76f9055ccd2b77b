//! View state driving the projection uniforms.
//!
//! Longitude is unbounded and wraps through the sampler. Latitude is held to
//! `[-zoom/2.5, zoom/2.5]`, and pinned to zero when fully zoomed out.

use glam::Vec2;

pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 5.0;
pub const DRAG_SENSITIVITY: f32 = 0.008;
pub const ZOOM_STEP: f32 = 0.1;
const LATITUDE_LIMIT_DIVISOR: f32 = 2.5;

/// Rotation of the virtual sphere plus the screen zoom factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    rotation_longitude: f32,
    rotation_latitude: f32,
    zoom: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rotation_longitude: 0.0,
            rotation_latitude: 0.0,
            zoom: MIN_ZOOM,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pans the sphere by a pointer displacement in screen pixels.
    ///
    /// Dragging right turns the sphere towards lower longitudes; the pan gets
    /// finer as the zoom grows.
    pub fn apply_drag(&mut self, delta_x: f32, delta_y: f32) {
        if !delta_x.is_finite() || !delta_y.is_finite() {
            return;
        }

        self.rotation_longitude += delta_x * -DRAG_SENSITIVITY / self.zoom;
        self.rotation_latitude += delta_y * DRAG_SENSITIVITY / self.zoom;
        self.clamp_latitude();
    }

    /// Steps the zoom by one wheel notch per unit of `wheel_delta`.
    pub fn apply_zoom(&mut self, wheel_delta: f32) {
        if !wheel_delta.is_finite() {
            return;
        }

        self.zoom = (self.zoom + wheel_delta * ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
        self.clamp_latitude();
    }

    /// Jumps to an absolute zoom, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn set_zoom(&mut self, zoom: f32) {
        if !zoom.is_finite() {
            return;
        }

        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.clamp_latitude();
    }

    /// Jumps to an absolute rotation, latitude clamped for the current zoom.
    pub fn set_rotation(&mut self, longitude: f32, latitude: f32) {
        if longitude.is_finite() {
            self.rotation_longitude = longitude;
        }
        if latitude.is_finite() {
            self.rotation_latitude = latitude;
        }
        self.clamp_latitude();
    }

    pub fn longitude(&self) -> f32 {
        self.rotation_longitude
    }

    pub fn latitude(&self) -> f32 {
        self.rotation_latitude
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// The `rotation` uniform: `(longitude, latitude)` in radians.
    pub fn rotation(&self) -> Vec2 {
        Vec2::new(self.rotation_longitude, self.rotation_latitude)
    }

    fn clamp_latitude(&mut self) {
        if self.zoom != MIN_ZOOM {
            let limit = latitude_limit(self.zoom);
            self.rotation_latitude = self.rotation_latitude.clamp(-limit, limit);
        } else {
            self.rotation_latitude = 0.0;
        }
    }
}

/// Largest latitude offset reachable at `zoom`.
pub fn latitude_limit(zoom: f32) -> f32 {
    zoom / LATITUDE_LIMIT_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view() {
        let view = ViewState::new();
        assert_eq!(view.rotation(), Vec2::ZERO);
        assert_eq!(view.zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_non_finite_drag_is_ignored() {
        let mut view = ViewState::new();
        view.apply_zoom(10.0);
        view.apply_drag(f32::NAN, 4.0);
        view.apply_drag(1.0, f32::INFINITY);
        assert_eq!(view.rotation(), Vec2::ZERO);
    }

    #[test]
    fn test_zoom_out_reclamps_latitude() {
        let mut view = ViewState::new();
        view.apply_zoom(40.0);
        view.apply_drag(0.0, 10_000.0);
        assert_eq!(view.latitude(), latitude_limit(MAX_ZOOM));

        view.apply_zoom(-40.0);
        assert_eq!(view.zoom(), MIN_ZOOM);
        assert_eq!(view.latitude(), 0.0);
    }
}
