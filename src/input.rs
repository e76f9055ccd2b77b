//! Pointer and wheel input collected between frames.
//!
//! winit delivers input as events; the view is updated once per frame from
//! what accumulated since the previous one.

use crate::view::ViewState;
use glam::Vec2;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
};

/// Pixel scroll deltas are converted to wheel notches at this rate.
pub const PIXELS_PER_LINE: f32 = 120.0;

#[derive(Debug, Default)]
pub struct InputMapper {
    primary_down: bool,
    cursor: Option<Vec2>,
    frame_start_cursor: Option<Vec2>,
    wheel: f32,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one window event. Anything that is not pointer input is ignored.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                if *button == MouseButton::Left {
                    self.set_primary_button(*state == ElementState::Pressed);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(to_vec2(*position));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll(wheel_notches(*delta));
            }
            // A release that happens in another window is never delivered.
            WindowEvent::Focused(false) => self.set_primary_button(false),
            _ => {}
        }
    }

    pub fn set_primary_button(&mut self, pressed: bool) {
        self.primary_down = pressed;
    }

    pub fn move_cursor(&mut self, position: Vec2) {
        self.cursor = Some(position);
    }

    pub fn scroll(&mut self, notches: f32) {
        if notches.is_finite() {
            self.wheel += notches;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.primary_down
    }

    /// Pointer displacement since the last `apply`.
    pub fn pointer_delta(&self) -> Vec2 {
        match (self.frame_start_cursor, self.cursor) {
            (Some(start), Some(current)) => current - start,
            _ => Vec2::ZERO,
        }
    }

    /// Applies this frame's drag and wheel input to `view` and starts a new
    /// frame. Returns whether the view changed, i.e. the uniforms need
    /// re-uploading.
    pub fn apply(&mut self, view: &mut ViewState) -> bool {
        let before = *view;

        if self.primary_down {
            let delta = self.pointer_delta();
            view.apply_drag(delta.x, delta.y);
        }
        view.apply_zoom(self.wheel);

        self.wheel = 0.0;
        self.frame_start_cursor = self.cursor;

        *view != before
    }
}

fn to_vec2(position: PhysicalPosition<f64>) -> Vec2 {
    Vec2::new(position.x as f32, position.y as f32)
}

pub fn wheel_notches(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
    }
}
