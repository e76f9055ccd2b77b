use approx::assert_relative_eq;
use glam::Vec2;
use spherical_viewer::{
    render_loop::{LoopState, RenderLoop},
    view::ViewState,
};
use winit::{
    dpi::PhysicalPosition,
    event::{DeviceId, ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent},
};

fn device() -> DeviceId {
    unsafe { DeviceId::dummy() }
}

fn cursor_moved(x: f64, y: f64) -> WindowEvent {
    WindowEvent::CursorMoved {
        device_id: device(),
        position: PhysicalPosition::new(x, y),
    }
}

fn left_button(state: ElementState) -> WindowEvent {
    WindowEvent::MouseInput {
        device_id: device(),
        state,
        button: MouseButton::Left,
    }
}

#[test]
fn test_starts_running() {
    let frame_loop = RenderLoop::default();
    assert_eq!(frame_loop.state(), LoopState::Running);
    assert!(frame_loop.is_running());
    assert_eq!(*frame_loop.view(), ViewState::new());
}

#[test]
fn test_close_is_terminal_and_idempotent() {
    let mut frame_loop = RenderLoop::default();
    frame_loop.request_close();
    assert_eq!(frame_loop.state(), LoopState::Closing);

    frame_loop.request_close();
    assert_eq!(frame_loop.state(), LoopState::Closing);
    assert!(!frame_loop.is_running());
}

#[test]
fn test_frame_applies_input() {
    let mut frame_loop = RenderLoop::default();
    frame_loop.input_mut().move_cursor(Vec2::ZERO);
    frame_loop.begin_frame();

    frame_loop.input_mut().set_primary_button(true);
    frame_loop.input_mut().move_cursor(Vec2::new(100.0, 0.0));
    let update = frame_loop.begin_frame();

    assert!(update.view_changed);
    assert_relative_eq!(frame_loop.view().longitude(), -0.8, epsilon = 1e-6);
}

#[test]
fn test_idle_frame_reports_no_change() {
    let mut frame_loop = RenderLoop::default();
    let update = frame_loop.begin_frame();
    assert!(!update.view_changed);
}

#[test]
fn test_no_frames_after_close() {
    let mut frame_loop = RenderLoop::default();
    frame_loop.request_close();

    frame_loop.input_mut().scroll(5.0);
    let update = frame_loop.begin_frame();

    assert!(!update.view_changed);
    assert_eq!(update.fps, None);
    assert_eq!(frame_loop.view().zoom(), 1.0);
}

#[test]
fn test_initial_view_is_kept() {
    let mut view = ViewState::new();
    view.set_zoom(3.0);
    view.set_rotation(0.5, 0.25);

    let frame_loop = RenderLoop::new(view);
    assert_eq!(*frame_loop.view(), view);
}

#[test]
fn test_close_requested_event_closes() {
    let mut frame_loop = RenderLoop::default();
    frame_loop.handle_window_event(&WindowEvent::CloseRequested);
    assert_eq!(frame_loop.state(), LoopState::Closing);

    frame_loop.handle_window_event(&WindowEvent::CloseRequested);
    assert_eq!(frame_loop.state(), LoopState::Closing);
}

#[test]
fn test_pointer_events_reach_view() {
    let mut frame_loop = RenderLoop::default();
    frame_loop.handle_window_event(&cursor_moved(10.0, 10.0));
    frame_loop.handle_window_event(&left_button(ElementState::Pressed));
    frame_loop.begin_frame();

    frame_loop.handle_window_event(&cursor_moved(110.0, 10.0));
    frame_loop.handle_window_event(&WindowEvent::MouseWheel {
        device_id: device(),
        delta: MouseScrollDelta::LineDelta(0.0, 10.0),
        phase: TouchPhase::Moved,
    });
    let update = frame_loop.begin_frame();

    assert!(update.view_changed);
    assert!(frame_loop.is_running());
    assert_relative_eq!(frame_loop.view().longitude(), -0.8, epsilon = 1e-6);
    assert_relative_eq!(frame_loop.view().zoom(), 2.0, epsilon = 1e-6);
}

#[test]
fn test_hover_after_focus_loss_does_not_rotate() {
    let mut frame_loop = RenderLoop::default();
    frame_loop.handle_window_event(&cursor_moved(10.0, 10.0));
    frame_loop.handle_window_event(&left_button(ElementState::Pressed));
    frame_loop.begin_frame();

    frame_loop.handle_window_event(&WindowEvent::Focused(false));
    frame_loop.handle_window_event(&WindowEvent::Focused(true));
    frame_loop.handle_window_event(&cursor_moved(110.0, 10.0));
    let update = frame_loop.begin_frame();

    assert!(!update.view_changed);
    assert_eq!(*frame_loop.view(), ViewState::new());
}
