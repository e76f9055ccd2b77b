//! Frame loop state: `Running` until the host asks to close, then `Closing`.

use crate::{fps::FpsCounter, input::InputMapper, view::ViewState};
use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

pub const CLOSE_KEY: KeyCode = KeyCode::Escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closing,
}

/// What the caller has to do after a frame step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameUpdate {
    pub view_changed: bool,
    pub fps: Option<u32>,
}

pub struct RenderLoop {
    state: LoopState,
    view: ViewState,
    input: InputMapper,
    fps: FpsCounter,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new(ViewState::default())
    }
}

impl RenderLoop {
    pub fn new(view: ViewState) -> Self {
        Self {
            state: LoopState::Running,
            view,
            input: InputMapper::new(),
            fps: FpsCounter::new(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn input_mut(&mut self) -> &mut InputMapper {
        &mut self.input
    }

    /// The single terminal transition. Idempotent.
    pub fn request_close(&mut self) {
        if self.state == LoopState::Running {
            log::info!("Close requested");
            self.state = LoopState::Closing;
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.request_close(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(CLOSE_KEY),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.request_close(),
            _ => self.input.handle_window_event(event),
        }
    }

    /// Input step of a frame. Does nothing once closing.
    pub fn begin_frame(&mut self) -> FrameUpdate {
        if !self.is_running() {
            return FrameUpdate {
                view_changed: false,
                fps: None,
            };
        }

        let view_changed = self.input.apply(&mut self.view);
        let fps = self.fps.tick();
        if let Some(fps) = fps {
            log::debug!("{} FPS", fps);
        }

        FrameUpdate { view_changed, fps }
    }
}
