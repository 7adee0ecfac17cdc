use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::input::{InputEvent, InputState};

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the studio binary.
pub trait App {
    /// Called for raw window events, before translation.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called for every translated input event, in arrival order.
    ///
    /// `input` already reflects `event`. Stamping reacts here rather than in
    /// `on_frame` so every pointer move is seen, not one per frame.
    fn on_input(
        &mut self,
        window: &WindowCtx<'_>,
        input: &InputState,
        event: &InputEvent,
    ) -> AppControl {
        let _ = (window, input, event);
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
