//! Input model.
//!
//! Platform-agnostic: no winit types appear here. The window runtime translates
//! platform events into [`InputEvent`]s, folds them into [`InputState`] and records
//! per-frame transitions in [`InputFrame`].

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};
