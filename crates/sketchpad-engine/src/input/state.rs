use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for a single window.
///
/// Holds "is down" information and current pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels; `None` while outside the surface.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss, clear "down" sets so a release outside the window
                    // cannot leave the button stuck (and keep stamping).
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                ..
            } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }

            InputEvent::PointerButton(PointerButtonEvent {
                button,
                state,
                x,
                y,
                modifiers,
            }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            x: 3.0,
            y: 4.0,
            modifiers: Modifiers::default(),
        })
    }

    #[test]
    fn press_and_release_track_held_buttons() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();

        s.apply_event(&mut f, button(MouseButtonState::Pressed));
        assert!(s.button_down(MouseButton::Left));
        assert!(f.buttons_pressed.contains(&MouseButton::Left));
        assert_eq!(s.pointer_pos, Some((3.0, 4.0)));

        s.apply_event(&mut f, button(MouseButtonState::Released));
        assert!(!s.button_down(MouseButton::Left));
        assert!(f.buttons_released.contains(&MouseButton::Left));
        assert_eq!(f.events.len(), 2);
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, button(MouseButtonState::Pressed));
        s.apply_event(&mut f, InputEvent::Focused(false));
        assert!(s.buttons_down.is_empty());
    }

    #[test]
    fn pointer_left_forgets_position() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 1.0 }));
        s.apply_event(&mut f, InputEvent::PointerLeft);
        assert_eq!(s.pointer_pos, None);
    }

    #[test]
    fn repeated_key_press_is_one_transition() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        let ev = InputEvent::Key {
            key: Key::C,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            repeat: false,
        };
        s.apply_event(&mut f, ev.clone());
        f.clear();
        s.apply_event(&mut f, ev);
        assert!(f.keys_pressed.is_empty());
        assert!(s.key_down(Key::C));
    }
}
