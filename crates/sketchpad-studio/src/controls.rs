//! Keyboard control surface.
//!
//! Keys map to [`Action`]s; actions mutate the style or the canvas. Style changes
//! are logged with their new value since there is no on-screen readout.

use sketchpad_engine::canvas::Canvas;
use sketchpad_engine::input::{Key, Modifiers};
use sketchpad_engine::render::RenderSurface;
use sketchpad_engine::scene::{Channel, StyleState, Tool};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    SelectTool(Tool),
    /// Signed number of color steps.
    AdjustChannel(Channel, i32),
    AdjustSize(f32),
    AdjustSegments(i32),
    Clear,
    ShowPicture,
    Quit,
}

/// Binding for a key press, if any.
pub fn action_for_key(key: Key, modifiers: Modifiers) -> Option<Action> {
    let step = if modifiers.shift { -1 } else { 1 };
    let action = match key {
        Key::P => Action::SelectTool(Tool::Point),
        Key::T => Action::SelectTool(Tool::Triangle),
        Key::C => Action::SelectTool(Tool::Circle),

        Key::R => Action::AdjustChannel(Channel::Red, step),
        Key::G => Action::AdjustChannel(Channel::Green, step),
        Key::B => Action::AdjustChannel(Channel::Blue, step),

        Key::BracketRight => Action::AdjustSize(1.0),
        Key::BracketLeft => Action::AdjustSize(-1.0),
        Key::Equal => Action::AdjustSegments(1),
        Key::Minus => Action::AdjustSegments(-1),

        Key::Backspace | Key::Delete => Action::Clear,
        Key::D => Action::ShowPicture,
        Key::Escape => Action::Quit,

        _ => return None,
    };
    Some(action)
}

impl Action {
    /// Whether holding the key keeps firing the action. One-shot canvas actions do not.
    pub fn repeats(self) -> bool {
        !matches!(self, Action::Clear | Action::ShowPicture)
    }
}

/// Binding for a key press, dropping auto-repeats of one-shot actions.
pub fn action_for_press(key: Key, modifiers: Modifiers, repeat: bool) -> Option<Action> {
    action_for_key(key, modifiers).filter(|action| !repeat || action.repeats())
}

/// Applies `action`. Returns `false` when the app should quit.
pub fn apply_action<S: RenderSurface>(
    action: Action,
    canvas: &mut Canvas<S>,
    style: &mut StyleState,
) -> bool {
    match action {
        Action::SelectTool(tool) => {
            style.set_tool(tool);
            log::info!("tool: {tool:?}");
        }
        Action::AdjustChannel(channel, steps) => {
            style.adjust_channel(channel, steps);
            log::info!("{channel:?}: {:.1}", style.channel(channel));
        }
        Action::AdjustSize(delta) => {
            style.adjust_size(delta);
            log::info!("size: {}", style.size());
        }
        Action::AdjustSegments(delta) => {
            style.adjust_segments(delta);
            log::info!("segments: {}", style.segments());
        }
        Action::Clear => canvas.clear(),
        Action::ShowPicture => canvas.show_picture(),
        Action::Quit => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchpad_engine::canvas::CanvasConfig;
    use sketchpad_engine::effects::BurstKind;

    fn shift() -> Modifiers {
        Modifiers { shift: true, ..Modifiers::default() }
    }

    // ── bindings ──────────────────────────────────────────────────────────

    #[test]
    fn tool_keys_select_tools() {
        let none = Modifiers::default();
        assert_eq!(action_for_key(Key::P, none), Some(Action::SelectTool(Tool::Point)));
        assert_eq!(action_for_key(Key::T, none), Some(Action::SelectTool(Tool::Triangle)));
        assert_eq!(action_for_key(Key::C, none), Some(Action::SelectTool(Tool::Circle)));
    }

    #[test]
    fn shift_lowers_channels() {
        assert_eq!(
            action_for_key(Key::G, Modifiers::default()),
            Some(Action::AdjustChannel(Channel::Green, 1))
        );
        assert_eq!(action_for_key(Key::G, shift()), Some(Action::AdjustChannel(Channel::Green, -1)));
    }

    #[test]
    fn unbound_key_does_nothing() {
        assert_eq!(action_for_key(Key::Q, Modifiers::default()), None);
        assert_eq!(action_for_key(Key::Unknown(7), Modifiers::default()), None);
    }

    #[test]
    fn auto_repeat_does_not_refire_canvas_actions() {
        let none = Modifiers::default();
        assert_eq!(action_for_press(Key::D, none, false), Some(Action::ShowPicture));
        assert_eq!(action_for_press(Key::D, none, true), None);
        assert_eq!(action_for_press(Key::Backspace, none, true), None);
        assert_eq!(action_for_press(Key::Delete, none, true), None);
    }

    #[test]
    fn auto_repeat_keeps_adjusting_style() {
        assert_eq!(
            action_for_press(Key::BracketRight, Modifiers::default(), true),
            Some(Action::AdjustSize(1.0))
        );
    }

    #[test]
    fn held_show_key_starts_one_burst() {
        let mut canvas = Canvas::new(&CanvasConfig::default());
        let mut style = StyleState::default();
        let mut bursts = 0;
        for repeat in [false, true, true, true] {
            if let Some(action) = action_for_press(Key::D, Modifiers::default(), repeat) {
                apply_action(action, &mut canvas, &mut style);
            }
            if canvas.take_burst_request().is_some() {
                bursts += 1;
            }
        }
        assert_eq!(bursts, 1);
    }

    // ── apply ─────────────────────────────────────────────────────────────

    #[test]
    fn style_actions_leave_canvas_alone() {
        let mut canvas = Canvas::new(&CanvasConfig::default());
        let mut style = StyleState::default();

        assert!(apply_action(Action::AdjustChannel(Channel::Red, -3), &mut canvas, &mut style));
        assert!((style.channel(Channel::Red) - 0.7).abs() < 1e-5);

        apply_action(Action::AdjustSize(1.0), &mut canvas, &mut style);
        apply_action(Action::AdjustSegments(-1), &mut canvas, &mut style);
        assert_eq!(style.size(), 11.0);
        assert_eq!(style.segments(), 11);
        assert!(canvas.take_burst_request().is_none());
    }

    #[test]
    fn clear_and_show_request_bursts() {
        let mut canvas = Canvas::new(&CanvasConfig::default());
        let mut style = StyleState::default();

        apply_action(Action::ShowPicture, &mut canvas, &mut style);
        assert!(canvas.picture_visible());
        assert_eq!(canvas.take_burst_request(), Some(BurstKind::Confetti));

        apply_action(Action::Clear, &mut canvas, &mut style);
        assert!(!canvas.picture_visible());
        assert_eq!(canvas.take_burst_request(), Some(BurstKind::Explosion));
    }

    #[test]
    fn quit_stops_the_app() {
        let mut canvas = Canvas::new(&CanvasConfig::default());
        let mut style = StyleState::default();
        assert!(!apply_action(Action::Quit, &mut canvas, &mut style));
    }
}
