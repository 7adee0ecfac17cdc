use crate::coords::Vec2;
use crate::input::{InputEvent, InputState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};
use crate::scene::{Circle, Point, Shape, ShapeError, StyleState, Tool, Triangle};

/// Builds a shape of the selected tool at `position` (NDC) from the current style.
pub fn shape_for_style(style: &StyleState, position: Vec2) -> Result<Shape, ShapeError> {
    let color = style.color();
    let size = style.size();
    Ok(match style.tool() {
        Tool::Point => Point::new(position, color, size)?.into(),
        Tool::Triangle => Triangle::new(position, color, size)?.into(),
        Tool::Circle => Circle::new(position, color, size, style.segments())?.into(),
    })
}

/// Returns the pointer position (surface pixels) if `event` should stamp a shape.
///
/// Stamps on a primary-button press and on every pointer move while the primary
/// button is held. Moves are not interpolated: a fast drag leaves gaps.
///
/// `state` must already reflect `event`.
pub fn stamp_position(event: &InputEvent, state: &InputState) -> Option<Vec2> {
    match event {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
            ..
        }) => Some(Vec2::new(*x, *y)),

        InputEvent::PointerMoved(PointerMoveEvent { x, y }) if state.button_down(MouseButton::Left) => {
            Some(Vec2::new(*x, *y))
        }

        _ => None,
    }
}
