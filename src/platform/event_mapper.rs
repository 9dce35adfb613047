//=========================================================================
// Platform Event Mapper
//
// Converts Winit window events to raw pointer input for gump routing.
// Keeps OS-specific input types out of the gump core.
//
// Responsibilities:
// - Translate cursor motion, cursor leave and primary button presses
// - Ignore secondary buttons and non-pointer events
//
//=========================================================================

use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};

//=== RawPointerInput =====================================================
//
// Pointer input before hit-testing. Positions are window pixels.
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawPointerInput {
    Moved { x: i32, y: i32 },
    Pressed,
    Released,
    Left,
}

//=== Button Conversion ===================================================
//
// Only the primary button drives gump buttons.
//
pub fn map_button(button: WinitMouseButton, state: ElementState) -> Option<RawPointerInput> {
    match (button, state) {
        (WinitMouseButton::Left, ElementState::Pressed) => Some(RawPointerInput::Pressed),
        (WinitMouseButton::Left, ElementState::Released) => Some(RawPointerInput::Released),
        _ => None,
    }
}

//=== Full Event Conversion ===============================================
//
// Notes:
// - `CursorMoved` positions are rounded to whole pixels.
// - `CursorLeft` becomes `Left`.
// - Other Winit events map to `None`.
//
pub fn map_window_event(event: &WindowEvent) -> Option<RawPointerInput> {
    match event {
        WindowEvent::CursorMoved { position, .. } => Some(RawPointerInput::Moved {
            x: position.x.round() as i32,
            y: position.y.round() as i32,
        }),
        WindowEvent::CursorLeft { .. } => Some(RawPointerInput::Left),
        WindowEvent::MouseInput { state, button, .. } => map_button(*button, *state),
        _ => None,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_maps_to_press_and_release() {
        assert_eq!(
            map_button(WinitMouseButton::Left, ElementState::Pressed),
            Some(RawPointerInput::Pressed)
        );
        assert_eq!(
            map_button(WinitMouseButton::Left, ElementState::Released),
            Some(RawPointerInput::Released)
        );
    }

    #[test]
    fn secondary_buttons_are_ignored() {
        assert_eq!(map_button(WinitMouseButton::Right, ElementState::Pressed), None);
        assert_eq!(map_button(WinitMouseButton::Other(4), ElementState::Released), None);
    }

    #[test]
    fn non_pointer_events_are_ignored() {
        assert_eq!(map_window_event(&WindowEvent::Focused(true)), None);
        assert_eq!(map_window_event(&WindowEvent::CloseRequested), None);
    }
}
