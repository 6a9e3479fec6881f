//! Translation from winit window events to viewport input events.

use crate::controllers::viewport::events::{InputEvent, Key};
use crate::core::data::point::PixelPoint;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::Key as WinitKey;

/// Maps a window event to the viewport's input vocabulary. `cursor` is the last
/// pointer position seen, since button events carry none.
pub fn translate(event: &WindowEvent, cursor: PixelPoint) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested => Some(InputEvent::Close),
        WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Released => {
            Some(InputEvent::KeyReleased(key_from(&event.logical_key)))
        }
        WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::WheelScrolled {
            delta: wheel_delta(*delta),
        }),
        WindowEvent::MouseInput {
            state: ElementState::Pressed,
            button: MouseButton::Left,
            ..
        } => Some(InputEvent::PointerPressed { position: cursor }),
        _ => None,
    }
}

pub fn key_from(key: &WinitKey) -> Key {
    match key {
        WinitKey::Character(text) => text.chars().next().map_or(Key::Other, Key::Character),
        _ => Key::Other,
    }
}

/// Vertical scroll amount; positive is away from the user.
pub fn wheel_delta(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;
    use winit::keyboard::{NamedKey, SmolStr};

    #[test]
    fn test_key_from_character() {
        assert_eq!(
            key_from(&WinitKey::Character(SmolStr::new("O"))),
            Key::Character('O')
        );
        assert_eq!(key_from(&WinitKey::Named(NamedKey::Escape)), Key::Other);
    }

    #[test]
    fn test_wheel_delta_uses_vertical_axis() {
        assert_eq!(wheel_delta(MouseScrollDelta::LineDelta(3.0, -1.0)), -1.0);
        assert_eq!(
            wheel_delta(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 12.5))),
            12.5
        );
    }

    #[test]
    fn test_translate_close() {
        assert_eq!(
            translate(&WindowEvent::CloseRequested, PixelPoint::default()),
            Some(InputEvent::Close)
        );
    }

    #[test]
    fn test_translate_ignores_focus_changes() {
        assert_eq!(translate(&WindowEvent::Focused(true), PixelPoint::default()), None);
    }
}
