//! Keyboard input handling

use game_core::{Control, ControlEvent};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Map a physical key to a game control
pub fn control_for_key(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(Control::Up),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(Control::Down),
        KeyCode::KeyR => Some(Control::Restart),
        KeyCode::Escape => Some(Control::Quit),
        _ => None,
    }
}

/// Extract a control event from a winit keyboard event
pub fn control_event(event: &KeyEvent) -> Option<ControlEvent> {
    let PhysicalKey::Code(code) = event.physical_key else {
        return None;
    };
    control_for_key(code).map(|control| ControlEvent {
        control,
        pressed: event.state == ElementState::Pressed,
    })
}
