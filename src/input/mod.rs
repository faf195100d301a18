use macroquad::prelude::*;

/// Logical keys the simulation reacts to, decoupled from key codes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Pause,
    Quit,
    Clear,
    Restart,
    Randomize,
}

/// Normalized input events consumed by the interaction controller.
/// Positions are in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Key(Key),
    ButtonDown { x: f32, y: f32 },
    PointerMoved { x: f32, y: f32 },
    ButtonUp,
}

const KEY_BINDINGS: &[(KeyCode, Key)] = &[
    (KeyCode::Space, Key::Pause),
    (KeyCode::Q, Key::Quit),
    (KeyCode::Escape, Key::Quit),
    (KeyCode::C, Key::Clear),
    (KeyCode::R, Key::Restart),
    (KeyCode::G, Key::Randomize),
];

/// Translate macroquad key and mouse state into normalized events.
/// Called once per frame; the pointer position is reported every frame
/// and the controller decides whether it matters.
pub fn poll() -> Vec<InputEvent> {
    let mut events = Vec::new();

    for &(code, key) in KEY_BINDINGS {
        if is_key_pressed(code) {
            events.push(InputEvent::Key(key));
        }
    }

    let (x, y) = mouse_position();
    if is_mouse_button_pressed(MouseButton::Left) {
        events.push(InputEvent::ButtonDown { x, y });
    }
    events.push(InputEvent::PointerMoved { x, y });
    if is_mouse_button_released(MouseButton::Left) {
        events.push(InputEvent::ButtonUp);
    }

    events
}
