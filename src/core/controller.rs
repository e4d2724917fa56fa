/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyU,
    KeyJ,
    KeyK,
    KeyL,
    KeyZ,
    KeyX,
    KeyQ,
    KeyE,
    KeyN,
    KeyM,
    KeyP,
    KeyO,
    KeyR,
    KeyT,
    KeyY,
    KeyH,
    KeyG,
    Escape,
}

impl Button {
    /// Every button, in declaration order
    pub const ALL: [Button; 22] = [
        Button::KeyW,
        Button::KeyA,
        Button::KeyS,
        Button::KeyD,
        Button::KeyU,
        Button::KeyJ,
        Button::KeyK,
        Button::KeyL,
        Button::KeyZ,
        Button::KeyX,
        Button::KeyQ,
        Button::KeyE,
        Button::KeyN,
        Button::KeyM,
        Button::KeyP,
        Button::KeyO,
        Button::KeyR,
        Button::KeyT,
        Button::KeyY,
        Button::KeyH,
        Button::KeyG,
        Button::Escape,
    ];
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;
}
