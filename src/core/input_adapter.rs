use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Unbounded virtual cursor built from raw mouse motion, if any has arrived
    cursor: Option<(f32, f32)>,
    focused: bool,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            cursor: None,
            focused: true,
        }
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state);
                    }
                }
            }
            WindowEvent::Focused(focused) => {
                self.focused = *focused;
                if !focused {
                    self.release_all();
                }
            }
            _ => {}
        }
    }

    /// Process a raw device event. Mouse motion is not clamped to the window,
    /// so the virtual cursor keeps moving while the pointer is grabbed.
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.add_mouse_motion(delta.0 as f32, delta.1 as f32);
        }
    }

    /// Accumulate a motion delta onto the virtual cursor. Ignored while unfocused.
    pub fn add_mouse_motion(&mut self, dx: f32, dy: f32) {
        if !self.focused {
            return;
        }
        let (x, y) = self.cursor.unwrap_or((0.0, 0.0));
        self.cursor = Some((x + dx, y + dy));
    }

    /// Record a press or release. Releasing clears only that button.
    pub fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed_keys.insert(button);
            }
            ElementState::Released => {
                self.pressed_keys.remove(&button);
            }
        }
    }

    /// Drop every held button, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    /// Cumulative virtual cursor; the mapper derives deltas from successive samples
    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    /// Map Winit KeyCode to Button
    pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyU => Some(Button::KeyU),
            KeyCode::KeyJ => Some(Button::KeyJ),
            KeyCode::KeyK => Some(Button::KeyK),
            KeyCode::KeyL => Some(Button::KeyL),
            KeyCode::KeyZ => Some(Button::KeyZ),
            KeyCode::KeyX => Some(Button::KeyX),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::KeyN => Some(Button::KeyN),
            KeyCode::KeyM => Some(Button::KeyM),
            KeyCode::KeyP => Some(Button::KeyP),
            KeyCode::KeyO => Some(Button::KeyO),
            KeyCode::KeyR => Some(Button::KeyR),
            KeyCode::KeyT => Some(Button::KeyT),
            KeyCode::KeyY => Some(Button::KeyY),
            KeyCode::KeyH => Some(Button::KeyH),
            KeyCode::KeyG => Some(Button::KeyG),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }
}
