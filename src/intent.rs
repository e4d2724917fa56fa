//! Turns held buttons and cursor samples into camera and animation intents.

use crate::animation::LightKind;
use crate::camera::{Camera, MoveDirection};
use crate::core::{Button, Controller};
use crate::types::{PolygonMode, Smoothing};

/// What a held button asks for on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(MoveDirection),
    NudgeLight { light: LightKind, increase: bool },
    SatelliteDirection { clockwise: bool },
    SaucerDirection { moves_left: bool },
    Visualization(bool),
    Polygon(PolygonMode),
    Smoothing(Smoothing),
    Quit,
}

/// Key layout in evaluation order. When both keys of a pair are held the
/// later entry wins.
pub const BINDINGS: [(Button, Action); 22] = [
    (Button::KeyW, Action::Move(MoveDirection::Forward)),
    (Button::KeyS, Action::Move(MoveDirection::Backward)),
    (Button::KeyA, Action::Move(MoveDirection::Left)),
    (Button::KeyD, Action::Move(MoveDirection::Right)),
    (Button::KeyJ, Action::Move(MoveDirection::Down)),
    (Button::KeyU, Action::Move(MoveDirection::Up)),
    (
        Button::KeyK,
        Action::NudgeLight {
            light: LightKind::Directional,
            increase: false,
        },
    ),
    (
        Button::KeyL,
        Action::NudgeLight {
            light: LightKind::Directional,
            increase: true,
        },
    ),
    (
        Button::KeyZ,
        Action::NudgeLight {
            light: LightKind::Point,
            increase: false,
        },
    ),
    (
        Button::KeyX,
        Action::NudgeLight {
            light: LightKind::Point,
            increase: true,
        },
    ),
    (Button::KeyR, Action::Polygon(PolygonMode::Point)),
    (Button::KeyT, Action::Polygon(PolygonMode::Wireframe)),
    (Button::KeyY, Action::Polygon(PolygonMode::Solid)),
    (Button::KeyH, Action::Smoothing(Smoothing::PointSmooth)),
    (Button::KeyG, Action::Smoothing(Smoothing::Multisample)),
    (Button::KeyQ, Action::SatelliteDirection { clockwise: false }),
    (Button::KeyE, Action::SatelliteDirection { clockwise: true }),
    (Button::KeyM, Action::SaucerDirection { moves_left: false }),
    (Button::KeyN, Action::SaucerDirection { moves_left: true }),
    (Button::KeyP, Action::Visualization(true)),
    (Button::KeyO, Action::Visualization(false)),
    (Button::Escape, Action::Quit),
];

/// Look up the action bound to a button
pub fn action_for(button: Button) -> Option<Action> {
    BINDINGS
        .iter()
        .find(|(bound, _)| *bound == button)
        .map(|(_, action)| *action)
}

/// Mouse-look accumulator: previous cursor sample and running yaw/pitch.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentMapper {
    sensitivity: f32,
    yaw: f32,
    pitch: f32,
    previous: Option<(f32, f32)>,
}

impl IntentMapper {
    /// `yaw` and `pitch` are the starting look angles in degrees
    pub fn new(sensitivity: f32, yaw: f32, pitch: f32) -> Self {
        Self {
            sensitivity,
            yaw,
            pitch,
            previous: None,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Feed the latest cursor position and rotate the camera if it moved.
    ///
    /// The first sample only sets the baseline. Screen Y grows downwards, so
    /// moving the cursor up raises pitch. Returns whether the camera was rotated.
    pub fn look(&mut self, cursor: Option<(f32, f32)>, camera: &mut Camera) -> bool {
        let Some((x, y)) = cursor else {
            return false;
        };
        let Some((prev_x, prev_y)) = self.previous.replace((x, y)) else {
            return false;
        };

        let dx = x - prev_x;
        let dy = prev_y - y;
        if dx == 0.0 && dy == 0.0 {
            return false;
        }

        self.yaw += dx * self.sensitivity;
        self.pitch += dy * self.sensitivity;
        camera.rotate(self.pitch, self.yaw);
        true
    }
}

/// Actions for every held button, in binding order
pub fn held_actions(controller: &dyn Controller) -> impl Iterator<Item = Action> + '_ {
    BINDINGS
        .iter()
        .filter(move |(button, _)| controller.is_down(*button))
        .map(|(_, action)| *action)
}
