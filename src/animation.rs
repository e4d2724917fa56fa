use serde::{Deserialize, Serialize};

use crate::camera::{Camera, CameraMode};

/// Per-tick step sizes for every animated phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationRates {
    /// Satellite spin in degrees per tick
    pub satellite_step: f32,
    /// Saucer drift in world units per tick
    pub saucer_step: f32,
    /// Light nudge in degrees per tick while a light key is held
    pub light_step: f32,
    /// Orbital fly-through advance in degrees per tick
    pub orbit_step: f32,
}

impl Default for AnimationRates {
    fn default() -> Self {
        Self {
            satellite_step: 1.0,
            saucer_step: 0.25,
            light_step: 1.0,
            orbit_step: 0.2,
        }
    }
}

/// Which scene light a nudge applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightKind {
    Directional,
    Point,
}

/// Scalar animation phases and the flags that steer them.
///
/// Phases only move through the `advance_*` methods and [`AnimationState::nudge_light`].
/// Flags only move through the setters, which the input mapper calls. None of
/// the phases wrap.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub satellite_angle: f32,
    pub light_angle: f32,
    pub point_light_angle: f32,
    pub saucer_offset: f32,
    pub satellite_clockwise: bool,
    pub saucer_moves_left: bool,
    pub visualization_active: bool,
    pub orbit_angle: f32,
    rates: AnimationRates,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(AnimationRates::default())
    }
}

impl AnimationState {
    pub fn new(rates: AnimationRates) -> Self {
        Self {
            satellite_angle: 0.0,
            light_angle: 0.0,
            point_light_angle: 0.0,
            saucer_offset: 0.0,
            satellite_clockwise: false,
            saucer_moves_left: true,
            visualization_active: false,
            orbit_angle: 0.0,
            rates,
        }
    }

    pub fn rates(&self) -> AnimationRates {
        self.rates
    }

    pub fn advance_satellite(&mut self) {
        let step = self.rates.satellite_step;
        self.satellite_angle += if self.satellite_clockwise { step } else { -step };
    }

    pub fn advance_saucer(&mut self) {
        let step = self.rates.saucer_step;
        self.saucer_offset += if self.saucer_moves_left { step } else { -step };
    }

    pub fn set_satellite_direction(&mut self, clockwise: bool) {
        self.satellite_clockwise = clockwise;
    }

    pub fn set_saucer_direction(&mut self, moves_left: bool) {
        self.saucer_moves_left = moves_left;
    }

    pub fn set_visualization(&mut self, active: bool) {
        self.visualization_active = active;
    }

    pub fn nudge_light(&mut self, which: LightKind, delta: f32) {
        match which {
            LightKind::Directional => self.light_angle += delta,
            LightKind::Point => self.point_light_angle += delta,
        }
    }

    /// Advance the fly-through when it is active and park the camera on it.
    ///
    /// While inactive the orbit angle is kept, so switching back on resumes
    /// from where it stopped.
    pub fn advance_orbit(&mut self, camera: &mut Camera) -> CameraMode {
        if !self.visualization_active {
            return CameraMode::FreeLook;
        }
        self.orbit_angle += self.rates.orbit_step;
        camera.enter_orbital_view(self.orbit_angle);
        CameraMode::Orbital
    }

    pub fn camera_mode(&self) -> CameraMode {
        if self.visualization_active {
            CameraMode::Orbital
        } else {
            CameraMode::FreeLook
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 100.0, 5.5), Vec3::ZERO, Vec3::Y).unwrap()
    }

    #[test]
    fn starts_from_legacy_values() {
        let state = AnimationState::default();
        assert_eq!(state.satellite_angle, 0.0);
        assert_eq!(state.saucer_offset, 0.0);
        assert_eq!(state.light_angle, 0.0);
        assert_eq!(state.point_light_angle, 0.0);
        assert_eq!(state.orbit_angle, 0.0);
        assert!(!state.satellite_clockwise);
        assert!(state.saucer_moves_left);
        assert!(!state.visualization_active);
    }

    #[test]
    fn satellite_clockwise_accumulates() {
        let mut state = AnimationState::default();
        state.set_satellite_direction(true);
        for _ in 0..90 {
            state.advance_satellite();
        }
        assert_eq!(state.satellite_angle, 90.0);
    }

    #[test]
    fn satellite_defaults_to_counter_clockwise() {
        let mut state = AnimationState::default();
        state.advance_satellite();
        state.advance_satellite();
        assert_eq!(state.satellite_angle, -2.0);
    }

    #[test]
    fn satellite_alternating_toggles_sum_signed_steps() {
        let mut state = AnimationState::default();
        let pattern = [true, true, false, true, false, false, false, true];
        let mut expected = 0.0;
        for clockwise in pattern {
            state.set_satellite_direction(clockwise);
            state.advance_satellite();
            expected += if clockwise { 1.0 } else { -1.0 };
        }
        assert_eq!(state.satellite_angle, expected);
    }

    #[test]
    fn satellite_angle_does_not_wrap() {
        let mut state = AnimationState::default();
        state.set_satellite_direction(true);
        for _ in 0..1000 {
            state.advance_satellite();
        }
        assert_eq!(state.satellite_angle, 1000.0);
    }

    #[test]
    fn saucer_four_steps_left_is_one_unit() {
        let mut state = AnimationState::default();
        state.set_saucer_direction(true);
        for _ in 0..4 {
            state.advance_saucer();
        }
        assert_eq!(state.saucer_offset, 1.0);
    }

    #[test]
    fn saucer_moves_right_when_flag_cleared() {
        let mut state = AnimationState::default();
        state.set_saucer_direction(false);
        for _ in 0..8 {
            state.advance_saucer();
        }
        assert_eq!(state.saucer_offset, -2.0);
    }

    #[test]
    fn setters_do_not_touch_phases() {
        let mut state = AnimationState::default();
        state.set_satellite_direction(true);
        state.set_saucer_direction(false);
        state.set_visualization(true);
        assert_eq!(state.satellite_angle, 0.0);
        assert_eq!(state.saucer_offset, 0.0);
        assert_eq!(state.orbit_angle, 0.0);
    }

    #[test]
    fn nudges_target_the_right_light() {
        let mut state = AnimationState::default();
        state.nudge_light(LightKind::Directional, 1.0);
        state.nudge_light(LightKind::Directional, 1.0);
        state.nudge_light(LightKind::Point, -1.0);
        assert_eq!(state.light_angle, 2.0);
        assert_eq!(state.point_light_angle, -1.0);
    }

    #[test]
    fn orbit_inactive_leaves_camera_alone() {
        let mut state = AnimationState::default();
        let mut cam = camera();
        let before = cam.clone();

        assert_eq!(state.advance_orbit(&mut cam), CameraMode::FreeLook);
        assert_eq!(cam, before);
        assert_eq!(state.orbit_angle, 0.0);
    }

    #[test]
    fn orbit_active_advances_and_repositions() {
        let mut state = AnimationState::default();
        let mut cam = camera();
        state.set_visualization(true);

        assert_eq!(state.advance_orbit(&mut cam), CameraMode::Orbital);
        assert!((state.orbit_angle - 0.2).abs() < 1e-6);

        let mut expected = camera();
        expected.enter_orbital_view(state.orbit_angle);
        assert_eq!(cam.position(), expected.position());
        assert_eq!(cam.front(), expected.front());
    }

    #[test]
    fn orbit_resumes_from_last_angle() {
        let mut state = AnimationState::default();
        let mut cam = camera();

        state.set_visualization(true);
        for _ in 0..10 {
            state.advance_orbit(&mut cam);
        }
        let paused_at = state.orbit_angle;

        state.set_visualization(false);
        for _ in 0..5 {
            state.advance_orbit(&mut cam);
        }
        assert_eq!(state.orbit_angle, paused_at);

        state.set_visualization(true);
        state.advance_orbit(&mut cam);
        assert!((state.orbit_angle - (paused_at + 0.2)).abs() < 1e-5);
        assert!(state.orbit_angle > 2.0);
    }

    #[test]
    fn custom_rates_apply() {
        let mut state = AnimationState::new(AnimationRates {
            satellite_step: 2.5,
            saucer_step: 1.0,
            light_step: 5.0,
            orbit_step: 1.0,
        });
        state.set_satellite_direction(true);
        state.advance_satellite();
        state.advance_saucer();
        assert_eq!(state.satellite_angle, 2.5);
        assert_eq!(state.saucer_offset, 1.0);
        assert_eq!(state.rates().light_step, 5.0);
    }

    #[test]
    fn camera_mode_follows_gate() {
        let mut state = AnimationState::default();
        assert_eq!(state.camera_mode(), CameraMode::FreeLook);
        state.set_visualization(true);
        assert_eq!(state.camera_mode(), CameraMode::Orbital);
    }
}
