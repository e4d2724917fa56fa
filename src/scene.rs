use crate::animation::AnimationState;
use crate::camera::{Camera, CameraError, CameraMode};
use crate::config::ViewerConfig;
use crate::core::Controller;
use crate::intent::{held_actions, Action, IntentMapper};
use crate::types::{FrameSnapshot, RenderSettings};

/// All mutable viewer state, owned by the frame loop and passed by reference.
///
/// One [`Viewer::tick`] per rendered frame. Within a tick the order is fixed:
/// mouse-look, held actions, animation advances, orbital camera, snapshot.
#[derive(Debug, Clone)]
pub struct Viewer {
    camera: Camera,
    animation: AnimationState,
    mapper: IntentMapper,
    render: RenderSettings,
    camera_speed: f32,
    mode: CameraMode,
    ticks: u64,
    quit_requested: bool,
}

impl Viewer {
    pub fn new(
        camera: Camera,
        animation: AnimationState,
        mapper: IntentMapper,
        camera_speed: f32,
    ) -> Self {
        Self {
            camera,
            animation,
            mapper,
            render: RenderSettings::default(),
            camera_speed,
            mode: CameraMode::FreeLook,
            ticks: 0,
            quit_requested: false,
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Result<Self, CameraError> {
        let camera = config.build_camera()?;
        let mapper = IntentMapper::new(
            config.camera.mouse_sensitivity,
            config.camera.yaw,
            config.camera.pitch,
        );
        Ok(Self::new(
            camera,
            AnimationState::new(config.animation),
            mapper,
            config.camera.speed,
        ))
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    /// Direct access for scripted runs that bypass key input
    pub fn animation_mut(&mut self) -> &mut AnimationState {
        &mut self.animation
    }

    pub fn mapper(&self) -> &IntentMapper {
        &self.mapper
    }

    pub fn render_settings(&self) -> RenderSettings {
        self.render
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Advance one frame from the held buttons and the latest cursor sample
    pub fn tick(&mut self, controller: &dyn Controller, cursor: Option<(f32, f32)>) -> FrameSnapshot {
        self.mapper.look(cursor, &mut self.camera);

        for action in held_actions(controller) {
            self.apply(action);
        }

        self.animation.advance_satellite();
        self.animation.advance_saucer();

        let mode = self.animation.advance_orbit(&mut self.camera);
        if mode != self.mode {
            match mode {
                CameraMode::Orbital => {
                    log::info!("Orbital view engaged at {:.1}°", self.animation.orbit_angle)
                }
                CameraMode::FreeLook => {
                    log::info!("Orbital view paused at {:.1}°", self.animation.orbit_angle)
                }
            }
            self.mode = mode;
        }

        let snapshot = self.snapshot();
        self.ticks += 1;
        snapshot
    }

    /// Read-only view of the current state for the renderer
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.ticks,
            view: self.camera.view_matrix(),
            camera_position: self.camera.position(),
            camera_front: self.camera.front(),
            satellite_angle: self.animation.satellite_angle,
            saucer_offset: self.animation.saucer_offset,
            light_angle: self.animation.light_angle,
            point_light_angle: self.animation.point_light_angle,
            orbit_angle: self.animation.orbit_angle,
            visualization_active: self.animation.visualization_active,
            mode: self.mode,
            render: self.render,
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            // The orbital path owns the camera position while it is active
            Action::Move(direction) => {
                if !self.animation.visualization_active {
                    self.camera.move_by(direction, self.camera_speed);
                }
            }
            Action::NudgeLight { light, increase } => {
                let step = self.animation.rates().light_step;
                let delta = if increase { step } else { -step };
                self.animation.nudge_light(light, delta);
            }
            Action::SatelliteDirection { clockwise } => {
                self.animation.set_satellite_direction(clockwise)
            }
            Action::SaucerDirection { moves_left } => self.animation.set_saucer_direction(moves_left),
            Action::Visualization(active) => self.animation.set_visualization(active),
            Action::Polygon(mode) => self.render.polygon_mode = mode,
            Action::Smoothing(smoothing) => self.render.smoothing = smoothing,
            Action::Quit => self.quit_requested = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Button;
    use crate::types::{PolygonMode, Smoothing};
    use glam::Vec3;

    struct Held(Vec<Button>);

    impl Controller for Held {
        fn is_down(&self, button: Button) -> bool {
            self.0.contains(&button)
        }
    }

    fn viewer() -> Viewer {
        Viewer::from_config(&ViewerConfig::default()).unwrap()
    }

    #[test]
    fn idle_tick_only_advances_animation() {
        let mut v = viewer();
        let start = v.camera().clone();
        let snap = v.tick(&Held(vec![]), None);

        assert_eq!(v.camera(), &start);
        assert_eq!(snap.tick, 0);
        assert_eq!(snap.satellite_angle, -1.0);
        assert_eq!(snap.saucer_offset, 0.25);
        assert_eq!(snap.mode, CameraMode::FreeLook);
        assert_eq!(v.ticks(), 1);
    }

    #[test]
    fn held_move_uses_configured_speed() {
        let mut v = viewer();
        let start = v.camera().position();
        let front = v.camera().front();
        v.tick(&Held(vec![Button::KeyW]), None);
        assert!(v.camera().position().abs_diff_eq(start + front * 3.0, 1e-4));
    }

    #[test]
    fn mouse_rotation_precedes_moves() {
        let mut v = viewer();
        v.tick(&Held(vec![]), Some((400.0, 300.0)));
        let start = v.camera().position();

        v.tick(&Held(vec![Button::KeyW]), Some((500.0, 300.0)));

        let mut expected = viewer().camera().clone();
        expected.rotate(0.0, -80.0);
        let moved = v.camera().position() - start;
        assert!(moved.abs_diff_eq(expected.front() * 3.0, 1e-4));
    }

    #[test]
    fn direction_flags_persist_after_release() {
        let mut v = viewer();
        v.tick(&Held(vec![Button::KeyE]), None);
        assert!(v.animation().satellite_clockwise);

        v.tick(&Held(vec![]), None);
        v.tick(&Held(vec![]), None);
        assert!(v.animation().satellite_clockwise);
        // three clockwise steps, the first applied in the same tick as the press
        assert_eq!(v.animation().satellite_angle, 3.0);

        v.tick(&Held(vec![Button::KeyQ]), None);
        assert!(!v.animation().satellite_clockwise);
        assert_eq!(v.animation().satellite_angle, 2.0);
    }

    #[test]
    fn later_binding_wins_when_both_held() {
        let mut v = viewer();
        v.tick(&Held(vec![Button::KeyE, Button::KeyQ]), None);
        assert!(v.animation().satellite_clockwise);

        v.tick(&Held(vec![Button::KeyN, Button::KeyM]), None);
        assert!(v.animation().saucer_moves_left);

        v.tick(&Held(vec![Button::KeyP, Button::KeyO]), None);
        assert!(!v.animation().visualization_active);
    }

    #[test]
    fn saucer_reverses_on_m() {
        let mut v = viewer();
        v.tick(&Held(vec![Button::KeyM]), None);
        v.tick(&Held(vec![]), None);
        assert_eq!(v.animation().saucer_offset, -0.5);
    }

    #[test]
    fn light_keys_nudge_while_held() {
        let mut v = viewer();
        for _ in 0..3 {
            v.tick(&Held(vec![Button::KeyL, Button::KeyZ]), None);
        }
        v.tick(&Held(vec![Button::KeyK]), None);
        v.tick(&Held(vec![]), None);

        assert_eq!(v.animation().light_angle, 2.0);
        assert_eq!(v.animation().point_light_angle, -3.0);
    }

    #[test]
    fn orbit_overrides_camera_and_blocks_moves() {
        let mut v = viewer();
        let snap = v.tick(&Held(vec![Button::KeyP, Button::KeyW]), None);

        assert_eq!(snap.mode, CameraMode::Orbital);
        assert!(snap.visualization_active);

        let mut expected = viewer().camera().clone();
        expected.enter_orbital_view(v.animation().orbit_angle);
        assert_eq!(v.camera().position(), expected.position());
        assert_eq!(snap.camera_position, expected.position());
        assert_eq!(snap.view, expected.view_matrix());
    }

    #[test]
    fn orbit_pauses_and_resumes() {
        let mut v = viewer();
        v.tick(&Held(vec![Button::KeyP]), None);
        for _ in 0..4 {
            v.tick(&Held(vec![]), None);
        }
        let paused_at = v.animation().orbit_angle;
        assert!((paused_at - 1.0).abs() < 1e-5);

        let snap = v.tick(&Held(vec![Button::KeyO]), None);
        assert_eq!(snap.mode, CameraMode::FreeLook);
        let parked = v.camera().position();

        v.tick(&Held(vec![Button::KeyW]), None);
        assert_ne!(v.camera().position(), parked);
        assert_eq!(v.animation().orbit_angle, paused_at);

        v.tick(&Held(vec![Button::KeyP]), None);
        assert!((v.animation().orbit_angle - (paused_at + 0.2)).abs() < 1e-5);
    }

    #[test]
    fn render_modes_follow_keys() {
        let mut v = viewer();
        assert_eq!(v.render_settings(), RenderSettings::default());

        v.tick(&Held(vec![Button::KeyT, Button::KeyH]), None);
        let settings = v.render_settings();
        assert_eq!(settings.polygon_mode, PolygonMode::Wireframe);
        assert_eq!(settings.smoothing, Smoothing::PointSmooth);

        v.tick(&Held(vec![Button::KeyR, Button::KeyY]), None);
        assert_eq!(v.render_settings().polygon_mode, PolygonMode::Solid);
    }

    #[test]
    fn escape_requests_quit() {
        let mut v = viewer();
        v.tick(&Held(vec![]), None);
        assert!(!v.quit_requested());
        v.tick(&Held(vec![Button::Escape]), None);
        assert!(v.quit_requested());
    }

    #[test]
    fn snapshot_is_taken_after_updates() {
        let mut v = viewer();
        let snap = v.tick(&Held(vec![Button::KeyE]), None);
        assert_eq!(snap.satellite_angle, 1.0);
        assert_eq!(snap.view, v.camera().view_matrix());
    }

    #[test]
    fn initial_view_faces_away_from_target() {
        let v = viewer();
        let front = v.camera().front();
        assert!(front.dot(Vec3::Y) > 0.99);
    }
}
