use glam::{Mat4, Quat, Vec2, Vec3};
use serde::Serialize;
use thiserror::Error;

/// Cross products shorter than this are treated as a collapsed basis
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Minimum gap between the orbit circle and the target's vertical axis
const ORBIT_CLEARANCE: f32 = 1e-3;

/// Errors raised while building a camera basis
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CameraError {
    #[error("degenerate camera basis: eye {eye:?}, target {target:?}, world up {world_up:?}")]
    DegenerateBasis {
        eye: Vec3,
        target: Vec3,
        world_up: Vec3,
    },
}

/// Direction of a single camera translation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Which control family drives the camera this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CameraMode {
    FreeLook,
    Orbital,
}

/// Fixed high-altitude eye and look-at point for the scripted fly-through
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalView {
    pub eye: Vec3,
    pub target: Vec3,
}

impl Default for OrbitalView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(-50.0, 700.0, -48.0),
            target: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

impl OrbitalView {
    /// Eye position after rotating the base eye about world Y by `angle` degrees
    pub fn eye_at(&self, angle: f32) -> Vec3 {
        Quat::from_rotation_y(angle.to_radians()) * self.eye
    }

    /// Check that no point on the path looks straight up or down at the target.
    ///
    /// The eye sweeps a horizontal circle of radius `|eye.xz|` about world Y.
    /// That circle crosses the vertical line through the target exactly when
    /// both sit at the same horizontal distance from the axis.
    pub fn validate(&self) -> Result<(), CameraError> {
        let eye_radius = Vec2::new(self.eye.x, self.eye.z).length();
        let target_radius = Vec2::new(self.target.x, self.target.z).length();
        if (eye_radius - target_radius).abs() < ORBIT_CLEARANCE {
            return Err(CameraError::DegenerateBasis {
                eye: self.eye,
                target: self.target,
                world_up: Vec3::Y,
            });
        }
        Ok(())
    }
}

/// First-person camera with an explicit orthonormal basis.
///
/// The camera holds no mode flag: callers pick between the free-look family
/// ([`Camera::move_by`], [`Camera::rotate`]) and the orbital family
/// ([`Camera::enter_orbital_view`]) per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    target: Vec3,
    orbit: OrbitalView,
}

impl Camera {
    /// Build a camera from eye, target and world-up.
    ///
    /// `front` points from the target back towards the eye and `up` is derived
    /// from the constructed basis itself, not from world Y.
    pub fn new(eye: Vec3, target: Vec3, world_up: Vec3) -> Result<Self, CameraError> {
        let degenerate = CameraError::DegenerateBasis {
            eye,
            target,
            world_up,
        };

        let axis = eye - target;
        if axis.length_squared() < DEGENERATE_EPSILON {
            return Err(degenerate);
        }
        let front = axis.normalize();

        let side = world_up.cross(front);
        if side.length_squared() < DEGENERATE_EPSILON {
            return Err(degenerate);
        }
        let right = side.normalize();
        let up = front.cross(right);

        Ok(Self {
            position: eye,
            front,
            right,
            up,
            target,
            orbit: OrbitalView::default(),
        })
    }

    /// Replace the fly-through parameters used by [`Camera::enter_orbital_view`].
    ///
    /// Fails if the path would ever put the eye directly above or below the
    /// target, where the world-Y basis collapses.
    pub fn with_orbit(mut self, orbit: OrbitalView) -> Result<Self, CameraError> {
        orbit.validate()?;
        self.orbit = orbit;
        Ok(self)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn orbit(&self) -> OrbitalView {
        self.orbit
    }

    /// Right-handed look-at transform for the current state
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Translate along the current basis. The basis itself is left untouched.
    pub fn move_by(&mut self, direction: MoveDirection, speed: f32) {
        let step = match direction {
            MoveDirection::Forward => self.front * speed,
            MoveDirection::Backward => -self.front * speed,
            MoveDirection::Right => self.right * speed,
            MoveDirection::Left => -self.right * speed,
            MoveDirection::Up => self.up * speed,
            MoveDirection::Down => -self.up * speed,
        };
        self.position += step;
    }

    /// Re-aim from spherical angles in degrees.
    ///
    /// `right` is taken against world Y rather than the current `up`, so the
    /// camera never rolls. Pitch is not clamped: past ±90° the horizontal
    /// heading reverses and `right` flips with it.
    pub fn rotate(&mut self, pitch: f32, yaw: f32) {
        let (pitch, yaw) = (pitch.to_radians(), yaw.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );

        self.front = front.normalize();
        self.rederive_world_basis();
    }

    /// Place the camera on the orbital path at `orbit_angle` degrees.
    ///
    /// Always starts from the base orbital eye, so repeated calls with the same
    /// angle give bit-identical results.
    pub fn enter_orbital_view(&mut self, orbit_angle: f32) {
        self.position = self.orbit.eye_at(orbit_angle);
        self.target = self.orbit.target;
        self.front = (self.target - self.position).normalize();
        self.rederive_world_basis();
    }

    fn rederive_world_basis(&mut self) {
        self.right = self.front.cross(Vec3::Y).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}
