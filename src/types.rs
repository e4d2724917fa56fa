use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::CameraMode;

/// Rasterization mode requested by the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PolygonMode {
    Point,
    Wireframe,
    #[default]
    Solid,
}

/// Edge treatment requested by the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Smoothing {
    #[default]
    Multisample,
    PointSmooth,
}

/// Presentation switches the renderer reads each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderSettings {
    pub polygon_mode: PolygonMode,
    pub smoothing: Smoothing,
}

/// Perspective parameters (degrees, world units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 5000.0,
        }
    }
}

impl Projection {
    /// OpenGL-style clip space, matching the scene's shaders
    pub fn matrix(&self, width: u32, height: u32) -> Mat4 {
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        Mat4::perspective_rh_gl(self.fov_degrees.to_radians(), aspect, self.near, self.far)
    }
}

/// World-space light inputs before the per-frame rotations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSetup {
    /// Direction towards the directional light
    pub direction: [f32; 3],
    pub color: [f32; 3],
    /// Point light sitting on the sun
    pub point_position: [f32; 3],
}

impl Default for LightSetup {
    fn default() -> Self {
        Self {
            direction: [0.0, 1.0, 0.0],
            color: [1.0, 1.0, 1.0],
            point_position: [200.0, 200.0, 20.0],
        }
    }
}

/// Scene uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub light_dir_eye: [f32; 3],
    pub _pad1: f32,
    pub light_color: [f32; 3],
    pub _pad2: f32,
    pub point_light_eye: [f32; 3],
    pub _pad3: f32,
}

/// Per-object uniform data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of `view * model`, upper 3x3 stored in a 4x4 for alignment
    pub normal_matrix: [[f32; 4]; 4],
}

/// Everything the renderer may read for one frame. Built after all of the
/// tick's updates, never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub view: Mat4,
    pub camera_position: Vec3,
    pub camera_front: Vec3,
    pub satellite_angle: f32,
    pub saucer_offset: f32,
    pub light_angle: f32,
    pub point_light_angle: f32,
    pub orbit_angle: f32,
    pub visualization_active: bool,
    pub mode: CameraMode,
    pub render: RenderSettings,
}

impl FrameSnapshot {
    /// Satellite spins about world Y
    pub fn satellite_model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.satellite_angle.to_radians())
    }

    /// Saucer slides along world X
    pub fn saucer_model(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.saucer_offset, 0.0, 0.0))
    }

    /// Directional light rotated about Z by the light angle, in eye space
    pub fn light_direction_eye(&self, lights: &LightSetup) -> Vec3 {
        eye_space(self.view, self.light_angle, Vec3::from_array(lights.direction))
    }

    /// Point light rotated about Z by the point light angle, in eye space
    pub fn point_light_eye(&self, lights: &LightSetup) -> Vec3 {
        eye_space(
            self.view,
            self.point_light_angle,
            Vec3::from_array(lights.point_position),
        )
    }

    pub fn model_uniform(&self, model: Mat4) -> ModelUniform {
        let normal = Mat3::from_mat4(self.view * model).inverse().transpose();
        ModelUniform {
            model: model.to_cols_array_2d(),
            normal_matrix: Mat4::from_mat3(normal).to_cols_array_2d(),
        }
    }

    pub fn to_uniforms(&self, projection: Mat4, lights: &LightSetup) -> SceneUniforms {
        SceneUniforms {
            view: self.view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            light_dir_eye: self.light_direction_eye(lights).to_array(),
            _pad1: 0.0,
            light_color: lights.color,
            _pad2: 0.0,
            point_light_eye: self.point_light_eye(lights).to_array(),
            _pad3: 0.0,
        }
    }

    /// Plain-data summary for logs and headless output
    pub fn report(&self) -> SnapshotReport {
        SnapshotReport {
            tick: self.tick,
            mode: self.mode,
            camera_position: self.camera_position.to_array(),
            camera_front: self.camera_front.to_array(),
            satellite_angle: self.satellite_angle,
            saucer_offset: self.saucer_offset,
            light_angle: self.light_angle,
            point_light_angle: self.point_light_angle,
            orbit_angle: self.orbit_angle,
            visualization_active: self.visualization_active,
            render: self.render,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotReport {
    pub tick: u64,
    pub mode: CameraMode,
    pub camera_position: [f32; 3],
    pub camera_front: [f32; 3],
    pub satellite_angle: f32,
    pub saucer_offset: f32,
    pub light_angle: f32,
    pub point_light_angle: f32,
    pub orbit_angle: f32,
    pub visualization_active: bool,
    pub render: RenderSettings,
}

fn eye_space(view: Mat4, angle: f32, v: Vec3) -> Vec3 {
    let rotated = view * Mat4::from_rotation_z(angle.to_radians());
    Mat3::from_mat4(rotated).inverse().transpose() * v
}
