// config.rs - Viewer configuration loaded from JSON, every field defaulted
use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::animation::AnimationRates;
use crate::camera::{Camera, CameraError, OrbitalView};
use crate::types::{LightSetup, Projection};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 2048,
            height: 1024,
            title: "Orbital Viewer".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub world_up: [f32; 3],
    /// World units per tick while a move key is held
    pub speed: f32,
    /// Degrees per pixel of cursor travel
    pub mouse_sensitivity: f32,
    /// Starting look angles in degrees, used from the first mouse movement on
    pub yaw: f32,
    pub pitch: f32,
    pub projection: Projection,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 100.0, 5.5],
            target: [0.0, 0.0, 0.0],
            world_up: [0.0, 1.0, 0.0],
            speed: 3.0,
            mouse_sensitivity: 0.1,
            yaw: -90.0,
            pitch: 0.0,
            projection: Projection::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub eye: [f32; 3],
    pub target: [f32; 3],
}

impl Default for OrbitConfig {
    fn default() -> Self {
        let view = OrbitalView::default();
        Self {
            eye: view.eye.to_array(),
            target: view.target.to_array(),
        }
    }
}

impl OrbitConfig {
    pub fn view(&self) -> OrbitalView {
        OrbitalView {
            eye: Vec3::from_array(self.eye),
            target: Vec3::from_array(self.target),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub orbit: OrbitConfig,
    pub animation: AnimationRates,
    pub lights: LightSetup,
}

impl ViewerConfig {
    /// Read a JSON config file. Missing sections and fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid viewer config JSON")
    }

    /// Construct the start-up camera with the configured fly-through attached.
    /// Both the start pose and the orbital path must give a usable basis.
    pub fn build_camera(&self) -> Result<Camera, CameraError> {
        Camera::new(
            Vec3::from_array(self.camera.eye),
            Vec3::from_array(self.camera.target),
            Vec3::from_array(self.camera.world_up),
        )?
        .with_orbit(self.orbit.view())
    }
}
