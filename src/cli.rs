// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::config::ViewerConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "orbital-viewer")]
#[command(about = "First-person viewer for the satellite scene", long_about = None)]
pub struct Cli {
    /// JSON config file; every field is optional
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the mouse-look sensitivity (degrees per pixel)
    #[arg(long)]
    pub mouse_sensitivity: Option<f32>,

    /// Override the camera move speed (units per tick)
    #[arg(long)]
    pub camera_speed: Option<f32>,

    /// Run this many ticks without a window and print the final frame as JSON
    #[arg(long, value_name = "TICKS")]
    pub headless: Option<u64>,

    /// Start with the orbital visualization running
    #[arg(long, default_value = "false")]
    pub orbit: bool,
}

impl Cli {
    /// Fold command-line overrides into a loaded config
    pub fn apply_overrides(&self, config: &mut ViewerConfig) {
        if let Some(sensitivity) = self.mouse_sensitivity {
            config.camera.mouse_sensitivity = sensitivity;
        }
        if let Some(speed) = self.camera_speed {
            config.camera.speed = speed;
        }
    }
}
