pub mod animation;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod intent;
pub mod scene;
pub mod types;

pub use animation::{AnimationRates, AnimationState, LightKind};
pub use camera::{Camera, CameraError, CameraMode, MoveDirection, OrbitalView};
pub use config::ViewerConfig;
pub use scene::Viewer;
pub use types::FrameSnapshot;
