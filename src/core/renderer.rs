use crate::types::{FrameSnapshot, LightSetup, Projection, SceneUniforms};

/// Consumer of finished frames. Implementations issue the draw calls; the
/// viewer core only hands over snapshots.
pub trait FrameSink {
    /// Present one frame built from a snapshot
    fn present(&mut self, snapshot: &FrameSnapshot) -> anyhow::Result<()>;

    /// Window size changed
    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Sink that only prepares uniforms and logs them. Stands in for a GPU backend.
#[derive(Debug, Clone)]
pub struct LogSink {
    projection: Projection,
    lights: LightSetup,
    width: u32,
    height: u32,
    presented: u64,
    last: Option<SceneUniforms>,
}

impl LogSink {
    pub fn new(projection: Projection, lights: LightSetup, width: u32, height: u32) -> Self {
        Self {
            projection,
            lights,
            width,
            height,
            presented: 0,
            last: None,
        }
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Uniform block built for the most recent frame
    pub fn last_uniforms(&self) -> Option<&SceneUniforms> {
        self.last.as_ref()
    }
}

impl FrameSink for LogSink {
    fn present(&mut self, snapshot: &FrameSnapshot) -> anyhow::Result<()> {
        let projection = self.projection.matrix(self.width, self.height);
        let uniforms = snapshot.to_uniforms(projection, &self.lights);
        log::debug!(
            "tick {} {:?}: eye {:?} satellite {:.1} saucer {:.2} lights {:.1}/{:.1}",
            snapshot.tick,
            snapshot.mode,
            snapshot.camera_position,
            snapshot.satellite_angle,
            snapshot.saucer_offset,
            snapshot.light_angle,
            snapshot.point_light_angle,
        );
        self.last = Some(uniforms);
        self.presented += 1;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        log::info!("Window resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
    }
}
