use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use orbital_viewer::cli::Cli;
use orbital_viewer::config::ViewerConfig;
use orbital_viewer::core::{FrameSink, LogSink, WinitController};
use orbital_viewer::frame::{FpsCounter, TickClock};
use orbital_viewer::Viewer;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    window: Option<Arc<Window>>,
    config: ViewerConfig,
    viewer: Viewer,
    controller: WinitController,
    sink: LogSink,
    clock: TickClock,
    fps: FpsCounter,
}

impl App {
    fn new(config: ViewerConfig, viewer: Viewer) -> Self {
        let sink = LogSink::new(
            config.camera.projection,
            config.lights,
            config.window.width,
            config.window.height,
        );
        Self {
            window: None,
            config,
            viewer,
            controller: WinitController::new(),
            sink,
            clock: TickClock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let info = self.clock.next_tick();
        if let Some(fps) = self.fps.record(info.delta) {
            log::info!("FPS: {:.1}", fps);
        }

        let snapshot = self.viewer.tick(&self.controller, self.controller.cursor());
        if let Err(e) = self.sink.present(&snapshot) {
            log::error!("Render error: {:#}", e);
        }

        if self.viewer.quit_requested() {
            log::info!("Quit requested after {} ticks", self.clock.ticks());
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.config.window.title.clone())
                .with_inner_size(LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        // Mouse-look reads raw motion; the grab only keeps the pointer inside
        if let Err(e) = window
            .set_cursor_grab(CursorGrabMode::Confined)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
        {
            log::warn!("Cursor grab unavailable: {}", e);
        }
        window.set_cursor_visible(false);

        let size = window.inner_size();
        self.sink.resize(size.width, size.height);
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.controller.process_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.sink.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if self.window.is_some() {
            self.controller.process_device_event(&event);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Step the viewer with no input and print the final frame
fn run_headless(config: &ViewerConfig, mut viewer: Viewer, ticks: u64) -> Result<()> {
    let idle = WinitController::new();
    let mut sink = LogSink::new(
        config.camera.projection,
        config.lights,
        config.window.width,
        config.window.height,
    );

    let mut snapshot = viewer.snapshot();
    for _ in 0..ticks {
        snapshot = viewer.tick(&idle, None);
        sink.present(&snapshot)?;
    }

    let report = serde_json::to_string_pretty(&snapshot.report())
        .context("Failed to serialize frame report")?;
    println!("{}", report);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            log::info!("Loading config from {}", path.display());
            ViewerConfig::load(path)?
        }
        None => ViewerConfig::default(),
    };
    cli.apply_overrides(&mut config);

    let mut viewer = Viewer::from_config(&config).context("Invalid start-up camera")?;
    if cli.orbit {
        viewer.animation_mut().set_visualization(true);
    }

    if let Some(ticks) = cli.headless {
        return run_headless(&config, viewer, ticks);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, viewer);

    println!(
        "Orbital Viewer - Controls: WASD/U/J move, mouse look, K/L and Z/X lights, \
         Q/E satellite, N/M saucer, P/O orbit, R/T/Y polygon mode, H/G smoothing, Escape to quit"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
