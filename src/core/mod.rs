pub mod controller;
pub mod input_adapter;
pub mod renderer;

pub use controller::{Button, Controller};
pub use input_adapter::WinitController;
pub use renderer::{FrameSink, LogSink};
