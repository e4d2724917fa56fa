use std::time::Instant;

/// Tick metadata - carries tick number and time since the previous tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInfo {
    pub number: u64,
    pub delta: f32,
}

/// Wall clock for the frame loop. Animation is stepped per tick, not per
/// second, so timing only feeds reporting.
#[derive(Debug)]
pub struct TickClock {
    number: u64,
    last: Instant,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            number: 0,
            last: Instant::now(),
        }
    }

    /// Number of ticks handed out so far
    pub fn ticks(&self) -> u64 {
        self.number
    }

    /// Stamp the next tick
    pub fn next_tick(&mut self) -> TickInfo {
        let now = Instant::now();
        let info = TickInfo {
            number: self.number,
            delta: now.duration_since(self.last).as_secs_f32(),
        };
        self.number += 1;
        self.last = now;
        info
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages frame rate over a fixed reporting interval
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    frames: u32,
    elapsed: f32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            frames: 0,
            elapsed: 0.0,
        }
    }

    /// Count one frame; yields the average rate once per interval
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed < self.interval {
            return None;
        }
        let fps = self.frames as f32 / self.elapsed;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(fps)
    }
}
