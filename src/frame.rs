use std::time::Instant;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame timing: frame number, seconds since startup, last frame delta and a
/// once-per-second FPS readout.
pub struct FrameClock {
    start: Instant,
    last: Instant,
    number: u64,
    time: f32,
    delta: f32,
    fps: f32,
    fps_frames: u32,
    fps_accum: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            number: 0,
            time: 0.0,
            delta: 0.0,
            fps: 0.0,
            fps_frames: 0,
            fps_accum: 0.0,
        }
    }

    /// Call once per rendered frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now.duration_since(self.last).as_secs_f32();
        self.time = now.duration_since(self.start).as_secs_f32();
        self.last = now;
        self.number += 1;

        self.fps_frames += 1;
        self.fps_accum += self.delta;
        if self.fps_accum >= FPS_UPDATE_INTERVAL {
            self.fps = self.fps_frames as f32 / self.fps_accum;
            self.fps_frames = 0;
            self.fps_accum = 0.0;
        }
    }

    /// Seconds since startup, updated at the last tick.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Live reading, for event handlers that run between ticks.
    pub fn now(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
