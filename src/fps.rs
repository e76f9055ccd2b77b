use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Counts presented frames and reports the rate once per interval.
pub struct FpsCounter {
    frames: u32,
    last_report: Instant,
    current_fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            frames: 0,
            last_report: now,
            current_fps: 0,
        }
    }

    pub fn tick(&mut self) -> Option<u32> {
        self.tick_at(Instant::now())
    }

    /// Records one frame at `now`; returns the new rate when an interval closed.
    pub fn tick_at(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.last_report);
        if elapsed >= REPORT_INTERVAL {
            self.current_fps = (self.frames as f32 / elapsed.as_secs_f32()).round() as u32;
            self.frames = 0;
            self.last_report = now;
            Some(self.current_fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> u32 {
        self.current_fps
    }
}
