use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Sleeps out the rest of each frame so frames run at a target rate.
/// Drift is tolerated; the rate only drives the simulation speed.
pub struct FrameLimiter {
    frame_timer: Instant,
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self {
            frame_timer: Instant::now(),
        }
    }
}

impl FrameLimiter {
    /// Time one frame should take at `frames_per_second`
    pub fn frame_budget(frames_per_second: u32) -> Duration {
        Duration::from_secs_f64(1. / f64::from(frames_per_second.max(1)))
    }

    /// Block until the current frame has used its budget, then start the next
    pub fn sleep(&mut self, frames_per_second: u32) {
        let elapsed = self.frame_timer.elapsed();
        let budget = Self::frame_budget(frames_per_second);
        if budget > elapsed {
            sleep(budget - elapsed);
        }
        self.frame_timer = Instant::now();
    }
}
