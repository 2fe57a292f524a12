//! Periodic score timer
//!
//! Stands in for the host's fixed-interval callback. It only fires while
//! running; stopping it discards any partial period so a restart begins clean.

#[derive(Debug, Clone)]
pub struct ScoreTimer {
    /// Seconds per period
    pub interval: f32,
    elapsed: f32,
    running: bool,
}

impl ScoreTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.elapsed = 0.0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by `dt` seconds and return how many whole periods fired
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.running || !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}
