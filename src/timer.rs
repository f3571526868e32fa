//! Elapsed game time shown in the controls strip

/// Tick interval in seconds
pub const TICK_SECONDS: f64 = 1.0;

/// Free-running minutes/seconds counter
#[derive(Debug, Clone, Default)]
pub struct GameTimer {
    /// Time accumulated towards the next tick
    pending: f64,
    minutes: u32,
    seconds: u32,
}

impl GameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by a frame delta, ticking once per whole interval
    pub fn update(&mut self, delta: f64) {
        self.pending += delta;
        while self.pending >= TICK_SECONDS {
            self.pending -= TICK_SECONDS;
            self.tick();
        }
    }

    fn tick(&mut self) {
        self.seconds += 1;
        if self.seconds == 60 {
            self.seconds = 0;
            self.minutes += 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn elapsed(&self) -> (u32, u32) {
        (self.minutes, self.seconds)
    }

    /// e.g. `2m 5s`
    pub fn label(&self) -> String {
        let (minutes, seconds) = self.elapsed();
        format!("{}m {}s", minutes, seconds)
    }
}
