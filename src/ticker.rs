use std::time::Duration;

/// Fixed-step accumulator: turns wall-clock frame times into whole update ticks.
pub struct Ticker {
    step: Duration,
    max_catch_up: Duration, // longest stretch replayed after a stall
    lag: Duration,
}

impl Ticker {
    pub fn new(step: Duration, max_catch_up: Duration) -> Self {
        Self {
            step,
            max_catch_up,
            lag: Duration::ZERO,
        }
    }

    /// Adds `elapsed` (capped) and returns how many ticks are due; the remainder carries over.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.step.is_zero() {
            return 0;
        }
        self.lag += elapsed.min(self.max_catch_up);

        let mut ticks = 0;
        while self.lag >= self.step {
            self.lag -= self.step;
            ticks += 1;
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.lag = Duration::ZERO;
    }
}
