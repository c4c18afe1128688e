use std::time::Duration;

use super::config::GameConfig;

/// Tick interval that shrinks each time food is eaten, down to a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSpeed {
    interval: Duration,
    step: Duration,
    floor: Duration,
}

impl GameSpeed {
    pub fn new(initial: Duration, step: Duration, floor: Duration) -> Self {
        Self {
            interval: initial.max(floor),
            step,
            floor,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            Duration::from_millis(config.initial_tick_ms),
            Duration::from_millis(config.speed_step_ms),
            Duration::from_millis(config.min_tick_ms),
        )
    }

    /// Current time between ticks
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn floor(&self) -> Duration {
        self.floor
    }

    pub fn at_floor(&self) -> bool {
        self.interval <= self.floor
    }

    /// Shorten the interval by one step, never past the floor.
    ///
    /// Returns true if the interval changed.
    pub fn accelerate(&mut self) -> bool {
        if self.at_floor() {
            return false;
        }
        let next = self.interval.saturating_sub(self.step).max(self.floor);
        let changed = next != self.interval;
        self.interval = next;
        changed
    }
}
