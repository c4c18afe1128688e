//! Tick scheduler for the game loop
//!
//! The tick period changes while a game runs. Rather than shifting an
//! existing timer, [`GameClock::rearm`] drops it and arms a new one, so the
//! first tick after a speed change is always one full new period away.

use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

pub struct GameClock {
    interval: Interval,
    period: Duration,
}

impl GameClock {
    /// Arm a clock whose first tick is one `period` from now
    pub fn new(period: Duration) -> Self {
        Self {
            interval: Self::arm(period),
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Cancel the pending tick and restart at `period`
    pub fn rearm(&mut self, period: Duration) {
        self.period = period;
        self.interval = Self::arm(period);
    }

    /// Wait for the next tick
    pub async fn tick(&mut self) -> Instant {
        self.interval.tick().await
    }

    fn arm(period: Duration) -> Interval {
        let mut interval = interval_at(Instant::now() + period, period);
        // A slow frame should not be followed by a burst of catch-up steps
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    }
}
