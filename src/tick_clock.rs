//! Fixed-rate tick scheduling for the game loop.

use std::time::{Duration, Instant};

/// Caps the loop to a fixed number of ticks per second.
///
/// The loop polls input for at most `time_until_tick()` and then asks
/// `consume_tick()` whether a tick is due.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    next_tick: Instant,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    /// Clock whose first tick is due one interval after `start`.
    pub fn starting_at(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next_tick: start + interval,
        }
    }

    pub fn time_until_tick(&self) -> Duration {
        self.time_until_tick_at(Instant::now())
    }

    pub fn time_until_tick_at(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    pub fn consume_tick(&mut self) -> bool {
        self.consume_tick_at(Instant::now())
    }

    /// True once per elapsed interval. After a stall longer than one interval
    /// the schedule restarts from `now` instead of firing a burst of ticks.
    pub fn consume_tick_at(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }
        self.next_tick += self.interval;
        if self.next_tick <= now {
            self.next_tick = now + self.interval;
        }
        true
    }
}
