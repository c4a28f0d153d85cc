//! Autoplay configuration.

use crate::constants::AUTOPLAY_MAX_TICKS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayConfig {
    /// Number of rounds to play
    pub runs: u32,

    /// Seed of the first run; run `i` uses `seed + i`
    pub seed: u64,

    /// Ticks after which a run still going is stopped
    pub max_ticks: u64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            runs: 1,
            seed: 42,
            max_ticks: AUTOPLAY_MAX_TICKS,
        }
    }
}

impl AutoplayConfig {
    /// Seed used for the run at `index`.
    pub fn seed_for_run(&self, index: u32) -> u64 {
        self.seed.wrapping_add(index as u64)
    }
}
