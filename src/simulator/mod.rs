//! Headless autoplay.
//!
//! Plays AI rounds on the classic rules without a terminal. Each run gets its
//! own seeded RNG so any run can be replayed from its seed.

mod config;
mod report;
mod runner;

pub use config::AutoplayConfig;
pub use report::{AutoplayReport, RunResult};
pub use runner::{play_single_run, run_autoplay};
