//! Autoplay runner.

use super::config::AutoplayConfig;
use super::report::{AutoplayReport, RunResult};
use crate::snake::{PlayMode, Round, Rules};
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Play every configured run and collect the report.
pub fn run_autoplay(config: &AutoplayConfig) -> AutoplayReport {
    let runs = (0..config.runs)
        .map(|index| play_single_run(config.seed_for_run(index), config.max_ticks))
        .collect();
    AutoplayReport::from_runs(runs)
}

/// Play one AI round on the classic rules.
pub fn play_single_run(seed: u64, max_ticks: u64) -> RunResult {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut round = Round::new(Rules::CLASSIC, PlayMode::Ai, &mut rng);

    while round.is_running() && round.tick_count < max_ticks {
        round.tick(&mut rng);
    }

    let result = RunResult {
        seed,
        score: round.score,
        ticks: round.tick_count,
        cause: round.end_cause(),
    };
    debug!("autoplay run {:?}", result);
    result
}
