//! Autoplay results.

use crate::snake::EndCause;

/// Outcome of one autoplay round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub seed: u64,
    pub score: u32,
    pub ticks: u64,
    /// `None` when the tick cap stopped the round
    pub cause: Option<EndCause>,
}

impl RunResult {
    pub fn timed_out(&self) -> bool {
        self.cause.is_none()
    }

    pub fn cause_label(&self) -> String {
        match self.cause {
            Some(cause) => cause.to_string(),
            None => "tick limit".to_string(),
        }
    }
}

/// Aggregated results of an autoplay session.
#[derive(Debug, Clone)]
pub struct AutoplayReport {
    pub runs: Vec<RunResult>,
}

impl AutoplayReport {
    pub fn from_runs(runs: Vec<RunResult>) -> Self {
        Self { runs }
    }

    pub fn mean_score(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(|r| r.score as f64).sum::<f64>() / self.runs.len() as f64
    }

    pub fn best(&self) -> Option<&RunResult> {
        self.runs.iter().max_by_key(|r| r.score)
    }

    pub fn timed_out_count(&self) -> usize {
        self.runs.iter().filter(|r| r.timed_out()).count()
    }

    /// Print the per-run table unless `quiet`, then the summary line.
    pub fn print(&self, quiet: bool) {
        if !quiet {
            println!("============================================================");
            println!("  Snake Autoplay Report  ({} runs)", self.runs.len());
            println!("============================================================");
            println!();
            println!("{:>20}  {:>6}  {:>8}  cause", "seed", "score", "ticks");
            for run in &self.runs {
                println!(
                    "{:>20}  {:>6}  {:>8}  {}",
                    run.seed,
                    run.score,
                    run.ticks,
                    run.cause_label()
                );
            }
            println!();
        }

        match self.best() {
            Some(best) => println!(
                "Mean score: {:.2}  Best: {} (seed {})  Timed out: {}",
                self.mean_score(),
                best.score,
                best.seed,
                self.timed_out_count()
            ),
            None => println!("No runs played"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Collision;

    fn run(seed: u64, score: u32, cause: Option<EndCause>) -> RunResult {
        RunResult {
            seed,
            score,
            ticks: 100,
            cause,
        }
    }

    #[test]
    fn test_mean_and_best() {
        let report = AutoplayReport::from_runs(vec![
            run(1, 4, Some(EndCause::Collision(Collision::Wall))),
            run(2, 10, Some(EndCause::Collision(Collision::SelfHit))),
            run(3, 7, None),
        ]);
        assert!((report.mean_score() - 7.0).abs() < f64::EPSILON);
        assert_eq!(report.best().unwrap().seed, 2);
        assert_eq!(report.timed_out_count(), 1);
    }

    #[test]
    fn test_empty_report() {
        let report = AutoplayReport::from_runs(Vec::new());
        assert_eq!(report.mean_score(), 0.0);
        assert!(report.best().is_none());
    }

    #[test]
    fn test_cause_label() {
        assert_eq!(run(1, 0, None).cause_label(), "tick limit");
        assert_eq!(
            run(1, 0, Some(EndCause::Collision(Collision::Wall))).cause_label(),
            "wall collision"
        );
    }
}
