//! Action-selection strategies for the bandit environment.
//!
//! Each strategy consumes a mutable [`Environment`] and a step budget, keeps
//! its per-arm estimates local to the run, and returns a [`RunSummary`] with
//! the final running-average reward, the final optimal-action fraction, and
//! both full per-step tracks. Two sequential runs against the same
//! environment behave as independent runs except for the environment's own
//! evolving arm means, which persist across calls by design.

mod epsilon_greedy;
mod gradient;
mod ucb;

pub use epsilon_greedy::EpsilonGreedy;
pub use gradient::GradientBandit;
pub use ucb::Ucb;

use rand::RngCore;

use crate::environment::Environment;
use crate::error::Result;

/// How a per-arm value estimate incorporates a new reward.
///
/// An explicit mode rather than a sentinel step size, so a zero alpha can
/// never be mistaken for "use the sample average".
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UpdateRule {
    /// `estimate += (reward - estimate) / count`, the unbiased running mean.
    SampleAverage,
    /// `estimate += (reward - estimate) * alpha`, exponential recency
    /// weighting suited to non-stationary environments.
    FixedStep(f64),
}

impl UpdateRule {
    /// Applies the rule given the arm's post-increment selection count.
    pub(crate) fn apply(self, estimate: f64, reward: f64, count: usize) -> f64 {
        match self {
            UpdateRule::SampleAverage => estimate + (reward - estimate) / count as f64,
            UpdateRule::FixedStep(alpha) => estimate + (reward - estimate) * alpha,
        }
    }
}

/// The four outputs of one strategy run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    /// Final running-average reward.
    pub average_reward: f64,
    /// Running-average reward after each step; length equals the budget.
    pub average_track: Vec<f64>,
    /// Final fraction of steps that selected the then-optimal arm.
    pub optimal_fraction: f64,
    /// Running optimal fraction after each step; length equals the budget.
    pub optimal_track: Vec<f64>,
}

/// A bandit action-selection strategy.
///
/// Implementations select an arm each step, observe a sampled reward, update
/// their own estimates, record running statistics, and then let the
/// environment drift. The optimal arm is re-evaluated fresh every step since
/// means may be moving.
pub trait Strategy {
    /// Runs the strategy for `steps` selections against `env`.
    fn run(
        &self,
        env: &mut Environment,
        steps: usize,
        rng: &mut dyn RngCore,
    ) -> Result<RunSummary>;
}

/// Per-step bookkeeping shared by every strategy.
pub(crate) struct RunRecorder {
    reward_sum: f64,
    optimal_count: usize,
    average_track: Vec<f64>,
    optimal_track: Vec<f64>,
}

impl RunRecorder {
    pub(crate) fn with_budget(steps: usize) -> Self {
        Self {
            reward_sum: 0.0,
            optimal_count: 0,
            average_track: Vec::with_capacity(steps),
            optimal_track: Vec::with_capacity(steps),
        }
    }

    /// Folds in one step's outcome and returns the updated running average.
    ///
    /// `step` is 0-based; `chose_optimal` compares the selection against the
    /// optimal arm as of this step.
    pub(crate) fn record(&mut self, step: usize, reward: f64, chose_optimal: bool) -> f64 {
        self.reward_sum += reward;
        let average = self.reward_sum / (step + 1) as f64;
        self.average_track.push(average);
        if chose_optimal {
            self.optimal_count += 1;
        }
        self.optimal_track
            .push(self.optimal_count as f64 / (step + 1) as f64);
        average
    }

    pub(crate) fn finish(self, steps: usize) -> RunSummary {
        RunSummary {
            average_reward: self.average_track.last().copied().unwrap_or(0.0),
            optimal_fraction: if steps == 0 {
                0.0
            } else {
                self.optimal_count as f64 / steps as f64
            },
            average_track: self.average_track,
            optimal_track: self.optimal_track,
        }
    }
}

/// First index holding the maximum value (strict-greater scan from 0).
pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sample_average_update() {
        let rule = UpdateRule::SampleAverage;

        // First observation replaces the initial estimate entirely.
        assert_abs_diff_eq!(rule.apply(0.0, 2.0, 1), 2.0);
        // Second observation averages in.
        assert_abs_diff_eq!(rule.apply(2.0, 4.0, 2), 3.0);
        assert_abs_diff_eq!(rule.apply(3.0, 6.0, 3), 4.0);
    }

    #[test]
    fn test_fixed_step_update_ignores_count() {
        let rule = UpdateRule::FixedStep(0.1);

        assert_abs_diff_eq!(rule.apply(0.0, 1.0, 1), 0.1);
        assert_abs_diff_eq!(rule.apply(0.0, 1.0, 1000), 0.1);
    }

    #[test]
    fn test_argmax_first_wins_ties() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0, 2.0]), 1);
        assert_eq!(argmax(&[0.0, 0.0, 0.0]), 0);
        assert_eq!(argmax(&[-1.0]), 0);
        assert_eq!(argmax(&[1.0, 2.0, 5.0, 4.0]), 2);
    }

    #[test]
    fn test_recorder_tracks_running_statistics() {
        let mut recorder = RunRecorder::with_budget(3);

        assert_abs_diff_eq!(recorder.record(0, 1.0, false), 1.0);
        assert_abs_diff_eq!(recorder.record(1, 3.0, true), 2.0);
        assert_abs_diff_eq!(recorder.record(2, 2.0, true), 2.0);

        let summary = recorder.finish(3);
        assert_eq!(summary.average_track, vec![1.0, 2.0, 2.0]);
        assert_abs_diff_eq!(summary.average_reward, 2.0);
        assert_eq!(summary.optimal_track, vec![0.0, 0.5, 2.0 / 3.0]);
        assert_abs_diff_eq!(summary.optimal_fraction, 2.0 / 3.0);
    }

    #[test]
    fn test_recorder_empty_budget() {
        let summary = RunRecorder::with_budget(0).finish(0);
        assert!(summary.average_track.is_empty());
        assert!(summary.optimal_track.is_empty());
        assert_eq!(summary.average_reward, 0.0);
        assert_eq!(summary.optimal_fraction, 0.0);
    }
}
