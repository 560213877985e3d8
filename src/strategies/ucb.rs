use log::debug;
use rand::RngCore;

use super::{RunRecorder, RunSummary, Strategy, UpdateRule};
use crate::environment::Environment;
use crate::error::{BanditError, Result};

/// Upper-confidence-bound selection.
///
/// Any arm never yet selected is chosen immediately, scanning indices in
/// order, so a fresh run always plays every arm once before the bound
/// applies. After that the arm maximizing
/// `estimate + c * sqrt(ln(step) / count)` wins, with the 0-based step index
/// and strict-greater comparison so the first arm holding the maximum is
/// selected.
#[derive(Clone, Debug)]
pub struct Ucb {
    c: f64,
    update: UpdateRule,
    initial_estimate: f64,
}

impl Ucb {
    /// Creates a UCB strategy with confidence parameter `c`, sample-average
    /// updates, and a zero initial estimate.
    pub fn new(c: f64) -> Result<Self> {
        if !c.is_finite() || c <= 0.0 {
            return Err(BanditError::InvalidParameter {
                message: format!("confidence parameter c must be positive, got {c}"),
            });
        }
        Ok(Self {
            c,
            update: UpdateRule::SampleAverage,
            initial_estimate: 0.0,
        })
    }

    /// Replaces the estimate update rule.
    #[must_use]
    pub fn with_update(mut self, update: UpdateRule) -> Self {
        self.update = update;
        self
    }

    /// Replaces the initial per-arm value estimate.
    #[must_use]
    pub fn with_initial_estimate(mut self, initial_estimate: f64) -> Self {
        self.initial_estimate = initial_estimate;
        self
    }

    /// Gets the confidence parameter.
    pub fn c(&self) -> f64 {
        self.c
    }

    fn select(&self, estimates: &[f64], counts: &[usize], step: usize) -> usize {
        // Forced exploration: the first never-played arm wins outright.
        for (index, &count) in counts.iter().enumerate() {
            if count == 0 {
                return index;
            }
        }

        // ln(0) is negative-infinite. All counts are nonzero here, which
        // cannot happen at step 0 on a fresh run, but clamp the log term
        // rather than let the singularity poison the comparison.
        let log_step = if step == 0 { 0.0 } else { (step as f64).ln() };

        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (index, &estimate) in estimates.iter().enumerate() {
            let score = estimate + self.c * (log_step / counts[index] as f64).sqrt();
            if score > best_score {
                best = index;
                best_score = score;
            }
        }
        best
    }
}

impl Strategy for Ucb {
    fn run(
        &self,
        env: &mut Environment,
        steps: usize,
        rng: &mut dyn RngCore,
    ) -> Result<RunSummary> {
        let arms = env.len();
        if arms == 0 {
            return Err(BanditError::NoArmsAvailable);
        }

        debug!("ucb run: c={} update={:?} steps={}", self.c, self.update, steps);

        let mut estimates = vec![self.initial_estimate; arms];
        let mut counts = vec![0usize; arms];
        let mut recorder = RunRecorder::with_budget(steps);

        for step in 0..steps {
            let selected = self.select(&estimates, &counts, step);

            counts[selected] += 1;
            let reward = env.play(selected, rng)?;
            estimates[selected] = self.update.apply(estimates[selected], reward, counts[selected]);

            let optimal_id = env.optimal_arm()?.1.id();
            recorder.record(step, reward, selected == optimal_id);
            env.step(rng);
        }

        Ok(recorder.finish(steps))
    }
}
