use log::debug;
use rand::{Rng, RngCore};

use super::{RunRecorder, RunSummary, Strategy};
use crate::environment::Environment;
use crate::error::{BanditError, Result};

/// Gradient bandit: softmax action preferences nudged toward rewards above
/// a running-average baseline.
///
/// Each step the per-arm preferences are turned into selection probabilities
/// via softmax, an arm is drawn from that distribution, and the preferences
/// move by `alpha * (reward - baseline)`, up for the selected arm (scaled by
/// `1 - P[selected]`) and down for every other arm (scaled by its own
/// probability). The baseline is the running average reward *including* the
/// current step's reward; that ordering is part of the contract and covered
/// by a regression test.
#[derive(Clone, Debug)]
pub struct GradientBandit {
    alpha: f64,
    initial_preference: f64,
}

impl GradientBandit {
    /// Creates a gradient bandit with step size `alpha` and zero initial
    /// preferences.
    pub fn new(alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(BanditError::InvalidParameter {
                message: format!("step size alpha must be positive, got {alpha}"),
            });
        }
        Ok(Self {
            alpha,
            initial_preference: 0.0,
        })
    }

    /// Replaces the initial per-arm preference score.
    #[must_use]
    pub fn with_initial_preference(mut self, initial_preference: f64) -> Self {
        self.initial_preference = initial_preference;
        self
    }

    /// Gets the step size.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Strategy for GradientBandit {
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

        debug!("gradient run: alpha={} steps={}", self.alpha, steps);

        let mut preferences = vec![self.initial_preference; arms];
        let mut probabilities = vec![0.0; arms];
        let mut recorder = RunRecorder::with_budget(steps);

        for step in 0..steps {
            softmax(&preferences, &mut probabilities);
            let selected = pick(&probabilities, rng.random_range(0.0..1.0));

            let reward = env.play(selected, rng)?;
            let optimal_id = env.optimal_arm()?.1.id();
            let baseline = recorder.record(step, reward, selected == optimal_id);

            nudge_preferences(
                &mut preferences,
                &probabilities,
                selected,
                self.alpha,
                reward,
                baseline,
            );
            env.step(rng);
        }

        Ok(recorder.finish(steps))
    }
}

/// Normalized exponentials of the preference scores.
fn softmax(preferences: &[f64], probabilities: &mut [f64]) {
    let total: f64 = preferences.iter().map(|h| h.exp()).sum();
    for (probability, preference) in probabilities.iter_mut().zip(preferences) {
        *probability = preference.exp() / total;
    }
}

/// Samples an index by walking the cumulative probability mass.
///
/// `draw` is uniform in [0, 1). Floating-point accumulation can leave a
/// sliver of unclaimed mass at the top of the walk; such a draw falls
/// through to the last arm.
fn pick(probabilities: &[f64], mut draw: f64) -> usize {
    for (index, &probability) in probabilities.iter().enumerate() {
        if draw <= probability {
            return index;
        }
        draw -= probability;
    }
    probabilities.len() - 1
}

/// Moves preferences toward the observed reward relative to the baseline.
///
/// The baseline is the running average reward with the current step's reward
/// already folded in. Kept as a free function so the update-ordering contract
/// stays directly testable.
fn nudge_preferences(
    preferences: &mut [f64],
    probabilities: &[f64],
    selected: usize,
    alpha: f64,
    reward: f64,
    baseline: f64,
) {
    for (index, preference) in preferences.iter_mut().enumerate() {
        if index == selected {
            *preference += alpha * (reward - baseline) * (1.0 - probabilities[index]);
        } else {
            *preference -= alpha * (reward - baseline) * probabilities[index];
        }
    }
}
