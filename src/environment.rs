//! The bandit environment: an ordered, index-addressed collection of arms.

use log::debug;
use rand::RngCore;

use crate::arm::{Arm, gauss};
use crate::error::{BanditError, Result};

/// A set of arms that strategies sample rewards from.
///
/// Insertion order is index order, and indices are the public addressing
/// scheme used by the selection strategies. The stationarity flag is fixed at
/// construction: a non-stationary environment random-walks every arm's mean
/// once per simulation step. The optimal arm is never cached, since means may
/// drift between steps it is recomputed on demand.
#[derive(Clone, Debug)]
pub struct Environment {
    arms: Vec<Arm>,
    stationary: bool,
}

impl Environment {
    /// Creates `num_arms` arms with identifiers `0..num_arms`, each true mean
    /// drawn from `gauss(mean, variance)` and a per-arm variance of 1.
    pub fn new(
        num_arms: usize,
        mean: f64,
        variance: f64,
        stationary: bool,
        rng: &mut dyn RngCore,
    ) -> Result<Self> {
        if num_arms == 0 {
            return Err(BanditError::NoArmsAvailable);
        }
        let arms = (0..num_arms)
            .map(|id| Arm::new(id, gauss(mean, variance, rng), 1.0))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { arms, stationary })
    }

    /// Creates an environment from explicit arms, preserving their order.
    pub fn from_arms(arms: Vec<Arm>, stationary: bool) -> Result<Self> {
        if arms.is_empty() {
            return Err(BanditError::NoArmsAvailable);
        }
        Ok(Self { arms, stationary })
    }

    /// Creates a builder with the standard testbed defaults (10 arms, prior
    /// mean 0, prior variance 1, stationary).
    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::default()
    }

    /// Number of arms.
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    /// Whether the environment holds no arms.
    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Whether arm means stay fixed over time.
    pub fn stationary(&self) -> bool {
        self.stationary
    }

    /// The arm at `index`, if in range.
    pub fn arm(&self, index: usize) -> Option<&Arm> {
        self.arms.get(index)
    }

    /// Appends an arm.
    ///
    /// The typed argument is the capability contract; there is nothing to
    /// silently reject.
    pub fn add_arm(&mut self, arm: Arm) {
        self.arms.push(arm);
    }

    /// Random-walks every arm's mean if the environment is non-stationary,
    /// otherwise does nothing.
    ///
    /// Called once per simulation step, after that step's reward has been
    /// drawn, so recorded rewards reflect pre-drift means.
    pub fn step(&mut self, rng: &mut dyn RngCore) {
        if self.stationary {
            return;
        }
        for arm in &mut self.arms {
            arm.random_walk(rng);
        }
    }

    /// Samples one reward from the arm at `index`.
    pub fn play(&self, index: usize, rng: &mut dyn RngCore) -> Result<f64> {
        let arm = self.arms.get(index).ok_or(BanditError::IndexOutOfRange {
            index,
            arms: self.arms.len(),
        })?;
        Ok(arm.sample(rng))
    }

    /// The arm with the greatest current mean, and that mean.
    ///
    /// Ties go to the first arm in index order (strict-greater scan).
    pub fn optimal_arm(&self) -> Result<(f64, &Arm)> {
        let mut best: Option<(f64, &Arm)> = None;
        for arm in &self.arms {
            match best {
                Some((value, _)) if arm.mean() <= value => {}
                _ => best = Some((arm.mean(), arm)),
            }
        }
        best.ok_or(BanditError::NoArmsAvailable)
    }

    /// Redraws every arm's mean around `gauss(mean, variance)`, starting a
    /// fresh problem instance while keeping arm identities.
    pub fn reset_means(&mut self, mean: f64, variance: f64, rng: &mut dyn RngCore) {
        debug!("resetting {} arm means around {}", self.arms.len(), mean);
        for arm in &mut self.arms {
            arm.reset_mean(mean, variance, rng);
        }
    }
}

/// Builder for [`Environment`] with the standard testbed defaults.
///
/// # Examples
///
/// ```
/// use banditlab::Environment;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let env = Environment::builder()
///     .arms(5)
///     .stationary(false)
///     .build(&mut rng)
///     .unwrap();
/// assert_eq!(env.len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct EnvironmentBuilder {
    num_arms: usize,
    mean: f64,
    variance: f64,
    stationary: bool,
}

impl Default for EnvironmentBuilder {
    fn default() -> Self {
        Self {
            num_arms: 10,
            mean: 0.0,
            variance: 1.0,
            stationary: true,
        }
    }
}

impl EnvironmentBuilder {
    /// Sets the number of arms.
    #[must_use]
    pub fn arms(mut self, num_arms: usize) -> Self {
        self.num_arms = num_arms;
        self
    }

    /// Sets the mean of the prior the initial arm means are drawn from.
    #[must_use]
    pub fn prior_mean(mut self, mean: f64) -> Self {
        self.mean = mean;
        self
    }

    /// Sets the variance of the prior the initial arm means are drawn from.
    #[must_use]
    pub fn prior_variance(mut self, variance: f64) -> Self {
        self.variance = variance;
        self
    }

    /// Sets whether arm means stay fixed over time.
    #[must_use]
    pub fn stationary(mut self, stationary: bool) -> Self {
        self.stationary = stationary;
        self
    }

    /// Builds the environment, drawing initial arm means from `rng`.
    pub fn build(self, rng: &mut dyn RngCore) -> Result<Environment> {
        Environment::new(self.num_arms, self.mean, self.variance, self.stationary, rng)
    }
}
