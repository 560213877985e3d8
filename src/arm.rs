//! Arm type for the bandit environment.
//!
//! An `Arm` is one reward-generating option: a Gaussian source with a hidden
//! true mean and a fixed variance. Arms keep a stable identifier for their
//! whole lifetime; only the mean ever changes, either through the
//! non-stationary random walk or an explicit reset between experiment
//! repetitions.

use rand::RngCore;
use rand_distr::{Distribution, Normal};

use crate::error::{BanditError, Result};

/// A single reward-generating arm.
///
/// # Examples
///
/// ```
/// use banditlab::Arm;
/// use rand::SeedableRng;
///
/// let arm = Arm::new(0, 2.0, 1.0).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let reward = arm.sample(&mut rng);
/// assert!(reward.is_finite());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Arm {
    id: usize,
    mean: f64,
    variance: f64,
}

impl Arm {
    /// Creates an arm with the given identifier, true mean, and variance.
    ///
    /// The variance is fixed for the arm's lifetime and must be finite and
    /// non-negative.
    pub fn new(id: usize, mean: f64, variance: f64) -> Result<Self> {
        if !variance.is_finite() || variance < 0.0 {
            return Err(BanditError::InvalidParameter {
                message: format!("variance must be finite and non-negative, got {variance}"),
            });
        }
        Ok(Self { id, mean, variance })
    }

    /// The arm's stable identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The arm's current true mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// The arm's variance.
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Draws one reward around the current mean.
    ///
    /// No side effect on the arm; a zero-variance arm yields its mean
    /// deterministically.
    pub fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        gauss(self.mean, self.variance, rng)
    }

    /// Perturbs the mean by a Gaussian draw centered on the *current* mean
    /// with the arm's own variance.
    ///
    /// The drift is self-referential rather than a fixed-parameter walk, so
    /// arms with large means drift faster.
    pub fn random_walk(&mut self, rng: &mut dyn RngCore) {
        self.mean += gauss(self.mean, self.variance, rng);
    }

    /// Overwrites the mean with a fresh draw around the given parameters.
    ///
    /// Used between independent experiment repetitions to regenerate the
    /// problem instance while keeping the arm's identity.
    pub fn reset_mean(&mut self, mean: f64, variance: f64, rng: &mut dyn RngCore) {
        self.mean = gauss(mean, variance, rng);
    }
}

/// Gaussian draw. `variance` is fed to the sampler as the scale parameter
/// directly, the convention this testbed uses throughout.
pub(crate) fn gauss(mean: f64, variance: f64, rng: &mut dyn RngCore) -> f64 {
    match Normal::new(mean, variance) {
        Ok(dist) => dist.sample(rng),
        // Normal only rejects a negative or NaN scale, which construction
        // rules out; fall back to the mean rather than poison the run.
        Err(_) => mean,
    }
}
