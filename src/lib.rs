//! banditlab: a simulation testbed for the multi-armed bandit problem.
//!
//! This library models the classic k-armed testbed — Gaussian reward arms
//! whose hidden means may drift over time — and provides the classic
//! action-selection strategies to compare against it: greedy/epsilon-greedy
//! (with sample-average or fixed-step updates), upper-confidence-bound
//! selection, and gradient preference learning. Each strategy run reports its
//! final average reward, its final optimal-action fraction, and the full
//! per-step track of both.
//!
//! All randomness flows through a caller-supplied `rand::RngCore`, so seeded
//! runs are reproducible end to end.
//!
//! # Quick Start
//!
//! ```
//! use banditlab::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! // A stationary 10-armed testbed with means drawn from N(0, 1).
//! let mut env = Environment::builder().build(&mut rng).unwrap();
//!
//! let strategy = EpsilonGreedy::new(0.1).unwrap();
//! let summary = strategy.run(&mut env, 1000, &mut rng).unwrap();
//!
//! assert_eq!(summary.average_track.len(), 1000);
//! println!("average reward: {:.3}", summary.average_reward);
//! println!("optimal-action rate: {:.1}%", summary.optimal_fraction * 100.0);
//! ```

mod arm;
mod environment;
mod error;
pub mod strategies;

// Re-export main types
pub use arm::Arm;
pub use environment::{Environment, EnvironmentBuilder};
pub use error::{BanditError, Result};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use banditlab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::strategies::{
        EpsilonGreedy, GradientBandit, RunSummary, Strategy, Ucb, UpdateRule,
    };
    pub use crate::{Arm, BanditError, Environment, EnvironmentBuilder, Result};
}
