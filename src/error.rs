//! Error types for the banditlab library.

use thiserror::Error;

/// Result type alias for bandit operations.
pub type Result<T> = std::result::Result<T, BanditError>;

/// Errors that can occur while building or driving a bandit simulation.
#[derive(Error, Debug)]
pub enum BanditError {
    /// An arm index outside the environment's range was played.
    #[error("arm index {index} out of range: environment has {arms} arms")]
    IndexOutOfRange { index: usize, arms: usize },

    /// A construction parameter or hyperparameter was rejected.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// The environment holds no arms.
    #[error("no arms available")]
    NoArmsAvailable,
}
