//! Error types.
//!
//! Exhaustion is never an error; these cover invalid construction arguments and the
//! exceptional ways a bridge producer can fail.

use thiserror::Error;

/// Invalid arguments to [`range`](crate::range) / [`try_range`](crate::try_range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("range end may not be before start")]
    EndBeforeStart,
    #[error("range bounds are not comparable")]
    Unordered,
    #[error("range step must be strictly positive")]
    NonPositiveStep,
}

/// Failures of a concurrency bridge producer.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The operating system refused to start the producer thread.
    #[error("failed to spawn producer thread")]
    Spawn(#[from] std::io::Error),
    /// The upstream sequence panicked while the producer was pulling from it.
    #[error("producer thread panicked: {0}")]
    ProducerPanicked(String),
}
