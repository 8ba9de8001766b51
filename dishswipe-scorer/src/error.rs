//! Error types raised while configuring the recommendation engine.

use thiserror::Error;

/// Errors raised when configuring the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScorerError {
    /// Signal weights were non-finite, negative, or summed to zero.
    #[error("signal weights must be finite, non-negative, and sum to a positive total")]
    InvalidWeights,
}
