//! Error type shared by every solver entry point.

use thiserror::Error as ThisError;

/// Errors raised when building matrices, validating routes, or
/// configuring a solver.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Malformed input: empty stop list, bad matrix data, or a route that
    /// is not a permutation starting at the depot.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Exhaustive search was requested for an instance above its limit.
    #[error("instance too large for exact search: {size} stops (limit {limit})")]
    InstanceTooLarge {
        /// Number of stops in the instance.
        size: usize,
        /// Largest size the exact solver accepts.
        limit: usize,
    },
    /// Genetic solver configuration out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds an [`Error::InvalidInput`] from any message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Builds an [`Error::InvalidConfig`] from any message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
