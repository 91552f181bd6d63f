//! Error types for the recommender crate.

use thiserror::Error;

/// Failures a recommendation request can end in.
///
/// Display strings are the exact messages returned to HTTP clients;
/// `Internal` carries detail for the logs only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// The request did not carry a list of integer bourbon ids.
    ///
    /// Strategies never return this: a `Selection` can only be built from
    /// integers, so the shape check belongs to whoever decodes the request
    /// (the HTTP layer maps its JSON rejections onto this message).
    #[error("Array of bourbon IDs required")]
    InvalidInput,

    /// Anything unexpected while scoring
    #[error("Internal server error")]
    Internal(String),
}

impl RecommendError {
    pub fn internal(detail: impl Into<String>) -> Self {
        RecommendError::Internal(detail.into())
    }

    /// Detail suitable for logging; never sent to clients
    pub fn detail(&self) -> &str {
        match self {
            RecommendError::InvalidInput => "invalid input",
            RecommendError::Internal(detail) => detail,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;
