//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for GenieFlow
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum GenieFlowError {
    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure or an unexpected response from a remote service.
    #[error("Network error: {0}")]
    Network(String),

    /// Credentials were rejected or could not be obtained.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The calendar store asked us to slow down (HTTP 429 or quota errors).
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// The referenced event (or calendar) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller-supplied data (or a response body) could not be used.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Bug or invariant violation inside GenieFlow itself.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GenieFlowError {
    /// True when the error signals that the caller should back off.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}

/// Result type alias for GenieFlow operations
pub type Result<T> = std::result::Result<T, GenieFlowError>;
