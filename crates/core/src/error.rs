//! Error types for BoxFit.

use thiserror::Error;

/// Result type alias for BoxFit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fitting items into bins.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid item provided.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Invalid bin provided.
    #[error("Invalid bin: {0}")]
    InvalidBin(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Pose index outside the six axis-aligned orientations.
    #[error("Invalid pose index: {0}")]
    InvalidPose(u8),

    /// Axis index outside x, y, z. Aborts the run.
    #[error("Invalid axis index: {0}")]
    InvalidAxis(usize),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
