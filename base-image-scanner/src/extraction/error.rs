//! Extraction error types.

use crate::gateway::GatewayError;
use thiserror::Error;

/// Failure to extract images from a single Dockerfile.
#[derive(Debug, Error)]
#[error("Failed to extract images from '{path}': {source}")]
pub struct ExtractionError {
    /// Path of the Dockerfile that failed.
    pub path: String,

    /// Underlying gateway failure.
    #[source]
    pub source: GatewayError,
}
