//! Discovery error types.

use crate::gateway::GatewayError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// Errors that stop a repository at the discovery stage.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The repository URL does not name an owner and a repository.
    #[error(transparent)]
    MalformedUrl(#[from] RepositoryError),

    /// Listing the repository's files failed.
    #[error(transparent)]
    ListFiles(#[from] GatewayError),
}
