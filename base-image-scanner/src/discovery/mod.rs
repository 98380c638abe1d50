//! Dockerfile discovery.
//!
//! Lists a repository's files at a revision and keeps the ones whose name
//! looks like a Dockerfile.

mod error;

pub use error::DiscoveryError;

use crate::gateway::RepositoryGateway;
use crate::repository::{OwnerName, RepositoryRef};
use tracing::{debug, info};

/// Name fragment that marks a file as a Dockerfile candidate.
const DOCKERFILE_MARKER: &str = "dockerfile";

/// A repository whose Dockerfile candidates have been found.
#[derive(Debug, Clone)]
pub struct DiscoveredRepository {
    /// The repository and revision that were listed.
    pub repository: RepositoryRef,

    /// Owner and name resolved from the repository URL.
    pub owner_name: OwnerName,

    /// Candidate Dockerfile paths, in listing order.
    pub paths: Vec<String>,
}

/// Returns true if the final component of `path` contains `dockerfile`,
/// ignoring case.
///
/// `Dockerfile`, `Dockerfile.test` and `build/prod.dockerfile` match;
/// `dockerfiles/docker.py` does not.
#[must_use]
pub fn is_dockerfile(path: &str) -> bool {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    file_name.to_lowercase().contains(DOCKERFILE_MARKER)
}

/// Filters a file listing down to Dockerfile candidates.
///
/// Order is preserved and duplicates are kept.
pub fn discover_dockerfiles<I, S>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    paths
        .into_iter()
        .map(Into::into)
        .filter(|path| is_dockerfile(path))
        .collect()
}

/// Lists a repository's files and returns its Dockerfile candidates.
///
/// # Errors
///
/// Returns [`DiscoveryError::ListFiles`] if the gateway cannot list the tree.
pub async fn search_for_dockerfiles(
    gateway: &dyn RepositoryGateway,
    owner_name: &OwnerName,
    revision: &str,
) -> Result<Vec<String>, DiscoveryError> {
    let files = gateway
        .list_files(&owner_name.owner, &owner_name.name, revision)
        .await?;
    debug!(repo = %owner_name, files = files.len(), "Listed repository files");

    Ok(discover_dockerfiles(files))
}

/// Runs the discovery stage for one repository.
///
/// Resolves the owner and name, then searches the tree for Dockerfiles.
///
/// # Errors
///
/// Returns [`DiscoveryError`] if the URL is malformed or listing fails.
pub async fn discover_repository(
    gateway: &dyn RepositoryGateway,
    repository: &RepositoryRef,
) -> Result<DiscoveredRepository, DiscoveryError> {
    let owner_name = repository.owner_name()?;
    let paths = search_for_dockerfiles(gateway, &owner_name, &repository.revision).await?;

    info!(repo = %owner_name, count = paths.len(), "Found Dockerfile candidates");
    Ok(DiscoveredRepository {
        repository: repository.clone(),
        owner_name,
        paths,
    })
}
