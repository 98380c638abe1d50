//! The two units of work each repository goes through.
//!
//! Discovery produces a [`DiscoveryOutput`]; extraction consumes it and
//! produces the repository's terminal [`RepositoryOutcome`]. Neither unit
//! touches the report.

use crate::discovery::{discover_repository, DiscoveredRepository, DiscoveryError};
use crate::extraction::extract_from_paths;
use crate::gateway::RepositoryGateway;
use crate::report::RepositoryOutcome;
use crate::repository::RepositoryRef;
use tracing::{error, info, info_span, warn, Instrument};

/// Result of the discovery unit for one repository.
#[derive(Debug)]
pub struct DiscoveryOutput {
    /// Report key of the repository.
    pub key: String,

    /// Discovered candidates, or why discovery failed.
    pub result: Result<DiscoveredRepository, DiscoveryError>,
}

/// Runs the discovery unit: resolves owner/name and lists candidates.
pub async fn discovery_unit(
    gateway: &dyn RepositoryGateway,
    repository: &RepositoryRef,
) -> DiscoveryOutput {
    DiscoveryOutput {
        key: repository.key(),
        result: discover_repository(gateway, repository).await,
    }
}

/// Runs the extraction unit on a finished discovery.
///
/// A failed discovery is turned into [`RepositoryOutcome::DiscoveryFailed`]
/// without touching the gateway.
pub async fn extraction_unit(
    gateway: &dyn RepositoryGateway,
    discovered: DiscoveryOutput,
) -> RepositoryOutcome {
    let DiscoveryOutput { key, result } = discovered;

    let discovered = match result {
        Ok(discovered) => discovered,
        Err(e) => {
            error!(error = %e, "Discovery failed");
            return RepositoryOutcome::DiscoveryFailed {
                key,
                error: e.to_string(),
            };
        }
    };

    let (images, errors) = extract_from_paths(
        gateway,
        &discovered.owner_name,
        &discovered.repository.revision,
        &discovered.paths,
    )
    .await;

    if errors.is_empty() {
        info!(files = images.len(), "Repository extracted");
    } else {
        warn!(
            files = images.len(),
            failed = errors.len(),
            "Repository extracted with failures"
        );
    }

    RepositoryOutcome::Extracted {
        key,
        images,
        errors,
    }
}

/// Runs both units for one repository, discovery first.
pub async fn process_repository(
    gateway: &dyn RepositoryGateway,
    repository: &RepositoryRef,
) -> RepositoryOutcome {
    let span = info_span!(
        "repository",
        url = %repository.url,
        revision = %repository.revision
    );

    async {
        let discovered = discovery_unit(gateway, repository).await;
        extraction_unit(gateway, discovered).await
    }
    .instrument(span)
    .await
}
