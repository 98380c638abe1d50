//! Orchestrates discovery and extraction over a batch of repositories.
//!
//! Every repository goes through a discovery unit and then an extraction
//! unit (see [`units`]). Strategies only decide how repositories are
//! scheduled; the report they produce for the same input is the same.

mod concurrent;
mod sequential;
pub mod units;

pub use concurrent::ConcurrentExtractor;
pub use sequential::SequentialExtractor;

use crate::config::{ConfigError, ExtractorKind, ScannerSettings};
use crate::gateway::RepositoryGateway;
use crate::report::ExtractionReport;
use crate::repository::RepositoryRef;
use async_trait::async_trait;
use std::num::NonZeroUsize;

/// Extracts base images from a batch of repositories.
///
/// Per-repository and per-file failures end up in the returned report; this
/// never fails as a whole.
#[async_trait]
pub trait ExtractorService: Send + Sync {
    /// Runs the pipeline over `repositories` and returns the report.
    async fn extract_images_from(
        &self,
        repositories: &[RepositoryRef],
        gateway: &dyn RepositoryGateway,
    ) -> ExtractionReport;

    /// Short name of the strategy, for logging.
    fn name(&self) -> &'static str;
}

/// Builds the extractor selected by the settings.
///
/// # Errors
///
/// Returns [`ConfigError::ValidationError`] if the concurrent strategy is
/// selected with a pool size of zero.
pub fn build_extractor(settings: &ScannerSettings) -> Result<Box<dyn ExtractorService>, ConfigError> {
    match settings.extractor {
        ExtractorKind::Sequential => Ok(Box::new(SequentialExtractor)),
        ExtractorKind::Concurrent => {
            let workers = NonZeroUsize::new(settings.worker_pool_size).ok_or_else(|| {
                ConfigError::ValidationError {
                    path: "worker-pool-size".to_string(),
                    message: "worker-pool-size must be at least 1".to_string(),
                }
            })?;
            Ok(Box::new(ConcurrentExtractor::new(workers)))
        }
    }
}
