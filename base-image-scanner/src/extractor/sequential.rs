//! One repository at a time, in input order.

use super::units::process_repository;
use super::ExtractorService;
use crate::gateway::RepositoryGateway;
use crate::report::ExtractionReport;
use crate::repository::RepositoryRef;
use async_trait::async_trait;
use tracing::info;

/// Processes repositories one after another.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExtractor;

#[async_trait]
impl ExtractorService for SequentialExtractor {
    async fn extract_images_from(
        &self,
        repositories: &[RepositoryRef],
        gateway: &dyn RepositoryGateway,
    ) -> ExtractionReport {
        info!(count = repositories.len(), "Extracting images sequentially");

        let mut report = ExtractionReport::new();
        for repository in repositories {
            report.record(process_repository(gateway, repository).await);
        }
        report
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}
