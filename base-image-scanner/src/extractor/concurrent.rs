//! Bounded concurrent extraction.

use super::units::process_repository;
use super::ExtractorService;
use crate::gateway::RepositoryGateway;
use crate::report::{ExtractionReport, RepositoryOutcome};
use crate::repository::RepositoryRef;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use futures::FutureExt;
use std::num::NonZeroUsize;
use tracing::info;

/// Processes up to `workers` repositories at once.
///
/// Outcomes are collected once every repository has finished and only then
/// merged into the report, in input order.
#[derive(Debug, Clone, Copy)]
pub struct ConcurrentExtractor {
    workers: NonZeroUsize,
}

impl ConcurrentExtractor {
    /// Creates an extractor with the given pool size.
    pub fn new(workers: NonZeroUsize) -> Self {
        Self { workers }
    }

    /// Returns the pool size.
    pub fn workers(&self) -> usize {
        self.workers.get()
    }
}

#[async_trait]
impl ExtractorService for ConcurrentExtractor {
    async fn extract_images_from(
        &self,
        repositories: &[RepositoryRef],
        gateway: &dyn RepositoryGateway,
    ) -> ExtractionReport {
        info!(
            count = repositories.len(),
            workers = self.workers(),
            "Extracting images concurrently"
        );

        // Built before streaming; a borrowing `map` closure here does not
        // satisfy the `Send` bound async-trait puts on this future.
        let pending: Vec<_> = repositories
            .iter()
            .map(|repository| process_repository(gateway, repository).boxed())
            .collect();

        let outcomes: Vec<RepositoryOutcome> = stream::iter(pending)
            .buffered(self.workers())
            .collect()
            .await;

        ExtractionReport::from_outcomes(outcomes)
    }

    fn name(&self) -> &'static str {
        "concurrent"
    }
}
