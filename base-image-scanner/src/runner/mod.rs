//! Orchestrates a full scan: settings, repository list, extraction, summary.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::{load_settings_with, ScannerSettings};
use crate::extractor::{build_extractor, ExtractorService};
use crate::gateway::{GithubGateway, RepositoryGateway};
use crate::report::ExtractionReport;
use crate::repository::fetch_repository_list;
use crate::summary::RunSummary;
use tracing::{info, warn};

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Images in use and per-repository failures.
    pub report: ExtractionReport,
    /// Counts derived from the report.
    pub summary: RunSummary,
}

/// Runs the scanner against a repository gateway.
pub struct Runner {
    settings: ScannerSettings,
    gateway: Box<dyn RepositoryGateway>,
    extractor: Box<dyn ExtractorService>,
}

impl Runner {
    /// Loads settings and builds a GitHub-backed runner.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the settings are invalid or the GitHub
    /// client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        info!(path = %config.config_path().display(), "Loading settings");
        let settings = load_settings_with(config.config_path(), config.overrides().clone())?;
        let gateway = GithubGateway::from_settings(
            settings.github_token.as_deref(),
            settings.github_api_url.as_deref(),
        )?;
        Self::with_gateway(settings, Box::new(gateway))
    }

    /// Builds a runner over an existing gateway.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] if the selected strategy cannot be built.
    pub fn with_gateway(
        settings: ScannerSettings,
        gateway: Box<dyn RepositoryGateway>,
    ) -> Result<Self, RunnerError> {
        let extractor = build_extractor(&settings)?;
        Ok(Self {
            settings,
            gateway,
            extractor,
        })
    }

    /// Loads the repository list and extracts images from every repository.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::RepositoryList`] if the list cannot be loaded.
    /// Failures of individual repositories are reported, not returned.
    pub async fn run(&self) -> Result<RunOutput, RunnerError> {
        let repositories = fetch_repository_list(&self.settings.repository_list_url).await?;

        if repositories.is_empty() {
            warn!("No repositories found in repository list");
        }

        info!(
            count = repositories.len(),
            extractor = self.extractor.name(),
            "Scanning repositories"
        );
        let report = self
            .extractor
            .extract_images_from(&repositories, self.gateway.as_ref())
            .await;
        let summary = RunSummary::from_report(repositories.len(), &report);

        info!(
            repositories = summary.repositories_scanned,
            images = summary.distinct_images,
            failures = summary.discovery_failures + summary.partial_failures,
            "Scan complete"
        );
        Ok(RunOutput { report, summary })
    }
}
