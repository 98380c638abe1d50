//! Run summary types.

use crate::report::{ExtractionReport, FailureDetail};
use std::collections::BTreeSet;

/// Summary of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of repositories in the repository list.
    pub repositories_scanned: usize,

    /// Number of repositories that reached the extraction stage.
    pub repositories_with_data: usize,

    /// Number of repositories that failed at the discovery stage.
    pub discovery_failures: usize,

    /// Number of repositories where some Dockerfiles failed.
    pub partial_failures: usize,

    /// Number of Dockerfiles whose images were extracted.
    pub files_extracted: usize,

    /// Number of Dockerfiles that failed to extract.
    pub files_failed: usize,

    /// Number of distinct base images across all repositories.
    pub distinct_images: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(repositories_scanned: usize) -> Self {
        Self {
            repositories_scanned,
            ..Default::default()
        }
    }

    /// Builds a summary from a finished report.
    #[must_use]
    pub fn from_report(repositories_scanned: usize, report: &ExtractionReport) -> Self {
        let mut summary = Self::new(repositories_scanned);
        summary.record_report(report);
        summary
    }

    /// Updates the summary with the contents of a report.
    pub fn record_report(&mut self, report: &ExtractionReport) {
        let mut images = BTreeSet::new();

        for files in report.data.values() {
            self.repositories_with_data += 1;
            self.files_extracted += files.len();
            images.extend(files.values().flatten().map(String::as_str));
        }

        for detail in report.errors.values() {
            match detail {
                FailureDetail::Discovery(_) => self.discovery_failures += 1,
                FailureDetail::Extraction(files) => {
                    self.partial_failures += 1;
                    self.files_failed += files.len();
                }
            }
        }

        self.distinct_images += images.len();
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.discovery_failures > 0 || self.partial_failures > 0
    }

    /// Returns true if every repository and file was processed.
    #[must_use]
    pub fn all_success(&self) -> bool {
        !self.has_failures()
    }
}
