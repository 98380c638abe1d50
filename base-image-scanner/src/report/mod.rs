//! The extraction report returned for a batch of repositories.

mod outcome;

pub use outcome::RepositoryOutcome;

use crate::extraction::{FileErrors, FileImages};
use serde::Serialize;
use std::collections::BTreeMap;

/// Why a repository has an entry in [`ExtractionReport::errors`].
///
/// Serialized untagged: a discovery failure is a plain string and an
/// extraction failure is an object keyed by file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FailureDetail {
    /// No files could be listed.
    Discovery(String),

    /// Some candidate files failed; the rest are in `data`.
    Extraction(FileErrors),
}

/// Images in use per repository, with a per-repository error log.
///
/// A repository that failed discovery appears only in `errors`. A repository
/// whose extraction partially failed appears in both maps: the files that
/// succeeded in `data`, the ones that failed in `errors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    /// Images per Dockerfile path, per repository key.
    pub data: BTreeMap<String, FileImages>,

    /// Failures per repository key.
    pub errors: BTreeMap<String, FailureDetail>,
}

impl ExtractionReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a report from outcomes, recording them in order.
    #[must_use]
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = RepositoryOutcome>) -> Self {
        let mut report = Self::new();
        for outcome in outcomes {
            report.record(outcome);
        }
        report
    }

    /// Merges one repository's outcome into the report.
    ///
    /// A later outcome for the same key replaces the earlier one.
    pub fn record(&mut self, outcome: RepositoryOutcome) {
        match outcome {
            RepositoryOutcome::DiscoveryFailed { key, error } => {
                self.data.remove(&key);
                self.errors.insert(key, FailureDetail::Discovery(error));
            }
            RepositoryOutcome::Extracted {
                key,
                images,
                errors,
            } => {
                if errors.is_empty() {
                    self.errors.remove(&key);
                } else {
                    self.errors
                        .insert(key.clone(), FailureDetail::Extraction(errors));
                }
                self.data.insert(key, images);
            }
        }
    }

    /// Returns true if any repository recorded a failure.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
