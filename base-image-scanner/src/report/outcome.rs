//! Terminal outcome of one repository's run through the pipeline.

use crate::extraction::{FileErrors, FileImages};

/// How a repository left the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryOutcome {
    /// Owner/name resolution or file listing failed; nothing was extracted.
    DiscoveryFailed {
        /// Report key of the repository.
        key: String,
        /// Error message.
        error: String,
    },

    /// Discovery succeeded and every candidate file was attempted.
    Extracted {
        /// Report key of the repository.
        key: String,
        /// Images of the files that succeeded.
        images: FileImages,
        /// Error messages of the files that failed.
        errors: FileErrors,
    },
}
