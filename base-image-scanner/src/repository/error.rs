//! Repository reference error types.

use thiserror::Error;

/// Errors that can occur while resolving a repository URL.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The URL does not carry an owner and a repository name.
    #[error("Malformed repository URL '{url}': expected at least two path segments")]
    MalformedUrl { url: String },
}

/// Errors that can occur while loading the repository list.
#[derive(Debug, Error)]
pub enum RepositoryListError {
    /// Failed to download the list.
    #[error("Failed to fetch repository list from '{url}': {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failed to read the list from disk.
    #[error("Failed to read repository list '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
