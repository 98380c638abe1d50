//! Runner error types.

/// Errors that stop a run before any repository is processed.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Settings loading and validation errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Repository list could not be loaded.
    #[error(transparent)]
    RepositoryList(#[from] crate::repository::RepositoryListError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
