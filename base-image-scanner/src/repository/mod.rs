//! Repository references, URL resolution and the repository list.

mod error;
mod list;
mod resolve;

pub use error::{RepositoryError, RepositoryListError};
pub use list::{fetch_repository_list, parse_repository_list};
pub use resolve::{resolve_owner_name, OwnerName};

use serde::Serialize;

/// A repository pinned to a revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RepositoryRef {
    /// Repository URL as written in the repository list.
    pub url: String,

    /// Opaque revision identifier (usually a commit hash).
    pub revision: String,
}

impl RepositoryRef {
    /// Creates a new repository reference.
    pub fn new(url: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            revision: revision.into(),
        }
    }

    /// Returns the report key, `"{url}:{revision}"`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}:{}", self.url, self.revision)
    }

    /// Resolves the owner and name of this repository.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::MalformedUrl`] if the URL has fewer than
    /// two path segments.
    pub fn owner_name(&self) -> Result<OwnerName, RepositoryError> {
        resolve_owner_name(&self.url)
    }
}
