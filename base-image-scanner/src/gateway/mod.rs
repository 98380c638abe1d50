//! Remote repository access.
//!
//! The extraction pipeline talks to repositories only through
//! [`RepositoryGateway`], so it can run against GitHub or an in-memory stub.

mod error;
mod github;

pub use error::GatewayError;
pub use github::GithubGateway;

use crate::recipe::{parse_recipe, RecipeStatements};
use async_trait::async_trait;

/// Read access to repository trees at a revision.
///
/// Implementations must be safe to share between concurrent extraction
/// units. Retries, if any, are the implementation's own business.
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// Lists the file paths of a repository at a revision.
    async fn list_files(
        &self,
        owner: &str,
        name: &str,
        revision: &str,
    ) -> Result<Vec<String>, GatewayError>;

    /// Fetches the raw text of a file at a revision.
    async fn fetch_file(
        &self,
        owner: &str,
        name: &str,
        revision: &str,
        path: &str,
    ) -> Result<String, GatewayError>;

    /// Fetches a file and parses it into Dockerfile statements.
    async fn fetch_and_parse_file(
        &self,
        owner: &str,
        name: &str,
        revision: &str,
        path: &str,
    ) -> Result<RecipeStatements, GatewayError> {
        let content = self.fetch_file(owner, name, revision, path).await?;
        Ok(parse_recipe(&content))
    }
}
