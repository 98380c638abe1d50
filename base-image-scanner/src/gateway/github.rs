//! GitHub-backed repository gateway.

use super::{GatewayError, RepositoryGateway};
use crate::rate_limit::ensure_core_rate_limit;
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Deserialize;
use tracing::{debug, warn};

/// Tree entry type for files.
const BLOB_TYPE: &str = "blob";

/// Response of the Git Trees API.
#[derive(Debug, Deserialize)]
struct GitTree {
    tree: Vec<TreeEntry>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Debug, Deserialize)]
struct TreeEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

/// Repository gateway backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubGateway {
    octocrab: Octocrab,
}

impl GithubGateway {
    /// Wraps an existing GitHub client.
    pub fn new(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    /// Builds a client from an optional token and API base URI.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URI is invalid or the client cannot be built.
    pub fn from_settings(token: Option<&str>, base_uri: Option<&str>) -> Result<Self, octocrab::Error> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }
        if let Some(base_uri) = base_uri {
            builder = builder.base_uri(base_uri)?;
        }
        Ok(Self::new(builder.build()?))
    }
}

#[async_trait]
impl RepositoryGateway for GithubGateway {
    /// Lists files through the Git Trees API.
    ///
    /// The rate limit is checked first, but a failed check is only logged.
    /// Truncated listings are accepted as-is: the subtrees GitHub omitted
    /// are not fetched.
    async fn list_files(
        &self,
        owner: &str,
        name: &str,
        revision: &str,
    ) -> Result<Vec<String>, GatewayError> {
        let repo = format!("{owner}/{name}");

        // GitHub Enterprise answers 404 here when rate limiting is disabled.
        if let Err(e) = ensure_core_rate_limit(&self.octocrab).await {
            warn!(
                repo = %repo,
                error = %GatewayError::from(e),
                "Rate limit check unavailable, continuing without it"
            );
        }

        let route = format!("/repos/{owner}/{name}/git/trees/{revision}");
        let tree: GitTree = self
            .octocrab
            .get(route, Some(&[("recursive", "1")]))
            .await?;

        if tree.truncated {
            warn!(
                repo = %repo,
                revision,
                entries = tree.tree.len(),
                "Tree listing was truncated by GitHub, some files will not be scanned"
            );
        }

        let paths: Vec<String> = tree
            .tree
            .into_iter()
            .filter(|entry| entry.kind == BLOB_TYPE)
            .map(|entry| entry.path)
            .collect();

        debug!(repo = %repo, count = paths.len(), "Listed files");
        Ok(paths)
    }

    async fn fetch_file(
        &self,
        owner: &str,
        name: &str,
        revision: &str,
        path: &str,
    ) -> Result<String, GatewayError> {
        let content = self
            .octocrab
            .repos(owner, name)
            .get_content()
            .path(path)
            .r#ref(revision)
            .send()
            .await?;

        let Some(item) = content.items.first() else {
            return Err(GatewayError::NotFound {
                path: path.to_string(),
            });
        };

        item.decoded_content().ok_or_else(|| GatewayError::Decode {
            path: path.to_string(),
            message: "content is missing or not valid base64 text".to_string(),
        })
    }
}
