//! Base image extraction from Dockerfiles.
//!
//! Each candidate file is fetched and parsed on its own; a failing file is
//! recorded and never stops its siblings.

mod error;

pub use error::ExtractionError;

use crate::gateway::RepositoryGateway;
use crate::recipe::{RecipeStatements, FROM};
use crate::repository::OwnerName;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Images extracted per Dockerfile path.
pub type FileImages = BTreeMap<String, Vec<String>>;

/// Error messages per Dockerfile path.
pub type FileErrors = BTreeMap<String, String>;

/// Returns the base images declared by parsed statements.
///
/// Takes the first argument of every `FROM` statement in file order.
/// Statements without arguments are dropped. Stage aliases (`as base`) are
/// not part of the image.
#[must_use]
pub fn images_from_statements(statements: &RecipeStatements) -> Vec<String> {
    statements
        .get(FROM)
        .iter()
        .filter_map(|arguments| arguments.first().cloned())
        .collect()
}

/// Fetches a Dockerfile and returns the base images it declares.
///
/// # Errors
///
/// Returns [`ExtractionError`] if the gateway cannot fetch the file.
pub async fn extract_images(
    gateway: &dyn RepositoryGateway,
    owner_name: &OwnerName,
    revision: &str,
    path: &str,
) -> Result<Vec<String>, ExtractionError> {
    let statements = gateway
        .fetch_and_parse_file(&owner_name.owner, &owner_name.name, revision, path)
        .await
        .map_err(|source| ExtractionError {
            path: path.to_string(),
            source,
        })?;

    let images = images_from_statements(&statements);
    debug!(repo = %owner_name, path, count = images.len(), "Extracted images");
    Ok(images)
}

/// Extracts images from every path, isolating failures per file.
///
/// Returns the images of the files that succeeded and the error messages of
/// the files that failed. A path appears in at most one of the two maps.
pub async fn extract_from_paths(
    gateway: &dyn RepositoryGateway,
    owner_name: &OwnerName,
    revision: &str,
    paths: &[String],
) -> (FileImages, FileErrors) {
    let mut images = FileImages::new();
    let mut errors = FileErrors::new();

    for path in paths {
        match extract_images(gateway, owner_name, revision, path).await {
            Ok(found) => {
                errors.remove(path);
                images.insert(path.clone(), found);
            }
            Err(e) => {
                warn!(repo = %owner_name, path = %path, error = %e, "Failed to extract images");
                images.remove(path);
                errors.insert(path.clone(), e.source.to_string());
            }
        }
    }

    (images, errors)
}
