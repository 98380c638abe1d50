//! Repository list parsing and loading.
//!
//! The list is newline-delimited, one `"<url> <revision>"` pair per line.

use super::error::RepositoryListError;
use super::resolve::resolve_owner_name;
use super::RepositoryRef;
use tracing::{debug, info};

/// Length of a full hex commit hash.
const REVISION_LENGTH: usize = 40;

/// Parses a repository list into repository references.
///
/// A line is accepted only when it is exactly `"<url> <revision>"` with a
/// single separating space, the URL is `http(s)://` and resolves to an
/// owner/name pair, and the revision is a 40-character hex hash. Anything
/// else is skipped.
pub fn parse_repository_list(content: &str) -> Vec<RepositoryRef> {
    content
        .lines()
        .filter_map(|line| {
            let parsed = parse_line(line);
            if parsed.is_none() && !line.trim().is_empty() {
                debug!(line, "Skipping malformed repository list line");
            }
            parsed
        })
        .collect()
}

fn parse_line(line: &str) -> Option<RepositoryRef> {
    let (url, revision) = line.split_once(' ')?;

    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return None;
    }

    if revision.len() != REVISION_LENGTH || !revision.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    resolve_owner_name(url).ok()?;

    Some(RepositoryRef::new(url, revision))
}

/// Loads the repository list from a URL or a local path.
///
/// `http://` and `https://` sources are downloaded; anything else is read
/// from disk.
///
/// # Errors
///
/// Returns [`RepositoryListError`] if the download or read fails.
pub async fn fetch_repository_list(source: &str) -> Result<Vec<RepositoryRef>, RepositoryListError> {
    let content = if source.starts_with("https://") || source.starts_with("http://") {
        download(source).await.map_err(|e| RepositoryListError::Http {
            url: source.to_string(),
            source: e,
        })?
    } else {
        tokio::fs::read_to_string(source)
            .await
            .map_err(|e| RepositoryListError::Io {
                path: source.to_string(),
                source: e,
            })?
    };

    let repositories = parse_repository_list(&content);
    info!(source, count = repositories.len(), "Loaded repository list");
    Ok(repositories)
}

async fn download(url: &str) -> Result<String, reqwest::Error> {
    reqwest::get(url).await?.error_for_status()?.text().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const REPOSITORY_LIST: &str = "\
https://github.com/app-sre/qontract-reconcile.git 30af65af14a2dce962df923446afff24dd8f123e
https://github.com/app-sre/container-images.git c260deaf135fc0efaab365ea234a5b86b3ead404
https://github.com/some-user/some-repo c260deaf135fc0efaab365ea234a5b86b3ead404
https://google.com c260deaf135fc0efaab365ea234a5b86b3ead404
https://github.com/some-org/some-repo 
c260deaf135fc0efaab365ea234a5b86b3ead404
github.com/ c260deaf135fc0efaab365ea234a5b86b3ead404
    https://github.com/another-user/some-repo     c260deaf135fc0efaab365ea234a5b86b3ead404    
https://github.com/another-user/some-repo     c260deaf135fc0efaab365ea234a5b86b3ead404
";

    #[test]
    fn keeps_only_well_formed_lines() {
        let repositories = parse_repository_list(REPOSITORY_LIST);

        assert_eq!(repositories.len(), 3);
        for (repository, line) in repositories.iter().zip(REPOSITORY_LIST.lines()) {
            let mut parts = line.split_whitespace();
            assert_eq!(Some(repository.url.as_str()), parts.next());
            assert_eq!(Some(repository.revision.as_str()), parts.next());
        }
    }

    #[test]
    fn rejects_short_revisions() {
        let repositories = parse_repository_list("https://github.com/org/repo abc123\n");
        assert!(repositories.is_empty());
    }

    #[tokio::test]
    async fn reads_list_from_local_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repositories.txt");
        fs::write(&path, REPOSITORY_LIST).unwrap();

        let repositories = fetch_repository_list(path.to_str().unwrap()).await.unwrap();

        assert_eq!(repositories.len(), 3);
        assert_eq!(repositories[0].url, "https://github.com/app-sre/qontract-reconcile.git");
    }

    #[tokio::test]
    async fn missing_local_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.txt");

        let result = fetch_repository_list(path.to_str().unwrap()).await;
        assert!(matches!(result, Err(RepositoryListError::Io { .. })));
    }
}
