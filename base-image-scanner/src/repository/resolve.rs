//! Owner/name resolution for repository URLs.

use super::error::RepositoryError;
use serde::Serialize;
use std::fmt;
use url::Url;

/// Owner and name of a repository, as used by the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OwnerName {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name, without a `.git` suffix.
    pub name: String,
}

impl fmt::Display for OwnerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Resolves the owner and name of a repository from its URL.
///
/// Takes the last two path segments of the URL, stripping a trailing
/// `.git` from the name. URLs without a scheme (`github.com/owner/name`)
/// are read as if they were `https://`.
///
/// # Errors
///
/// Returns [`RepositoryError::MalformedUrl`] when the URL cannot be parsed
/// or has fewer than two path segments.
///
/// # Examples
///
/// ```
/// use base_image_scanner::resolve_owner_name;
///
/// let resolved = resolve_owner_name("https://github.com/django/django.git").unwrap();
/// assert_eq!(resolved.owner, "django");
/// assert_eq!(resolved.name, "django");
/// ```
pub fn resolve_owner_name(url: &str) -> Result<OwnerName, RepositoryError> {
    let malformed = || RepositoryError::MalformedUrl {
        url: url.to_string(),
    };

    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{url}")).map_err(|_| malformed())?
        }
        Err(_) => return Err(malformed()),
    };

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    let [.., owner, name] = segments.as_slice() else {
        return Err(malformed());
    };

    let name = name.strip_suffix(".git").unwrap_or(*name);
    if name.is_empty() {
        return Err(malformed());
    }

    Ok(OwnerName {
        owner: (*owner).to_string(),
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_owner_and_name() {
        let cases = [
            ("https://github.com/django/django", "django", "django"),
            ("https://github.com/django/django.git", "django", "django"),
            ("https://github.com/org/test", "org", "test"),
            ("https://github.com/org/test/", "org", "test"),
            ("github.com/app-sre/qontract-reconcile.git", "app-sre", "qontract-reconcile"),
        ];

        for (url, owner, name) in cases {
            let resolved = resolve_owner_name(url).unwrap();
            assert_eq!(resolved.owner, owner, "owner of {url}");
            assert_eq!(resolved.name, name, "name of {url}");
        }
    }

    #[test]
    fn takes_last_two_segments_of_deep_paths() {
        let resolved = resolve_owner_name("https://git.example.com/group/sub/project.git").unwrap();
        assert_eq!(resolved.to_string(), "sub/project");
    }

    #[test]
    fn rejects_urls_without_two_segments() {
        for url in ["https://github.com/django", "https://google.com", "", "https://"] {
            let result = resolve_owner_name(url);
            assert!(
                matches!(result, Err(RepositoryError::MalformedUrl { .. })),
                "{url} should be rejected"
            );
        }
    }
}
