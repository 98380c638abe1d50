//! Scanner settings deserialization.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Scheduling strategy used to process the repository list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorKind {
    /// One repository at a time, in list order.
    #[default]
    Sequential,

    /// A bounded pool of repositories in flight.
    Concurrent,
}

impl ExtractorKind {
    /// Returns the kind as written in settings files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Concurrent => "concurrent",
        }
    }
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "concurrent" => Ok(Self::Concurrent),
            other => Err(format!(
                "unknown extractor '{other}', expected 'sequential' or 'concurrent'"
            )),
        }
    }
}

/// Settings parsed from a `config.toml` file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScannerSettings {
    /// URL or local path of the repository list.
    #[serde(default)]
    pub repository_list_url: String,

    /// GitHub personal access token.
    #[serde(default)]
    pub github_token: Option<String>,

    /// GitHub API base URI, for GitHub Enterprise.
    #[serde(default)]
    pub github_api_url: Option<String>,

    /// Scheduling strategy.
    #[serde(default)]
    pub extractor: ExtractorKind,

    /// Maximum repositories in flight for the concurrent strategy.
    #[serde(default = "default_worker_pool_size")]
    pub worker_pool_size: usize,
}

pub(crate) fn default_worker_pool_size() -> usize {
    1
}

impl ScannerSettings {
    /// Creates settings with defaults for everything but the repository list.
    pub fn new(repository_list_url: impl Into<String>) -> Self {
        Self {
            repository_list_url: repository_list_url.into(),
            github_token: None,
            github_api_url: None,
            extractor: ExtractorKind::default(),
            worker_pool_size: default_worker_pool_size(),
        }
    }

    /// Applies overrides on top of these settings.
    pub fn apply(&mut self, overrides: SettingsOverrides) {
        if let Some(url) = overrides.repository_list_url {
            self.repository_list_url = url;
        }
        if let Some(token) = overrides.github_token {
            self.github_token = Some(token);
        }
        if let Some(api_url) = overrides.github_api_url {
            self.github_api_url = Some(api_url);
        }
        if let Some(extractor) = overrides.extractor {
            self.extractor = extractor;
        }
        if let Some(size) = overrides.worker_pool_size {
            self.worker_pool_size = size;
        }
    }
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Values that take precedence over the settings file (CLI flags, env vars).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    /// Overrides `repository-list-url`.
    pub repository_list_url: Option<String>,

    /// Overrides `github-token`.
    pub github_token: Option<String>,

    /// Overrides `github-api-url`.
    pub github_api_url: Option<String>,

    /// Overrides `extractor`.
    pub extractor: Option<ExtractorKind>,

    /// Overrides `worker-pool-size`.
    pub worker_pool_size: Option<usize>,
}
