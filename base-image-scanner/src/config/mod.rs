//! Scanner settings loading.
//!
//! Settings come from a TOML file, with overrides from the command line or
//! environment applied on top. Everything is validated here, before any
//! repository is touched.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{ExtractorKind, ScannerSettings, SettingsOverrides};

use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

/// Environment variable naming the settings file.
pub const CONFIG_PATH_ENVVAR: &str = "SCANNER_CONFIG_PATH";

/// Settings file used when [`CONFIG_PATH_ENVVAR`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

/// Returns the settings file path from the environment, or the default.
#[must_use]
pub fn default_config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENVVAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Parses and validates settings from a TOML file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read, parsed or validated.
pub fn load_settings(path: &Path) -> Result<ScannerSettings, ConfigError> {
    load_settings_with(path, SettingsOverrides::default())
}

/// Loads settings from `path` and applies `overrides`.
///
/// A missing file is tolerated when the overrides provide the repository
/// list; the defaults are used for everything else.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or parsed, or the
/// merged settings fail validation.
pub fn load_settings_with(
    path: &Path,
    overrides: SettingsOverrides,
) -> Result<ScannerSettings, ConfigError> {
    let mut settings: ScannerSettings = if path.exists() {
        debug!(path = %path.display(), "Loading settings");
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?
    } else if overrides.repository_list_url.is_some() {
        debug!(path = %path.display(), "Settings file not found, using overrides");
        ScannerSettings::default()
    } else {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    };

    settings.apply(overrides);
    validate_settings(&settings, path)?;

    info!(
        extractor = %settings.extractor,
        workers = settings.worker_pool_size,
        authenticated = settings.github_token.is_some(),
        "Loaded settings"
    );
    Ok(settings)
}

/// Validates merged settings.
fn validate_settings(settings: &ScannerSettings, path: &Path) -> Result<(), ConfigError> {
    let path_str = path.display().to_string();

    if settings.repository_list_url.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            path: path_str,
            message: "repository-list-url must not be empty".to_string(),
        });
    }

    if settings.worker_pool_size == 0 {
        return Err(ConfigError::ValidationError {
            path: path_str,
            message: "worker-pool-size must be at least 1".to_string(),
        });
    }

    if let Some(api_url) = &settings.github_api_url {
        if Url::parse(api_url).is_err() {
            return Err(ConfigError::ValidationError {
                path: path_str,
                message: format!("github-api-url is not a valid URL: {api_url}"),
            });
        }
    }

    if matches!(&settings.github_token, Some(token) if token.trim().is_empty()) {
        return Err(ConfigError::ValidationError {
            path: path_str,
            message: "github-token must not be empty when set".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_settings(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_settings() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(
            temp.path(),
            r#"
repository-list-url = "https://example.com/repositories.txt"
github-token = "ghp_test"
extractor = "concurrent"
worker-pool-size = 8
"#,
        );

        let settings = load_settings(&path).unwrap();

        assert_eq!(
            settings.repository_list_url,
            "https://example.com/repositories.txt"
        );
        assert_eq!(settings.github_token.as_deref(), Some("ghp_test"));
        assert_eq!(settings.extractor, ExtractorKind::Concurrent);
        assert_eq!(settings.worker_pool_size, 8);
    }

    #[test]
    fn test_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(temp.path(), "repository-list-url = \"repos.txt\"\n");

        let settings = load_settings(&path).unwrap();

        assert_eq!(settings.extractor, ExtractorKind::Sequential);
        assert_eq!(settings.worker_pool_size, 1);
        assert!(settings.github_token.is_none());
        assert!(settings.github_api_url.is_none());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(
            temp.path(),
            "repository-list-url = \"repos.txt\"\nworker-pool-size = 2\n",
        );

        let settings = load_settings_with(
            &path,
            SettingsOverrides {
                extractor: Some(ExtractorKind::Concurrent),
                worker_pool_size: Some(16),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(settings.repository_list_url, "repos.txt");
        assert_eq!(settings.extractor, ExtractorKind::Concurrent);
        assert_eq!(settings.worker_pool_size, 16);
    }

    #[test]
    fn test_missing_file_with_overrides() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        let settings = load_settings_with(
            &path,
            SettingsOverrides {
                repository_list_url: Some("repos.txt".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(settings.repository_list_url, "repos.txt");
    }

    #[test]
    fn test_missing_file_without_overrides() {
        let temp = TempDir::new().unwrap();
        let result = load_settings(&temp.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }

    #[test]
    fn test_validation_zero_workers() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(
            temp.path(),
            "repository-list-url = \"repos.txt\"\nworker-pool-size = 0\n",
        );

        let result = load_settings(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_validation_missing_repository_list() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(temp.path(), "extractor = \"sequential\"\n");

        let result = load_settings(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_validation_invalid_api_url() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(
            temp.path(),
            "repository-list-url = \"repos.txt\"\ngithub-api-url = \"not a url\"\n",
        );

        let result = load_settings(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_unknown_extractor_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write_settings(
            temp.path(),
            "repository-list-url = \"repos.txt\"\nextractor = \"ThreadedExtractorService\"\n",
        );

        let result = load_settings(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn test_extractor_kind_from_str() {
        assert_eq!("Concurrent".parse::<ExtractorKind>(), Ok(ExtractorKind::Concurrent));
        assert_eq!("sequential".parse::<ExtractorKind>(), Ok(ExtractorKind::Sequential));
        assert!("threaded".parse::<ExtractorKind>().is_err());
    }

    #[test]
    fn test_config_path_from_env() {
        temp_env::with_var(CONFIG_PATH_ENVVAR, Some("/etc/scanner.toml"), || {
            assert_eq!(default_config_path(), PathBuf::from("/etc/scanner.toml"));
        });
        temp_env::with_var_unset(CONFIG_PATH_ENVVAR, || {
            assert_eq!(default_config_path(), PathBuf::from(DEFAULT_CONFIG_PATH));
        });
    }
}
