#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod discovery;
pub mod extraction;
pub mod extractor;
pub mod gateway;
pub mod rate_limit;
pub mod recipe;
pub mod report;
pub mod repository;
pub mod runner;
pub mod summary;

pub use config::{
    default_config_path, load_settings, load_settings_with, ConfigError, ExtractorKind,
    ScannerSettings, SettingsOverrides,
};
pub use discovery::{
    discover_dockerfiles, discover_repository, is_dockerfile, search_for_dockerfiles,
    DiscoveredRepository, DiscoveryError,
};
pub use extraction::{
    extract_from_paths, extract_images, images_from_statements, ExtractionError, FileErrors,
    FileImages,
};
pub use extractor::{build_extractor, ConcurrentExtractor, ExtractorService, SequentialExtractor};
pub use gateway::{GatewayError, GithubGateway, RepositoryGateway};
pub use rate_limit::{check_core_rate_limit, ensure_core_rate_limit, wait_if_needed, RateLimitInfo};
pub use recipe::{parse_recipe, RecipeStatements};
pub use report::{ExtractionReport, FailureDetail, RepositoryOutcome};
pub use repository::{
    fetch_repository_list, parse_repository_list, resolve_owner_name, OwnerName, RepositoryError,
    RepositoryListError, RepositoryRef,
};
pub use runner::{RunOutput, Runner, RunnerConfig, RunnerError};
pub use summary::RunSummary;
