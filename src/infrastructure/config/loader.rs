//! Environment-backed configuration.
//!
//! Every credential and identifier comes from the environment, matching
//! the GitHub Actions invocation the tool is built for. Loading happens
//! once at process start; a missing required value aborts before any
//! network call is made. No module-level credential state anywhere.

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error types.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or blank.
    #[error("Required environment variable {0} is not set")]
    Missing(&'static str),

    /// `GITHUB_REPOSITORY` is not of the form `owner/repo`.
    #[error("GITHUB_REPOSITORY must be of the form 'owner/repo', got: '{0}'")]
    InvalidRepository(String),

    /// Figment could not extract the configuration.
    #[error("Configuration extraction failed: {0}")]
    Extraction(String),
}

/// Process configuration, extracted from the environment once at startup
/// and passed by reference into each component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub token used for the issue listing (`GITHUB_TOKEN`).
    #[serde(default)]
    pub github_token: String,
    /// Source repository as `owner/repo` (`GITHUB_REPOSITORY`).
    #[serde(default)]
    pub github_repository: String,
    /// Notion integration token (`NOTION_API_KEY`).
    #[serde(default)]
    pub notion_api_key: String,
    /// Notion database the pages live in (`NOTION_DATABASE_ID`).
    #[serde(default)]
    pub notion_database_id: String,
    /// Optional project relation id written into every page (`PROJECT_ID`).
    #[serde(default)]
    pub project_id: Option<String>,
}

impl Config {
    /// Split `github_repository` into `(owner, repo)`.
    pub fn repo_parts(&self) -> Result<(String, String), ConfigError> {
        match self.github_repository.split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok((owner.to_string(), repo.to_string()))
            }
            _ => Err(ConfigError::InvalidRepository(
                self.github_repository.clone(),
            )),
        }
    }
}

/// Environment variables read by [`ConfigLoader::load`], as figment's
/// lowercased key names.
const CONFIG_VARS: [&str; 5] = [
    "github_token",
    "github_repository",
    "notion_api_key",
    "notion_database_id",
    "project_id",
];

/// Configuration loader over the process environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate the configuration.
    ///
    /// Required: `GITHUB_TOKEN`, `GITHUB_REPOSITORY`, `NOTION_API_KEY`,
    /// `NOTION_DATABASE_ID`. Optional: `PROJECT_ID`. A blank value counts
    /// as absent.
    pub fn load() -> Result<Config, ConfigError> {
        let mut config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&CONFIG_VARS))
            .extract()
            .map_err(|e| ConfigError::Extraction(e.to_string()))?;

        // A PROJECT_ID set to the empty string means "no relation".
        config.project_id = config.project_id.filter(|v| !v.is_empty());

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate a configuration after extraction.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.github_token.is_empty() {
            return Err(ConfigError::Missing("GITHUB_TOKEN"));
        }
        if config.github_repository.is_empty() {
            return Err(ConfigError::Missing("GITHUB_REPOSITORY"));
        }
        if config.notion_api_key.is_empty() {
            return Err(ConfigError::Missing("NOTION_API_KEY"));
        }
        if config.notion_database_id.is_empty() {
            return Err(ConfigError::Missing("NOTION_DATABASE_ID"));
        }
        config.repo_parts()?;
        Ok(())
    }
}
