//! Configuration loading and parsing for `tagnotes.toml` files.
use log::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};
use tokio::fs;

use crate::{
    changelog::request::{
        ChangelogRequest, DEFAULT_TAG_PREFIX, DEFAULT_WINDOW_SIZE,
    },
    error::{Result, TagnotesError},
    git::runner::DEFAULT_GIT_TIMEOUT,
};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "tagnotes.toml";

/// Changelog rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)] // Use default for missing fields
pub struct ChangelogConfig {
    /// Prefix each entry with the commit date (default: false)
    pub show_date: bool,
    /// Append the commit author to each entry (default: false)
    pub show_author: bool,
    /// Include commit message bodies under each entry (default: false)
    pub include_message_body: bool,
    /// Number of recent commits listed when no tag marks the current
    /// version. 0 lists all history (default: 30)
    pub window_size: usize,
    /// Seconds to wait for each git command (default: 10)
    pub git_timeout_secs: u64,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            show_date: false,
            show_author: false,
            include_message_body: false,
            window_size: DEFAULT_WINDOW_SIZE,
            git_timeout_secs: DEFAULT_GIT_TIMEOUT.as_secs(),
        }
    }
}

/// Root configuration structure for `tagnotes.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Prefix of release tags, e.g. "v" for "v1.2.0" (default: "v")
    pub release_prefix: String,
    /// Changelog generation settings.
    pub changelog: ChangelogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            release_prefix: DEFAULT_TAG_PREFIX.to_string(),
            changelog: ChangelogConfig::default(),
        }
    }
}

impl Config {
    /// Load `tagnotes.toml` from `repo_path`, using defaults when the file
    /// doesn't exist.
    pub async fn load(repo_path: &Path) -> Result<Self> {
        let path = repo_path.join(DEFAULT_CONFIG_FILE);

        if !path.exists() {
            info!("repository configuration not found: using default");
            return Ok(Self::default());
        }

        debug!("loading configuration from {}", path.display());
        let content = fs::read_to_string(&path).await?;
        Self::parse(&content)
    }

    /// Parse and validate configuration content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.changelog.git_timeout_secs == 0 {
            return Err(TagnotesError::invalid_config(
                "changelog.git_timeout_secs must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Changelog request for releasing `current_version` under this
    /// configuration.
    pub fn request_for(&self, current_version: &str) -> ChangelogRequest {
        ChangelogRequest {
            show_date: self.changelog.show_date,
            show_author: self.changelog.show_author,
            include_body: self.changelog.include_message_body,
            tag_prefix: self.release_prefix.clone(),
            current_version: current_version.to_string(),
            window_size: self.changelog.window_size,
            git_timeout: Duration::from_secs(self.changelog.git_timeout_secs),
        }
    }
}
