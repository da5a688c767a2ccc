use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::errors::ConfigError;
use crate::language_utils::default_supported_languages;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings. A `Config` is built once at
/// startup and handed to the pipeline; nothing mutates it afterwards.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// URL of the text-generation endpoint
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,

    /// Bearer credential sent with every live request
    #[serde(default)]
    pub api_key: String,

    /// Return canned responses instead of calling the endpoint
    #[serde(default)]
    pub enable_mocks: bool,

    /// Maximum number of characters accepted in a submission
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,

    /// Supported target languages, key -> display name
    #[serde(default = "default_supported_languages")]
    pub supported_languages: BTreeMap<String, String>,

    /// Model used for the translation stage
    #[serde(default = "default_translation_model")]
    pub translation_model: String,

    /// Model used for the evaluation stage
    #[serde(default = "default_judge_model")]
    pub judge_model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching `log` filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_api_endpoint() -> String {
    "http://localhost:8000/api/generate".to_string()
}

fn default_max_text_length() -> usize {
    5000
}

fn default_translation_model() -> String {
    "Qwen/Qwen3-30B-A3B-Instruct".to_string()
}

fn default_judge_model() -> String {
    "claude-sonnet-4".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_endpoint: default_api_endpoint(),
            api_key: String::new(),
            enable_mocks: false,
            max_text_length: default_max_text_length(),
            supported_languages: default_supported_languages(),
            translation_model: default_translation_model(),
            judge_model: default_judge_model(),
            timeout_secs: default_timeout_secs(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file; missing fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            endpoint: self.api_endpoint.clone(),
            reason: e.to_string(),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidEndpoint {
                endpoint: self.api_endpoint.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        // Mock mode never touches the network, so the key may stay empty
        if !self.enable_mocks && self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        if self.supported_languages.is_empty() {
            return Err(ConfigError::NoSupportedLanguages);
        }
        if self.max_text_length == 0 {
            return Err(ConfigError::ZeroValue("max_text_length"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroValue("timeout_secs"));
        }

        Ok(())
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
