//! YAML Configuration File Support for Conversation BI
//!
//! Loads matcher, chat, and logging settings from a single YAML file.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "support-faq"
//!
//! canonical:
//!   version: 1
//!   normalize_unicode: true
//!   lowercase: true
//!   min_token_chars: 2
//!
//! stop_words:
//!   type: english_plus
//!   terms: ["hi", "hello"]
//!
//! matcher:
//!   threshold: 0.25
//!   max_results: 3
//!   parallel: false
//!   parallel_min_entries: 512
//!
//! chat:
//!   fallback_message: "Sorry, I could not find a relevant answer."
//!   max_history: 50
//!
//! logging:
//!   level: "info"
//!   json: false
//! ```

use std::fs;
use std::path::Path;

use canonical::{CanonicalizeConfig, StopWordsConfig};
use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::ChatConfig;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConvBiConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Normalization and tokenization
    #[serde(default)]
    pub canonical: CanonicalYamlConfig,

    /// Stop terms removed before weighting
    #[serde(default)]
    pub stop_words: StopWordsConfig,

    /// Matcher thresholds and ranking
    #[serde(default)]
    pub matcher: MatcherYamlConfig,

    /// Chat session behaviour
    #[serde(default)]
    pub chat: ChatYamlConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingYamlConfig,
}

impl ConvBiConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: ConvBiConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.canonical.validate()?;
        self.matcher.validate()?;
        self.chat.validate()?;
        Ok(())
    }

    /// Matcher settings assembled from the canonical, stop-word, and matcher
    /// sections.
    pub fn to_match_config(&self) -> MatchConfig {
        MatchConfig {
            canonical: self.canonical.to_canonical_config(),
            stop_words: self.stop_words.clone(),
            threshold: self.matcher.threshold,
            max_results: self.matcher.max_results,
            parallel: self.matcher.parallel,
            parallel_min_entries: self.matcher.parallel_min_entries,
        }
    }

    pub fn chat_config(&self) -> ChatConfig {
        ChatConfig {
            fallback_message: self.chat.fallback_message.clone(),
            max_history: self.chat.max_history,
        }
    }
}

impl Default for ConvBiConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: CanonicalYamlConfig::default(),
            stop_words: StopWordsConfig::default(),
            matcher: MatcherYamlConfig::default(),
            chat: ChatYamlConfig::default(),
            logging: LoggingYamlConfig::default(),
        }
    }
}

/// Canonicalization YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "true_value")]
    pub normalize_unicode: bool,

    #[serde(default = "true_value")]
    pub lowercase: bool,

    #[serde(default = "default_min_token_chars")]
    pub min_token_chars: usize,
}

impl CanonicalYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "canonical.version must be >= 1".to_string(),
            ));
        }
        if self.min_token_chars == 0 {
            return Err(ConfigLoadError::Validation(
                "canonical.min_token_chars must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    fn to_canonical_config(&self) -> CanonicalizeConfig {
        CanonicalizeConfig {
            version: self.version,
            normalize_unicode: self.normalize_unicode,
            lowercase: self.lowercase,
            min_token_chars: self.min_token_chars,
        }
    }
}

impl Default for CanonicalYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
            lowercase: true,
            min_token_chars: default_min_token_chars(),
        }
    }
}

/// Matcher YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherYamlConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f32,

    #[serde(default = "default_max_results")]
    pub max_results: usize,

    #[serde(default)]
    pub parallel: bool,

    #[serde(default = "default_parallel_min_entries")]
    pub parallel_min_entries: usize,
}

impl MatcherYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigLoadError::Validation(
                "matcher.threshold must be between 0.0 and 1.0".to_string(),
            ));
        }
        if self.max_results == 0 {
            return Err(ConfigLoadError::Validation(
                "matcher.max_results must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MatcherYamlConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            max_results: default_max_results(),
            parallel: false,
            parallel_min_entries: default_parallel_min_entries(),
        }
    }
}

/// Chat YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatYamlConfig {
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,

    /// Oldest turns are dropped past this many; unbounded when absent.
    #[serde(default)]
    pub max_history: Option<usize>,
}

impl ChatYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.fallback_message.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "chat.fallback_message must not be empty".to_string(),
            ));
        }
        if self.max_history == Some(0) {
            return Err(ConfigLoadError::Validation(
                "chat.max_history must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ChatYamlConfig {
    fn default() -> Self {
        Self {
            fallback_message: default_fallback_message(),
            max_history: None,
        }
    }
}

/// Logging YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingYamlConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"matcher=debug"`.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingYamlConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_version() -> u32 {
    1
}
fn true_value() -> bool {
    true
}
fn default_min_token_chars() -> usize {
    2
}
fn default_threshold() -> f32 {
    matcher::DEFAULT_THRESHOLD
}
fn default_max_results() -> usize {
    3
}
fn default_parallel_min_entries() -> usize {
    512
}
fn default_fallback_message() -> String {
    crate::session::DEFAULT_FALLBACK_MESSAGE.to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
