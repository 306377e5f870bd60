use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use url::Url;

use crate::language_registry;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language, as display name or short code (e.g. "es" or "Spanish")
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language, as display name or short code
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Maximum number of feed entries to process; absent means all of them
    #[serde(default = "default_entries_limit")]
    pub entries_limit: Option<usize>,

    /// Feed fetching config
    #[serde(default)]
    pub feed: FeedConfig,

    /// Summarization endpoint config
    #[serde(default)]
    pub summarization: SummarizationConfig,

    /// Translation endpoint config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Feed fetching configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FeedConfig {
    /// User agent sent with feed requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_feed_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_feed_timeout_secs(),
        }
    }
}

/// Summarization endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SummarizationConfig {
    /// Endpoint URL
    #[serde(default = "default_summarization_endpoint")]
    pub endpoint: String,

    /// Model served by the endpoint
    #[serde(default = "default_summarization_model")]
    pub model: String,

    /// API key, empty when the endpoint is unauthenticated
    #[serde(default = "String::new")]
    pub api_key: String,

    /// The served model's own default maximum output length
    #[serde(default = "default_model_max_length")]
    pub default_max_length: u32,

    /// The served model's own default minimum output length
    #[serde(default = "default_model_min_length")]
    pub default_min_length: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry count for failed requests
    #[serde(default = "default_retry_count")]
    pub max_retries: u32,

    /// Backoff multiplier for retries (in milliseconds)
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl Default for SummarizationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_summarization_endpoint(),
            model: default_summarization_model(),
            api_key: String::new(),
            default_max_length: default_model_max_length(),
            default_min_length: default_model_min_length(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

/// Translation endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Endpoint URL
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    /// Model served by the endpoint
    #[serde(default = "default_translation_model")]
    pub model: String,

    /// API key, empty when the endpoint is unauthenticated
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry count for failed requests
    #[serde(default = "default_retry_count")]
    pub max_retries: u32,

    /// Backoff multiplier for retries (in milliseconds)
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_translation_endpoint(),
            model: default_translation_model(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
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

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "el".to_string()
}

fn default_entries_limit() -> Option<usize> {
    Some(5)
}

fn default_user_agent() -> String {
    concat!("transum/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_feed_timeout_secs() -> u64 {
    30
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_retry_count() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    500
}

fn default_summarization_endpoint() -> String {
    "http://localhost:8090".to_string()
}

fn default_translation_endpoint() -> String {
    "http://localhost:8091".to_string()
}

fn default_summarization_model() -> String {
    "facebook/bart-large-cnn".to_string()
}

fn default_translation_model() -> String {
    "facebook/nllb-200-distilled-1.3B".to_string()
}

// bart-large-cnn ships these generation bounds in its model config
fn default_model_max_length() -> u32 {
    142
}

fn default_model_min_length() -> u32 {
    56
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages against the supported set
        let source_name = language_registry::resolve_display(&self.source_language);
        if !language_registry::is_supported(&source_name) {
            return Err(anyhow!(
                "Unsupported source language '{}' (supported: {})",
                self.source_language,
                language_registry::supported_display_names().join(", ")
            ));
        }
        let target_name = language_registry::resolve_display(&self.target_language);
        if !language_registry::is_supported(&target_name) {
            return Err(anyhow!(
                "Unsupported target language '{}' (supported: {})",
                self.target_language,
                language_registry::supported_display_names().join(", ")
            ));
        }

        // Validate entries limit
        if self.entries_limit == Some(0) {
            return Err(anyhow!("entries_limit must be a positive number"));
        }

        // Validate endpoints
        Url::parse(&self.summarization.endpoint).map_err(|e| {
            anyhow!(
                "Invalid summarization endpoint '{}': {}",
                self.summarization.endpoint,
                e
            )
        })?;
        Url::parse(&self.translation.endpoint).map_err(|e| {
            anyhow!(
                "Invalid translation endpoint '{}': {}",
                self.translation.endpoint,
                e
            )
        })?;

        // Validate generation bounds
        if self.summarization.default_max_length == 0 {
            return Err(anyhow!("summarization default_max_length must be positive"));
        }
        if self.summarization.default_min_length > self.summarization.default_max_length {
            return Err(anyhow!(
                "summarization default_min_length ({}) exceeds default_max_length ({})",
                self.summarization.default_min_length,
                self.summarization.default_max_length
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            entries_limit: default_entries_limit(),
            feed: FeedConfig::default(),
            summarization: SummarizationConfig::default(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
