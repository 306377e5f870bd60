/*!
 * Tests for application configuration functionality
 */

use transum::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    // Test default values
    assert_eq!(config.source_language, "en");
    assert_eq!(config.target_language, "el");
    assert_eq!(config.entries_limit, Some(5));
    assert_eq!(config.log_level, LogLevel::Info);

    // Feed transport defaults
    assert_eq!(config.feed.user_agent, "transum/1.0.0");
    assert_eq!(config.feed.timeout_secs, 30);

    // Summarization endpoint defaults
    assert_eq!(config.summarization.endpoint, "http://localhost:8090");
    assert_eq!(config.summarization.model, "facebook/bart-large-cnn");
    assert_eq!(config.summarization.api_key, "");
    assert_eq!(config.summarization.default_max_length, 142);
    assert_eq!(config.summarization.default_min_length, 56);
    assert_eq!(config.summarization.timeout_secs, 60);
    assert_eq!(config.summarization.max_retries, 2);
    assert_eq!(config.summarization.retry_backoff_ms, 500);

    // Translation endpoint defaults
    assert_eq!(config.translation.endpoint, "http://localhost:8091");
    assert_eq!(config.translation.model, "facebook/nllb-200-distilled-1.3B");
    assert_eq!(config.translation.max_retries, 2);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Start with a valid config
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Invalid source language
    config.source_language = "xyz".to_string();
    assert!(config.validate().is_err());
    config.source_language = "en".to_string();

    // Invalid target language
    config.target_language = "".to_string();
    assert!(config.validate().is_err());
    config.target_language = "fr".to_string();

    // Zero entries limit
    config.entries_limit = Some(0);
    assert!(config.validate().is_err());
    config.entries_limit = None;
    assert!(config.validate().is_ok());

    // Invalid summarization endpoint
    config.summarization.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
    config.summarization.endpoint = "http://localhost:8090".to_string();

    // Invalid translation endpoint
    config.translation.endpoint = "".to_string();
    assert!(config.validate().is_err());
    config.translation.endpoint = "http://localhost:8091".to_string();

    // Generation floor above the ceiling
    config.summarization.default_min_length = 200;
    assert!(config.validate().is_err());
    config.summarization.default_min_length = 56;

    // Zero generation ceiling
    config.summarization.default_max_length = 0;
    assert!(config.validate().is_err());
    config.summarization.default_max_length = 142;

    assert!(config.validate().is_ok());
}

/// Test that display names validate as well as short codes
#[test]
fn test_config_validation_withDisplayNames_shouldAccept() {
    let mut config = Config::default();
    config.source_language = "Spanish".to_string();
    config.target_language = "Greek".to_string();
    assert!(config.validate().is_ok());
}

/// Test the validation error message lists the supported set
#[test]
fn test_config_validation_withUnsupportedLanguage_shouldListSupported() {
    let mut config = Config::default();
    config.source_language = "Japanese".to_string();

    let error = config.validate().expect_err("Japanese is not supported");
    let message = error.to_string();
    assert!(message.contains("Japanese"));
    assert!(message.contains("Greek"));
    assert!(message.contains("Italian"));
}

/// Test serialization round trip
#[test]
fn test_config_serialization_withRoundTrip_shouldPreserveValues() {
    let mut config = Config::default();
    config.target_language = "it".to_string();
    config.entries_limit = None;
    config.summarization.api_key = "secret".to_string();

    let json = serde_json::to_string_pretty(&config).expect("config should serialize");
    let parsed: Config = serde_json::from_str(&json).expect("config should deserialize");

    assert_eq!(parsed.target_language, "it");
    assert_eq!(parsed.entries_limit, None);
    assert_eq!(parsed.summarization.api_key, "secret");
    assert_eq!(parsed.summarization.model, config.summarization.model);
}

/// Test partial JSON fills the rest with defaults
#[test]
fn test_config_deserialization_withPartialJson_shouldFillDefaults() {
    let json = r#"{ "target_language": "fr", "log_level": "debug" }"#;
    let config: Config = serde_json::from_str(json).expect("partial config should deserialize");

    assert_eq!(config.target_language, "fr");
    assert_eq!(config.log_level, LogLevel::Debug);
    // everything else defaulted
    assert_eq!(config.source_language, "en");
    assert_eq!(config.entries_limit, Some(5));
    assert_eq!(config.summarization.default_max_length, 142);
    assert_eq!(config.translation.endpoint, "http://localhost:8091");
}

/// Test log level names serialize lowercase
#[test]
fn test_logLevel_serialization_shouldUseLowercaseNames() {
    assert_eq!(
        serde_json::to_string(&LogLevel::Warn).expect("log level should serialize"),
        r#""warn""#
    );
    let parsed: LogLevel =
        serde_json::from_str(r#""trace""#).expect("log level should deserialize");
    assert_eq!(parsed, LogLevel::Trace);
}
