/*!
 * Tests for configuration loading and validation
 */

use std::str::FromStr;

use hotbrief::app_config::{Config, ProcessingMode};

#[test]
fn test_config_default_shouldHaveExpectedValues() {
    let config = Config::default();

    assert_eq!(config.mode, ProcessingMode::Api);
    assert!(config.ai.enabled);
    assert_eq!(config.ai.model, "deepseek-ai/DeepSeek-V3");
    assert_eq!(config.ai.max_tokens, 2000);
    assert_eq!(config.ai.timeout_secs, 120);
    assert_eq!(config.ai.max_batch_items, 5);
    assert_eq!(config.ai.max_batch_chars, 2000);
    assert!(config.ai.tasks.translate);
    assert!(config.ai.tasks.summarize);
    assert_eq!(config.ai.api_key_env, "ANTHROPIC_API_KEY");
    assert_eq!(config.output.dir, "docs");
    assert!(config.output.json);
    assert!(!config.sources.rss.enabled);
    assert!(!config.sources.reddit.enabled);
}

#[test]
fn test_config_default_shouldValidate() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_config_fromJson_shouldFillMissingFieldsWithDefaults() {
    let json = r#"{
        "mode": "cli",
        "sources": {
            "rss": {
                "enabled": true,
                "feeds": [
                    {"name": "HN", "url": "https://news.ycombinator.com/rss"}
                ]
            }
        },
        "ai": {"model": "Qwen2.5-72B", "max_batch_items": 3}
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.mode, ProcessingMode::Cli);
    assert!(config.sources.rss.enabled);
    assert_eq!(config.sources.rss.feeds.len(), 1);
    assert_eq!(config.sources.rss.feeds[0].category, "RSS");
    assert_eq!(config.ai.model, "Qwen2.5-72B");
    assert_eq!(config.ai.max_batch_items, 3);
    // Everything unspecified keeps its default
    assert_eq!(config.ai.max_batch_chars, 2000);
    assert!(config.output.json);
}

#[test]
fn test_config_validate_withZeroBatchItems_shouldFail() {
    let mut config = Config::default();
    config.ai.max_batch_items = 0;

    assert!(config.validate().is_err());
}

#[test]
fn test_config_validate_withZeroBatchChars_shouldFail() {
    let mut config = Config::default();
    config.ai.max_batch_chars = 0;

    assert!(config.validate().is_err());
}

#[test]
fn test_config_validate_withEmptyModel_shouldFail() {
    let mut config = Config::default();
    config.ai.model = String::new();

    assert!(config.validate().is_err());
}

#[test]
fn test_config_validate_withEmptyApiKeyEnvInApiMode_shouldFail() {
    let mut config = Config::default();
    config.mode = ProcessingMode::Api;
    config.ai.api_key_env = String::new();

    assert!(config.validate().is_err());

    // CLI mode needs no credential env var
    config.mode = ProcessingMode::Cli;
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validate_withEmptyOutputDir_shouldFail() {
    let mut config = Config::default();
    config.output.dir = String::new();

    assert!(config.validate().is_err());
}

#[test]
fn test_processingMode_display_shouldBeLowercase() {
    assert_eq!(ProcessingMode::Api.to_string(), "api");
    assert_eq!(ProcessingMode::Cli.to_string(), "cli");
}

#[test]
fn test_processingMode_fromStr_shouldAcceptAnyCase() {
    assert_eq!(ProcessingMode::from_str("api").unwrap(), ProcessingMode::Api);
    assert_eq!(ProcessingMode::from_str("CLI").unwrap(), ProcessingMode::Cli);
    assert!(ProcessingMode::from_str("batch").is_err());
}

#[test]
fn test_config_resolveApiKey_shouldReadConfiguredVariable() {
    let mut config = Config::default();
    config.ai.api_key_env = "HOTBRIEF_TEST_API_KEY".to_string();
    config.ai.base_url_env = "HOTBRIEF_TEST_BASE_URL".to_string();

    // Dedicated variable names, so no other test races on them
    unsafe {
        std::env::set_var("HOTBRIEF_TEST_API_KEY", "sk-test-value");
    }
    assert_eq!(config.resolve_api_key(), "sk-test-value");
    unsafe {
        std::env::remove_var("HOTBRIEF_TEST_API_KEY");
    }
    assert_eq!(config.resolve_api_key(), "");

    // An empty base URL counts as unset
    unsafe {
        std::env::set_var("HOTBRIEF_TEST_BASE_URL", "");
    }
    assert_eq!(config.resolve_base_url(), None);
    unsafe {
        std::env::set_var("HOTBRIEF_TEST_BASE_URL", "https://proxy.example.com");
    }
    assert_eq!(
        config.resolve_base_url(),
        Some("https://proxy.example.com".to_string())
    );
    unsafe {
        std::env::remove_var("HOTBRIEF_TEST_BASE_URL");
    }
}

#[test]
fn test_config_roundTrip_shouldPreserveValues() {
    let mut config = Config::default();
    config.mode = ProcessingMode::Cli;
    config.ai.model = "GLM-4-Plus".to_string();
    config.output.json = false;

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.mode, ProcessingMode::Cli);
    assert_eq!(parsed.ai.model, "GLM-4-Plus");
    assert!(!parsed.output.json);
}
