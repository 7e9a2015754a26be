/*!
 * Tests for application configuration functionality
 */

use ytdigest::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.captions.endpoint, "https://www.youtube.com/api/timedtext");
    assert_eq!(config.captions.language, "en");
    assert_eq!(config.captions.timeout_secs, 30);
    assert!(config.captions.cache_enabled);

    assert_eq!(config.summarizer.model, "facebook/bart-large-cnn");
    assert_eq!(config.summarizer.endpoint, "https://api-inference.huggingface.co");
    assert!(config.summarizer.api_key.is_empty());
    assert_eq!(config.summarizer.max_chars_per_chunk, 1000);
    assert_eq!(config.summarizer.chunk_overlap_chars, 0);
    assert_eq!(config.summarizer.chunk_min_length, 30);
    assert_eq!(config.summarizer.chunk_max_length, 120);
    assert_eq!(config.summarizer.final_min_length, 40);
    assert_eq!(config.summarizer.final_max_length, 150);
    assert!(!config.summarizer.quality_gate);

    assert_eq!(config.keywords.count, 5);
    assert!(config.keywords.extra_stopwords.is_empty());
    assert_eq!(config.export.line_width, 90);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Start with a valid config
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Invalid caption endpoint
    config.captions.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
    config.captions.endpoint = "https://www.youtube.com/api/timedtext".to_string();

    // Empty model name
    config.summarizer.model = String::new();
    assert!(config.validate().is_err());
    config.summarizer.model = "facebook/bart-large-cnn".to_string();

    // Overlap must stay smaller than the chunk bound
    config.summarizer.max_chars_per_chunk = 100;
    config.summarizer.chunk_overlap_chars = 100;
    assert!(config.validate().is_err());
    config.summarizer.chunk_overlap_chars = 20;
    assert!(config.validate().is_ok());

    // Length bounds must be ordered
    config.summarizer.final_min_length = 200;
    assert!(config.validate().is_err());
    config.summarizer.final_min_length = 40;

    // Similarity threshold must lie in [0, 1]
    config.summarizer.similarity_threshold = 1.5;
    assert!(config.validate().is_err());
    config.summarizer.similarity_threshold = 0.85;

    // Zero keywords make highlighting pointless
    config.keywords.count = 0;
    assert!(config.validate().is_err());
    config.keywords.count = 5;

    assert!(config.validate().is_ok());
}

/// Test that serialization round-trips without losing settings
#[test]
fn test_config_serde_shouldRoundTrip() {
    let mut config = Config::default();
    config.captions.language = "fr".to_string();
    config.summarizer.quality_gate = true;
    config.keywords.extra_stopwords = vec!["gonna".to_string()];

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.captions.language, "fr");
    assert!(parsed.summarizer.quality_gate);
    assert_eq!(parsed.keywords.extra_stopwords, vec!["gonna".to_string()]);
}

/// Test that a partial config file falls back to defaults per field
#[test]
fn test_config_deserialization_withPartialJson_shouldUseDefaults() {
    let json = r#"{ "captions": { "language": "de" } }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.captions.language, "de");
    assert_eq!(config.captions.endpoint, "https://www.youtube.com/api/timedtext");
    assert_eq!(config.summarizer.model, "facebook/bart-large-cnn");
    assert_eq!(config.log_level, LogLevel::Info);
}
