use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Caption source config
    #[serde(default)]
    pub captions: CaptionConfig,

    /// Summarization config
    #[serde(default)]
    pub summarizer: SummarizerConfig,

    /// Keyword extraction config
    #[serde(default)]
    pub keywords: KeywordConfig,

    /// Export config
    #[serde(default)]
    pub export: ExportConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Caption source configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CaptionConfig {
    /// Caption endpoint URL
    #[serde(default = "default_caption_endpoint")]
    pub endpoint: String,

    /// Preferred caption language code
    #[serde(default = "default_caption_language")]
    pub language: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Whether fetched transcripts are cached for the process lifetime
    #[serde(default = "default_true")]
    pub cache_enabled: bool,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_caption_endpoint(),
            language: default_caption_language(),
            timeout_secs: default_timeout_secs(),
            cache_enabled: true,
        }
    }
}

/// Summarization service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SummarizerConfig {
    /// Model name (e.g., "facebook/bart-large-cnn")
    #[serde(default = "default_summarizer_model")]
    pub model: String,

    /// API key for the inference service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Inference service endpoint URL
    #[serde(default = "default_summarizer_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_summarizer_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum transcript characters per chunk sent to the model
    #[serde(default = "default_max_chars_per_chunk")]
    pub max_chars_per_chunk: usize,

    /// Characters of trailing context carried between adjacent chunks
    #[serde(default = "default_chunk_overlap_chars")]
    pub chunk_overlap_chars: usize,

    /// Minimum summary length for each chunk pass
    #[serde(default = "default_chunk_min_length")]
    pub chunk_min_length: usize,

    /// Maximum summary length for each chunk pass
    #[serde(default = "default_chunk_max_length")]
    pub chunk_max_length: usize,

    /// Minimum summary length for the final condensation pass
    #[serde(default = "default_final_min_length")]
    pub final_min_length: usize,

    /// Maximum summary length for the final condensation pass
    #[serde(default = "default_final_max_length")]
    pub final_max_length: usize,

    /// Whether the dual final-pass quality gate runs
    #[serde(default)]
    pub quality_gate: bool,

    /// Similarity threshold below which the longer gate output wins
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model: default_summarizer_model(),
            api_key: String::new(),
            endpoint: default_summarizer_endpoint(),
            timeout_secs: default_summarizer_timeout_secs(),
            max_chars_per_chunk: default_max_chars_per_chunk(),
            chunk_overlap_chars: default_chunk_overlap_chars(),
            chunk_min_length: default_chunk_min_length(),
            chunk_max_length: default_chunk_max_length(),
            final_min_length: default_final_min_length(),
            final_max_length: default_final_max_length(),
            quality_gate: false,
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

/// Keyword extraction configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct KeywordConfig {
    /// How many keywords to extract and highlight
    #[serde(default = "default_keyword_count")]
    pub count: usize,

    /// Extra stopwords merged into the built-in English list
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            count: default_keyword_count(),
            extra_stopwords: Vec::new(),
        }
    }
}

/// Export configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExportConfig {
    /// Fixed line width used when reflowing the PDF body
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
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

fn default_caption_endpoint() -> String {
    "https://www.youtube.com/api/timedtext".to_string()
}

fn default_caption_language() -> String {
    "en".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_summarizer_timeout_secs() -> u64 {
    120
}

fn default_summarizer_endpoint() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_summarizer_model() -> String {
    "facebook/bart-large-cnn".to_string()
}

fn default_max_chars_per_chunk() -> usize {
    1000
}

fn default_chunk_overlap_chars() -> usize {
    0
}

fn default_chunk_min_length() -> usize {
    30
}

fn default_chunk_max_length() -> usize {
    120
}

fn default_final_min_length() -> usize {
    40
}

fn default_final_max_length() -> usize {
    150
}

fn default_similarity_threshold() -> f32 {
    0.85
}

fn default_keyword_count() -> usize {
    5
}

fn default_line_width() -> usize {
    90
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate endpoints
        Url::parse(&self.captions.endpoint)
            .map_err(|e| anyhow!("Invalid caption endpoint '{}': {}", self.captions.endpoint, e))?;
        Url::parse(&self.summarizer.endpoint)
            .map_err(|e| anyhow!("Invalid summarizer endpoint '{}': {}", self.summarizer.endpoint, e))?;

        if self.summarizer.model.is_empty() {
            return Err(anyhow!("Summarizer model name must not be empty"));
        }

        if self.summarizer.max_chars_per_chunk == 0 {
            return Err(anyhow!("max_chars_per_chunk must be greater than zero"));
        }

        // The chunk bound only holds when the overlap window is strictly smaller
        if self.summarizer.chunk_overlap_chars >= self.summarizer.max_chars_per_chunk {
            return Err(anyhow!(
                "chunk_overlap_chars ({}) must be smaller than max_chars_per_chunk ({})",
                self.summarizer.chunk_overlap_chars,
                self.summarizer.max_chars_per_chunk
            ));
        }

        if self.summarizer.chunk_min_length > self.summarizer.chunk_max_length {
            return Err(anyhow!("chunk_min_length must not exceed chunk_max_length"));
        }

        if self.summarizer.final_min_length > self.summarizer.final_max_length {
            return Err(anyhow!("final_min_length must not exceed final_max_length"));
        }

        if !(0.0..=1.0).contains(&self.summarizer.similarity_threshold) {
            return Err(anyhow!(
                "similarity_threshold must lie within 0.0..=1.0, got {}",
                self.summarizer.similarity_threshold
            ));
        }

        if self.keywords.count == 0 {
            return Err(anyhow!("keyword count must be greater than zero"));
        }

        if self.export.line_width < 20 {
            return Err(anyhow!("export line_width must be at least 20 characters"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            captions: CaptionConfig::default(),
            summarizer: SummarizerConfig::default(),
            keywords: KeywordConfig::default(),
            export: ExportConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
