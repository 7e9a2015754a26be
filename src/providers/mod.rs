/*!
 * Provider implementations for the summarization capability.
 *
 * This module contains the summarizer collaborator interface and its
 * implementations:
 * - HuggingFace: Hugging Face inference API client
 * - Mock: scripted summarizer for tests
 */

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use std::fmt::Debug;
use std::sync::Arc;

use crate::app_config::SummarizerConfig;
use crate::errors::ProviderError;
use crate::providers::hugging_face::HuggingFace;

/// A single summarization request with best-effort length bounds
#[derive(Debug, Clone)]
pub struct SummarizeRequest {
    /// The text to condense
    pub text: String,

    /// Minimum desired summary length (model tokens, best-effort)
    pub min_length: usize,

    /// Maximum desired summary length (model tokens, best-effort)
    pub max_length: usize,
}

impl SummarizeRequest {
    /// Create a new summarization request
    pub fn new(text: impl Into<String>, min_length: usize, max_length: usize) -> Self {
        Self {
            text: text.into(),
            min_length,
            max_length,
        }
    }
}

/// Common trait for all summarization providers
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing them to be used interchangeably by the summarization
/// driver.
#[async_trait]
pub trait Summarizer: Send + Sync + Debug {
    /// Summarize one input text within the requested length bounds
    ///
    /// # Arguments
    /// * `request` - The text and length bounds
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - One summary string or an error
    async fn summarize(&self, request: SummarizeRequest) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the provider is reachable, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

// Process-wide model client, initialized once and reused across runs.
// Invalidated only by process restart; the first configuration seen wins.
static SHARED_SUMMARIZER: OnceCell<Arc<HuggingFace>> = OnceCell::new();

/// Get the process-wide summarization client, creating it on first use
pub fn shared_summarizer(config: &SummarizerConfig) -> Arc<HuggingFace> {
    SHARED_SUMMARIZER
        .get_or_init(|| Arc::new(HuggingFace::from_config(config)))
        .clone()
}

pub mod hugging_face;
pub mod mock;
