/*!
 * Mock summarizer implementations for testing.
 *
 * This module provides mock summarizers that simulate different behaviors:
 * - `MockSummarizer::echoing()` - returns the input unchanged
 * - `MockSummarizer::truncating(n)` - returns the input cut to n characters
 * - `MockSummarizer::failing()` - always fails with an API error
 * - `MockSummarizer::empty()` - returns an empty summary
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::{SummarizeRequest, Summarizer};

/// Behavior mode for the mock summarizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockSummarizerBehavior {
    /// Returns the input text unchanged
    Echoing,
    /// Returns the input truncated to a character budget
    Truncating { max_chars: usize },
    /// Always fails with an API error
    Failing,
    /// Returns an empty summary
    Empty,
}

/// Mock summarizer for testing driver behavior
#[derive(Debug)]
pub struct MockSummarizer {
    /// Behavior mode
    behavior: MockSummarizerBehavior,
    /// Request counter
    request_count: Arc<AtomicUsize>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&SummarizeRequest) -> String>,
}

impl MockSummarizer {
    /// Create a new mock summarizer with the specified behavior
    pub fn new(behavior: MockSummarizerBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a mock that echoes its input
    pub fn echoing() -> Self {
        Self::new(MockSummarizerBehavior::Echoing)
    }

    /// Create a mock that truncates its input to `max_chars` characters
    pub fn truncating(max_chars: usize) -> Self {
        Self::new(MockSummarizerBehavior::Truncating { max_chars })
    }

    /// Create a failing mock that always errors
    pub fn failing() -> Self {
        Self::new(MockSummarizerBehavior::Failing)
    }

    /// Create a mock that returns empty summaries
    pub fn empty() -> Self {
        Self::new(MockSummarizerBehavior::Empty)
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&SummarizeRequest) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of summarize calls made against this mock
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Shared handle on the request counter
    pub fn request_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.request_count)
    }
}

impl Clone for MockSummarizer {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, request: SummarizeRequest) -> Result<String, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        if let Some(generator) = self.custom_response {
            return Ok(generator(&request));
        }

        match self.behavior {
            MockSummarizerBehavior::Echoing => Ok(request.text),

            MockSummarizerBehavior::Truncating { max_chars } => {
                Ok(request.text.chars().take(max_chars).collect())
            }

            MockSummarizerBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),

            MockSummarizerBehavior::Empty => Ok(String::new()),
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockSummarizerBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated connection failure".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
