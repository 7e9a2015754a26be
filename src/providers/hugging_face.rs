use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::app_config::SummarizerConfig;
use crate::errors::ProviderError;
use crate::providers::{SummarizeRequest, Summarizer};

/// Hugging Face inference API client for summarization models
#[derive(Debug)]
pub struct HuggingFace {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL
    endpoint: String,
    /// Model identifier (e.g., "facebook/bart-large-cnn")
    model: String,
}

/// Inference request body
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    /// The input text
    inputs: &'a str,

    /// Generation parameters
    parameters: InferenceParameters,

    /// Service options
    options: InferenceOptions,
}

/// Generation parameters for the summarization pipeline
#[derive(Debug, Serialize)]
struct InferenceParameters {
    /// Minimum summary length
    min_length: usize,

    /// Maximum summary length
    max_length: usize,

    /// Whether to sample; deterministic output when false
    do_sample: bool,
}

/// Service-level options
#[derive(Debug, Serialize)]
struct InferenceOptions {
    /// Block until a cold model has loaded instead of erroring
    wait_for_model: bool,
}

/// One element of the inference response array
#[derive(Debug, Deserialize)]
struct InferenceResponse {
    /// The generated summary
    summary_text: String,
}

impl HuggingFace {
    /// Create a new Hugging Face client
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    /// Create a client from the summarizer configuration section
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            config.endpoint.clone(),
            config.model.clone(),
            config.timeout_secs,
        )
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl Summarizer for HuggingFace {
    async fn summarize(&self, request: SummarizeRequest) -> Result<String, ProviderError> {
        let url = self.api_url();
        debug!(
            "Summarizing {} chars (bounds {}..={}) via {}",
            request.text.chars().count(),
            request.min_length,
            request.max_length,
            self.model
        );

        let body = InferenceRequest {
            inputs: &request.text,
            parameters: InferenceParameters {
                min_length: request.min_length,
                max_length: request.max_length,
                do_sample: false,
            },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let mut http_request = self.client.post(&url).json(&body);
        if !self.api_key.is_empty() {
            http_request = http_request.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Hugging Face API error ({}): {}", status, error_text);

            return match status.as_u16() {
                401 | 403 => Err(ProviderError::AuthenticationError(error_text)),
                code => Err(ProviderError::ApiError {
                    status_code: code,
                    message: error_text,
                }),
            };
        }

        let summaries = response
            .json::<Vec<InferenceResponse>>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        summaries
            .into_iter()
            .next()
            .map(|s| s.summary_text)
            .ok_or_else(|| ProviderError::ParseError("empty inference response array".to_string()))
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = SummarizeRequest::new("Connection test. Connection test.", 1, 10);
        self.summarize(request).await?;
        Ok(())
    }
}
