use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;

use crate::captions::{CaptionFragment, CaptionSource};
use crate::errors::FetchError;

/// Client for the YouTube timedtext caption endpoint
#[derive(Debug)]
pub struct TimedTextClient {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint URL
    endpoint: String,
}

/// Top-level timedtext payload (fmt=json3)
#[derive(Debug, Deserialize)]
struct TimedTextPayload {
    /// Caption events; absent for videos without captions
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

/// A single caption event
#[derive(Debug, Deserialize)]
struct TimedTextEvent {
    /// Start offset in milliseconds
    #[serde(rename = "tStartMs", default)]
    start_ms: u64,

    /// Duration in milliseconds
    #[serde(rename = "dDurationMs", default)]
    duration_ms: u64,

    /// Text segments of the event
    #[serde(default)]
    segs: Vec<TimedTextSegment>,
}

/// A text segment within an event
#[derive(Debug, Deserialize)]
struct TimedTextSegment {
    /// UTF-8 text content
    #[serde(rename = "utf8", default)]
    text: String,
}

impl TimedTextClient {
    /// Create a new timedtext client
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    fn request_url(&self, video_id: &str, language: &str) -> String {
        format!(
            "{}?v={}&lang={}&fmt=json3",
            self.endpoint.trim_end_matches('/'),
            video_id,
            language
        )
    }
}

#[async_trait]
impl CaptionSource for TimedTextClient {
    async fn fetch(&self, video_id: &str, language: &str) -> Result<Vec<CaptionFragment>, FetchError> {
        let url = self.request_url(video_id, language);
        debug!("Fetching captions from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!("Caption endpoint error ({}) for video '{}'", status, video_id);
            return Err(FetchError::Unavailable(format!(
                "caption endpoint responded with status {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Unavailable(e.to_string()))?;

        // The endpoint answers an empty body for videos without captions
        if body.trim().is_empty() {
            return Err(FetchError::NoCaptions {
                video_id: video_id.to_string(),
                language: language.to_string(),
            });
        }

        let payload: TimedTextPayload =
            serde_json::from_str(&body).map_err(|e| FetchError::ParseError(e.to_string()))?;

        let fragments: Vec<CaptionFragment> = payload
            .events
            .into_iter()
            .filter_map(|event| {
                let text: String = event
                    .segs
                    .iter()
                    .map(|seg| seg.text.as_str())
                    .collect::<Vec<_>>()
                    .concat();
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(CaptionFragment::new(
                        trimmed,
                        event.start_ms as f64 / 1000.0,
                        event.duration_ms as f64 / 1000.0,
                    ))
                }
            })
            .collect();

        if fragments.is_empty() {
            return Err(FetchError::NoCaptions {
                video_id: video_id.to_string(),
                language: language.to_string(),
            });
        }

        debug!(
            "Fetched {} caption fragments for video '{}'",
            fragments.len(),
            video_id
        );

        Ok(fragments)
    }
}
