/*!
 * Caption source implementations.
 *
 * This module defines the caption-source collaborator interface and its
 * implementations:
 * - TimedText: YouTube timedtext endpoint client
 * - Mock: scripted source for tests
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::FetchError;

/// A single caption fragment as returned by the caption source.
///
/// Timing metadata is kept only until the fragments are joined into a
/// transcript; the pipeline itself works on plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionFragment {
    /// Spoken text of the fragment
    pub text: String,

    /// Start offset in seconds
    pub start: f64,

    /// Duration in seconds
    pub duration: f64,
}

impl CaptionFragment {
    /// Create a new caption fragment
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Common trait for caption sources
///
/// This trait defines the interface every caption source must follow,
/// allowing the production client and test mocks to be used
/// interchangeably by the controller.
#[async_trait]
pub trait CaptionSource: Send + Sync + Debug {
    /// Fetch the ordered caption fragments for a video
    ///
    /// # Arguments
    /// * `video_id` - The 11-character video id
    /// * `language` - Preferred caption language code
    ///
    /// # Returns
    /// * `Result<Vec<CaptionFragment>, FetchError>` - Fragments in playback order, or an error
    async fn fetch(&self, video_id: &str, language: &str) -> Result<Vec<CaptionFragment>, FetchError>;
}

/// Join caption fragments into a single raw transcript string.
///
/// Timing metadata is discarded here; fragments are space-joined and
/// any doubled whitespace is left for the normalizer to collapse.
pub fn join_fragments(fragments: &[CaptionFragment]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

pub mod mock;
pub mod timedtext;
