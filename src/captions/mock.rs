/*!
 * Mock caption source for testing.
 *
 * Provides a scripted caption source that either returns a fixed set of
 * fragments or fails, while counting how often it was called so tests
 * can assert that invalid input never reaches the fetch stage.
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::captions::{CaptionFragment, CaptionSource};
use crate::errors::FetchError;

/// Behavior mode for the mock caption source
#[derive(Debug, Clone)]
pub enum MockCaptionBehavior {
    /// Returns the scripted fragments
    Working,
    /// Fails as if the video had no captions
    NoCaptions,
    /// Fails as if the source were unreachable
    Unavailable,
}

/// Mock caption source for testing
#[derive(Debug)]
pub struct MockCaptionSource {
    /// Behavior mode
    behavior: MockCaptionBehavior,
    /// Fragments returned in Working mode
    fragments: Vec<CaptionFragment>,
    /// Number of fetch calls observed
    fetch_count: Arc<AtomicUsize>,
}

impl MockCaptionSource {
    /// Create a working source returning the given texts as fragments
    pub fn with_texts(texts: &[&str]) -> Self {
        let fragments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| CaptionFragment::new(*text, i as f64 * 2.0, 2.0))
            .collect();

        Self {
            behavior: MockCaptionBehavior::Working,
            fragments,
            fetch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a source that reports missing captions
    pub fn no_captions() -> Self {
        Self {
            behavior: MockCaptionBehavior::NoCaptions,
            fragments: Vec::new(),
            fetch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a source that reports an unreachable endpoint
    pub fn unavailable() -> Self {
        Self {
            behavior: MockCaptionBehavior::Unavailable,
            fragments: Vec::new(),
            fetch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of fetch calls made against this source
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    /// Shared handle on the call counter, usable after the source is moved
    pub fn fetch_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.fetch_count)
    }
}

#[async_trait]
impl CaptionSource for MockCaptionSource {
    async fn fetch(&self, video_id: &str, language: &str) -> Result<Vec<CaptionFragment>, FetchError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockCaptionBehavior::Working => Ok(self.fragments.clone()),
            MockCaptionBehavior::NoCaptions => Err(FetchError::NoCaptions {
                video_id: video_id.to_string(),
                language: language.to_string(),
            }),
            MockCaptionBehavior::Unavailable => {
                Err(FetchError::Unavailable("simulated outage".to_string()))
            }
        }
    }
}
