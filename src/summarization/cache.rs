/*!
 * Transcript caching functionality.
 *
 * This module caches fetched transcripts for the process lifetime so
 * that repeated digests of the same video skip the caption source.
 */

use log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Cache key combining video id and caption language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    /// The 11-character video id
    video_id: String,

    /// Caption language code
    language: String,
}

impl CacheKey {
    /// Create a new cache key
    pub fn new(video_id: &str, language: &str) -> Self {
        Self {
            video_id: video_id.to_string(),
            language: language.to_string(),
        }
    }
}

/// Process-wide cache of fetched transcripts
pub struct TranscriptCache {
    /// Internal cache storage
    cache: Arc<RwLock<HashMap<CacheKey, String>>>,

    /// Cache hit counter
    hits: Arc<RwLock<usize>>,

    /// Cache miss counter
    misses: Arc<RwLock<usize>>,

    /// Whether caching is enabled
    enabled: bool,
}

impl TranscriptCache {
    /// Create a new transcript cache
    pub fn new(enabled: bool) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
            enabled,
        }
    }

    /// Get a transcript from the cache
    pub fn get(&self, video_id: &str, language: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }

        let key = CacheKey::new(video_id, language);
        let cache = self.cache.read();

        match cache.get(&key) {
            Some(transcript) => {
                let mut hits = self.hits.write();
                *hits += 1;

                debug!("Transcript cache hit for '{}' ({})", video_id, language);

                Some(transcript.clone())
            }
            None => {
                let mut misses = self.misses.write();
                *misses += 1;

                debug!("Transcript cache miss for '{}' ({})", video_id, language);

                None
            }
        }
    }

    /// Store a transcript in the cache
    pub fn store(&self, video_id: &str, language: &str, transcript: &str) {
        if !self.enabled {
            return;
        }

        let key = CacheKey::new(video_id, language);
        let mut cache = self.cache.write();

        cache.insert(key, transcript.to_string());

        debug!(
            "Cached {}-char transcript for '{}' ({})",
            transcript.chars().count(),
            video_id,
            language
        );
    }

    /// Get cache statistics as (hits, misses, hit rate)
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    /// Clear the cache
    pub fn clear(&self) {
        let mut cache = self.cache.write();
        cache.clear();

        let mut hits = self.hits.write();
        *hits = 0;

        let mut misses = self.misses.write();
        *misses = 0;

        debug!("Transcript cache cleared");
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Check if the cache is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for TranscriptCache {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Clone for TranscriptCache {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
            enabled: self.enabled,
        }
    }
}
