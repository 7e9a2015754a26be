/*!
 * Common test utilities for the ytdigest test suite
 */

use anyhow::Result;
use tempfile::TempDir;

use ytdigest::app_config::Config;

/// Creates a temporary directory for test artifacts
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// A configuration sized for small mock transcripts
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.summarizer.max_chars_per_chunk = 100;
    config.summarizer.chunk_overlap_chars = 0;
    config.keywords.count = 5;
    config
}

/// A valid-looking 11-character video id for tests
pub const TEST_VIDEO_ID: &str = "dQw4w9WgXcQ";
