use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::InputError;

// @module: Video reference parsing

// @const: Captures the 11-character id after "v=" or a path segment
static URL_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").unwrap()
});

// @const: Matches a bare 11-character video id
static BARE_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Za-z_-]{11}$").unwrap()
});

/// Extract the 11-character video id from a user-supplied reference.
///
/// Accepts a full YouTube URL (watch, short or embed form) or a bare
/// video id. Anything else is rejected before any network activity.
pub fn extract_video_id(input: &str) -> Result<String, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyReference);
    }

    if BARE_ID_REGEX.is_match(trimmed) {
        return Ok(trimmed.to_string());
    }

    if let Some(captures) = URL_ID_REGEX.captures(trimmed) {
        return Ok(captures[1].to_string());
    }

    Err(InputError::UnrecognizedReference(trimmed.to_string()))
}
