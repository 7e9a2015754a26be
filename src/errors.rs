/*!
 * Error types for the ytdigest application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with the summarization provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors raised when a video reference cannot be understood
#[derive(Error, Debug)]
pub enum InputError {
    /// The input is neither a recognizable URL nor a bare 11-character id
    #[error("Unrecognized video reference: '{0}'")]
    UnrecognizedReference(String),

    /// The input was empty or whitespace-only
    #[error("Empty video reference")]
    EmptyReference,
}

/// Errors that can occur while fetching captions
#[derive(Error, Debug)]
pub enum FetchError {
    /// The caption source has no captions for this video/language
    #[error("No captions available for video '{video_id}' in language '{language}'")]
    NoCaptions {
        /// The requested video id
        video_id: String,
        /// The requested caption language
        language: String,
    },

    /// The caption source could not be reached or answered with an error
    #[error("Caption source unavailable: {0}")]
    Unavailable(String),

    /// The caption payload could not be parsed
    #[error("Failed to parse caption payload: {0}")]
    ParseError(String),
}

/// Errors that can occur during summarization
#[derive(Error, Debug)]
pub enum SummarizationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Errors that can occur while serializing export artifacts
#[derive(Error, Debug)]
pub enum EncodingError {
    /// A character survived transliteration but cannot be encoded
    #[error("Unsupported character {character:?} at position {position} in export text")]
    UnsupportedCharacter {
        /// The offending character
        character: char,
        /// Character offset in the export text
        position: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from parsing the video reference
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Error from fetching captions
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error from the summarization driver
    #[error("Summarization error: {0}")]
    Summarization(#[from] SummarizationError),

    /// Error from export serialization
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
