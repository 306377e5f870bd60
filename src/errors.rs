/*!
 * Error types for the transum application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to an inference endpoint
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
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while fetching or parsing a feed
#[derive(Error, Debug)]
pub enum FeedError {
    /// Error retrieving the feed document over HTTP
    #[error("Failed to fetch feed: {0}")]
    Fetch(String),

    /// Error parsing the retrieved document as RSS/Atom
    #[error("Failed to parse feed: {0}")]
    Parse(String),
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// A language outside the supported set was requested.
    /// Raised before any inference call is made.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The endpoint answered but produced no translated text
    #[error("Failed to generate translation")]
    EmptyTranslation,

    /// Error from the inference endpoint
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Errors that can occur during summarization
#[derive(Error, Debug)]
pub enum SummarizationError {
    /// Error from the inference endpoint
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Errors that can abort a feed-processing run.
///
/// Every variant is fatal to the run: the pipeline returns the first
/// error it hits and discards any entries already processed.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Error from feed retrieval or parsing
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error from summarization
    #[error("Summarization error: {0}")]
    Summarization(#[from] SummarizationError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from an inference endpoint
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from feed handling
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error from summarization
    #[error("Summarization error: {0}")]
    Summarization(#[from] SummarizationError),

    /// Error from the processing pipeline
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

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
