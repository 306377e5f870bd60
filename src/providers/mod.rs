/*!
 * Backend clients for the two inference endpoints.
 *
 * This module contains client implementations for the model services the
 * pipeline depends on:
 * - Summarizer: HTTP endpoint serving a summarization model
 * - Translator: HTTP endpoint serving a translation model
 * - Mock: scripted backends for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Generation length defaults the served summarization model ships with.
///
/// These are the model's own configured bounds, distinct from whatever a
/// caller requests. The adaptive-bounds computation needs both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationDefaults {
    /// Model default maximum output length
    pub max_length: u32,
    /// Model default minimum output length
    pub min_length: u32,
}

/// A fully resolved summarization request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    /// Text to summarize
    pub text: String,
    /// Maximum output length target
    pub max_length: u32,
    /// Minimum output length target
    pub min_length: u32,
    /// Beam-search width
    pub num_beams: u32,
    /// Stop beams early once finished
    pub early_stopping: bool,
    /// Token count the endpoint truncates the input to
    pub truncate: u32,
}

/// A fully resolved translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Script-qualified source language code, e.g. "spa_Latn"
    pub source_script: String,
    /// Script-qualified target language code, e.g. "eng_Latn"
    pub target_script: String,
    /// Batch size hint for the endpoint
    pub batch_size: u32,
}

/// One translated segment as returned by the translation endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationPayload {
    /// The translated text
    pub translation_text: String,
}

/// Interface to a summarization endpoint
///
/// Implementations turn a `SummaryRequest` into generated summary text,
/// surfacing every service failure as a `ProviderError`.
#[async_trait]
pub trait SummarizationBackend: Send + Sync + Debug {
    /// The served model's own generation defaults
    fn generation_defaults(&self) -> GenerationDefaults;

    /// Summarize the request's text within its length bounds
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The generated summary or an error
    async fn summarize(&self, request: SummaryRequest) -> Result<String, ProviderError>;
}

/// Interface to a translation endpoint
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Translate the request's text between its script-qualified languages
    ///
    /// The raw payload list is returned as-is; deciding what an empty or
    /// missing payload means is the caller's concern.
    ///
    /// # Returns
    /// * `Result<Vec<TranslationPayload>, ProviderError>` - Translated segments or an error
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<Vec<TranslationPayload>, ProviderError>;
}

pub mod mock;
pub mod summarizer;
pub mod translator;
