/*!
 * Summarization service wrapping a summarization backend.
 *
 * The service's one job beyond forwarding text is sizing the output: the
 * length bounds handed to the model adapt to the input length, so short
 * entries do not come back padded to the model's stock summary size.
 */

use std::sync::Arc;

use log::debug;

use crate::errors::SummarizationError;
use crate::providers::{GenerationDefaults, SummarizationBackend, SummaryRequest};

/// Requested maximum output length when the caller does not care
pub const DEFAULT_MAX_LENGTH: u32 = 30;

/// Requested minimum output length when the caller does not care
pub const DEFAULT_MIN_LENGTH: u32 = 10;

/// Token count the endpoint truncates every input to, regardless of size
pub const INPUT_TOKEN_LIMIT: u32 = 1024;

/// Beam-search width used for every request
const NUM_BEAMS: u32 = 4;

/// Effective generation bounds for one summarization request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    /// Maximum output length target
    pub max_length: u32,
    /// Minimum output length target
    pub min_length: u32,
}

/// Compute the generation bounds for an input of `text_len` characters.
///
/// When the model's default ceiling exceeds half the input length, the
/// ceiling shrinks to thirty percent of the input; otherwise the larger of
/// the requested and model ceilings wins. The floor scales proportionally
/// with the adjusted ceiling and never exceeds the model's own floor.
/// Rounding is half to even, so a tie like 0.3 * 15 = 4.5 lands on 4.
///
/// Requires `defaults.max_length > 0`; config validation enforces it.
pub fn compute_length_bounds(
    text_len: usize,
    requested_max: u32,
    defaults: &GenerationDefaults,
) -> LengthBounds {
    let max_length = if defaults.max_length as f64 > 0.5 * text_len as f64 {
        (0.3 * text_len as f64).round_ties_even() as u32
    } else {
        requested_max.max(defaults.max_length)
    };

    let ratio = defaults.min_length as f64 / defaults.max_length as f64;
    let min_length = ((ratio * max_length as f64).round_ties_even() as u32).min(defaults.min_length);

    LengthBounds {
        max_length,
        min_length,
    }
}

/// Summarization service bridging the pipeline to a summarization backend
#[derive(Debug, Clone)]
pub struct SummarizationService {
    /// Backend the requests go to
    backend: Arc<dyn SummarizationBackend>,
}

impl SummarizationService {
    /// Create a new service on top of a backend
    pub fn new(backend: Arc<dyn SummarizationBackend>) -> Self {
        Self { backend }
    }

    /// Summarize with the stock requested bounds
    pub async fn summarize(&self, text: &str) -> Result<String, SummarizationError> {
        self.summarize_with_bounds(text, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH)
            .await
    }

    /// Summarize with explicit requested bounds.
    ///
    /// The requested maximum feeds the adaptive computation; the requested
    /// minimum is accepted for signature compatibility but the adaptive rule
    /// always derives the effective floor itself.
    pub async fn summarize_with_bounds(
        &self,
        text: &str,
        max_length: u32,
        min_length: u32,
    ) -> Result<String, SummarizationError> {
        let text_len = text.chars().count();
        let defaults = self.backend.generation_defaults();
        let bounds = compute_length_bounds(text_len, max_length, &defaults);
        debug!(
            "Summarizing {} chars: requested {}/{}, effective {}/{}",
            text_len, max_length, min_length, bounds.max_length, bounds.min_length
        );

        let request = SummaryRequest {
            text: text.to_string(),
            max_length: bounds.max_length,
            min_length: bounds.min_length,
            num_beams: NUM_BEAMS,
            early_stopping: true,
            truncate: INPUT_TOKEN_LIMIT,
        };

        let summary = self.backend.summarize(request).await?;
        Ok(summary)
    }
}
