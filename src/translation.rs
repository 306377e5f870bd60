/*!
 * Translation service wrapping a translation backend.
 *
 * Callers speak display names; the backend speaks script-qualified codes.
 * The service sits between the two, enforcing the supported-language set
 * before any request leaves the process.
 */

use std::sync::Arc;

use log::debug;

use crate::errors::TranslationError;
use crate::language_registry;
use crate::providers::{TranslationBackend, TranslationRequest};

/// Batch size sent with every translation request
pub const TRANSLATION_BATCH_SIZE: u32 = 10;

/// Translation service bridging the pipeline to a translation backend
#[derive(Debug, Clone)]
pub struct TranslationService {
    /// Backend the requests go to
    backend: Arc<dyn TranslationBackend>,
}

impl TranslationService {
    /// Create a new service on top of a backend
    pub fn new(backend: Arc<dyn TranslationBackend>) -> Self {
        Self { backend }
    }

    /// Translate text between two supported languages.
    ///
    /// Both languages are given as display names and must belong to the
    /// supported set; the source is checked first and a violation is raised
    /// before anything reaches the backend. The translated text must be
    /// non-empty or the call fails.
    pub async fn translate(
        &self,
        text: &str,
        src_lang: &str,
        tgt_lang: &str,
    ) -> Result<String, TranslationError> {
        if !language_registry::is_supported(src_lang) {
            return Err(TranslationError::UnsupportedLanguage(src_lang.to_string()));
        }
        if !language_registry::is_supported(tgt_lang) {
            return Err(TranslationError::UnsupportedLanguage(tgt_lang.to_string()));
        }

        let source_script = language_registry::resolve_script_code(src_lang);
        let target_script = language_registry::resolve_script_code(tgt_lang);
        debug!(
            "Translating {} chars: {} -> {}",
            text.chars().count(),
            source_script,
            target_script
        );

        let request = TranslationRequest {
            text: text.to_string(),
            source_script,
            target_script,
            batch_size: TRANSLATION_BATCH_SIZE,
        };

        let payloads = self.backend.translate(request).await?;
        let translated = payloads
            .into_iter()
            .next()
            .map(|payload| payload.translation_text)
            .unwrap_or_default();

        if translated.is_empty() {
            return Err(TranslationError::EmptyTranslation);
        }
        Ok(translated)
    }
}
