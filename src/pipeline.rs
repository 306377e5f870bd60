/*!
 * The feed-processing pipeline.
 *
 * For every entry of a fetched feed: flatten the body markup, move the text
 * into English when it is not there already, summarize it, then move the
 * summary and the title into the target language. Entries are processed
 * strictly in feed order, one at a time; the first failing step aborts the
 * whole run with no partial results.
 */

use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;
use url::Url;

use crate::content_extractor;
use crate::errors::PipelineError;
use crate::feed::{FeedSource, RawEntry};
use crate::language_registry::{self, PIVOT_LANGUAGE};
use crate::summarization::SummarizationService;
use crate::translation::TranslationService;

/// One fully processed feed entry, ready for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedEntry {
    /// Title, translated to the target language
    pub title: String,
    /// Author, carried through unchanged
    pub author: String,
    /// Link, carried through unchanged
    pub link: String,
    /// Summarized body, translated to the target language
    pub content: String,
}

/// Orchestrates the per-entry processing steps over a fetched feed
pub struct FeedPipeline {
    /// Where entries come from
    feed: Arc<dyn FeedSource>,
    /// Summarization service
    summarizer: SummarizationService,
    /// Translation service
    translator: TranslationService,
}

impl FeedPipeline {
    /// Create a pipeline over a feed source and the two model services
    pub fn new(
        feed: Arc<dyn FeedSource>,
        summarizer: SummarizationService,
        translator: TranslationService,
    ) -> Self {
        Self {
            feed,
            summarizer,
            translator,
        }
    }

    /// Fetch `feed_url` and process its entries into the target language.
    ///
    /// `src_lang` and `tgt_lang` accept display names or short codes.
    /// `entries_limit` caps how many entries are processed; `None` processes
    /// all of them, and a limit beyond the entry count is harmless. Output
    /// order equals feed order. Any failure aborts the whole call.
    pub async fn process_feed(
        &self,
        feed_url: &Url,
        src_lang: &str,
        tgt_lang: &str,
        entries_limit: Option<usize>,
    ) -> Result<Vec<ProcessedEntry>, PipelineError> {
        let src_lang = language_registry::resolve_display(src_lang);
        let tgt_lang = language_registry::resolve_display(tgt_lang);

        let mut entries = self.feed.fetch(feed_url).await?;
        if let Some(limit) = entries_limit {
            entries.truncate(limit);
        }
        info!(
            "Processing {} entries ({} -> {})",
            entries.len(),
            src_lang,
            tgt_lang
        );

        let mut processed = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            debug!("Processing entry {}", index + 1);
            processed.push(self.process_entry(entry, &src_lang, &tgt_lang).await?);
        }
        Ok(processed)
    }

    /// Run a single entry through the processing steps
    async fn process_entry(
        &self,
        entry: RawEntry,
        src_lang: &str,
        tgt_lang: &str,
    ) -> Result<ProcessedEntry, PipelineError> {
        let markup = entry.body_markup().unwrap_or_default();
        let mut content = content_extractor::extract_text(markup);

        // The summarization model only speaks the pivot language
        if src_lang != PIVOT_LANGUAGE {
            content = self
                .translator
                .translate(&content, src_lang, PIVOT_LANGUAGE)
                .await?;
        }

        let summary = self.summarizer.summarize(&content).await?;

        // The original title goes straight to the target language, never
        // through the summarizer
        let title = entry.title.unwrap_or_default();
        let title = self.translator.translate(&title, src_lang, tgt_lang).await?;

        let content = if tgt_lang != PIVOT_LANGUAGE {
            self.translator
                .translate(&summary, PIVOT_LANGUAGE, tgt_lang)
                .await?
        } else {
            summary
        };

        Ok(ProcessedEntry {
            title,
            author: entry.author.unwrap_or_default(),
            link: entry.link.unwrap_or_default(),
            content,
        })
    }
}
