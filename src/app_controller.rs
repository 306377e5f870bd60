use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;
use std::sync::Once;
use std::time::Duration;
use indicatif::{ProgressBar, ProgressStyle};
use url::Url;
use crate::app_config::Config;
use crate::feed::RssFeedSource;
use crate::pipeline::{FeedPipeline, ProcessedEntry};
use crate::providers::summarizer::SummarizerClient;
use crate::providers::translator::TranslatorClient;
use crate::providers::GenerationDefaults;
use crate::summarization::SummarizationService;
use crate::translation::TranslationService;

// @module: Application controller for feed processing

/// How processed entries are rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// Main application controller for feed summarization and translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let controller = Self { config };

        Ok(controller)
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.source_language.is_empty() && !self.config.target_language.is_empty()
    }

    /// Run the main workflow for a single feed URL
    pub async fn run(&self, feed_url: &Url, output: OutputFormat) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        // Ping both endpoints once per run
        static INIT_TEST: Once = Once::new();
        INIT_TEST.call_once(|| {
            // Skip waiting on the health checks for better startup, requests
            // will fail later if an endpoint is actually down

            // Run the checks in a background task using tokio::spawn
            let summarization = self.config.summarization.clone();
            let translation = self.config.translation.clone();
            tokio::spawn(async move {
                let defaults = GenerationDefaults {
                    max_length: summarization.default_max_length,
                    min_length: summarization.default_min_length,
                };
                let summarizer = SummarizerClient::new_with_config(
                    summarization.endpoint.clone(),
                    summarization.model.clone(),
                    defaults,
                    optional_key(&summarization.api_key),
                    summarization.timeout_secs,
                    summarization.max_retries,
                    summarization.retry_backoff_ms,
                );
                let _ = summarizer.test_connection().await;

                let translator = TranslatorClient::new_with_config(
                    translation.endpoint.clone(),
                    translation.model.clone(),
                    optional_key(&translation.api_key),
                    translation.timeout_secs,
                    translation.max_retries,
                    translation.retry_backoff_ms,
                );
                let _ = translator.test_connection().await;
            });
        });

        let pipeline = self.build_pipeline();

        // Create a spinner while the pipeline works through the feed
        let progress_bar = ProgressBar::new_spinner();
        let template_result = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        progress_bar.set_style(template_result);
        progress_bar.enable_steady_tick(Duration::from_millis(100));
        progress_bar.set_message(format!("Processing {}", feed_url));

        let entries = pipeline
            .process_feed(
                feed_url,
                &self.config.source_language,
                &self.config.target_language,
                self.config.entries_limit,
            )
            .await;

        // Finish and clear the spinner before anything lands on stdout
        progress_bar.finish_and_clear();

        let entries = entries.context("Feed processing failed")?;

        match output {
            OutputFormat::Markdown => print!("{}", Self::render_markdown(&entries)),
            OutputFormat::Json => println!("{}", Self::render_json(&entries)?),
        }

        // Calculate and display the elapsed time
        let elapsed = start_time.elapsed();
        info!(
            "Processed {} entries in {}",
            entries.len(),
            Self::format_duration(elapsed)
        );

        Ok(())
    }

    /// Build the processing pipeline from the current configuration
    fn build_pipeline(&self) -> FeedPipeline {
        let feed = Arc::new(RssFeedSource::new_with_config(
            self.config.feed.user_agent.clone(),
            self.config.feed.timeout_secs,
        ));

        let defaults = GenerationDefaults {
            max_length: self.config.summarization.default_max_length,
            min_length: self.config.summarization.default_min_length,
        };
        let summarizer = SummarizerClient::new_with_config(
            self.config.summarization.endpoint.clone(),
            self.config.summarization.model.clone(),
            defaults,
            optional_key(&self.config.summarization.api_key),
            self.config.summarization.timeout_secs,
            self.config.summarization.max_retries,
            self.config.summarization.retry_backoff_ms,
        );

        let translator = TranslatorClient::new_with_config(
            self.config.translation.endpoint.clone(),
            self.config.translation.model.clone(),
            optional_key(&self.config.translation.api_key),
            self.config.translation.timeout_secs,
            self.config.translation.max_retries,
            self.config.translation.retry_backoff_ms,
        );

        FeedPipeline::new(
            feed,
            SummarizationService::new(Arc::new(summarizer)),
            TranslationService::new(Arc::new(translator)),
        )
    }

    /// Render processed entries as a Markdown document
    pub fn render_markdown(entries: &[ProcessedEntry]) -> String {
        let mut output = String::new();

        for entry in entries {
            output.push_str(&format!("### {}\n\n", entry.title));
            output.push_str(&format!("**Author:** {}\n\n", entry.author));
            output.push_str(&format!("{}\n\n", entry.content));
            if !entry.link.is_empty() {
                output.push_str(&format!("[Read more]({})\n\n", entry.link));
            }
            output.push_str("---\n\n");
        }

        output
    }

    /// Render processed entries as pretty-printed JSON
    pub fn render_json(entries: &[ProcessedEntry]) -> Result<String> {
        serde_json::to_string_pretty(entries).context("Failed to serialize entries")
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}

/// Map an empty configured key to no authentication
fn optional_key(key: &str) -> Option<String> {
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}
