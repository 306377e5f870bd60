/*!
 * Integration tests for application lifecycle
 */

use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use anyhow::Result;
use tokio_test;
use url::Url;
use transum::app_controller::{Controller, OutputFormat};
use transum::app_config::Config;
use transum::pipeline::{FeedPipeline, ProcessedEntry};
use transum::providers::mock::{MockSummarizer, MockTranslator};
use transum::summarization::SummarizationService;
use transum::translation::TranslationService;
use crate::common;
use crate::common::mock_feeds::StaticFeedSource;

fn processed_entry(n: u32) -> ProcessedEntry {
    ProcessedEntry {
        title: format!("Title {}", n),
        author: format!("Author {}", n),
        link: format!("http://example.com/{}", n),
        content: format!("Content {}", n),
    }
}

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    let controller = Controller::new_for_test()?;

    assert!(controller.is_initialized());

    Ok(())
}

/// Test the controller with custom configuration
#[test]
fn test_controller_with_custom_config_shouldInitializeWithoutErrors() -> Result<()> {
    // Create a custom configuration with non-default languages
    let mut config = Config::default();
    config.source_language = "es".to_string();
    config.target_language = "de".to_string();

    // Create a controller with the custom configuration - should succeed
    let controller = Controller::with_config(config.clone())?;
    assert!(controller.is_initialized());

    Ok(())
}

/// Test config persistence through a file, the way the binary loads it
#[test]
fn test_config_persistence_withTempFile_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let mut config = Config::default();
    config.source_language = "fr".to_string();
    config.entries_limit = Some(12);

    let json = serde_json::to_string_pretty(&config)?;
    let config_path =
        common::create_test_file(&temp_dir.path().to_path_buf(), "transum-conf.json", &json)?;

    // Read it back the way the application does
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let loaded: Config = serde_json::from_reader(reader)?;

    loaded.validate()?;
    assert_eq!(loaded.source_language, "fr");
    assert_eq!(loaded.entries_limit, Some(12));
    assert_eq!(loaded.target_language, config.target_language);

    Ok(())
}

/// Test a full processing run driven from a synchronous test body
#[test]
fn test_pipelineRun_withMockBackends_shouldProduceRenderableEntries() -> Result<()> {
    let pipeline = FeedPipeline::new(
        Arc::new(StaticFeedSource::new(vec![common::sample_entry(
            "Hello",
            "<p>A short body</p>",
        )])),
        SummarizationService::new(Arc::new(MockSummarizer::working())),
        TranslationService::new(Arc::new(MockTranslator::working())),
    );
    let feed_url = Url::parse("http://example.com/feed.xml")?;

    // Drive the async pipeline from a plain test, the way the binary would
    let processed = tokio_test::block_on(async {
        pipeline.process_feed(&feed_url, "en", "el", None).await
    })?;

    assert_eq!(processed.len(), 1);
    assert_eq!(processed[0].title, "[ell_Grek] Hello");

    let output = Controller::render_markdown(&processed);
    assert!(output.starts_with("### [ell_Grek] Hello"));

    Ok(())
}

/// Test the Markdown rendering format
#[test]
fn test_renderMarkdown_withProcessedEntries_shouldFormatSections() {
    let entries = vec![processed_entry(1), processed_entry(2)];

    let output = Controller::render_markdown(&entries);

    let expected = "### Title 1\n\n\
                    **Author:** Author 1\n\n\
                    Content 1\n\n\
                    [Read more](http://example.com/1)\n\n\
                    ---\n\n\
                    ### Title 2\n\n\
                    **Author:** Author 2\n\n\
                    Content 2\n\n\
                    [Read more](http://example.com/2)\n\n\
                    ---\n\n";
    assert_eq!(output, expected);
}

/// Test Markdown rendering with nothing to render
#[test]
fn test_renderMarkdown_withNoEntries_shouldReturnEmpty() {
    assert_eq!(Controller::render_markdown(&[]), "");
}

/// Test Markdown rendering when the feed carried no link
#[test]
fn test_renderMarkdown_withMissingLink_shouldOmitReadMore() {
    let mut entry = processed_entry(1);
    entry.link = String::new();

    let output = Controller::render_markdown(&[entry]);

    assert!(!output.contains("[Read more]"));
    assert!(output.ends_with("Content 1\n\n---\n\n"));
}

/// Test the JSON rendering
#[test]
fn test_renderJson_withProcessedEntries_shouldSerializeArray() -> Result<()> {
    let entries = vec![processed_entry(1)];

    let output = Controller::render_json(&entries)?;
    let parsed: serde_json::Value = serde_json::from_str(&output)?;

    assert_eq!(parsed[0]["title"], "Title 1");
    assert_eq!(parsed[0]["author"], "Author 1");
    assert_eq!(parsed[0]["link"], "http://example.com/1");
    assert_eq!(parsed[0]["content"], "Content 1");

    Ok(())
}

/// Test the default output format
#[test]
fn test_outputFormat_default_shouldBeMarkdown() {
    assert_eq!(OutputFormat::default(), OutputFormat::Markdown);
}
