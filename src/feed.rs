/*!
 * Feed ingestion: fetching a feed document and parsing it into raw entries.
 *
 * The `FeedSource` trait is the seam the pipeline sees; the shipped
 * implementation fetches over HTTP and parses RSS and Atom alike.
 */

use std::time::Duration;

use async_trait::async_trait;
use feed_rs::parser;
use log::{debug, info};
use reqwest::Client;
use url::Url;

use crate::errors::FeedError;

/// One feed entry as parsed, before any processing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    /// Entry title
    pub title: Option<String>,
    /// First listed author's name
    pub author: Option<String>,
    /// First listed link
    pub link: Option<String>,
    /// Entry summary
    pub summary: Option<String>,
    /// Full entry content
    pub content: Option<String>,
    /// Separate description, for sources that distinguish it from summary
    pub description: Option<String>,
}

impl RawEntry {
    /// The markup to process for this entry.
    ///
    /// First slot of summary, content, description that is present and
    /// non-empty; `None` when the entry carries no usable body.
    pub fn body_markup(&self) -> Option<&str> {
        [&self.summary, &self.content, &self.description]
            .into_iter()
            .filter_map(|slot| slot.as_deref())
            .find(|text| !text.is_empty())
    }
}

/// Source of feed entries
#[async_trait]
pub trait FeedSource: Send + Sync + std::fmt::Debug {
    /// Fetch the feed at `url` and return its entries in document order
    async fn fetch(&self, url: &Url) -> Result<Vec<RawEntry>, FeedError>;
}

/// Feed source fetching over HTTP
#[derive(Debug)]
pub struct RssFeedSource {
    /// HTTP client for feed requests
    client: Client,
}

impl RssFeedSource {
    /// Create a source with default transport settings
    pub fn new() -> Self {
        Self::new_with_config(concat!("transum/", env!("CARGO_PKG_VERSION")), 30)
    }

    /// Create a source with an explicit user agent and timeout
    pub fn new_with_config(user_agent: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .user_agent(user_agent.into())
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for RssFeedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedSource for RssFeedSource {
    async fn fetch(&self, url: &Url) -> Result<Vec<RawEntry>, FeedError> {
        debug!("Fetching feed: {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FeedError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Fetch(format!("HTTP {} from {}", status, url)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FeedError::Fetch(e.to_string()))?;

        let entries = parse_raw_entries(&body)?;
        info!("Retrieved {} entries from {}", entries.len(), url);
        Ok(entries)
    }
}

/// Parse a feed document into raw entries, keeping document order.
///
/// Handles RSS and Atom alike. RSS `<description>` lands in the summary
/// slot during parsing, so `description` stays empty here; the field exists
/// for sources that keep the two apart.
pub fn parse_raw_entries(content: &[u8]) -> Result<Vec<RawEntry>, FeedError> {
    let feed = parser::parse(content).map_err(|e| FeedError::Parse(e.to_string()))?;

    Ok(feed
        .entries
        .into_iter()
        .map(|entry| RawEntry {
            title: entry.title.map(|t| t.content),
            author: entry.authors.first().map(|a| a.name.clone()),
            link: entry.links.first().map(|l| l.href.clone()),
            summary: entry.summary.map(|s| s.content),
            content: entry.content.and_then(|c| c.body),
            description: None,
        })
        .collect())
}
