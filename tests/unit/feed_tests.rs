/*!
 * Tests for feed parsing and raw entry handling
 */

use transum::errors::FeedError;
use transum::feed::{parse_raw_entries, RawEntry};

use crate::common;

/// Test RSS parsing into raw entries
#[test]
fn test_parseRawEntries_withRssFeed_shouldMapFields() {
    let xml = common::sample_rss_feed();
    let entries = parse_raw_entries(xml.as_bytes()).expect("RSS fixture should parse");

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].title.as_deref(), Some("First post"));
    assert_eq!(entries[0].link.as_deref(), Some("http://example.com/1"));
    // RSS descriptions land in the summary slot
    assert_eq!(entries[0].summary.as_deref(), Some("<p>Body one</p>"));
    assert_eq!(entries[0].description, None);
    assert_eq!(entries[0].content, None);

    // Document order is preserved
    assert_eq!(entries[1].title.as_deref(), Some("Second post"));
    assert_eq!(entries[2].title.as_deref(), Some("Third post"));
}

/// Test Atom parsing into raw entries
#[test]
fn test_parseRawEntries_withAtomFeed_shouldMapFields() {
    let xml = common::sample_atom_feed();
    let entries = parse_raw_entries(xml.as_bytes()).expect("Atom fixture should parse");

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.title.as_deref(), Some("Atom entry"));
    assert_eq!(entry.author.as_deref(), Some("Jane Doe"));
    assert_eq!(entry.link.as_deref(), Some("http://example.com/atom/1"));
    assert_eq!(entry.summary.as_deref(), Some("Short summary"));
    assert_eq!(entry.content.as_deref(), Some("<p>Full body</p>"));
}

/// Test parse failure on content that is not a feed
#[test]
fn test_parseRawEntries_withInvalidContent_shouldReturnParseError() {
    let result = parse_raw_entries(b"this is not a feed");
    assert!(matches!(result, Err(FeedError::Parse(_))));
}

/// Test an RSS channel with no items
#[test]
fn test_parseRawEntries_withEmptyChannel_shouldReturnNoEntries() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>Empty</title><link>http://example.com</link><description>Nothing here</description></channel></rss>"#;
    let entries = parse_raw_entries(xml.as_bytes()).expect("empty channel should parse");
    assert!(entries.is_empty());
}

/// Test body selection priority: summary wins over the other slots
#[test]
fn test_bodyMarkup_withAllSlotsPresent_shouldPickSummary() {
    let entry = RawEntry {
        summary: Some("from summary".to_string()),
        content: Some("from content".to_string()),
        description: Some("from description".to_string()),
        ..RawEntry::default()
    };
    assert_eq!(entry.body_markup(), Some("from summary"));
}

/// Test that empty slots fall through to the next one
#[test]
fn test_bodyMarkup_withEmptySummary_shouldFallThrough() {
    let entry = RawEntry {
        summary: Some(String::new()),
        content: Some("from content".to_string()),
        ..RawEntry::default()
    };
    assert_eq!(entry.body_markup(), Some("from content"));

    let entry = RawEntry {
        summary: None,
        content: Some(String::new()),
        description: Some("from description".to_string()),
        ..RawEntry::default()
    };
    assert_eq!(entry.body_markup(), Some("from description"));
}

/// Test an entry with no usable body at all
#[test]
fn test_bodyMarkup_withNoUsableSlot_shouldReturnNone() {
    assert_eq!(RawEntry::default().body_markup(), None);

    let entry = RawEntry {
        summary: Some(String::new()),
        content: Some(String::new()),
        description: Some(String::new()),
        ..RawEntry::default()
    };
    assert_eq!(entry.body_markup(), None);
}
