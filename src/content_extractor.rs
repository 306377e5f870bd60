/*!
 * Flattening of feed-entry markup into plain text.
 *
 * Feed bodies arrive as HTML fragments of wildly varying quality. The
 * summarization and translation models want flat prose, so everything that
 * is not a text node gets discarded before an entry enters the pipeline.
 */

use scraper::Html;

/// Extract the text content of an HTML fragment.
///
/// Text nodes are concatenated in document order with no separator inserted
/// between them, so whitespace in the output is exactly the whitespace the
/// markup carried. Tags, attributes, and comments contribute nothing. Entity
/// references are decoded. Empty or malformed input yields an empty string,
/// never an error; the parser recovers from anything.
pub fn extract_text(markup: &str) -> String {
    if markup.is_empty() {
        return String::new();
    }
    let document = Html::parse_document(markup);
    document.root_element().text().collect()
}
