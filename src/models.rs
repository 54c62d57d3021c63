//! Data models for extracted homepage content.
//!
//! This module defines the core data structures passed between the pipeline
//! stages:
//! - [`Article`]: one story block scraped from a homepage
//! - [`ExtractionResult`]: everything extracted from a single homepage fetch
//!
//! All values live only for the duration of one pipeline invocation; nothing
//! here is persisted between runs.

/// A single article block scraped from a homepage.
///
/// Produced by the extractor in document order. Missing elements degrade to
/// optional/empty values rather than failing the extraction:
///
/// * `title` - text of the first `<h2>` inside the article element, `None`
///   when the article has no heading
/// * `summary` - text of the first `<p>` inside the article element, empty
///   when the article has no paragraph; replaced in place with the cleaned
///   form by the normalizer before the result is written out
/// * `link` - href of the first anchor inside the article element itself,
///   `None` when the article contains no anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// The article headline, if one was found.
    pub title: Option<String>,
    /// The lead paragraph (raw on extraction, cleaned after normalization).
    pub summary: String,
    /// The article's own link target, if the article block contains one.
    pub link: Option<String>,
}

/// Everything extracted from one homepage fetch.
///
/// `links` and `articles` are extracted independently from the document:
/// `links` is the href of every anchor on the page in document order (kept
/// opaque - duplicates preserved, no relative-to-absolute resolution, no
/// scheme filtering), while each article carries its own optional link.
/// Output rows are built from the per-article link, never by indexing the
/// page-wide `links` sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// The homepage URL this result was extracted from.
    pub source_url: String,
    /// Every anchor target on the page, in document order.
    pub links: Vec<String>,
    /// Every article block on the page, in document order.
    pub articles: Vec<Article>,
}
