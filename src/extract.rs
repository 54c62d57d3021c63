//! Homepage fetching and parsing.
//!
//! This module turns a news-site homepage into an [`ExtractionResult`]:
//! a single HTTP GET, then a parse pass over the document that collects
//!
//! 1. **Links**: the href of every anchor on the page, in document order,
//!    with no deduplication, no relative-to-absolute resolution, and no
//!    scheme filtering
//! 2. **Articles**: for every `<article>` element, the text of its first
//!    `<h2>` (optional), the text of its first `<p>` (empty when absent),
//!    and the href of its first own anchor (optional)
//!
//! Fetching can fail ([`ExtractError`]); parsing cannot. A page with no
//! articles, no links, or article blocks missing headings just produces
//! empty/optional data.

use crate::error::ExtractError;
use crate::models::{Article, ExtractionResult};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};
use url::Url;

static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static ARTICLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("article").unwrap());
static HEADING_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h2").unwrap());
static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Fetch a homepage and extract its links and article blocks.
///
/// Issues one GET through the shared `client` (which carries the configured
/// timeouts) and parses the body. No retries are performed.
///
/// # Errors
///
/// Returns [`ExtractError`] when the URL is malformed, the request fails in
/// transport, the server answers non-2xx, or the body cannot be read.
#[instrument(level = "info", skip(client))]
pub async fn extract(
    client: &reqwest::Client,
    url: &str,
) -> Result<ExtractionResult, ExtractError> {
    Url::parse(url).map_err(|source| ExtractError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ExtractError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExtractError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| ExtractError::Body {
            url: url.to_string(),
            source,
        })?;

    let result = parse_homepage(url, &body);
    info!(
        links = result.links.len(),
        articles = result.articles.len(),
        "Extracted homepage"
    );
    Ok(result)
}

/// Parse homepage markup into links and article blocks.
///
/// Pure and infallible; missing elements degrade to optional/empty values.
pub fn parse_homepage(source_url: &str, html: &str) -> ExtractionResult {
    let document = Html::parse_document(html);

    let links: Vec<String> = document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect();

    let articles: Vec<Article> = document
        .select(&ARTICLE_SELECTOR)
        .map(|article| {
            let title = article
                .select(&HEADING_SELECTOR)
                .next()
                .map(|h2| element_text(&h2));
            let summary = article
                .select(&PARAGRAPH_SELECTOR)
                .next()
                .map(|p| element_text(&p))
                .unwrap_or_default();
            let link = article
                .select(&ANCHOR_SELECTOR)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(str::to_string);
            Article {
                title,
                summary,
                link,
            }
        })
        .collect();

    debug!(
        source = source_url,
        links = links.len(),
        articles = articles.len(),
        "Parsed homepage document"
    );

    ExtractionResult {
        source_url: source_url.to_string(),
        links,
        articles,
    }
}

/// Collect an element's text nodes into a single trimmed string.
fn element_text(element: &scraper::ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ").trim().to_string()
}
