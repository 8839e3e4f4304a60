//! # spider-document
//!
//! The analysis stage of a crawling pipeline: given a fetched page, pick its
//! main-content block, render it as text and clean HTML, derive a title and
//! slug, and score how relevant the page is to a subscriber's keywords.
//!
//! ## Quick Start
//!
//! ```rust
//! use spider_document::{analyze, KeywordSubscription};
//!
//! let story = "The council approved the new cycling lanes on Tuesday. ".repeat(4);
//! let html = format!(
//!     "<html><head><title>City news</title></head><body><div>{story}</div></body></html>"
//! );
//! let subscription = KeywordSubscription::new()
//!     .with_contain(["cycling"])
//!     .with_not_contain(["casino"]);
//!
//! let record = analyze("https://example.com/news/1", &html, &subscription)?;
//! assert_eq!(record.relevancy(), 3);
//! assert_eq!(record.slug(), "city-news");
//! println!("{}", serde_json::to_string(&record.to_package()).unwrap_or_default());
//! # Ok::<(), spider_document::Error>(())
//! ```
//!
//! ## Relevancy
//!
//! | Score | Meaning |
//! |---|---|
//! | 0 | no content block found |
//! | 1 | content, but wanted keywords missing and unwanted keywords present |
//! | 2 | content and one of the two keyword filters satisfied |
//! | 3 | content and both keyword filters satisfied |
//!
//! An unset filter always counts as satisfied.

mod document;
mod error;
mod options;
mod result;

/// DOM query adapter over `dom_query`.
pub mod dom;

/// Compiled regex patterns.
pub mod patterns;

/// Main-content candidate selection.
pub mod selector;

/// Link density testing for navigation detection.
pub mod link_density;

/// Keyword matching.
pub mod keywords;

/// Subscriber keyword filters.
pub mod subscription;

/// Relevancy scoring.
pub mod relevancy;

/// Slug generation.
pub mod slug;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Durable storage for extracted content.
pub mod cache;

// Public API - re-exports
pub use cache::{Cache, FileCache, NoopCache};
pub use document::{Collaborators, DocumentRecord, RAW_FALLBACK_SENTINEL};
pub use error::{Error, Result};
pub use keywords::{KeywordMatcher, MatchMode, SubstringMatcher};
pub use options::Options;
pub use result::{RecordPackage, RecordSummary};
pub use subscription::{FilterKind, KeywordSubscription, Subscription};

/// Analyzes an HTML page with default options and collaborators.
///
/// # Example
///
/// ```rust
/// use spider_document::{analyze, KeywordSubscription};
///
/// let record = analyze("https://example.com", "<html><body>Nothing here</body></html>", &KeywordSubscription::new())?;
/// assert_eq!(record.relevancy(), 0);
/// assert!(record.text().is_none());
/// # Ok::<(), spider_document::Error>(())
/// ```
pub fn analyze(uri: &str, html: &str, subscription: &dyn Subscription) -> Result<DocumentRecord> {
    analyze_with_options(uri, html, subscription, &Options::default(), Collaborators::default())
}

/// Analyzes an HTML page with custom options and collaborators.
///
/// # Example
///
/// ```rust
/// use spider_document::{analyze_with_options, Collaborators, KeywordSubscription, NoopCache, Options};
///
/// let options = Options { save_document: true, min_candidate_size: 10, ..Options::default() };
/// let collaborators = Collaborators::default().with_cache(&NoopCache);
/// let html = "<html><body><div>Short but accepted text</div></body></html>";
/// let record = analyze_with_options("u", html, &KeywordSubscription::new(), &options, collaborators)?;
/// assert_eq!(record.relevancy(), 3);
/// # Ok::<(), spider_document::Error>(())
/// ```
pub fn analyze_with_options(
    uri: &str,
    html: &str,
    subscription: &dyn Subscription,
    options: &Options,
    collaborators: Collaborators<'_>,
) -> Result<DocumentRecord> {
    let doc = dom::parse(html);
    DocumentRecord::new(uri, &doc, subscription, options, collaborators)
}

/// Analyzes a raw response body, decoding it to UTF-8 first.
///
/// `content_type` is the response's `Content-Type` header, if known; its
/// charset wins over meta declarations in the page.
///
/// # Example
///
/// ```rust
/// use spider_document::{analyze_bytes, KeywordSubscription};
///
/// let body = b"<html><head><title>Caf\xE9</title></head><body></body></html>";
/// let record = analyze_bytes("u", body, Some("text/html; charset=ISO-8859-1"), &KeywordSubscription::new())?;
/// assert_eq!(record.title(), "Café");
/// assert_eq!(record.slug(), "cafe");
/// # Ok::<(), spider_document::Error>(())
/// ```
pub fn analyze_bytes(
    uri: &str,
    body: &[u8],
    content_type: Option<&str>,
    subscription: &dyn Subscription,
) -> Result<DocumentRecord> {
    let html = encoding::transcode_to_utf8(body, content_type);
    analyze(uri, &html, subscription)
}
