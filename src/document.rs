//! Document record assembly.
//!
//! Runs the full analysis pipeline for one fetched page, in this order:
//! content selection, optional persistence, text rendering, relevancy
//! scoring, then title and slug.
//! The resulting record owns plain strings only and no longer borrows the
//! DOM it was built from.

use dom_query::{Document, Selection};

use crate::cache::{Cache, NoopCache};
use crate::dom;
use crate::error::Result;
use crate::keywords::{KeywordMatcher, SubstringMatcher};
use crate::relevancy;
use crate::result::{RecordPackage, RecordSummary};
use crate::selector;
use crate::slug::slugify;
use crate::subscription::{self, FilterKind, Subscription};
use crate::Options;

/// Stored in place of the body HTML when the page has no `<body>`.
///
/// Consumers must read it as "extraction degraded", never as page content.
pub const RAW_FALLBACK_SENTINEL: &str = "SpiderDom toHtml with problems!";

/// Optional collaborators for record construction.
///
/// Absent collaborators fall back to [`NoopCache`] and [`SubstringMatcher`].
#[derive(Clone, Copy, Default)]
pub struct Collaborators<'a> {
    /// Durable storage used when `Options::save_document` is set.
    pub cache: Option<&'a dyn Cache>,
    /// Keyword matcher used by the relevancy checks.
    pub matcher: Option<&'a dyn KeywordMatcher>,
}

impl<'a> Collaborators<'a> {
    /// Use `cache` for persistence.
    #[must_use]
    pub fn with_cache(mut self, cache: &'a dyn Cache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Use `matcher` for keyword checks.
    #[must_use]
    pub fn with_matcher(mut self, matcher: &'a dyn KeywordMatcher) -> Self {
        self.matcher = Some(matcher);
        self
    }

    fn cache(&self) -> &'a dyn Cache {
        self.cache.unwrap_or(&NoopCache)
    }

    fn matcher(&self) -> &'a dyn KeywordMatcher {
        self.matcher.unwrap_or(&SubstringMatcher)
    }
}

/// Scored, normalized analysis of one fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    uri: String,
    title: String,
    slug: String,
    text: Option<String>,
    content_html: Option<String>,
    relevancy: u8,
    raw: String,
}

impl DocumentRecord {
    /// Analyze a parsed page for a subscriber.
    ///
    /// Never fails for lack of content, title or filters; only a
    /// structurally invalid subscription is an error. Persistence failures
    /// are logged and do not abort construction.
    ///
    /// The title is read after scoring, so keyword filters only see the
    /// content text, and the cache receives an empty title and slug.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spider_document::{dom, Collaborators, DocumentRecord, KeywordSubscription, Options};
    ///
    /// let text = "Markets rallied today after the announcement. ".repeat(5);
    /// let html = format!("<html><head><title>Markets</title></head><body><div>{text}</div></body></html>");
    /// let doc = dom::parse(&html);
    ///
    /// let sub = KeywordSubscription::new().with_contain(["markets"]);
    /// let record = DocumentRecord::new(
    ///     "https://example.com/markets",
    ///     &doc,
    ///     &sub,
    ///     &Options::default(),
    ///     Collaborators::default(),
    /// )?;
    /// assert_eq!(record.relevancy(), 3);
    /// assert_eq!(record.slug(), "markets");
    /// # Ok::<(), spider_document::Error>(())
    /// ```
    pub fn new(
        uri: impl Into<String>,
        doc: &Document,
        subscription: &dyn Subscription,
        options: &Options,
        collaborators: Collaborators<'_>,
    ) -> Result<Self> {
        subscription::validate(subscription)?;

        let mut record = Self {
            uri: uri.into(),
            title: String::new(),
            slug: String::new(),
            text: None,
            content_html: None,
            relevancy: 0,
            raw: String::new(),
        };

        let span = tracing::debug_span!("document", uri = %record.uri);
        let _entered = span.enter();
        tracing::trace!("processing document");

        // Steps run in a fixed order. Title and slug are only set at the end,
        // so persistence and scoring see them empty.
        let content = selector::select_biggest(doc, options).map(|candidate| candidate.node);

        if options.save_document {
            save_content(collaborators.cache(), content.as_ref(), &record.title, &record.slug);
        }

        record.text = content.as_ref().map(dom::render_text);
        record.content_html = content.as_ref().map(|node| dom::to_html(node).to_string());

        record.relevancy = relevancy::score(
            collaborators.matcher(),
            content.is_some(),
            &record.title,
            record.text.as_deref().unwrap_or_default(),
            subscription.filter(FilterKind::Contain),
            subscription.filter(FilterKind::NotContain),
        );

        record.set_title(derive_title(doc));
        record.raw = raw_fallback(dom::body(doc).as_ref());

        tracing::debug!(title = %record.title, relevancy = record.relevancy, "document analyzed");

        Ok(record)
    }

    /// Store the title and recompute the slug from it.
    fn set_title(&mut self, title: String) {
        self.slug = slugify(&title);
        self.title = title;
        tracing::debug!(title = %self.title, "setting title");
    }

    /// Source location of the page.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Replace the source location, e.g. after a redirect.
    pub fn set_uri(&mut self, uri: impl Into<String>) {
        self.uri = uri.into();
        tracing::debug!(uri = %self.uri, "setting uri");
    }

    /// Trimmed page title, empty when the page has none.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// URL-safe token derived from the title.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Plain text of the content block.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Cleaned, trimmed HTML of the content block.
    ///
    /// Cleaned from the stored markup on every call.
    #[must_use]
    pub fn html(&self) -> Option<String> {
        self.content_html.as_deref().map(dom::clean_markup)
    }

    /// Relevancy score in `[0, 3]`.
    #[must_use]
    pub fn relevancy(&self) -> u8 {
        self.relevancy
    }

    /// Body HTML, or [`RAW_FALLBACK_SENTINEL`].
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether a content block was found.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.text.is_some()
    }

    /// Relevancy and title only.
    #[must_use]
    pub fn to_summary(&self) -> RecordSummary {
        RecordSummary {
            relevancy: self.relevancy,
            title: self.title.clone(),
        }
    }

    /// Every field, ready to outlive the DOM.
    #[must_use]
    pub fn to_package(&self) -> RecordPackage {
        RecordPackage {
            relevancy: self.relevancy,
            uri: self.uri.clone(),
            title: self.title.clone(),
            slug: self.slug.clone(),
            text: self.text.clone(),
            html: self.html(),
            raw: self.raw.clone(),
        }
    }
}

fn derive_title(doc: &Document) -> String {
    dom::title_text(doc)
        .map(|title| title.trim().to_string())
        .unwrap_or_default()
}

fn raw_fallback(body: Option<&Selection>) -> String {
    match body {
        Some(body) if dom::is_body_element(body) => dom::to_html(body).to_string(),
        _ => {
            tracing::warn!("body element not found, storing raw fallback sentinel");
            RAW_FALLBACK_SENTINEL.to_string()
        }
    }
}

fn save_content(cache: &dyn Cache, content: Option<&Selection>, title: &str, slug: &str) {
    let Some(node) = content else {
        tracing::debug!("nothing to save, no content block");
        return;
    };

    let header = format!("# {title}\n\n");
    if let Err(err) = cache.save_html_file(&dom::to_clean_html(node), slug) {
        tracing::warn!(error = %err, slug, "failed to save document html");
    }
    if let Err(err) = cache.save_text_file(&dom::render_text(node), slug, &header) {
        tracing::warn!(error = %err, slug, "failed to save document text");
    }
}
