//! Relevancy scoring.
//!
//! A document earns one point for having a content block, one for satisfying
//! the desired-keyword filter and one for avoiding the undesired-keyword
//! filter. Points are only ever added, so the score is 0 without content and
//! 1 to 3 with it.
//!
//! An unset filter counts as satisfied. A subscription with a single filter
//! therefore still scores on a 3-point scale.

use std::collections::BTreeSet;

use crate::keywords::{KeywordMatcher, MatchMode};

/// Highest score a document can reach.
pub const MAX_RELEVANCY: u8 = 3;

/// Accumulates relevancy points over the fixed sequence of checks.
pub struct Scorer<'a> {
    matcher: &'a dyn KeywordMatcher,
    relevancy: u8,
}

impl<'a> Scorer<'a> {
    /// A scorer at zero points.
    #[must_use]
    pub fn new(matcher: &'a dyn KeywordMatcher) -> Self {
        Self { matcher, relevancy: 0 }
    }

    fn add_relevancy(&mut self) {
        debug_assert!(self.relevancy < MAX_RELEVANCY, "relevancy added past the maximum");
        self.relevancy += 1;
        tracing::trace!(relevancy = self.relevancy, "current relevancy");
    }

    /// Run all checks and return the final score.
    pub fn score(
        mut self,
        has_content: bool,
        title: &str,
        text: &str,
        contain: Option<&BTreeSet<String>>,
        not_contain: Option<&BTreeSet<String>>,
    ) -> u8 {
        if !has_content {
            tracing::trace!("content too short, relevancy stays at zero");
            return self.relevancy;
        }
        self.add_relevancy();

        let combined = format!("{title}\n{text}");
        tracing::trace!(text = %combined, "text to be verified");

        self.check_desired(&combined, contain);
        self.check_undesired(&combined, not_contain);

        self.relevancy
    }

    fn check_desired(&mut self, text: &str, contain: Option<&BTreeSet<String>>) {
        let Some(keywords) = contain else {
            tracing::trace!("ignore keywords filter");
            self.add_relevancy();
            return;
        };

        tracing::trace!(keywords = %join(keywords), "check for keywords");
        if self.matcher.matches(text, keywords, MatchMode::Any) {
            self.add_relevancy();
        } else {
            tracing::trace!("document does not contain keywords");
        }
    }

    fn check_undesired(&mut self, text: &str, not_contain: Option<&BTreeSet<String>>) {
        let Some(keywords) = not_contain else {
            tracing::trace!("ignore bad keywords filter");
            self.add_relevancy();
            return;
        };

        tracing::trace!(keywords = %join(keywords), "check for bad keywords");
        if self.matcher.matches(text, keywords, MatchMode::Any) {
            tracing::trace!("document contains bad keywords");
        } else {
            self.add_relevancy();
        }
    }
}

fn join(keywords: &BTreeSet<String>) -> String {
    keywords.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

/// Score a document against a subscriber's filters.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeSet;
/// use spider_document::keywords::SubstringMatcher;
/// use spider_document::relevancy::score;
///
/// let bad: BTreeSet<String> = ["casino".to_string()].into();
/// let s = score(&SubstringMatcher, true, "Title", "Online casino reviews", None, Some(&bad));
/// assert_eq!(s, 2);
/// assert_eq!(score(&SubstringMatcher, false, "Title", "", None, None), 0);
/// ```
#[must_use]
pub fn score(
    matcher: &dyn KeywordMatcher,
    has_content: bool,
    title: &str,
    text: &str,
    contain: Option<&BTreeSet<String>>,
    not_contain: Option<&BTreeSet<String>>,
) -> u8 {
    Scorer::new(matcher).score(has_content, title, text, contain, not_contain)
}
