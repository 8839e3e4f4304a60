//! Keyword matching against extracted text.
//!
//! The scorer only talks to the [`KeywordMatcher`] trait; [`SubstringMatcher`]
//! is the default implementation used when no matcher is supplied.

use std::collections::BTreeSet;

/// How a keyword set must match a text blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// At least one keyword is present.
    #[default]
    Any,
    /// Every keyword is present.
    All,
}

/// Decides whether a text blob satisfies a keyword condition.
pub trait KeywordMatcher: Sync {
    /// Whether `text` satisfies `keywords` under `mode`.
    ///
    /// An empty keyword set never matches.
    fn matches(&self, text: &str, keywords: &BTreeSet<String>, mode: MatchMode) -> bool;
}

/// Case-insensitive substring matcher.
///
/// Keywords are trimmed and compared against the lowercased text, so
/// `"Rust"` matches `"rustacean"` as well as `"RUST"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl KeywordMatcher for SubstringMatcher {
    fn matches(&self, text: &str, keywords: &BTreeSet<String>, mode: MatchMode) -> bool {
        if keywords.is_empty() {
            return false;
        }

        let haystack = text.to_lowercase();
        let mut present = keywords
            .iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .map(|needle| !needle.is_empty() && haystack.contains(&needle));

        match mode {
            MatchMode::Any => present.any(|found| found),
            MatchMode::All => present.all(|found| found),
        }
    }
}
