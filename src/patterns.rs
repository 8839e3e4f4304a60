//! Compiled regex patterns used by candidate selection and text cleanup.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Boilerplate Detection Patterns
// =============================================================================

/// Matches class/id names indicating navigation elements.
///
/// "nav" is only matched as a whole token or at a token edge, so layout
/// containers like `in-page-nav-container` are not rejected.
pub static NAVIGATION_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(^nav$|^nav[-_]|[-_]nav$|navbar|navigation|top[-_]?nav|main[-_]?menu|site[-_]?nav|\bmenu\b|site[-_]?footer|site[-_]?header|page[-_]?header|page[-_]?footer|breadcrumbs?)",
    )
    .expect("NAVIGATION_CLASS regex")
});

/// Matches class/id names indicating boilerplate blocks around the content.
pub static BOILERPLATE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\bcomments?\b|shar(?:e|ing)|social|related|recommend(?:ed)?|\bfooter\b|copyright|disclaimer|cookie[-_]?(?:consent|notice|banner)|\bsidebar\b|\bwidget\b|newsletter|\bsubscribe\b|\blogin\b|\bsignup\b|taboola|outbrain|\bads?\b|advert(?:isement)?|sponsor(?:ed)?|promo)",
    )
    .expect("BOILERPLATE_CLASS regex")
});

/// Matches an inline style that hides the element.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(display\s*:\s*none|visibility\s*:\s*hidden)").expect("HIDDEN_STYLE regex")
});

// =============================================================================
// Text Normalization Patterns
// =============================================================================

/// Matches any run of whitespace.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Matches horizontal whitespace runs (spaces, tabs, nbsp) inside a line.
pub static INLINE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\u{00a0}]+").expect("INLINE_WHITESPACE regex"));

/// Matches three or more line breaks (with optional blank padding).
pub static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").expect("EXCESS_NEWLINES regex"));

/// Matches runs of characters that are not allowed in a slug.
pub static SLUG_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("SLUG_SEPARATOR regex"));
