//! Container candidacy rules
//!
//! A container candidate is an element that could plausibly hold the page's
//! primary content. The structural rules here reject navigation, hidden and
//! boilerplate blocks; size and link density are checked in `selector`.

use dom_query::Selection;

use super::utils::{closest_ancestor, is_hidden, is_one_of_tags, names};
use super::Rule;
use crate::patterns::{BOILERPLATE_CLASS, NAVIGATION_CLASS};

/// Ancestors that disqualify everything beneath them.
pub const EXCLUDED_ANCESTOR_TAGS: &[&str] = &[
    "nav", "header", "footer", "aside", "form", "script", "style", "noscript", "template",
];

/// Rejection rules, cheapest first. A node matching any rule is not a candidate.
pub const REJECTION_RULES: &[Rule] = &[
    has_boilerplate_name,
    is_hidden,
    inside_boilerplate_ancestor,
];

/// Whether a class token or the id names a navigation or boilerplate block.
#[must_use]
pub fn has_boilerplate_name(sel: &Selection) -> bool {
    names(sel)
        .iter()
        .any(|name| NAVIGATION_CLASS.is_match(name) || BOILERPLATE_CLASS.is_match(name))
}

/// Whether any ancestor below `<body>` is an excluded tag, hidden, or named
/// like boilerplate.
#[must_use]
pub fn inside_boilerplate_ancestor(sel: &Selection) -> bool {
    if closest_ancestor(sel, EXCLUDED_ANCESTOR_TAGS).is_some() {
        return true;
    }

    let mut current = sel.parent();
    while current.exists() {
        if is_one_of_tags(&current, &["body", "html"]) {
            return false;
        }
        if is_hidden(&current) || has_boilerplate_name(&current) {
            return true;
        }
        current = current.parent();
    }

    false
}

/// Whether any structural rejection rule matches.
#[must_use]
pub fn is_rejected(sel: &Selection) -> bool {
    REJECTION_RULES.iter().any(|rule| rule(sel))
}
