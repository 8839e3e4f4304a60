//! Utility functions for selector rules
//!
//! Attribute access and DOM traversal helpers shared by the candidate rules.

use crate::dom;
use crate::patterns::HIDDEN_STYLE;
use dom_query::Selection;

// === DOM Traversal ===

/// Nearest ancestor whose tag is one of `tags`, if any.
///
/// # Example
///
/// ```rust
/// use spider_document::selector::utils;
/// use spider_document::dom;
///
/// let doc = dom::parse(r#"
///     <nav>
///         <div>
///             <span id="target">text</span>
///         </div>
///     </nav>
/// "#);
/// let span = doc.select("#target");
///
/// let nav = utils::closest_ancestor(&span, &["nav", "footer"]);
/// assert_eq!(nav.as_deref(), Some("nav"));
/// ```
#[must_use]
pub fn closest_ancestor(sel: &Selection, tags: &[&str]) -> Option<String> {
    let mut current = sel.parent();

    while current.exists() {
        if let Some(tag) = dom::tag_name(&current) {
            if tags.contains(&tag.as_str()) {
                return Some(tag);
            }
        }
        current = current.parent();
    }

    None
}

// === Element Attribute Helpers ===

/// Get element ID attribute (empty string if missing)
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> String {
    attr(sel, "id")
}

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    attr(sel, "class")
}

/// Get any attribute (empty string if missing)
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    dom::get_attribute(sel, name).unwrap_or_default()
}

/// Class tokens followed by the id, one name per entry.
///
/// Splitting keeps anchored patterns such as `^nav$` working on
/// multi-class attributes.
#[must_use]
pub fn names(sel: &Selection) -> Vec<String> {
    let mut names: Vec<String> = class(sel).split_whitespace().map(str::to_string).collect();
    let id = id(sel);
    if !id.trim().is_empty() {
        names.push(id.trim().to_string());
    }
    names
}

// === Element Type Checks ===

/// Whether the element is explicitly hidden from rendering.
#[must_use]
pub fn is_hidden(sel: &Selection) -> bool {
    if sel.has_attr("hidden") {
        return true;
    }
    if attr(sel, "aria-hidden").eq_ignore_ascii_case("true") {
        return true;
    }
    HIDDEN_STYLE.is_match(&attr(sel, "style"))
}

/// Check if element is one of the specified tags
#[inline]
#[must_use]
pub fn is_one_of_tags(sel: &Selection, tags: &[&str]) -> bool {
    dom::tag_name(sel).is_some_and(|t| tags.contains(&t.as_str()))
}
