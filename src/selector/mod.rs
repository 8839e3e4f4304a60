//! Main-content selection
//!
//! Walks every `div`, `td` and `span`, keeps the ones that pass the
//! container candidacy rules, and returns the one owning the most text.
//! Rules are simple predicate functions over a `Selection`.

use dom_query::{Document, NodeRef, Selection};

use crate::dom::{self, NON_CONTENT_TAGS};
use crate::link_density::{link_density_test, visible_len};
use crate::Options;

pub mod candidate;
pub mod utils;

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// Tag types examined for content candidates, in iteration order.
pub const CANDIDATE_TAGS: &[&str] = &["div", "td", "span"];

/// Nested elements whose text is not owned by the enclosing candidate.
///
/// `div`, `td` and `table` compete as candidates in their own right; the
/// rest are page furniture.
const NESTED_CONTAINER_TAGS: &[&str] = &[
    "div", "table", "td", "th", "nav", "aside", "header", "footer", "form",
];

/// An element together with its measured content size.
#[derive(Clone)]
pub struct Candidate<'a> {
    /// The candidate element.
    pub node: Selection<'a>,
    /// Owned text size, see [`content_size`].
    pub size: usize,
}

/// Size metric used to compare candidates.
///
/// Counts the non-whitespace characters of text the element owns: text in
/// the element and its inline/paragraph descendants, but not text inside
/// nested `div`/`td`/`table` containers, page furniture (`nav`, `aside`,
/// `header`, `footer`, `form`) or `script`/`style` blocks. A wrapper that
/// only holds other containers therefore measures close to zero.
#[must_use]
pub fn content_size(sel: &Selection) -> usize {
    sel.nodes().first().map_or(0, owned_text_len)
}

fn owned_text_len(node: &NodeRef) -> usize {
    node.children()
        .iter()
        .map(|child| {
            if child.is_text() {
                visible_len(&child.text())
            } else if child.is_element() {
                let tag = child
                    .node_name()
                    .map(|t| t.to_ascii_lowercase())
                    .unwrap_or_default();
                if NESTED_CONTAINER_TAGS.contains(&tag.as_str())
                    || NON_CONTENT_TAGS.contains(&tag.as_str())
                {
                    0
                } else {
                    owned_text_len(child)
                }
            } else {
                0
            }
        })
        .sum()
}

/// Size of the element if it is a container candidate.
fn candidate_size(sel: &Selection, options: &Options) -> Option<usize> {
    if candidate::is_rejected(sel) {
        return None;
    }

    let size = content_size(sel);
    if size < options.min_candidate_size {
        return None;
    }

    if link_density_test(sel, options) {
        return None;
    }

    Some(size)
}

/// Whether the element plausibly holds primary content.
///
/// Rejects elements inside navigation or boilerplate, hidden elements,
/// elements owning less than `options.min_candidate_size` characters and
/// link-heavy elements.
#[must_use]
pub fn is_container_candidate(sel: &Selection, options: &Options) -> bool {
    candidate_size(sel, options).is_some()
}

/// Keep the bigger of two candidates.
///
/// The challenger only wins when it is strictly larger, so on ties the
/// earlier-found candidate stays.
#[must_use]
pub fn compare_size<'a>(challenger: Candidate<'a>, current: Option<Candidate<'a>>) -> Candidate<'a> {
    match current {
        Some(current) if challenger.size <= current.size => current,
        _ => challenger,
    }
}

/// Select the element most likely to hold the page's primary content.
///
/// Elements are visited `div` first, then `td`, then `span`, each in
/// document order; the result is the largest container candidate, or `None`
/// when nothing qualifies.
///
/// # Example
///
/// ```rust
/// use spider_document::{dom, selector, Options};
///
/// let text = "Body text of the story. ".repeat(10);
/// let html = format!(r#"<body><nav><div>Home</div></nav><div id="story"><p>{text}</p></div></body>"#);
/// let doc = dom::parse(&html);
///
/// let biggest = selector::select_biggest(&doc, &Options::default());
/// let node = biggest.map(|c| c.node);
/// assert_eq!(node.and_then(|n| n.attr("id")).as_deref(), Some("story"));
/// ```
#[must_use]
pub fn select_biggest<'a>(doc: &'a Document, options: &Options) -> Option<Candidate<'a>> {
    let mut biggest: Option<Candidate<'a>> = None;

    for tag in CANDIDATE_TAGS {
        for node in dom::query_by_tag(doc, tag) {
            if let Some(size) = candidate_size(&node, options) {
                biggest = Some(compare_size(Candidate { node, size }, biggest));
            }
        }
    }

    match &biggest {
        Some(found) => tracing::trace!(
            tag = %dom::tag_name(&found.node).unwrap_or_default(),
            size = found.size,
            "selected content candidate"
        ),
        None => tracing::debug!("cannot find a content candidate"),
    }

    biggest
}
