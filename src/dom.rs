//! DOM Operations Adapter
//!
//! The narrow DOM-query surface the analysis pipeline consumes, implemented
//! on top of the `dom_query` crate: tag queries in document order, text
//! extraction, and HTML serialization with or without cleanup.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

use crate::patterns::{EXCESS_NEWLINES, INLINE_WHITESPACE, WHITESPACE_RUN};

/// Tags whose text never belongs to a rendering.
pub const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Tags rendered on their own line(s) in plain text.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li",
    "main", "nav", "ol", "p", "pre", "section", "table", "tbody", "td", "tfoot", "th",
    "thead", "tr", "ul",
];

/// Elements dropped from cleaned markup.
const NON_CONTENT_SELECTOR: &str = "script, style, noscript, template";

/// Elements whose whitespace is significant.
const PREFORMATTED_TAGS: &[&str] = &["pre", "textarea"];

/// Elements the HTML parser discards outside a table row.
const TABLE_CELL_TAGS: &[&str] = &["td", "th"];

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Whether the selection's first node is the `<body>` element.
#[must_use]
pub fn is_body_element(sel: &Selection) -> bool {
    tag_name(sel).is_some_and(|t| t == "body")
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Querying ===

/// All elements with the given tag name, one `Selection` per node, in
/// document order.
#[must_use]
pub fn query_by_tag<'a>(doc: &'a Document, tag: &str) -> Vec<Selection<'a>> {
    doc.select(tag)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// The document's `<body>` element, if the parser produced one.
#[must_use]
pub fn body(doc: &Document) -> Option<Selection<'_>> {
    doc.select("body")
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
        .filter(is_body_element)
}

/// Text of the first `<title>` element, untrimmed.
#[must_use]
pub fn title_text(doc: &Document) -> Option<String> {
    doc.select("title")
        .nodes()
        .first()
        .map(|node| Selection::from(*node).text().to_string())
}

// === Text Content ===

/// Get all text content of node and descendants, as the parser stores it.
#[inline]
#[must_use]
pub fn text_of(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Render a node as readable plain text.
///
/// Block elements start on a new line, `<br>` breaks the line, script and
/// style content is dropped. Horizontal whitespace is collapsed, lines are
/// trimmed and no more than one blank line is kept between blocks.
#[must_use]
pub fn render_text(sel: &Selection) -> String {
    let mut raw = String::new();
    for node in sel.nodes() {
        push_text(node, &mut raw);
    }
    normalize_text(&raw)
}

fn push_text(node: &NodeRef, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            out.push_str(&child.text());
        } else if child.is_element() {
            let tag = child
                .node_name()
                .map(|t| t.to_ascii_lowercase())
                .unwrap_or_default();

            if NON_CONTENT_TAGS.contains(&tag.as_str()) {
                continue;
            }
            if tag == "br" {
                out.push('\n');
                continue;
            }

            let is_block = BLOCK_TAGS.contains(&tag.as_str());
            if is_block {
                out.push('\n');
            }
            push_text(&child, out);
            if is_block {
                out.push('\n');
            }
        }
    }
}

/// Collapse whitespace in rendered text while keeping paragraph breaks.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let collapsed = INLINE_WHITESPACE.replace_all(text, " ");
    let lines = collapsed
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    EXCESS_NEWLINES
        .replace_all(&lines, "\n\n")
        .trim()
        .to_string()
}

// === Serialization ===

/// Get outer HTML content
#[inline]
#[must_use]
pub fn to_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Outer HTML with non-content elements and comments removed and
/// whitespace normalized.
///
/// The node is copied into a fragment first; the source document is not
/// modified.
#[must_use]
pub fn to_clean_html(sel: &Selection) -> String {
    let Some(node) = sel.nodes().first() else {
        return String::new();
    };
    let fragment = node.to_fragment();
    fragment
        .root()
        .first_element_child()
        .map(|container| clean_tree(&fragment, &container))
        .unwrap_or_default()
}

/// Normalize serialized markup.
///
/// The markup is parsed back into a fragment and cleaned on the tree:
/// `script`, `style`, `noscript` and `template` elements and comments are
/// removed, whitespace-only text between block elements is dropped and other
/// whitespace runs become a single space. Text inside `pre` and `textarea`
/// and attribute values are left as they are.
///
/// ```
/// use spider_document::dom::clean_markup;
///
/// let html = "<div>\n  <p><b>Hello</b> <i>world</i></p>\n  <script>x()</script>\n</div>";
/// assert_eq!(clean_markup(html), "<div><p><b>Hello</b> <i>world</i></p></div>");
/// ```
#[must_use]
pub fn clean_markup(html: &str) -> String {
    let html = html.trim();
    let is_cell = leading_tag(html).is_some_and(|tag| TABLE_CELL_TAGS.contains(&tag.as_str()));

    if is_cell {
        let fragment = Document::fragment(format!("<table><tbody><tr>{html}</tr></tbody></table>"));
        let row = fragment.select("tr").nodes().first().copied();
        row.map(|row| clean_tree(&fragment, &row)).unwrap_or_default()
    } else {
        let fragment = Document::fragment(html);
        let container = fragment.root().first_element_child();
        container
            .map(|container| clean_tree(&fragment, &container))
            .unwrap_or_default()
    }
}

/// Name of the element markup starts with, lowercased.
fn leading_tag(html: &str) -> Option<String> {
    let rest = html.strip_prefix('<')?;
    let name: String = rest.chars().take_while(char::is_ascii_alphanumeric).collect();
    (!name.is_empty()).then(|| name.to_ascii_lowercase())
}

/// Clean everything below `container` in place and serialize its children.
fn clean_tree(fragment: &Document, container: &NodeRef) -> String {
    fragment.select(NON_CONTENT_SELECTOR).remove();

    for node in container.descendants() {
        if node.is_comment() {
            node.remove_from_parent();
        }
    }

    for node in container.descendants() {
        if !node.is_text() || is_preformatted(&node) {
            continue;
        }
        let text = node.text();
        if !text.trim().is_empty() {
            node.set_text(WHITESPACE_RUN.replace_all(&text, " ").into_owned());
        } else if between_blocks(&node) {
            node.remove_from_parent();
        } else {
            node.set_text(" ");
        }
    }

    container.inner_html().trim().to_string()
}

fn is_preformatted(node: &NodeRef) -> bool {
    node.ancestors_it(None)
        .any(|ancestor| PREFORMATTED_TAGS.iter().any(|tag| ancestor.has_name(tag)))
}

/// Whether block boundaries sit on both sides of a whitespace-only text node.
///
/// Neighbouring whitespace-only text is skipped; a missing sibling counts as
/// a boundary when the parent is itself a block (or the fragment root).
fn between_blocks(node: &NodeRef) -> bool {
    let parent_is_block = node
        .parent()
        .is_some_and(|parent| is_block(&parent) || parent.has_name("html"));

    let boundary = |sibling: Option<NodeRef>| match sibling {
        Some(sibling) => sibling.is_element() && is_block(&sibling),
        None => parent_is_block,
    };

    boundary(significant_sibling(node, NodeRef::prev_sibling))
        && boundary(significant_sibling(node, NodeRef::next_sibling))
}

fn significant_sibling<'a>(
    node: &NodeRef<'a>,
    step: fn(&NodeRef<'a>) -> Option<NodeRef<'a>>,
) -> Option<NodeRef<'a>> {
    let mut current = step(node);
    while let Some(sibling) = current {
        if !(sibling.is_text() && sibling.text().trim().is_empty()) {
            return Some(sibling);
        }
        current = step(&sibling);
    }
    None
}

fn is_block(node: &NodeRef) -> bool {
    node.is_element() && BLOCK_TAGS.iter().any(|tag| node.has_name(tag))
}
