//! Link Density Testing
//!
//! Blocks whose text is mostly link labels are menus, tag clouds or "related"
//! lists rather than content.

use dom_query::Selection;

use crate::dom;
use crate::Options;

/// Collect heuristics on link text.
///
/// Returns (total_link_length, num_non_empty_links), lengths counted in
/// non-whitespace characters.
fn collect_link_info(links: &Selection) -> (usize, usize) {
    let mut link_length = 0;
    let mut n_non_empty_links = 0;

    for link in links.iter() {
        let text_length = visible_len(&dom::text_of(&link));
        if text_length == 0 {
            continue;
        }
        link_length += text_length;
        n_non_empty_links += 1;
    }

    (link_length, n_non_empty_links)
}

/// Count non-whitespace characters.
#[must_use]
pub fn visible_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Share of the element's text that sits inside `<a>` elements, in `[0, 1]`.
///
/// Elements without text have a density of 0.
#[must_use]
pub fn link_density(element: &Selection) -> f64 {
    let links = element.select("a");
    if links.length() == 0 {
        return 0.0;
    }

    let text_length = visible_len(&dom::text_of(element));
    if text_length == 0 {
        return 0.0;
    }

    let (link_length, _) = collect_link_info(&links);
    (link_length as f64 / text_length as f64).min(1.0)
}

/// Whether the element is too link-heavy to be a content container.
#[must_use]
pub fn link_density_test(element: &Selection, options: &Options) -> bool {
    let links = element.select("a");
    let (_, n_non_empty_links) = collect_link_info(&links);
    if n_non_empty_links == 0 {
        return false;
    }

    link_density(element) > options.max_link_density
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_links() {
        let doc = dom::parse("<div id='t'>plain text only</div>");
        let sel = doc.select("#t");
        assert_eq!(link_density(&sel), 0.0);
        assert!(!link_density_test(&sel, &Options::default()));
    }

    #[test]
    fn test_menu_is_link_heavy() {
        let doc = dom::parse(
            "<div id='t'><a href='/'>Home</a> | <a href='/a'>About</a> | <a href='/c'>Contact</a></div>",
        );
        let sel = doc.select("#t");
        assert!(link_density(&sel) > 0.8);
        assert!(link_density_test(&sel, &Options::default()));
    }

    #[test]
    fn test_prose_with_one_link_passes() {
        let doc = dom::parse(
            "<div id='t'>A long paragraph of ordinary prose that mentions <a href='/x'>one source</a> in passing and moves on.</div>",
        );
        let sel = doc.select("#t");
        assert!(link_density(&sel) < 0.2);
        assert!(!link_density_test(&sel, &Options::default()));
    }

    #[test]
    fn test_threshold_comes_from_options() {
        let doc = dom::parse("<div id='t'>abcdefghij <a href='/x'>klmnopqrst</a></div>");
        let sel = doc.select("#t");
        let strict = Options { max_link_density: 0.4, ..Options::default() };
        let lenient = Options { max_link_density: 0.6, ..Options::default() };
        assert!(link_density_test(&sel, &strict));
        assert!(!link_density_test(&sel, &lenient));
    }

    #[test]
    fn test_visible_len_ignores_whitespace() {
        assert_eq!(visible_len("  a b\n\tc  "), 3);
    }
}
