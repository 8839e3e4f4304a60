//! URL-safe slugs derived from document titles.

use crate::patterns::SLUG_SEPARATOR;

/// Maximum slug length, in characters.
pub const MAX_SLUG_LEN: usize = 30;

/// ASCII replacement for common accented Latin letters.
fn fold_char(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "a",
        'æ' | 'Æ' => "ae",
        'ç' | 'ć' | 'č' | 'Ç' | 'Ć' | 'Č' => "c",
        'ď' | 'đ' | 'Ď' | 'Đ' | 'ð' | 'Ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => "e",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ę' | 'Ě' => "e",
        'ğ' | 'Ğ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ı' | 'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' | 'İ' => "i",
        'ł' | 'ľ' | 'Ł' | 'Ľ' => "l",
        'ñ' | 'ń' | 'ň' | 'Ñ' | 'Ń' | 'Ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ő' => "o",
        'œ' | 'Œ' => "oe",
        'ř' | 'Ř' => "r",
        'ś' | 'š' | 'ş' | 'Ś' | 'Š' | 'Ş' => "s",
        'ß' => "ss",
        'ť' | 'ţ' | 'Ť' | 'Ţ' => "t",
        'þ' | 'Þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' | 'Ű' => "u",
        'ý' | 'ÿ' | 'Ý' | 'Ÿ' => "y",
        'ź' | 'ż' | 'ž' | 'Ź' | 'Ż' | 'Ž' => "z",
        _ => return None,
    };
    Some(folded)
}

/// Turn arbitrary text into a lowercase, dash-separated token.
///
/// Accented Latin letters are folded to ASCII; every other run of
/// characters outside `[a-z0-9]` becomes a single dash, and leading and
/// trailing dashes are dropped.
///
/// ```rust
/// use spider_document::slug::urlize;
///
/// assert_eq!(urlize("  Breaking News!  "), "breaking-news");
/// assert_eq!(urlize("Ação & Reação"), "acao-reacao");
/// ```
#[must_use]
pub fn urlize(text: &str) -> String {
    let mut ascii = String::with_capacity(text.len());
    for c in text.chars() {
        match fold_char(c) {
            Some(folded) => ascii.push_str(folded),
            None => ascii.extend(c.to_lowercase()),
        }
    }

    SLUG_SEPARATOR
        .replace_all(&ascii, "-")
        .trim_matches('-')
        .to_string()
}

/// Slug for a title: [`urlize`] truncated to [`MAX_SLUG_LEN`] characters.
///
/// The truncation is a plain cut, so a slug may end in a dash.
#[must_use]
pub fn slugify(title: &str) -> String {
    urlize(title).chars().take(MAX_SLUG_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlize_basic() {
        assert_eq!(urlize("Breaking News"), "breaking-news");
        assert_eq!(urlize("Hello,   World -- 2024"), "hello-world-2024");
    }

    #[test]
    fn test_urlize_folds_accents() {
        assert_eq!(urlize("Crème Brûlée"), "creme-brulee");
        assert_eq!(urlize("Straße"), "strasse");
    }

    #[test]
    fn test_urlize_drops_non_latin() {
        assert_eq!(urlize("日本 news"), "news");
        assert_eq!(urlize("!!!"), "");
    }

    #[test]
    fn test_slugify_truncates() {
        let slug = slugify("The quick brown fox jumps over the lazy dog");
        assert_eq!(slug, "the-quick-brown-fox-jumps-over");
        assert_eq!(slug.chars().count(), MAX_SLUG_LEN);
    }

    #[test]
    fn test_slugify_short_and_empty() {
        assert_eq!(slugify("Breaking News"), "breaking-news");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_deterministic() {
        let title = "Ação Política: o que muda em 2025?";
        assert_eq!(slugify(title), slugify(title));
        assert!(slugify(title).len() <= MAX_SLUG_LEN);
    }
}
