//! Raw response cleanup: charset detection and transcoding.
//!
//! Fetched bodies arrive as bytes in whatever charset the server used. The
//! charset is taken from a byte-order mark, then the `Content-Type` header,
//! then the page's own meta tags, falling back to UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// `charset=` parameter inside a `Content-Type` value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// `<meta charset="...">` or the http-equiv form, whichever comes first.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;/>]+)"#).expect("valid regex")
});

/// Bytes of the body inspected for meta declarations.
const SNIFF_LEN: usize = 1024;

/// Charset label from a `Content-Type` header value.
#[must_use]
pub fn header_charset(content_type: &str) -> Option<&str> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Charset label declared by a meta tag near the top of the page.
fn meta_charset(head: &str) -> Option<&str> {
    META_CHARSET_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Detect the character encoding of a response body.
///
/// `content_type` is the response's `Content-Type` header, if known.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(body) {
        return encoding;
    }

    let from_header = content_type
        .and_then(header_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()));
    if let Some(encoding) = from_header {
        return encoding;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(SNIFF_LEN)]);
    meta_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode a response body to UTF-8.
///
/// Invalid sequences become U+FFFD instead of failing.
///
/// ```
/// use spider_document::encoding::transcode_to_utf8;
///
/// let body = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(transcode_to_utf8(body, None).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);
    let (decoded, used, had_errors) = encoding.decode(body);
    if had_errors {
        tracing::debug!(encoding = used.name(), "body contained undecodable bytes");
    }
    decoded.into_owned()
}
