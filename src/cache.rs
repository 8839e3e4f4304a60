//! Durable storage for extracted content.
//!
//! Record construction only calls the cache when `Options::save_document`
//! is set, and treats every failure as non-fatal.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File stem used when a document has an empty slug.
pub const FALLBACK_STEM: &str = "document";

/// Writes extracted content somewhere durable.
pub trait Cache: Sync {
    /// Store the cleaned HTML of a content block under `slug`.
    fn save_html_file(&self, html: &str, slug: &str) -> Result<()>;

    /// Store the plain-text rendering of a content block under `slug`,
    /// prefixed with `header`.
    fn save_text_file(&self, text: &str, slug: &str, header: &str) -> Result<()>;
}

/// Cache that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

impl Cache for NoopCache {
    fn save_html_file(&self, _html: &str, _slug: &str) -> Result<()> {
        Ok(())
    }

    fn save_text_file(&self, _text: &str, _slug: &str, _header: &str) -> Result<()> {
        Ok(())
    }
}

/// Cache writing `{slug}.html` and `{slug}.txt` into a directory.
///
/// The directory is created on first write. Existing files are overwritten.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// A cache rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory files are written to.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a slug is stored under, with the given extension.
    #[must_use]
    pub fn path_for(&self, slug: &str, extension: &str) -> PathBuf {
        let stem = if slug.is_empty() { FALLBACK_STEM } else { slug };
        self.dir.join(format!("{stem}.{extension}"))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(path, contents)?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "saved document file");
        Ok(())
    }
}

impl Cache for FileCache {
    fn save_html_file(&self, html: &str, slug: &str) -> Result<()> {
        self.write(&self.path_for(slug, "html"), html)
    }

    fn save_text_file(&self, text: &str, slug: &str, header: &str) -> Result<()> {
        self.write(&self.path_for(slug, "txt"), &format!("{header}{text}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_cache_accepts_everything() {
        assert!(NoopCache.save_html_file("<p>x</p>", "x").is_ok());
        assert!(NoopCache.save_text_file("x", "x", "# x\n\n").is_ok());
    }

    #[test]
    fn test_file_cache_writes_both_files() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = FileCache::new(tmp.path().join("nested"));

        cache.save_html_file("<p>Hello</p>", "hello").unwrap();
        cache.save_text_file("Hello", "hello", "# Hello\n\n").unwrap();

        let html = fs::read_to_string(cache.dir().join("hello.html")).unwrap();
        let text = fs::read_to_string(cache.dir().join("hello.txt")).unwrap();
        assert_eq!(html, "<p>Hello</p>");
        assert_eq!(text, "# Hello\n\nHello");
    }

    #[test]
    fn test_empty_slug_uses_fallback_stem() {
        let cache = FileCache::new("/tmp/unused");
        assert!(cache.path_for("", "txt").ends_with("document.txt"));
        assert!(cache.path_for("abc", "html").ends_with("abc.html"));
    }

    #[test]
    fn test_file_cache_reports_io_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();

        let cache = FileCache::new(&blocker);
        let err = cache.save_html_file("<p>x</p>", "x");
        assert!(matches!(err, Err(crate::Error::Persistence(_))));
    }
}
