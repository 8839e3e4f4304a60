use std::fs;
use std::sync::Mutex;

use spider_document::{
    analyze_with_options, Cache, Collaborators, Error, FileCache, KeywordSubscription, Options,
    Result,
};

const HTML: &str = r#"<html><head><title>Saved Story</title></head><body>
    <div id="story"><p>This story is long enough to be picked as the content block of the page.</p>
    <script>var skipped = true;</script></div>
</body></html>"#;

fn save_options() -> Options {
    Options {
        save_document: true,
        ..Options::default()
    }
}

#[derive(Default)]
struct RecordingCache {
    writes: Mutex<Vec<(String, String)>>,
}

impl Cache for RecordingCache {
    fn save_html_file(&self, html: &str, slug: &str) -> Result<()> {
        self.writes.lock().map_err(|_| std::io::Error::other("poisoned"))?.push((slug.to_string(), html.to_string()));
        Ok(())
    }

    fn save_text_file(&self, text: &str, slug: &str, header: &str) -> Result<()> {
        self.writes
            .lock()
            .map_err(|_| std::io::Error::other("poisoned"))?
            .push((slug.to_string(), format!("{header}{text}")));
        Ok(())
    }
}

struct FailingCache;

impl Cache for FailingCache {
    fn save_html_file(&self, _html: &str, _slug: &str) -> Result<()> {
        Err(Error::Persistence(std::io::Error::other("disk full")))
    }

    fn save_text_file(&self, _text: &str, _slug: &str, _header: &str) -> Result<()> {
        Err(Error::Persistence(std::io::Error::other("disk full")))
    }
}

#[test]
fn file_cache_receives_html_and_text() {
    let tmp = match tempfile::tempdir() {
        Ok(tmp) => tmp,
        Err(err) => panic!("tempdir: {err}"),
    };
    let cache = FileCache::new(tmp.path());
    let collaborators = Collaborators::default().with_cache(&cache);

    let result = analyze_with_options("u", HTML, &KeywordSubscription::new(), &save_options(), collaborators);
    assert!(matches!(&result, Ok(record) if record.relevancy() == 3));

    // Persistence runs before the title is read, so the fallback stem is used.
    let html = fs::read_to_string(tmp.path().join("document.html")).unwrap_or_default();
    let text = fs::read_to_string(tmp.path().join("document.txt")).unwrap_or_default();

    assert!(html.starts_with(r#"<div id="story"><p>This story"#));
    assert!(!html.contains("skipped"));
    assert!(text.starts_with("# \n\nThis story is long enough"));
    assert!(!text.contains("skipped"));
}

#[test]
fn nothing_saved_when_option_off() {
    let cache = RecordingCache::default();
    let collaborators = Collaborators::default().with_cache(&cache);

    let result = analyze_with_options("u", HTML, &KeywordSubscription::new(), &Options::default(), collaborators);
    assert!(result.is_ok());
    assert!(cache.writes.lock().map(|w| w.is_empty()).unwrap_or(false));
}

#[test]
fn nothing_saved_without_content() {
    let cache = RecordingCache::default();
    let collaborators = Collaborators::default().with_cache(&cache);
    let html = "<html><head><title>Empty</title></head><body><p>short</p></body></html>";

    let result = analyze_with_options("u", html, &KeywordSubscription::new(), &save_options(), collaborators);
    assert!(matches!(&result, Ok(record) if record.relevancy() == 0));
    assert!(cache.writes.lock().map(|w| w.is_empty()).unwrap_or(false));
}

#[test]
fn cache_runs_before_title_and_slug_are_set() {
    let cache = RecordingCache::default();
    let collaborators = Collaborators::default().with_cache(&cache);

    let result = analyze_with_options("u", HTML, &KeywordSubscription::new(), &save_options(), collaborators);
    assert!(result.is_ok());

    let writes = cache.writes.lock().map(|w| w.clone()).unwrap_or_default();
    assert_eq!(writes.len(), 2);
    assert!(writes.iter().all(|(slug, _)| slug.is_empty()));
    assert!(writes[1].1.starts_with("# \n\nThis story"));

    let record = result.unwrap_or_else(|err| panic!("analysis failed: {err}"));
    assert_eq!(record.title(), "Saved Story");
    assert_eq!(record.slug(), "saved-story");
}

#[test]
fn failing_cache_does_not_abort_construction() {
    let collaborators = Collaborators::default().with_cache(&FailingCache);

    let result = analyze_with_options("u", HTML, &KeywordSubscription::new(), &save_options(), collaborators);
    match result {
        Ok(record) => {
            assert_eq!(record.relevancy(), 3);
            assert_eq!(record.slug(), "saved-story");
            assert!(record.text().is_some());
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}
