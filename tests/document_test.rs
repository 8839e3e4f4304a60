use spider_document::{
    analyze, dom, Collaborators, DocumentRecord, Error, KeywordSubscription, Options,
    RAW_FALLBACK_SENTINEL,
};

fn page(title: &str, body: &str) -> String {
    format!("<html><head><title>{title}</title></head><body>{body}</body></html>")
}

fn content_div(marker: &str) -> String {
    let sentence = "This sentence carries enough words to count as real content. ";
    format!("<div><p>{marker} {}</p></div>", sentence.repeat(4))
}

fn record(html: &str, subscription: &KeywordSubscription) -> DocumentRecord {
    match analyze("https://example.com/story", html, subscription) {
        Ok(record) => record,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn breaking_news_scenario() {
    let text = "a".repeat(500);
    let html = page("Breaking News", &format!("<div>{text}</div>"));
    let record = record(&html, &KeywordSubscription::new());

    assert_eq!(record.relevancy(), 3);
    assert_eq!(record.title(), "Breaking News");
    assert_eq!(record.slug(), "breaking-news");
    assert_eq!(record.text(), Some(text.as_str()));
    assert_eq!(record.html(), Some(format!("<div>{text}</div>")));
}

#[test]
fn no_candidate_means_zero_and_no_text() {
    let html = page("Nav only", "<nav><div>Home</div></nav><div>Too short</div><span>tiny</span>");
    let record = record(&html, &KeywordSubscription::new().with_contain(["home"]));

    assert_eq!(record.relevancy(), 0);
    assert!(record.text().is_none());
    assert!(record.html().is_none());
}

#[test]
fn both_filters_null_scores_three() {
    let record = record(&page("T", &content_div("ANY")), &KeywordSubscription::new());
    assert_eq!(record.relevancy(), 3);
}

#[test]
fn desired_keyword_in_text_scores_at_least_two() {
    let sub = KeywordSubscription::new().with_contain(["x"]);
    let record = record(&page("T", &content_div("x marks the spot")), &sub);
    assert!(record.relevancy() >= 2);
    assert_eq!(record.relevancy(), 3);
}

#[test]
fn undesired_keyword_in_text_scores_exactly_two() {
    let sub = KeywordSubscription::new().with_not_contain(["bad"]);
    let record = record(&page("T", &content_div("some bad news")), &sub);
    assert_eq!(record.relevancy(), 2);
}

#[test]
fn both_filters_failing_scores_one() {
    let sub = KeywordSubscription::new()
        .with_contain(["rust"])
        .with_not_contain(["bad"]);
    let record = record(&page("T", &content_div("some bad news")), &sub);
    assert_eq!(record.relevancy(), 1);
}

#[test]
fn title_is_ignored_by_keyword_filters() {
    let want = KeywordSubscription::new().with_contain(["elections"]);
    let first = record(&page("Elections 2026", &content_div("results")), &want);
    assert_eq!(first.relevancy(), 2);
    assert_eq!(first.title(), "Elections 2026");

    let avoid = KeywordSubscription::new().with_not_contain(["bad"]);
    let record = record(&page("Bad Day", &content_div("calm")), &avoid);
    assert_eq!(record.relevancy(), 3);
    assert_eq!(record.slug(), "bad-day");
}

#[test]
fn html_keeps_word_boundaries_between_inline_elements() {
    let body = format!(
        "<div><p><b>Hello</b> <i>world</i> {}</p>\n<script>track()</script></div>",
        "filler text for the block ".repeat(4)
    );
    let record = record(&page("T", &body), &KeywordSubscription::new());
    let html = record.html().unwrap_or_default();
    assert!(html.starts_with("<div><p><b>Hello</b> <i>world</i> filler"));
    assert!(!html.contains("track"));
}

#[test]
fn slug_is_a_pure_function_of_title() {
    let title = "A very long headline about a number of different things";
    let a = record(&page(title, &content_div("one")), &KeywordSubscription::new());
    let b = record(&page(title, "<p>nothing</p>"), &KeywordSubscription::new().with_contain(["z"]));

    assert_eq!(a.slug(), b.slug());
    assert!(a.slug().chars().count() <= 30);
    assert_eq!(a.slug(), "a-very-long-headline-about-a-n");
}

#[test]
fn package_always_carries_raw() {
    let empty = record(&page("Empty", ""), &KeywordSubscription::new());
    let package = empty.to_package();
    assert!(package.text.is_none());
    assert!(package.html.is_none());
    assert!(package.raw.starts_with("<body"));
    assert_ne!(package.raw, RAW_FALLBACK_SENTINEL);

    let full = record(&page("Full", &content_div("M")), &KeywordSubscription::new());
    let package = full.to_package();
    assert_eq!(package.text.as_deref(), full.text());
    assert_eq!(package.html, full.html());
    assert_eq!(package.slug, "full");
    assert_eq!(package.uri, "https://example.com/story");
}

#[test]
fn html_is_idempotent() {
    let record = record(&page("T", &content_div("same")), &KeywordSubscription::new());
    let first = record.html();
    assert!(first.is_some());
    assert_eq!(first, record.html());
}

#[test]
fn summary_has_relevancy_and_title() {
    let record = record(&page(" Spaced title ", &content_div("z")), &KeywordSubscription::new());
    let summary = record.to_summary();
    assert_eq!(summary.relevancy, 3);
    assert_eq!(summary.title, "Spaced title");

    let json = serde_json::to_value(&summary).unwrap_or_default();
    assert_eq!(json["relevancy"], 3);
    assert_eq!(json["title"], "Spaced title");
}

#[test]
fn package_serializes_absent_fields_as_null() {
    let record = record(&page("T", ""), &KeywordSubscription::new());
    let json = serde_json::to_value(record.to_package()).unwrap_or_default();
    assert!(json["text"].is_null());
    assert!(json["html"].is_null());
    assert_eq!(json["relevancy"], 0);
    assert!(json["raw"].is_string());
}

#[test]
fn record_outlives_the_dom() {
    let record = {
        let doc = dom::parse(&page("Scoped", &content_div("kept")));
        DocumentRecord::new("u", &doc, &KeywordSubscription::new(), &Options::default(), Collaborators::default())
    };
    match record {
        Ok(record) => assert!(record.text().is_some_and(|t| t.contains("kept"))),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn blank_keyword_is_a_construction_fault() {
    let sub = KeywordSubscription::new().with_not_contain(["ok", " "]);
    let result = analyze("u", &page("T", &content_div("x")), &sub);
    assert!(matches!(result, Err(Error::InvalidSubscription(_))));
}

#[test]
fn records_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DocumentRecord>();
    assert_send_sync::<Options>();
    assert_send_sync::<KeywordSubscription>();
}
