//! Bare-URL linkification
//!
//! Runs after restoration and layout fixing: any URL still sitting in plain
//! text becomes a clickable anchor. Existing anchors, `<img>` tags, and
//! embed containers are emitted unchanged; only the text between them is
//! rewritten. Video-host and image-extension URLs are skipped as a safety
//! net (the embed pipeline already owns those).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use url::Url;

use crate::embed;

static SKIP_SPANS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)<a\b[^>]*>.*?</a>|<img\b[^>]*>|<div class="video-container">.*?</div>|<div class="image-container[^"]*">.*?</div>"#,
    )
    .expect("valid regex")
});

static BARE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:https?://|www\.)(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}(?:/[^\s<>]*)?")
        .expect("valid regex")
});

/// Convert bare URLs in rendered HTML into anchors with domain display text.
pub fn linkify_urls(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut last_end = 0;

    for span in SKIP_SPANS.find_iter(html) {
        result.push_str(&linkify_span(&html[last_end..span.start()]));
        result.push_str(span.as_str());
        last_end = span.end();
    }
    result.push_str(&linkify_span(&html[last_end..]));
    result
}

fn linkify_span(text: &str) -> String {
    BARE_URL
        .replace_all(text, |caps: &Captures<'_>| anchor_for(&caps[0]))
        .into_owned()
}

fn anchor_for(raw: &str) -> String {
    // Already handled by the embed pipeline; leave in place.
    if embed::is_video_host(raw) || embed::has_image_extension(raw) {
        return raw.to_string();
    }

    // Scheme-less www. URLs still need a usable link target.
    let target = if raw.starts_with("www.") {
        format!("http://{raw}")
    } else {
        raw.to_string()
    };

    let display = Url::parse(&target)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| raw.to_string());

    format!(r#"<a href="{target}" target="_blank" rel="noopener noreferrer">{display}</a>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_url_becomes_domain_anchor() {
        let html = linkify_urls("<p>see http://example.com/page for details</p>");
        assert!(html.contains(
            r#"<a href="http://example.com/page" target="_blank" rel="noopener noreferrer">example.com</a>"#
        ));
    }

    #[test]
    fn url_inside_existing_anchor_is_untouched() {
        let html = r#"<p><a href="http://example.com/page">docs</a></p>"#;
        assert_eq!(linkify_urls(html), html);
    }

    #[test]
    fn www_only_url_gains_scheme_on_href() {
        let html = linkify_urls("<p>visit www.example.com today</p>");
        assert!(html.contains(r#"href="http://www.example.com""#));
        assert!(html.contains(">www.example.com</a>"));
    }

    #[test]
    fn youtube_urls_are_skipped() {
        let html = "<p>https://youtu.be/abc123</p>";
        assert_eq!(linkify_urls(html), html);
    }

    #[test]
    fn image_urls_are_skipped() {
        let html = "<p>https://example.com/pic.png</p>";
        assert_eq!(linkify_urls(html), html);
    }

    #[test]
    fn embed_markup_is_not_relinkified() {
        let html = r#"<div class="video-container"><iframe src="https://www.youtube.com/embed/abc"></iframe></div>"#;
        assert_eq!(linkify_urls(html), html);
    }

    #[test]
    fn text_after_the_last_tag_is_still_processed() {
        let html = r#"<a href="http://a.example">a</a> then http://b.example.com/x"#;
        let out = linkify_urls(html);
        assert!(out.starts_with(r#"<a href="http://a.example">a</a>"#));
        assert!(out.contains(r#"<a href="http://b.example.com/x" target="_blank" rel="noopener noreferrer">b.example.com</a>"#));
    }

    #[test]
    fn multiple_urls_in_one_span() {
        let out = linkify_urls("<p>http://a.example.com and http://b.example.com</p>");
        assert!(out.contains(">a.example.com</a>"));
        assert!(out.contains(">b.example.com</a>"));
    }
}
