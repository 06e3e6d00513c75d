//! Embed fragments (video players, image figures) and the URL plumbing
//! behind them.
//!
//! These fragments are produced outside the normal Markdown grammar: the
//! extractor in `protect.rs` finds the source constructs and stores one of
//! these fragments as the placeholder's replacement.

use url::Url;

use crate::util::escape_html;

/// File extensions treated as images when scanning for bare image URLs.
pub(crate) const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg", "webp"];

/// In-band sizing annotation appended to an image URL, e.g.
/// `![diagram](arch.png:=big)`. Selects the large presentation variant.
pub(crate) const SIZE_MARKER: &str = ":=big";

/// Derive a YouTube video id from a watch/short/embed URL.
///
/// Returns `None` for anything that does not parse or does not carry an id;
/// callers leave the original text untouched in that case.
pub fn video_id(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    let id = match host {
        "youtu.be" => parsed.path_segments()?.next().map(str::to_string),
        "youtube.com" => {
            if parsed.path() == "/watch" {
                parsed
                    .query_pairs()
                    .find(|(key, _)| key.as_ref() == "v")
                    .map(|(_, value)| value.into_owned())
            } else if parsed.path().starts_with("/embed/") {
                parsed.path_segments()?.nth(1).map(str::to_string)
            } else {
                None
            }
        }
        _ => None,
    };

    id.filter(|id| !id.is_empty())
}

/// Build the block-level video player fragment for a video id.
pub fn video_embed(video_id: &str, title: &str) -> String {
    format!(
        concat!(
            r#"<div class="video-container">"#,
            r#"<iframe src="https://www.youtube.com/embed/{id}" title="{title}" "#,
            r#"frameborder="0" "#,
            r#"allow="accelerometer; autoplay; clipboard-write; encrypted-media; "#,
            r#"gyroscope; picture-in-picture; web-share" allowfullscreen>"#,
            "</iframe></div>"
        ),
        id = escape_html(video_id),
        title = escape_html(title),
    )
}

/// Build the block-level image figure fragment.
pub fn image_embed(src: &str, alt: &str, large: bool) -> String {
    let class = if large {
        "image-container image-large"
    } else {
        "image-container"
    };
    format!(
        r#"<div class="{class}"><img src="{src}" alt="{alt}" loading="lazy"></div>"#,
        class = class,
        src = escape_html(src),
        alt = escape_html(alt),
    )
}

/// Split a trailing sizing marker off an image URL token.
/// The stored URL keeps its semantic target; only the marker is removed.
pub(crate) fn split_size_marker(target: &str) -> (&str, bool) {
    match target.strip_suffix(SIZE_MARKER) {
        Some(stripped) => (stripped, true),
        None => (target, false),
    }
}

/// True when the URL points at a video host handled by the embed pipeline.
pub(crate) fn is_video_host(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}

/// True when the URL path ends in a recognized image extension.
pub(crate) fn has_image_extension(url: &str) -> bool {
    let lowered = url.to_ascii_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lowered.ends_with(&format!(".{ext}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_id_from_short_url() {
        assert_eq!(video_id("https://youtu.be/abc123").as_deref(), Some("abc123"));
    }

    #[test]
    fn derives_id_from_watch_url_with_extra_params() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=abc123&t=10").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn derives_id_from_embed_url() {
        assert_eq!(
            video_id("https://youtube.com/embed/xYz-9_q").as_deref(),
            Some("xYz-9_q")
        );
    }

    #[test]
    fn rejects_non_youtube_and_malformed_urls() {
        assert_eq!(video_id("https://vimeo.com/12345"), None);
        assert_eq!(video_id("https://www.youtube.com/watch"), None);
        assert_eq!(video_id("not a url"), None);
    }

    #[test]
    fn size_marker_is_split_off() {
        assert_eq!(split_size_marker("img.png:=big"), ("img.png", true));
        assert_eq!(split_size_marker("img.png"), ("img.png", false));
    }

    #[test]
    fn image_embed_picks_variant_class() {
        let small = image_embed("a.png", "alt", false);
        let large = image_embed("a.png", "alt", true);
        assert!(small.contains(r#"class="image-container""#));
        assert!(large.contains(r#"class="image-container image-large""#));
    }

    #[test]
    fn embed_attributes_are_escaped() {
        let html = video_embed("abc", r#"say "hi" & bye"#);
        assert!(html.contains("say &quot;hi&quot; &amp; bye"));
        let html = image_embed("a.png?x=1&y=2", "<alt>", false);
        assert!(html.contains("a.png?x=1&amp;y=2"));
        assert!(html.contains("&lt;alt&gt;"));
    }

    #[test]
    fn image_extension_detection() {
        assert!(has_image_extension("https://example.com/pic.PNG"));
        assert!(has_image_extension("https://example.com/a/b.webp"));
        assert!(!has_image_extension("https://example.com/page"));
    }
}
