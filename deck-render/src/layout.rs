//! Block-embed layout fixing
//!
//! comrak wraps any lone line of text in a paragraph, including a restored
//! placeholder, so a block-level embed can end up as `<p><div ...></div></p>`.
//! This pass hoists the embed out of the paragraph and re-wraps surrounding
//! inline text in its own paragraph when it has visible content.
//!
//! One pass per embed kind, video pattern before image pattern, no
//! re-scanning of emitted output. A paragraph is assumed to hold embeds of
//! a single kind; mixed-kind paragraphs ride on the second pass picking up
//! whatever the first one re-wrapped (order-dependent, known limitation).

use once_cell::sync::Lazy;
use regex::{Captures, Match, Regex};

static PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<p>(.*?)</p>").expect("valid regex"));

static VIDEO_DIV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)<div class="video-container">.*?</div>"#).expect("valid regex"));

static IMAGE_DIV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<div class="image-container[^"]*">.*?</div>"#).expect("valid regex")
});

static COSMETIC_TAGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<br\s*/?>|</?strong>|</?em>").expect("valid regex"));

/// Hoist block embeds out of their enclosing paragraph wrappers.
pub fn unwrap_block_embeds(html: &str) -> String {
    let html = hoist_kind(html, &VIDEO_DIV);
    hoist_kind(&html, &IMAGE_DIV)
}

fn hoist_kind(html: &str, embed: &Regex) -> String {
    PARAGRAPH
        .replace_all(html, |caps: &Captures<'_>| {
            let inner = caps.get(1).map_or("", |m| m.as_str());
            match embed.find(inner) {
                Some(found) => hoist(inner, found),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn hoist(inner: &str, found: Match<'_>) -> String {
    let before = inner[..found.start()].trim();
    let after = inner[found.end()..].trim();

    let mut result = String::new();
    if has_visible_text(before) {
        result.push_str("<p>");
        result.push_str(before);
        result.push_str("</p>\n");
    }
    result.push_str(found.as_str());
    if has_visible_text(after) {
        result.push_str("\n<p>");
        result.push_str(after);
        result.push_str("</p>");
    }
    result
}

/// Non-whitespace content once purely cosmetic inline tags are stripped.
fn has_visible_text(fragment: &str) -> bool {
    !COSMETIC_TAGS.replace_all(fragment, "").trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDEO: &str = r#"<div class="video-container"><iframe src="https://www.youtube.com/embed/abc"></iframe></div>"#;
    const IMAGE: &str = r#"<div class="image-container"><img src="a.png" alt=""></div>"#;

    #[test]
    fn lone_embed_paragraph_is_unwrapped() {
        let html = format!("<p>{VIDEO}</p>");
        assert_eq!(unwrap_block_embeds(&html), VIDEO);
    }

    #[test]
    fn leading_text_becomes_its_own_paragraph() {
        let html = format!("<p>Watch this:<br />{VIDEO}</p>");
        let fixed = unwrap_block_embeds(&html);
        assert_eq!(fixed, format!("<p>Watch this:<br /></p>\n{VIDEO}"));
    }

    #[test]
    fn trailing_text_becomes_its_own_paragraph() {
        let html = format!("<p>{IMAGE}and then some</p>");
        let fixed = unwrap_block_embeds(&html);
        assert_eq!(fixed, format!("{IMAGE}\n<p>and then some</p>"));
    }

    #[test]
    fn cosmetic_only_text_is_dropped() {
        let html = format!("<p><br /><strong></strong>{VIDEO}<em> </em></p>");
        assert_eq!(unwrap_block_embeds(&html), VIDEO);
    }

    #[test]
    fn large_image_variant_is_recognized() {
        let large = r#"<div class="image-container image-large"><img src="b.png" alt=""></div>"#;
        let html = format!("<p>{large}</p>");
        assert_eq!(unwrap_block_embeds(&html), large);
    }

    #[test]
    fn plain_paragraphs_are_untouched() {
        let html = "<p>just text</p>\n<p>more text</p>";
        assert_eq!(unwrap_block_embeds(html), html);
    }

    #[test]
    fn adjacent_paragraphs_do_not_bleed_into_each_other() {
        let html = format!("<p>intro</p>\n<p>{VIDEO}</p>\n<p>outro</p>");
        let fixed = unwrap_block_embeds(&html);
        assert_eq!(fixed, format!("<p>intro</p>\n{VIDEO}\n<p>outro</p>"));
    }

    // Pins the documented order dependency: video hoisted first, the image
    // lands in the re-wrapped trailing paragraph and the second pass lifts
    // it out of that.
    #[test]
    fn mixed_kind_paragraph_applies_video_then_image() {
        let html = format!("<p>{VIDEO}{IMAGE}</p>");
        let fixed = unwrap_block_embeds(&html);
        assert_eq!(fixed, format!("{VIDEO}\n{IMAGE}"));
    }
}
