//! Renderer glue: per-slide pipeline and whole-document assembly.

use crate::error::ConvertError;
use crate::highlight::Highlighter;
use crate::template::{self, PageOptions};
use crate::{layout, linkify, markdown, protect, slides};

/// Runs the conversion pipeline. Holds the loaded highlighter, so build one
/// renderer and reuse it across documents.
pub struct Renderer {
    highlighter: Highlighter,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            highlighter: Highlighter::new(),
        }
    }

    /// Render one slide's Markdown body into an HTML fragment.
    ///
    /// extract → comrak → restore → layout fix → linkify; each stage
    /// produces new text, no stage sees a later stage's output.
    pub fn render_slide(&self, content: &str) -> String {
        let (protected, regions) = protect::extract(content, &self.highlighter);
        let rendered = markdown::render_markdown(&protected);
        let restored = protect::restore(&rendered, &regions);
        if protect::has_placeholders(&restored) {
            log::warn!("placeholder tokens survived restoration");
        }
        let fixed = layout::unwrap_block_embeds(&restored);
        linkify::linkify_urls(&fixed)
    }

    /// Convert a whole deck into a single HTML document.
    ///
    /// Zero slides after metadata removal is the terminal no-content
    /// condition; the caller decides how to report it.
    pub fn render_document(
        &self,
        source: &str,
        options: &PageOptions,
    ) -> Result<String, ConvertError> {
        let slides = slides::split_slides(source);
        if slides.is_empty() {
            return Err(ConvertError::NoContent);
        }
        log::debug!("rendering {} slides", slides.len());

        let total = slides.len();
        let mut body = String::new();
        for (idx, slide) in slides.iter().enumerate() {
            let fragment = self.render_slide(&slide.content);
            body.push_str(&template::slide_section(slide, &fragment, total));
            if idx + 1 < total {
                body.push_str(template::DIVIDER);
            }
        }

        Ok(template::page(&body, options))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_no_content() {
        let renderer = Renderer::new();
        let err = renderer
            .render_document("", &PageOptions::default())
            .unwrap_err();
        assert_eq!(err, ConvertError::NoContent);
    }

    #[test]
    fn whole_document_renders_every_slide_in_order() {
        let renderer = Renderer::new();
        let doc = "---\ntitle: x\n---\n# First\n---\nSecond body\n---\nThird body";
        let html = renderer
            .render_document(doc, &PageOptions::default())
            .expect("document renders");
        assert!(html.contains(r#"id="slide-1""#));
        assert!(html.contains(r#"id="slide-3""#));
        let first = html.find("First").expect("first slide present");
        let third = html.find("Third body").expect("third slide present");
        assert!(first < third);
        // Two dividers for three slides.
        assert_eq!(html.matches(r#"class="divider""#).count(), 2);
    }

    #[test]
    fn code_slide_round_trips_without_placeholders() {
        let renderer = Renderer::new();
        let html = renderer.render_slide("```python\nprint(1)\n```");
        assert!(!protect::has_placeholders(&html));
        assert!(html.contains("code-block-wrapper"));
        assert!(html.contains("print"));
    }

    #[test]
    fn video_embed_ends_up_unwrapped_and_unlinkified() {
        let renderer = Renderer::new();
        let html = renderer.render_slide("https://youtu.be/abc123");
        assert!(html.contains(r#"<div class="video-container">"#));
        assert!(html.contains("embed/abc123"));
        assert!(!html.contains(r#"<p><div class="video-container">"#));
        // The embed's own URL is not re-linkified afterwards.
        assert!(!html.contains(r#"<a href="https://www.youtube.com/embed"#));
    }

    #[test]
    fn text_and_embed_split_into_paragraph_then_container() {
        let renderer = Renderer::new();
        let html = renderer.render_slide("Watch this:\nhttps://youtu.be/abc123");
        let para = html.find("<p>Watch this:").expect("leading paragraph");
        let embed = html
            .find(r#"<div class="video-container">"#)
            .expect("embed present");
        assert!(para < embed);
    }

    #[test]
    fn bare_urls_in_slide_text_become_anchors() {
        let renderer = Renderer::new();
        let html = renderer.render_slide("docs at http://example.com/page");
        assert!(html.contains(">example.com</a>"));
    }
}
