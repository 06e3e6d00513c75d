//! Markdown rendering seam (comrak)
//!
//! The extractor hands comrak placeholder-laden text; everything comrak
//! renders here is ordinary Markdown (headings, emphasis, lists, tables).

use comrak::{markdown_to_html, ComrakOptions};

/// Render placeholder-protected Markdown to HTML.
pub fn render_markdown(text: &str) -> String {
    markdown_to_html(text, &comrak_options())
}

fn comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.header_ids = Some(String::new());
    // Slide text treats every newline as a visual break.
    options.render.hardbreaks = true;
    // autolink stays off: linkify.rs owns bare URLs and renders
    // domain-only anchor text, which comrak's autolinker would not.
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let html = render_markdown("# Title\n\n**bold** and *italic*");
        assert!(html.contains("<h1"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn renders_tables() {
        let html = render_markdown("|A|B|\n|-|-|\n|1|2|\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>A</th>"));
    }

    #[test]
    fn newlines_become_hard_breaks() {
        let html = render_markdown("line one\nline two");
        assert!(html.contains("<br />"));
    }

    #[test]
    fn placeholder_tokens_pass_through_unaltered() {
        let html = render_markdown("before\n\n%%%CODEBLOCK0%%%\n\nafter");
        assert!(html.contains("%%%CODEBLOCK0%%%"));
    }

    #[test]
    fn bare_urls_are_not_autolinked() {
        let html = render_markdown("see http://example.com/page for details");
        assert!(!html.contains("<a "));
    }
}
