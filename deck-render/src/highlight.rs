//! Code highlighting seam (syntect)
//!
//! Fenced code blocks never reach comrak; the extractor hands them here and
//! stores the returned fragment as the placeholder replacement. Highlighting
//! uses inline styles so the page needs no highlighter stylesheet.

use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::util::escape_html;

const THEME_NAME: &str = "base16-ocean.dark";

/// Wraps a loaded syntax set and theme. Construct once per renderer; the
/// default syntax dump is not cheap to load.
pub struct Highlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    pub fn new() -> Self {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let mut themes = ThemeSet::load_defaults();
        let theme = themes.themes.remove(THEME_NAME).unwrap_or_default();
        Self { syntaxes, theme }
    }

    /// Highlight one fenced code block and wrap it for the deck layout.
    ///
    /// An unrecognized language tag falls back to the plain-text syntax; a
    /// highlighting failure falls back to an escaped `<pre><code>` block.
    /// Neither case is an error.
    pub fn code_block(&self, language: Option<&str>, code: &str) -> String {
        let syntax = language
            .and_then(|lang| self.syntaxes.find_syntax_by_token(lang))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());

        let body = match highlighted_html_for_string(code, &self.syntaxes, syntax, &self.theme) {
            Ok(html) => html,
            Err(err) => {
                log::warn!("highlighting failed, emitting plain block: {err}");
                format!("<pre><code>{}</code></pre>\n", escape_html(code))
            }
        };

        let label = match language {
            Some(lang) if !lang.is_empty() => format!(
                r#"<span class="code-language">{}</span>"#,
                escape_html(&lang.to_uppercase())
            ),
            _ => String::new(),
        };

        format!(r#"<div class="code-block-wrapper">{label}{body}</div>"#)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
