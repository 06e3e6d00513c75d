//! Markdown slide decks → continuous-scroll HTML
//!
//!     This crate converts a slide-separated Markdown document (Marp-style,
//!     `---` between slides, optional YAML front matter) into a single
//!     self-contained HTML page, one rendered block per slide.
//!
//!     TLDR for contributors:
//!         - The generic Markdown grammar is never parsed here; it is delegated
//!           to comrak. Syntax highlighting is delegated to syntect.
//!         - Everything comrak would mangle (fenced code, YouTube links/URLs,
//!           image links/URLs) is lifted out into placeholder tokens before
//!           rendering and substituted back afterwards. See protect.rs.
//!         - This is a pure lib: it powers deck-cli but is shell agnostic.
//!           No std printing, no env vars, no file I/O inside the pipeline.
//!
//! Architecture
//!
//!     Each slide's text flows strictly left to right through the stages:
//!
//!     split_slides → protect::extract → markdown::render_markdown
//!                  → protect::restore → layout::unwrap_block_embeds
//!                  → linkify::linkify_urls → template wrapping
//!
//!     No stage depends on the output of a later stage, and no mutable state
//!     crosses slide boundaries: placeholder counters live in the RegionSet
//!     created per extraction call.
//!
//!     The file structure:
//!     .
//!     ├── error.rs        # ConvertError
//!     ├── slides.rs       # Slide record + deck splitting
//!     ├── protect.rs      # placeholder extraction / restoration (the core)
//!     ├── embed.rs        # video-id derivation, embed fragment builders
//!     ├── highlight.rs    # syntect seam
//!     ├── markdown.rs     # comrak seam
//!     ├── layout.rs       # block embeds hoisted out of <p> wrappers
//!     ├── linkify.rs      # bare URLs → anchors
//!     ├── template.rs     # page head/CSS/JS, slide wrappers, footer
//!     └── render.rs       # Renderer glue, whole-document assembly

pub mod embed;
pub mod error;
pub mod highlight;
pub mod layout;
pub mod linkify;
pub mod markdown;
pub mod protect;
pub mod render;
pub mod slides;
pub mod template;
mod util;

pub use error::ConvertError;
pub use render::Renderer;
pub use slides::{split_slides, Slide};
pub use template::PageOptions;
