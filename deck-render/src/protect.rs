//! Protected-region extraction and placeholder restoration (the core)
//!
//! comrak receives each slide's text with every non-standard construct
//! replaced by a placeholder token, then the tokens are substituted back in
//! the rendered HTML. Extraction order matters because each step changes
//! what the next one sees:
//!
//! 1. fenced code is shielded verbatim (`%%%TEMPCODEn%%%`)
//! 2. `![alt](url)` image syntax
//! 3. `[text](url)` links with YouTube targets
//! 4. bare YouTube URLs
//! 5. bare image URLs
//! 6. leftover `:=big` markers are stripped
//!
//! then the code shields are swapped for fresh `%%%CODEBLOCKn%%%` tokens
//! whose replacements are the highlighted fragments, so comrak never
//! interprets code content as Markdown.
//!
//! Tokens are indexed per kind and re-zeroed per slide; the counters live
//! in the `RegionSet` created by each `extract` call, never in shared
//! state. Placeholder-looking literal text in the source (`%%%YOUTUBE0%%%`
//! typed by an author) would confuse restoration; accepted limitation,
//! input is authored content.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::embed;
use crate::embed::SIZE_MARKER;
use crate::highlight::Highlighter;

/// Classes of protected regions, in restoration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Code,
    Youtube,
    Image,
}

impl RegionKind {
    fn tag(self) -> &'static str {
        match self {
            RegionKind::Code => "CODEBLOCK",
            RegionKind::Youtube => "YOUTUBE",
            RegionKind::Image => "IMAGE",
        }
    }
}

/// One span of source text lifted out of the slide before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedRegion {
    pub kind: RegionKind,
    pub placeholder: String,
    pub replacement: String,
}

/// All regions extracted from one slide. Owns the per-kind counters, so a
/// fresh set per slide keeps placeholder identities from colliding across
/// slides that end up concatenated into one document.
#[derive(Debug, Default)]
pub struct RegionSet {
    code: Vec<ProtectedRegion>,
    youtube: Vec<ProtectedRegion>,
    image: Vec<ProtectedRegion>,
}

impl RegionSet {
    fn mint(&mut self, kind: RegionKind, replacement: String) -> String {
        let list = match kind {
            RegionKind::Code => &mut self.code,
            RegionKind::Youtube => &mut self.youtube,
            RegionKind::Image => &mut self.image,
        };
        let placeholder = format!("%%%{}{}%%%", kind.tag(), list.len());
        list.push(ProtectedRegion {
            kind,
            placeholder: placeholder.clone(),
            replacement,
        });
        placeholder
    }

    pub fn regions(&self, kind: RegionKind) -> &[ProtectedRegion] {
        match kind {
            RegionKind::Code => &self.code,
            RegionKind::Youtube => &self.youtube,
            RegionKind::Image => &self.image,
        }
    }

    pub fn len(&self) -> usize {
        self.code.len() + self.youtube.len() + self.image.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Regions in restoration order: code first, then media.
    fn in_restore_order(&self) -> impl Iterator<Item = &ProtectedRegion> {
        self.code
            .iter()
            .chain(self.youtube.iter())
            .chain(self.image.iter())
    }
}

static FENCED_SHIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```.*?```").expect("valid regex"));

static FENCED_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").expect("valid regex"));

static IMAGE_MARKDOWN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)\s]+)\)").expect("valid regex"));

static YOUTUBE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\[([^\]]+)\]\((https?://(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)[\w-]+(?:[&?][\w=&-]*)*)\)",
    )
    .expect("valid regex")
});

static BARE_YOUTUBE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"https?://(?:www\.)?(?:youtube\.com/watch\?v=[\w-]+(?:&[\w=&-]*)*|youtu\.be/[\w-]+(?:\?[\w=&-]*)*|youtube\.com/embed/[\w-]+)",
    )
    .expect("valid regex")
});

static BARE_IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[^(])(https?://[^\s<>()]+\.(?:png|jpe?g|gif|svg|webp))([ \t]*:=big)?")
        .expect("valid regex")
});

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"%%%(?:TEMPCODE|CODEBLOCK|YOUTUBE|IMAGE)\d+%%%").expect("valid regex")
});

/// Replace every protected construct in a slide's text with a placeholder
/// token, returning the rewritten text and the regions to restore later.
pub fn extract(text: &str, highlighter: &Highlighter) -> (String, RegionSet) {
    let mut regions = RegionSet::default();

    // Shield fenced code verbatim first: URLs or pseudo-markdown inside
    // example code must never be read as live links or embeds.
    let mut shielded: Vec<String> = Vec::new();
    let text = FENCED_SHIELD
        .replace_all(text, |caps: &Captures<'_>| {
            let token = format!("%%%TEMPCODE{}%%%", shielded.len());
            shielded.push(caps[0].to_string());
            token
        })
        .into_owned();

    let text = IMAGE_MARKDOWN
        .replace_all(&text, |caps: &Captures<'_>| {
            let (src, large) = embed::split_size_marker(&caps[2]);
            regions.mint(RegionKind::Image, embed::image_embed(src, &caps[1], large))
        })
        .into_owned();

    let text = YOUTUBE_LINK
        .replace_all(&text, |caps: &Captures<'_>| match embed::video_id(&caps[2]) {
            Some(id) => regions.mint(RegionKind::Youtube, embed::video_embed(&id, &caps[1])),
            // No derivable id: leave the original link untouched rather
            // than producing a broken embed.
            None => caps[0].to_string(),
        })
        .into_owned();

    let text = BARE_YOUTUBE
        .replace_all(&text, |caps: &Captures<'_>| match embed::video_id(&caps[0]) {
            Some(id) => regions.mint(
                RegionKind::Youtube,
                embed::video_embed(&id, "YouTube video player"),
            ),
            None => caps[0].to_string(),
        })
        .into_owned();

    let text = BARE_IMAGE
        .replace_all(&text, |caps: &Captures<'_>| {
            let large = caps.get(3).is_some();
            let placeholder =
                regions.mint(RegionKind::Image, embed::image_embed(&caps[2], "", large));
            format!("{}{}", &caps[1], placeholder)
        })
        .into_owned();

    // Cleanup: sizing markers not consumed above must not leak into output.
    let text = text.replace(SIZE_MARKER, "");

    // Swap the shields back, then re-protect the fences under fresh
    // identities with highlighted replacements for the render step.
    let mut text = text;
    for (idx, raw) in shielded.iter().enumerate() {
        let token = format!("%%%TEMPCODE{idx}%%%");
        text = text.replacen(token.as_str(), raw, 1);
    }

    let text = FENCED_CODE
        .replace_all(&text, |caps: &Captures<'_>| {
            let language = caps.get(1).map(|m| m.as_str());
            let code = caps.get(2).map_or("", |m| m.as_str());
            regions.mint(RegionKind::Code, highlighter.code_block(language, code))
        })
        .into_owned();

    log::debug!(
        "extracted {} regions ({} code, {} youtube, {} image)",
        regions.len(),
        regions.code.len(),
        regions.youtube.len(),
        regions.image.len()
    );

    (text, regions)
}

/// Substitute every placeholder in the rendered HTML with its recorded
/// fragment: code blocks first, then media embeds, each a literal
/// whole-token replacement in ascending index order.
pub fn restore(html: &str, regions: &RegionSet) -> String {
    let mut html = html.to_string();
    for region in regions.in_restore_order() {
        if html.contains(region.placeholder.as_str()) {
            html = html.replacen(region.placeholder.as_str(), &region.replacement, 1);
        } else {
            // Extraction/restoration count mismatch; a correctness defect,
            // not a recoverable runtime condition.
            log::warn!(
                "placeholder {} missing from rendered output",
                region.placeholder
            );
        }
    }
    html
}

/// True when any placeholder token survives in the text. A survivor after
/// restoration indicates a defect in the extraction pipeline.
pub fn has_placeholders(text: &str) -> bool {
    PLACEHOLDER.is_match(text)
}
