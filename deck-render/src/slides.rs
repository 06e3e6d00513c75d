//! Deck splitting (document → ordered slides)
//!
//! A deck is a flat Markdown document whose slides are separated by lines
//! containing only `---`. An optional YAML front-matter block at the very
//! start (also `---`-delimited) is swallowed and contributes no content.

/// One separator-delimited section of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// 1-based position in document order
    pub number: usize,
    /// Trimmed slide body, Markdown
    pub content: String,
    /// True for the first slide, which renders with title-page styling
    pub is_lead: bool,
}

const SEPARATOR: &str = "---";

/// Split a document into slides.
///
/// Empty sections (after trimming) are skipped and do not consume a slide
/// number. An empty result is not an error here; callers decide whether
/// zero slides is terminal (see [`crate::Renderer::render_document`]).
pub fn split_slides(source: &str) -> Vec<Slide> {
    let mut slides: Vec<Slide> = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut in_metadata = true;

    for line in source.lines() {
        if in_metadata {
            // The separator that *terminates* the front-matter block is the
            // first one seen after at least one buffered line. A separator
            // before any other content opens the block and is buffered.
            if line.trim() == SEPARATOR && !buffer.is_empty() {
                in_metadata = false;
                buffer.clear();
            } else {
                buffer.push(line);
            }
            continue;
        }

        if line.trim() == SEPARATOR {
            push_slide(&mut slides, &buffer);
            buffer.clear();
        } else {
            // Blank lines are kept so intra-slide paragraph breaks survive.
            buffer.push(line);
        }
    }

    push_slide(&mut slides, &buffer);
    slides
}

fn push_slide(slides: &mut Vec<Slide>, buffer: &[&str]) {
    let joined = buffer.join("\n");
    let content = joined.trim();
    if content.is_empty() {
        return;
    }
    let number = slides.len() + 1;
    slides.push(Slide {
        number,
        content: content.to_string(),
        is_lead: number == 1,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn front_matter_is_swallowed() {
        let doc = "---\ntitle: x\n---\n# Hello\n---\nBody text\n---";
        let slides = split_slides(doc);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].number, 1);
        assert_eq!(slides[0].content, "# Hello");
        assert!(slides[0].is_lead);
        assert_eq!(slides[1].number, 2);
        assert_eq!(slides[1].content, "Body text");
        assert!(!slides[1].is_lead);
    }

    #[test]
    fn document_without_separators_is_one_slide() {
        let slides = split_slides("just a body\nwith two lines");
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].content, "just a body\nwith two lines");
        assert!(slides[0].is_lead);
    }

    #[test]
    fn trailing_separator_yields_no_empty_slide() {
        let doc = "---\ntitle: x\n---\nonly slide\n---\n";
        let slides = split_slides(doc);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].content, "only slide");
    }

    #[test]
    fn empty_sections_do_not_consume_numbers() {
        let doc = "---\ntitle: x\n---\nfirst\n---\n\n   \n---\nsecond";
        let slides = split_slides(doc);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].number, 1);
        assert_eq!(slides[1].number, 2);
        assert_eq!(slides[1].content, "second");
    }

    #[test]
    fn blank_lines_inside_a_slide_are_preserved() {
        let doc = "---\ntitle: x\n---\npara one\n\npara two";
        let slides = split_slides(doc);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].content, "para one\n\npara two");
    }

    #[test]
    fn empty_input_yields_no_slides() {
        assert!(split_slides("").is_empty());
        assert!(split_slides("---\ntitle: x\n---\n").is_empty());
    }

    proptest! {
        // Slide count equals the number of non-empty sections after
        // front-matter removal.
        #[test]
        fn slide_count_matches_nonempty_sections(
            sections in proptest::collection::vec("[a-z ]{0,12}", 0..8)
        ) {
            let mut doc = String::from("---\ntitle: t\n---\n");
            doc.push_str(&sections.join("\n---\n"));
            let expected = sections.iter().filter(|s| !s.trim().is_empty()).count();
            let slides = split_slides(&doc);
            prop_assert_eq!(slides.len(), expected);
            for (idx, slide) in slides.iter().enumerate() {
                prop_assert_eq!(slide.number, idx + 1);
                prop_assert_eq!(slide.is_lead, idx == 0);
            }
        }
    }
}
