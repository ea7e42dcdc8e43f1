//! Mixed-document segmentation.
//!
//! Splits a pasted document on blank-line runs and classifies each
//! candidate paragraph into a typed block, so one free-text field can hold
//! headings, prose, and lists side by side.

pub mod title;

pub use title::{SegmentOptions, looks_like_title};

use serde::{Deserialize, Serialize};

use crate::parsing::classify::classify;

/// Kind of an auto-detected block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MixedKind {
    Title,
    Paragraph,
    Bullets,
    Numbered,
}

/// One auto-detected block of a mixed document, in source order.
///
/// `title` is set only when a leading heading was hoisted onto this block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedBlock {
    pub kind: MixedKind,
    pub title: Option<String>,
    pub content: String,
}

/// Segments a document with the default [`SegmentOptions`].
pub fn parse_mixed_content(raw: &str) -> Vec<MixedBlock> {
    parse_mixed_content_with(raw, &SegmentOptions::default())
}

/// Segments a document into typed blocks.
///
/// Classification per paragraph: every line a bullet ⇒ `Bullets`; numbered
/// at block top level (the first line is numbered, trailing lines fold into
/// its blocks as sub-items) ⇒ `Numbered`; a single line passing
/// [`looks_like_title`] ⇒ `Title`; anything else ⇒ `Paragraph`. A `Title`
/// opening the document is hoisted onto the following block as its `title`
/// when that block is not itself a `Title`.
pub fn parse_mixed_content_with(raw: &str, options: &SegmentOptions) -> Vec<MixedBlock> {
    let mut blocks: Vec<MixedBlock> = split_paragraphs(raw)
        .iter()
        .enumerate()
        .map(|(position, lines)| classify_paragraph(lines, position, options))
        .collect();
    hoist_leading_title(&mut blocks);
    blocks
}

/// Splits on blank-line runs; lines come back trimmed.
fn split_paragraphs(raw: &str) -> Vec<Vec<&str>> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(trimmed);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

fn classify_paragraph(lines: &[&str], position: usize, options: &SegmentOptions) -> MixedBlock {
    let kind = if lines.iter().all(|line| classify(line).is_bullet()) {
        MixedKind::Bullets
    } else if lines.first().is_some_and(|line| classify(line).is_numbered()) {
        MixedKind::Numbered
    } else if lines.len() == 1 && looks_like_title(lines[0], position, options) {
        MixedKind::Title
    } else {
        MixedKind::Paragraph
    };

    MixedBlock {
        kind,
        title: None,
        content: lines.join("\n"),
    }
}

/// "Heading\n\nBody" becomes one block carrying `title = "Heading"`. Only
/// the very first block hoists, and never onto another title.
fn hoist_leading_title(blocks: &mut Vec<MixedBlock>) {
    if blocks.len() < 2 {
        return;
    }
    if blocks[0].kind != MixedKind::Title || blocks[1].kind == MixedKind::Title {
        return;
    }
    let heading = blocks.remove(0);
    blocks[0].title = Some(heading.content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(blocks: &[MixedBlock]) -> Vec<MixedKind> {
        blocks.iter().map(|block| block.kind).collect()
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(parse_mixed_content("").is_empty());
        assert!(parse_mixed_content("\n\n\n").is_empty());
    }

    #[test]
    fn paragraphs_split_on_blank_runs() {
        let blocks = parse_mixed_content("First paragraph line one.\nLine two.\n\n\nSecond one.");
        assert_eq!(kinds(&blocks), vec![MixedKind::Paragraph, MixedKind::Paragraph]);
        assert_eq!(blocks[0].content, "First paragraph line one.\nLine two.");
        assert_eq!(blocks[1].content, "Second one.");
    }

    #[test]
    fn leading_title_is_hoisted_onto_the_body() {
        let blocks = parse_mixed_content("Scope of Work\n\nWe will deliver the thing.");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, MixedKind::Paragraph);
        assert_eq!(blocks[0].title.as_deref(), Some("Scope of Work"));
        assert_eq!(blocks[0].content, "We will deliver the thing.");
    }

    #[test]
    fn title_hoists_onto_a_list_too() {
        let blocks = parse_mixed_content("Deliverables\n\n- one\n- two");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, MixedKind::Bullets);
        assert_eq!(blocks[0].title.as_deref(), Some("Deliverables"));
    }

    #[test]
    fn lone_title_stays_a_title() {
        let blocks = parse_mixed_content("Just a heading");
        assert_eq!(kinds(&blocks), vec![MixedKind::Title]);
        assert_eq!(blocks[0].title, None);
    }

    #[test]
    fn all_caps_heading_mid_document_stands_alone() {
        let blocks =
            parse_mixed_content("Intro prose that is long enough.\n\nNEXT STEPS\n\n1. call\n2. sign");
        assert_eq!(
            kinds(&blocks),
            vec![MixedKind::Paragraph, MixedKind::Title, MixedKind::Numbered]
        );
    }

    #[test]
    fn bullets_require_every_line_to_carry_a_glyph() {
        let bullets = parse_mixed_content("- one\n- two\n• three");
        assert_eq!(kinds(&bullets), vec![MixedKind::Bullets]);

        let not_bullets = parse_mixed_content("- one\nplain trailing line\n- two\nmore prose here");
        assert_eq!(kinds(&not_bullets), vec![MixedKind::Paragraph]);
    }

    #[test]
    fn numbered_block_tolerates_sub_lines() {
        // Sub-bullets fold into the numbered blocks, so the paragraph is
        // still a numbered list.
        let blocks = parse_mixed_content("1. first\n- sub a\n2. second");
        assert_eq!(kinds(&blocks), vec![MixedKind::Numbered]);
    }

    #[test]
    fn order_reproduces_source_order() {
        let raw = "OVERVIEW\n\nSome prose.\n\n- b1\n- b2\n\n1. n1\n2. n2";
        let blocks = parse_mixed_content(raw);
        assert_eq!(
            kinds(&blocks),
            vec![
                MixedKind::Paragraph, // OVERVIEW hoisted onto the prose
                MixedKind::Bullets,
                MixedKind::Numbered
            ]
        );
        assert_eq!(blocks[0].title.as_deref(), Some("OVERVIEW"));
    }

    #[test]
    fn resegmenting_output_reproduces_block_kinds() {
        let raw = "Proposal Summary\n\nBody prose, long enough not to be a title.\n\n- point\n- point\n\n1. step\n2. step";
        let first = parse_mixed_content(raw);
        let reconstructed: Vec<String> = first
            .iter()
            .map(|block| match &block.title {
                Some(title) => format!("{title}\n\n{}", block.content),
                None => block.content.clone(),
            })
            .collect();
        let second = parse_mixed_content(&reconstructed.join("\n\n"));
        assert_eq!(kinds(&first), kinds(&second));
        assert_eq!(
            first.iter().map(|b| &b.title).collect::<Vec<_>>(),
            second.iter().map(|b| &b.title).collect::<Vec<_>>()
        );
    }
}
