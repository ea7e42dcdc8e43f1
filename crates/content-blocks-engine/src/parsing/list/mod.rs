//! Numbered-list normalization, block splitting, and editing operations.
//!
//! The shared primitive is [`split_blocks`]: content splits immediately
//! before every numbered line, and the marker stays attached to the block
//! it introduces. Both the normalizer and any renderer depend on those
//! exact boundary semantics.

pub mod builder;
pub mod types;

pub use builder::ListBuilder;
pub use types::{ListBlock, SubItem};

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::classify::{CANONICAL_BULLET, LineClass, classify};

static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.?$").expect("bare number pattern"));

/// Folds raw content into structured blocks for rendering.
///
/// Content before the first numbered line is discarded; blank lines are
/// filtered. See [`ListBuilder`] for the folding rules.
pub fn to_list_blocks(raw: &str) -> Vec<ListBlock> {
    let mut builder = ListBuilder::new();
    for line in raw.lines() {
        builder.push(classify(line));
    }
    builder.finish()
}

/// Produces canonical list text: contiguous numbering from 1, sub-items
/// under their block with the canonical bullet glyph. Idempotent.
pub fn normalize_numbered_list(raw: &str) -> String {
    let mut lines = Vec::new();
    for block in to_list_blocks(raw) {
        lines.push(format!("{}. {}", block.number, block.main_text));
        for sub in &block.sub_items {
            lines.push(format!("  {CANONICAL_BULLET} {}", sub.text));
        }
    }
    lines.join("\n")
}

/// Splits content immediately before every numbered line, keeping the
/// marker attached to the block it introduces. Lines before the first
/// marker are dropped; empty blocks are filtered out.
pub fn split_blocks(raw: &str) -> Vec<String> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    for line in raw.lines() {
        if classify(line).is_numbered() {
            blocks.push(vec![line]);
        } else if let Some(current) = blocks.last_mut() {
            current.push(line);
        }
    }
    blocks
        .into_iter()
        .map(|lines| lines.join("\n"))
        .filter(|block| !block.is_empty())
        .collect()
}

/// Next free item number: one past the maximum numeric marker anywhere in
/// the content, tolerating out-of-order and duplicated source numbering.
///
/// Numbered lines count, as do bare number-looking lines (`7` or `7.`);
/// lines under a bullet glyph do not. Empty or markerless content yields 1.
pub fn next_number(raw: &str) -> u64 {
    raw.lines()
        .filter_map(|line| match classify(line) {
            LineClass::Numbered { number, .. } => Some(number),
            LineClass::Plain { text } => BARE_NUMBER
                .captures(&text)
                .and_then(|caps| caps[1].parse().ok()),
            LineClass::Bullet { .. } | LineClass::Blank => None,
        })
        .max()
        .map_or(1, |max: u64| max.saturating_add(1))
}

fn line_separator(raw: &str) -> &'static str {
    if raw.is_empty() || raw.ends_with('\n') {
        ""
    } else {
        "\n"
    }
}

/// "Add next number": appends the next numbered marker on its own line.
pub fn append_numbered_item(raw: &str) -> String {
    format!("{raw}{}{}. ", line_separator(raw), next_number(raw))
}

/// "Add sub-bullet": appends a canonical bullet marker on its own line.
pub fn append_sub_bullet(raw: &str) -> String {
    format!("{raw}{}{CANONICAL_BULLET} ", line_separator(raw))
}
