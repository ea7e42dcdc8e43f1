use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Leading glyphs recognized as bullet markers.
pub const BULLET_GLYPHS: [char; 5] = ['•', '·', '*', '-', '>'];

/// Canonical glyph used when normalizing bullets or defaulting sub-items.
pub const CANONICAL_BULLET: char = '•';

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s*").expect("numbered marker pattern"));

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of every parse: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineClass {
    /// `1. text` — `number` is the integer as written. It is informational
    /// only and never trusted for renumbering.
    Numbered {
        number: u64,
        /// The literal prefix as written, digits plus dot.
        marker: String,
        text: String,
    },
    /// `• text` with any glyph from [`BULLET_GLYPHS`]; `glyph` is the first
    /// glyph as written.
    Bullet { glyph: char, text: String },
    /// Whitespace only.
    Blank,
    /// Anything else.
    Plain { text: String },
}

impl LineClass {
    /// Marker-stripped text content; empty for blank lines.
    pub fn text(&self) -> &str {
        match self {
            LineClass::Numbered { text, .. }
            | LineClass::Bullet { text, .. }
            | LineClass::Plain { text } => text,
            LineClass::Blank => "",
        }
    }

    pub fn is_numbered(&self) -> bool {
        matches!(self, LineClass::Numbered { .. })
    }

    pub fn is_bullet(&self) -> bool {
        matches!(self, LineClass::Bullet { .. })
    }
}

/// Classifies a line into a [`LineClass`].
///
/// Total over all inputs: every string classifies into exactly one kind,
/// empty input yields [`LineClass::Blank`]. A digit run too large to fit
/// the number type is not a plausible list marker and classifies as plain.
pub fn classify(line: &str) -> LineClass {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    if let Some(caps) = NUMBERED.captures(trimmed)
        && let Ok(number) = caps[1].parse::<u64>()
    {
        return LineClass::Numbered {
            number,
            marker: format!("{}.", &caps[1]),
            text: trimmed[caps[0].len()..].trim().to_string(),
        };
    }

    if let Some(glyph) = trimmed.chars().next().filter(|c| BULLET_GLYPHS.contains(c)) {
        let text = trimmed
            .trim_start_matches(|c| BULLET_GLYPHS.contains(&c))
            .trim()
            .to_string();
        return LineClass::Bullet { glyph, text };
    }

    LineClass::Plain {
        text: trimmed.to_string(),
    }
}
