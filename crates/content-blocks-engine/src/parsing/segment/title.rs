use crate::parsing::classify::{LineClass, classify};

/// Tuning knobs for the title heuristic.
///
/// The original editors disagreed slightly on what "looks like a title";
/// the threshold lives here so callers can tune it and tests can pin the
/// boundaries instead of guessing a universal rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Maximum word count for a line to read as a heading.
    pub max_title_words: usize,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self { max_title_words: 8 }
    }
}

/// Punctuation that disqualifies a line from reading as a heading.
const TERMINAL_PUNCTUATION: [char; 4] = ['.', '!', '?', ';'];

/// Whether a paragraph's single line reads as a section heading.
///
/// Headings are short, carry no terminal punctuation, and either lead the
/// document or are visually distinct (all caps). List lines never qualify.
pub fn looks_like_title(line: &str, position: usize, options: &SegmentOptions) -> bool {
    if !matches!(classify(line), LineClass::Plain { .. }) {
        return false;
    }
    let trimmed = line.trim();
    if trimmed.split_whitespace().count() > options.max_title_words {
        return false;
    }
    if trimmed.ends_with(&TERMINAL_PUNCTUATION[..]) {
        return false;
    }
    position == 0 || is_all_caps(trimmed)
}

fn is_all_caps(line: &str) -> bool {
    let mut has_alphabetic = false;
    for c in line.chars() {
        if c.is_alphabetic() {
            has_alphabetic = true;
            if c.is_lowercase() {
                return false;
            }
        }
    }
    has_alphabetic
}
