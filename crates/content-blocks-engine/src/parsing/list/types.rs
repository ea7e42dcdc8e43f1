use serde::{Deserialize, Serialize};

/// A sub-item nested under a numbered block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    /// Glyph as written in the source, or [`CANONICAL_BULLET`] when the
    /// source line had no recognized marker.
    ///
    /// [`CANONICAL_BULLET`]: crate::parsing::classify::CANONICAL_BULLET
    pub bullet: char,
    pub text: String,
}

/// A numbered list item plus its nested sub-items.
///
/// `number` is the 1-based contiguous position of the block within its
/// list, regardless of the numeric marker that appeared in the source.
/// `sub_items` preserves input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBlock {
    pub number: u64,
    pub main_text: String,
    pub sub_items: Vec<SubItem>,
}
