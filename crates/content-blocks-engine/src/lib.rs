pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use parsing::classify::{CANONICAL_BULLET, LineClass, classify};
pub use parsing::list::{
    ListBlock, SubItem, append_numbered_item, append_sub_bullet, next_number,
    normalize_numbered_list, split_blocks, to_list_blocks,
};
pub use parsing::segment::{
    MixedBlock, MixedKind, SegmentOptions, looks_like_title, parse_mixed_content,
    parse_mixed_content_with,
};
pub use parsing::table::{SmartTable, TableHeaders, TableRow, parse_smart_table};
