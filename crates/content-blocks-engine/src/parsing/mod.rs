//! # Content Parsing
//!
//! Pure transforms from free-typed editor text to structured content,
//! re-invoked by callers on every keystroke.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    [`classify::LineClass`] containing local facts (marker kind, marker
//!    text, stripped remainder)
//!
//! 2. **Structure Folding**: a per-call accumulator folds classified lines
//!    into the target structure — numbered blocks (`list`), table rows
//!    (`table`), or typed document segments (`segment`)
//!
//! ## Modules
//!
//! - **`classify`**: single-line classifier shared by every other module
//! - **`list`**: numbered-list normalization, block splitting, editing ops
//! - **`table`**: smart-paste table inference (tab/`=`/`:`/space delimited)
//! - **`segment`**: mixed-document segmentation into typed blocks
//!
//! ## Key Invariants
//!
//! - Every function is total: any input string yields a defined (possibly
//!   empty) result, never a panic or an error
//! - Output numbering of list blocks is contiguous from 1 regardless of the
//!   markers that appeared in the source
//! - No state survives a call; inputs are never mutated or retained

pub mod classify;
pub mod list;
pub mod segment;
pub mod table;
