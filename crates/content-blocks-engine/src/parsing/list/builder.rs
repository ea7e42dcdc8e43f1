use crate::parsing::classify::{CANONICAL_BULLET, LineClass};

use super::types::{ListBlock, SubItem};

/// Folds classified lines into numbered blocks.
///
/// A numbered line opens a new block and bumps the running counter; the
/// counter, not the source digits, becomes the block number, so output
/// numbering is contiguous from 1 even when the source had `1, 1, 4`.
/// Every other non-blank line attaches to the open block as a sub-item.
/// Lines seen before the first numbered line have no block to attach to
/// and are dropped.
pub struct ListBuilder {
    counter: u64,
    current: Option<ListBlock>,
    out: Vec<ListBlock>,
}

impl ListBuilder {
    pub fn new() -> Self {
        Self {
            counter: 0,
            current: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, class: LineClass) {
        match class {
            LineClass::Numbered { text, .. } => {
                self.flush();
                self.counter += 1;
                self.current = Some(ListBlock {
                    number: self.counter,
                    main_text: text,
                    sub_items: vec![],
                });
            }
            LineClass::Bullet { glyph, text } => {
                if let Some(block) = self.current.as_mut() {
                    block.sub_items.push(SubItem {
                        bullet: glyph,
                        text,
                    });
                }
            }
            LineClass::Plain { text } => {
                if let Some(block) = self.current.as_mut() {
                    block.sub_items.push(SubItem {
                        bullet: CANONICAL_BULLET,
                        text,
                    });
                }
            }
            LineClass::Blank => {}
        }
    }

    pub fn finish(mut self) -> Vec<ListBlock> {
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        if let Some(block) = self.current.take() {
            self.out.push(block);
        }
    }
}

impl Default for ListBuilder {
    fn default() -> Self {
        Self::new()
    }
}
