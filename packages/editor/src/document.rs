//! # Document Model
//!
//! The whole editable artifact: blocks in email-body order, the canvas
//! background color, and the id sequence counter.
//!
//! ## Lifecycle
//!
//! ```text
//! new / restore → append / edit / move / remove → encode → store
//!                                   ↓
//!                                compile
//! ```

use crate::block::Block;
use crate::mutations::MutationError;
use crate::palette::CANVAS_BACKGROUND;
use crate::persistence::PersistError;
use crate::registry::{default_block, BlockKind};
use std::collections::HashSet;
use tracing::debug;

/// Editable email document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
    background_color: String,
    /// Never reused, even after removal or reset
    next_sequence: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document with the default background
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            background_color: CANVAS_BACKGROUND.default_token().to_string(),
            next_sequence: 0,
        }
    }

    /// Rebuild a document from stored parts.
    ///
    /// The counter is raised past every id suffix present so restored
    /// documents never mint a colliding id. Fails when no further id could
    /// be minted.
    pub fn from_parts(
        blocks: Vec<Block>,
        background_color: String,
        next_sequence: u64,
    ) -> Result<Self, PersistError> {
        let mut floor = 0;
        for seq in blocks.iter().filter_map(Block::sequence) {
            floor = floor.max(seq.checked_add(1).ok_or(PersistError::SequenceOverflow)?);
        }

        let next_sequence = next_sequence.max(floor);
        if next_sequence == u64::MAX {
            return Err(PersistError::SequenceOverflow);
        }

        let background_color = if background_color.trim().is_empty() {
            CANVAS_BACKGROUND.default_token().to_string()
        } else {
            background_color
        };

        Ok(Self {
            blocks,
            background_color,
            next_sequence,
        })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id)
    }

    /// Block ids in order
    pub fn ids(&self) -> Vec<String> {
        self.blocks.iter().map(|block| block.id.clone()).collect()
    }

    /// Append a default block of `kind` at the tail and return its id
    pub fn append(&mut self, kind: BlockKind) -> String {
        let block = default_block(kind, self.next_sequence);
        self.next_sequence = self.next_sequence.saturating_add(1);

        debug!(block_id = %block.id, kind = %kind, "Appending block");
        let id = block.id.clone();
        self.blocks.push(block);
        id
    }

    /// Remove and return the block with `id`
    pub fn remove(&mut self, id: &str) -> Result<Block, MutationError> {
        let index = self
            .position(id)
            .ok_or_else(|| MutationError::BlockNotFound(id.to_string()))?;
        Ok(self.blocks.remove(index))
    }

    /// Relocate a block; `index` is clamped to the valid range.
    ///
    /// Returns the index the block ended up at.
    pub fn move_to(&mut self, id: &str, index: usize) -> Result<usize, MutationError> {
        let from = self
            .position(id)
            .ok_or_else(|| MutationError::BlockNotFound(id.to_string()))?;

        let to = index.min(self.blocks.len() - 1);
        if from != to {
            let block = self.blocks.remove(from);
            self.blocks.insert(to, block);
        }
        Ok(to)
    }

    /// Swap in an updated block with the same id and kind
    pub fn replace(&mut self, block: Block) -> Result<(), MutationError> {
        let slot = self
            .blocks
            .iter_mut()
            .find(|existing| existing.id == block.id)
            .ok_or_else(|| MutationError::BlockNotFound(block.id.clone()))?;

        if slot.kind() != block.kind() {
            return Err(MutationError::KindChanged {
                from: slot.kind(),
                to: block.kind(),
                block_id: block.id,
            });
        }

        *slot = block;
        Ok(())
    }

    /// Put blocks in exactly the order given by `ordering`, which must be a
    /// permutation of the current ids
    pub fn reorder(&mut self, ordering: &[String]) -> Result<(), MutationError> {
        let unique: HashSet<&String> = ordering.iter().collect();
        let is_permutation = ordering.len() == self.blocks.len()
            && unique.len() == ordering.len()
            && ordering.iter().all(|id| self.position(id).is_some());

        if !is_permutation {
            return Err(MutationError::InvalidOrdering(format!(
                "{:?} is not a permutation of {:?}",
                ordering,
                self.ids()
            )));
        }

        self.blocks
            .sort_by_key(|block| ordering.iter().position(|id| *id == block.id));
        Ok(())
    }

    /// Set the canvas background; any non-empty CSS color string is accepted
    pub fn set_background_color(&mut self, value: &str) -> Result<(), MutationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(MutationError::EmptyBackground);
        }
        self.background_color = value.to_string();
        Ok(())
    }

    /// Clear all blocks and restore the default background.
    ///
    /// The id counter is kept so ids held elsewhere are never reissued.
    pub fn reset(&mut self) {
        self.blocks.clear();
        self.background_color = CANVAS_BACKGROUND.default_token().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_mints_sequential_ids() {
        let mut doc = Document::new();
        let a = doc.append(BlockKind::Heading);
        let b = doc.append(BlockKind::Text);

        assert_eq!(a, "heading_0");
        assert_eq!(b, "text_1");
        assert_eq!(doc.next_sequence(), 2);
        assert_eq!(doc.ids(), vec!["heading_0", "text_1"]);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut doc = Document::new();
        let a = doc.append(BlockKind::Divider);
        doc.remove(&a).unwrap();
        let b = doc.append(BlockKind::Divider);

        assert_ne!(a, b);
        assert_eq!(b, "divider_1");
    }

    #[test]
    fn test_remove_missing_block() {
        let mut doc = Document::new();
        assert_eq!(
            doc.remove("text_9"),
            Err(MutationError::BlockNotFound("text_9".to_string()))
        );
    }

    #[test]
    fn test_move_to_clamps_index() {
        let mut doc = Document::new();
        let a = doc.append(BlockKind::Heading);
        doc.append(BlockKind::Text);
        doc.append(BlockKind::Image);

        let landed = doc.move_to(&a, 99).unwrap();
        assert_eq!(landed, 2);
        assert_eq!(doc.ids(), vec!["text_1", "image_2", "heading_0"]);
    }

    #[test]
    fn test_reorder_rejects_non_permutation() {
        let mut doc = Document::new();
        doc.append(BlockKind::Heading);
        doc.append(BlockKind::Text);
        let before = doc.clone();

        let err = doc
            .reorder(&["text_1".to_string(), "text_1".to_string()])
            .unwrap_err();
        assert!(matches!(err, MutationError::InvalidOrdering(_)));
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.ids(), before.ids());
    }

    #[test]
    fn test_background_rejects_empty() {
        let mut doc = Document::new();
        assert_eq!(doc.set_background_color("   "), Err(MutationError::EmptyBackground));
        doc.set_background_color(" #123456 ").unwrap();
        assert_eq!(doc.background_color(), "#123456");
    }

    #[test]
    fn test_reset_keeps_counter() {
        let mut doc = Document::new();
        doc.append(BlockKind::List);
        doc.set_background_color("#000000").unwrap();
        doc.reset();

        assert!(doc.is_empty());
        assert_eq!(doc.background_color(), "#ffffff");
        assert_eq!(doc.next_sequence(), 1);
    }

    #[test]
    fn test_from_parts_raises_counter_past_existing_ids() {
        let blocks = vec![default_block(BlockKind::Text, 7)];
        let doc = Document::from_parts(blocks, String::new(), 3).unwrap();

        assert_eq!(doc.next_sequence(), 8);
        assert_eq!(doc.background_color(), "#ffffff");
    }

    #[test]
    fn test_from_parts_rejects_exhausted_sequence() {
        let blocks = vec![default_block(BlockKind::Text, u64::MAX)];
        assert!(matches!(
            Document::from_parts(blocks, String::new(), 0),
            Err(PersistError::SequenceOverflow)
        ));
        assert!(matches!(
            Document::from_parts(Vec::new(), String::new(), u64::MAX),
            Err(PersistError::SequenceOverflow)
        ));
    }

    #[test]
    fn test_replace_rejects_kind_change() {
        let mut doc = Document::new();
        let id = doc.append(BlockKind::Heading);
        let swapped = Block::new(id.clone(), default_block(BlockKind::Text, 0).attributes);

        assert_eq!(
            doc.replace(swapped),
            Err(MutationError::KindChanged {
                block_id: id,
                from: BlockKind::Heading,
                to: BlockKind::Text,
            })
        );
    }
}
