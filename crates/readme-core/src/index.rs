//! Header index over the block sequence.
//!
//! Maps each distinct header string to the ordered positions of the blocks
//! sharing it. The index is rebuilt wholesale after every structural
//! mutation; block positions stored here are only valid for the block
//! sequence the index was built from.

use std::collections::HashMap;

use crate::block::Block;

/// Header to ordered block positions, with deterministic key iteration in
/// first-occurrence order.
#[derive(Debug, Default, Clone)]
pub struct BlockIndex {
    by_header: HashMap<String, Vec<usize>>,
    key_order: Vec<String>,
}

impl BlockIndex {
    /// Build the index for a block sequence.
    pub fn build(blocks: &[Block]) -> Self {
        let mut index = Self::default();
        for (position, block) in blocks.iter().enumerate() {
            match index.by_header.get_mut(block.header()) {
                Some(positions) => positions.push(position),
                None => {
                    index.key_order.push(block.header().to_string());
                    index
                        .by_header
                        .insert(block.header().to_string(), vec![position]);
                }
            }
        }
        index
    }

    /// Positions of all blocks carrying exactly this header, in document
    /// order. Empty if the header is absent.
    pub fn get(&self, header: &str) -> &[usize] {
        self.by_header.get(header).map_or(&[], Vec::as_slice)
    }

    /// Iterate `(header, positions)` entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.key_order.iter().map(|key| {
            (
                key.as_str(),
                self.by_header[key].as_slice(),
            )
        })
    }

    /// Number of distinct headers.
    pub fn len(&self) -> usize {
        self.key_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_order.is_empty()
    }
}
