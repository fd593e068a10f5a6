//! The Document aggregate: ordered block sequence plus header index

use crate::block::{Block, BlockId};
use crate::error::{Error, Result};
use crate::index::BlockIndex;
use crate::parser;
use crate::query::Query;
use crate::toc;

/// Default start position for table-of-contents generation. Entries are
/// taken from `blocks[start_at + 1..]`, so the default skips the root
/// block and the document's top-level H1.
pub const DEFAULT_TOC_START: usize = 1;

/// Default per-level indentation for table-of-contents entries.
pub const DEFAULT_TOC_INDENT: &str = "  ";

/// Heading used for a generated table-of-contents block.
pub const TOC_HEADER: &str = "## Table of Contents";

/// A parsed markdown document, editable at block granularity.
///
/// The document owns the block sequence and its header index exclusively;
/// every structural mutation ends with a full index rebuild, so queries
/// never observe a stale index.
#[derive(Debug, Clone)]
pub struct Document {
    /// Source as provided to `parse` (for `is_modified` tracking).
    original_source: String,
    blocks: Vec<Block>,
    index: BlockIndex,
}

impl Document {
    /// Parse markdown text into a document.
    ///
    /// The result always contains at least the root block, even for empty
    /// input.
    pub fn parse(text: &str) -> Self {
        let blocks = parser::parse_blocks(text);
        let index = BlockIndex::build(&blocks);
        Self {
            original_source: text.to_string(),
            blocks,
            index,
        }
    }

    fn reindex(&mut self) {
        self.index = BlockIndex::build(&self.blocks);
    }

    /// All blocks in document order, root first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The header index.
    pub fn index(&self) -> &BlockIndex {
        &self.index
    }

    /// Number of content blocks (the root block is not counted).
    pub fn section_count(&self) -> usize {
        self.blocks.len() - 1
    }

    /// Whether the document differs from the source it was parsed from.
    pub fn is_modified(&self) -> bool {
        self.export() != self.original_source
    }

    /// Positions of all blocks matching the query, grouped by header in
    /// first-occurrence order, document order within a header.
    fn match_positions(&self, query: &Query, strict: bool) -> Vec<usize> {
        let mut positions = Vec::new();
        for (header, header_positions) in self.index.iter() {
            if query.matches(header, strict) {
                positions.extend_from_slice(header_positions);
            }
        }
        positions
    }

    /// All blocks whose header matches the query.
    pub fn sections(&self, query: impl Into<Query>, strict: bool) -> Vec<&Block> {
        let query = query.into();
        self.match_positions(&query, strict)
            .into_iter()
            .map(|position| &self.blocks[position])
            .collect()
    }

    /// First block whose header matches the query, if any.
    pub fn section(&self, query: impl Into<Query>, strict: bool) -> Option<&Block> {
        let query = query.into();
        let position = self.match_positions(&query, strict).into_iter().next()?;
        Some(&self.blocks[position])
    }

    /// Mutable access to the first matching block, for content edits.
    /// Headers are immutable on `Block`, so the index stays valid.
    pub fn section_mut(&mut self, query: impl Into<Query>, strict: bool) -> Option<&mut Block> {
        let query = query.into();
        let position = self.match_positions(&query, strict).into_iter().next()?;
        Some(&mut self.blocks[position])
    }

    /// Content block at the given 0-based index (root excluded).
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` when the index is past the last content
    /// block.
    pub fn section_at(&self, index: usize) -> Result<&Block> {
        if index >= self.section_count() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.section_count(),
            });
        }
        Ok(&self.blocks[index + 1])
    }

    /// Replace the content of the content block at the given 0-based
    /// index (root excluded), leaving its header untouched.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` when the index is past the last content
    /// block.
    pub fn set_section_at(&mut self, index: usize, content: &str) -> Result<()> {
        let len = self.section_count();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        self.blocks[index + 1].set_content(content);
        self.reindex();
        Ok(())
    }

    /// Replace the content of the first block matching the query.
    ///
    /// Returns `false` (and changes nothing) when no block matches.
    pub fn set_section(&mut self, query: impl Into<Query>, content: &str) -> bool {
        let query = query.into();
        let Some(position) = self.match_positions(&query, false).into_iter().next() else {
            return false;
        };
        self.blocks[position].set_content(content);
        self.reindex();
        true
    }

    fn position_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id() == id)
    }

    /// Append a block: at the end of the document, or immediately after
    /// the target block when one is given.
    ///
    /// Returns `false` (and changes nothing) when the target is not part
    /// of this document.
    pub fn append(&mut self, block: Block, target: Option<BlockId>) -> bool {
        match target {
            None => self.blocks.push(block),
            Some(id) => match self.position_of(id) {
                Some(position) => self.blocks.insert(position + 1, block),
                None => return false,
            },
        }
        self.reindex();
        true
    }

    /// Prepend a block: right after the root block, or immediately before
    /// the target block when one is given.
    ///
    /// Returns `false` (and changes nothing) when the target is not part
    /// of this document.
    pub fn prepend(&mut self, block: Block, target: Option<BlockId>) -> bool {
        match target {
            None => {
                let position = 1.min(self.blocks.len());
                self.blocks.insert(position, block);
            }
            Some(id) => match self.position_of(id) {
                Some(position) => self.blocks.insert(position, block),
                None => return false,
            },
        }
        self.reindex();
        true
    }

    /// Insert a block immediately after the first block (in document
    /// order) whose header matches the query.
    ///
    /// Returns `false` (and changes nothing) when nothing matches.
    pub fn insert_after(&mut self, query: impl Into<Query>, block: Block, strict: bool) -> bool {
        let query = query.into();
        let Some(position) = self
            .blocks
            .iter()
            .position(|b| query.matches(b.header(), strict))
        else {
            return false;
        };
        self.blocks.insert(position + 1, block);
        self.reindex();
        true
    }

    /// Insert a block immediately before the first block (in document
    /// order) whose header matches the query.
    ///
    /// Returns `false` (and changes nothing) when nothing matches.
    pub fn insert_before(&mut self, query: impl Into<Query>, block: Block, strict: bool) -> bool {
        let query = query.into();
        let Some(position) = self
            .blocks
            .iter()
            .position(|b| query.matches(b.header(), strict))
        else {
            return false;
        };
        self.blocks.insert(position, block);
        self.reindex();
        true
    }

    /// Remove a block by identity. The root block cannot be removed.
    pub fn remove(&mut self, id: BlockId) -> Option<Block> {
        let position = self.position_of(id)?;
        if position == 0 {
            return None;
        }
        let block = self.blocks.remove(position);
        self.reindex();
        Some(block)
    }

    /// Parse a markdown snippet and append its blocks at the end of the
    /// document. Preamble lines before the snippet's first heading
    /// continue the current last block.
    pub fn append_content(&mut self, text: &str) {
        let mut parsed = parser::parse_blocks(text).into_iter();
        let root = parsed.next().expect("parse always yields a root block");
        if let Some(last) = self.blocks.last_mut() {
            last.extend_lines(root.take_lines());
        }
        self.blocks.extend(parsed);
        self.reindex();
    }

    /// Parse a markdown snippet and insert its blocks right after the
    /// root block. Preamble lines before the snippet's first heading
    /// extend the root block's content.
    pub fn prepend_content(&mut self, text: &str) {
        let mut parsed = parser::parse_blocks(text).into_iter();
        let root = parsed.next().expect("parse always yields a root block");
        self.blocks[0].extend_lines(root.take_lines());
        let mut position = 1;
        for block in parsed {
            self.blocks.insert(position, block);
            position += 1;
        }
        self.reindex();
    }

    /// Render the table-of-contents bullet list for blocks from
    /// `start_at + 1` onward. A start position past the end yields an
    /// empty list.
    pub fn toc(&self, start_at: usize, indent: &str) -> String {
        let from = (start_at + 1).min(self.blocks.len());
        toc::render_list(&self.blocks[from..], indent)
    }

    /// Wrap the generated table of contents in a `## Table of Contents`
    /// block.
    pub fn toc_block(&self, start_at: usize, indent: &str) -> Block {
        Block::new(TOC_HEADER, self.toc(start_at, indent))
    }

    /// Serialize back to markdown: each block's header line (root
    /// excepted) followed by its content lines.
    pub fn export(&self) -> String {
        self.blocks.iter().map(Block::to_markdown).collect()
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.export())
    }
}
