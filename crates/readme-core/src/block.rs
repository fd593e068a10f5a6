//! Block type: a header plus its following content lines

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::parser;

/// Sentinel header for the implicit block preceding the first heading.
pub const ROOT_HEADER: &str = "_root";

/// Stable identity of a block within a document.
///
/// Identity survives structural edits; it is used to target a specific
/// block (rather than a header, which may be duplicated) when inserting
/// relative to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(Uuid);

impl BlockId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// A header-delimited section of a markdown document.
///
/// The header is the raw heading line (including its `#` markers); the
/// content is the ordered list of lines up to the next heading. The header
/// is immutable after construction so the document's header index cannot
/// be invalidated through a `&mut Block`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    id: BlockId,
    header: String,
    lines: Vec<String>,
}

impl Block {
    /// Create a block from a heading line and its content text.
    ///
    /// The content is split on newlines into the internal line
    /// representation. An empty content string yields a single empty line,
    /// so the rendered block is `header\n\n`.
    pub fn new(header: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            header: header.into(),
            lines: content.into().split('\n').map(str::to_string).collect(),
        }
    }

    /// Create the implicit root block (no header line, no content).
    pub fn root() -> Self {
        Self {
            id: BlockId::new(),
            header: ROOT_HEADER.to_string(),
            lines: Vec::new(),
        }
    }

    pub(crate) fn with_header(header: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            header: header.into(),
            lines: Vec::new(),
        }
    }

    /// Parse the first block out of a markdown snippet.
    ///
    /// Returns `None` if the snippet contains no heading line.
    pub fn parse(text: &str) -> Option<Self> {
        parser::parse_blocks(text).into_iter().find(|b| !b.is_root())
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Whether this is the root sentinel block.
    pub fn is_root(&self) -> bool {
        self.header == ROOT_HEADER
    }

    /// Content lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Content as a single newline-joined string.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the content, leaving the header untouched.
    pub fn set_content(&mut self, content: &str) {
        self.lines = content.split('\n').map(str::to_string).collect();
    }

    pub(crate) fn push_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub(crate) fn extend_lines(&mut self, lines: Vec<String>) {
        self.lines.extend(lines);
    }

    pub(crate) fn take_lines(self) -> Vec<String> {
        self.lines
    }

    /// Render the block as markdown: the header line (unless root), then
    /// each content line, all newline-terminated.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        if !self.is_root() {
            out.push_str(&self.header);
            out.push('\n');
        }
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Structural equality: header and content, ignoring identity.
impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.lines == other.lines
    }
}

impl Eq for Block {}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_markdown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_header_then_content() {
        let block = Block::new("## test header", "test content");
        assert_eq!(block.to_markdown(), "## test header\ntest content\n");
    }

    #[test]
    fn root_renders_content_only() {
        let mut root = Block::root();
        assert_eq!(root.to_markdown(), "");
        root.push_line("preamble");
        assert_eq!(root.to_markdown(), "preamble\n");
    }

    #[test]
    fn empty_content_is_a_single_blank_line() {
        let block = Block::new("# Title", "");
        assert_eq!(block.to_markdown(), "# Title\n\n");
    }

    #[test]
    fn set_content_preserves_header() {
        let mut block = Block::new("## Section", "old");
        block.set_content("new\ncontent");
        assert_eq!(block.header(), "## Section");
        assert_eq!(block.content(), "new\ncontent");
        assert_eq!(block.lines(), ["new", "content"]);
    }

    #[test]
    fn parse_returns_first_content_block() {
        let block = Block::parse("# Header\nContent\n").unwrap();
        assert_eq!(block.header(), "# Header");
        assert_eq!(block.content(), "Content");
    }

    #[test]
    fn parse_without_heading_returns_none() {
        assert!(Block::parse("just text\n").is_none());
        assert!(Block::parse("").is_none());
    }

    #[test]
    fn identity_survives_clone_but_differs_between_blocks() {
        let a = Block::new("## A", "x");
        let b = Block::new("## A", "x");
        assert_eq!(a, b);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }
}
