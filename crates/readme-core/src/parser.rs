//! Line classification and the block-splitting scan.
//!
//! The parser walks the document line by line with a single `in_code_block`
//! flag. Heading lines start a new block, except inside an open code fence,
//! where they are kept verbatim as content of the enclosing block.

use regex::Regex;
use std::sync::LazyLock;

use crate::block::Block;

/// One or more `#` markers followed by a space, optionally indented.
static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ *#+ ").expect("Invalid header regex"));

/// A triple-backtick fence opener, optionally followed by a language tag.
static FENCE_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ *```[^`]*$").expect("Invalid fence start regex"));

/// A bare triple-backtick fence closer.
static FENCE_END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ *``` *$").expect("Invalid fence end regex"));

/// Whether the line is a markdown heading.
pub fn is_header(line: &str) -> bool {
    HEADER_REGEX.is_match(line)
}

/// Whether the line opens a fenced code region.
pub fn is_fence_start(line: &str) -> bool {
    FENCE_START_REGEX.is_match(line)
}

/// Whether the line closes a fenced code region.
pub fn is_fence_end(line: &str) -> bool {
    FENCE_END_REGEX.is_match(line)
}

/// Split markdown text into an ordered block sequence.
///
/// The result always starts with the root block, which holds any content
/// preceding the first heading; empty input yields the root block alone.
/// Input is treated as a sequence of newline-terminated lines, so the
/// empty fragment after a final newline is not a line of its own.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let mut blocks = vec![Block::root()];
    let mut in_code_block = false;

    for line in lines {
        if in_code_block {
            if is_fence_end(line) {
                in_code_block = false;
            }
            // fence content is never reclassified, headings included
            last_block(&mut blocks).push_line(line);
        } else if is_header(line) {
            blocks.push(Block::with_header(line));
        } else {
            if is_fence_start(line) {
                in_code_block = true;
            }
            last_block(&mut blocks).push_line(line);
        }
    }

    blocks
}

fn last_block(blocks: &mut [Block]) -> &mut Block {
    blocks.last_mut().expect("block sequence starts with root")
}
