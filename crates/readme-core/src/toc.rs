//! Table-of-contents rendering: slugs, links, and the nested bullet list

use crate::block::Block;

/// Reduce heading text to its GitHub-style anchor: spaces become hyphens,
/// anything outside `[a-zA-Z0-9-]` is stripped, and the result is
/// lowercased.
pub fn slugify(text: &str) -> String {
    text.chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_lowercase()
}

/// Build an intra-document link from the words of a heading.
pub fn make_link(text_parts: &[&str]) -> String {
    format!(
        "[{}](#{})",
        text_parts.join(" "),
        slugify(&text_parts.join("-"))
    )
}

/// Render the nested `+` bullet list for the given blocks.
///
/// Nesting depth is the heading level minus one; each level is indented by
/// one more repetition of `indent`. Lines are newline-joined with no
/// trailing newline.
pub fn render_list(blocks: &[Block], indent: &str) -> String {
    blocks
        .iter()
        .map(|block| {
            let mut parts = block.header().trim().split(' ');
            let marker = parts.next().unwrap_or_default();
            let text: Vec<&str> = parts.collect();
            let depth = marker.len().saturating_sub(1);
            format!("{}+ {}", indent.repeat(depth), make_link(&text))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
