//! Markdown README document model
//!
//! Parses a markdown document into an ordered sequence of header-delimited
//! blocks, indexes the blocks by header for querying, supports structural
//! edits (insert, append, prepend, content replacement), generates a table
//! of contents from the block structure, and serializes back to markdown.
//!
//! The model is purely in-memory: strings in, strings out. File I/O and
//! formatting belong to the callers.

pub mod block;
pub mod document;
pub mod error;
pub mod index;
pub mod parser;
pub mod query;
pub mod toc;

pub use block::{Block, BlockId, ROOT_HEADER};
pub use document::{DEFAULT_TOC_INDENT, DEFAULT_TOC_START, Document};
pub use error::{Error, Result};
pub use index::BlockIndex;
pub use query::Query;
