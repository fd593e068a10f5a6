//! The standardization pass itself.
//!
//! Section order for fresh documents: H1 title, Table of Contents,
//! Getting Started, Scripts, Environment Variables, then any pre-existing
//! sections, with License at the end. Existing sections are updated in
//! place wherever they already live.

use tracing::{debug, info};

use readme_core::{Block, BlockId, DEFAULT_TOC_INDENT, DEFAULT_TOC_START, Document};

use crate::docs::{EnvDocs, ScriptDocs, format_env_docs, format_script_docs, license_block};
use crate::sections::{ENV, GETTING_STARTED, LICENSE, SCRIPTS, SectionSpec, TOC, main_header_query};

/// What to standardize and with which inputs.
#[derive(Debug, Clone)]
pub struct StandardizeOptions {
    /// H1 title inserted when the document has none.
    pub title: String,
    pub script_docs: Option<ScriptDocs>,
    pub env_docs: Option<EnvDocs>,
    /// Pre-built Getting Started block (see `doc_links_block`).
    pub doc_links: Option<Block>,
    pub with_license: bool,
    pub with_toc: bool,
}

impl StandardizeOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            script_docs: None,
            env_docs: None,
            doc_links: None,
            with_license: true,
            with_toc: true,
        }
    }
}

/// Standardize README text: ensure the H1 title, upsert the known
/// sections, and regenerate the Table of Contents last (it depends on
/// everything else). Idempotent: a second pass over its own output is a
/// no-op.
pub fn standardize(content: &str, opts: &StandardizeOptions) -> String {
    info!(title = %opts.title, "standardizing readme");
    let mut doc = Document::parse(content);

    let main_id = match doc.section(main_header_query(), false).map(Block::id) {
        Some(id) => id,
        None => {
            debug!("no top-level heading, inserting title");
            let block = Block::new(format!("# {}", opts.title), "");
            let id = block.id();
            doc.prepend(block, None);
            id
        }
    };

    // Sections chain after one another so fresh documents come out in a
    // stable order.
    let mut anchor = main_id;
    if let Some(links) = &opts.doc_links {
        anchor = upsert(&mut doc, &GETTING_STARTED, links.content(), anchor);
    }
    if let Some(scripts) = &opts.script_docs {
        anchor = upsert(&mut doc, &SCRIPTS, format_script_docs(scripts).content(), anchor);
    }
    if let Some(env) = &opts.env_docs {
        upsert(&mut doc, &ENV, format_env_docs(env).content(), anchor);
    }

    if opts.with_license && doc.section(LICENSE.query(), false).is_none() {
        debug!("appending license section");
        doc.append(license_block(), None);
    }

    if opts.with_toc {
        refresh_toc(&mut doc, main_id);
    }

    doc.export()
}

/// Update the section's content in place, or insert it after the anchor
/// block when absent. Returns the id of the block now holding the
/// section.
fn upsert(doc: &mut Document, spec: &SectionSpec, content: String, anchor: BlockId) -> BlockId {
    if let Some(existing) = doc.section_mut(spec.query(), false) {
        debug!(section = spec.heading, "updating existing section");
        existing.set_content(&content);
        existing.id()
    } else {
        debug!(section = spec.heading, "inserting section");
        let block = Block::new(spec.heading, content);
        let id = block.id();
        doc.append(block, Some(anchor));
        id
    }
}

/// Regenerate the Table of Contents. An existing ToC section is excluded
/// from its own entries (computed on a scratch copy with the section
/// removed), which keeps the pass idempotent.
fn refresh_toc(doc: &mut Document, main_id: BlockId) {
    match doc.section(TOC.query(), false).map(Block::id) {
        Some(toc_id) => {
            let mut scratch = doc.clone();
            scratch.remove(toc_id);
            let fresh = scratch.toc_block(DEFAULT_TOC_START, DEFAULT_TOC_INDENT);
            debug!("refreshing table of contents");
            doc.set_section(TOC.query(), &fresh.content());
        }
        None => {
            debug!("inserting table of contents");
            let toc = doc.toc_block(DEFAULT_TOC_START, DEFAULT_TOC_INDENT);
            doc.append(toc, Some(main_id));
        }
    }
}
