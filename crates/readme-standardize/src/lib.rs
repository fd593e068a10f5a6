//! README standardization on top of the readme-core document model.
//!
//! Takes already-read README text plus documentation metadata and upserts
//! the well-known sections (Getting Started, Scripts, Environment
//! Variables, License), then regenerates the Table of Contents. Purely
//! string-in/string-out: reading and writing files is the caller's job.

pub mod docs;
pub mod error;
pub mod sections;
pub mod standardize;

pub use docs::{
    DocFile, EnvDoc, EnvDocs, ManifestDocs, ScriptDoc, ScriptDocs, doc_links_block,
    format_env_docs, format_script_docs, license_block,
};
pub use error::{Error, Result};
pub use sections::{ENV, GETTING_STARTED, LICENSE, SCRIPTS, SectionSpec, TOC, main_header_query};
pub use standardize::{StandardizeOptions, standardize};
