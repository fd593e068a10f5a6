//! Documentation metadata and its README block formatting.
//!
//! Script and environment-variable docs come from a project manifest's
//! metadata blob (JSON); document links are built from already-read
//! markdown files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use readme_core::{Block, parser};

use crate::error::Result;
use crate::sections::{GETTING_STARTED, LICENSE, SCRIPTS};

/// Documentation for one runnable script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptDoc {
    pub description: String,
}

/// Script name to its documentation, in stable (sorted) order.
pub type ScriptDocs = BTreeMap<String, ScriptDoc>;

/// Documentation for one environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvDoc {
    pub description: String,
    #[serde(default)]
    pub default_value: String,
}

/// Environment variable name to its documentation, in stable order.
pub type EnvDocs = BTreeMap<String, EnvDoc>;

/// Documentation metadata extracted from a project manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDocs {
    pub name: Option<String>,
    #[serde(default)]
    pub scripts_documentation: Option<ScriptDocs>,
    #[serde(default)]
    pub env_documentation: Option<EnvDocs>,
}

impl ManifestDocs {
    /// Parse the manifest metadata blob.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// An already-read markdown document, for link building.
#[derive(Debug, Clone)]
pub struct DocFile {
    /// Path relative to the repository root, forward-slashed.
    pub path: String,
    pub content: String,
}

impl DocFile {
    /// Title taken from the document's first heading line, markers
    /// stripped.
    fn title(&self) -> Option<String> {
        let heading = self
            .content
            .lines()
            .find(|line| parser::is_header(line))?;
        let text: Vec<&str> = heading.trim().split(' ').skip(1).collect();
        Some(text.join(" "))
    }

    fn directory(&self) -> &str {
        self.path.rsplit_once('/').map_or("", |(dir, _)| dir)
    }

    fn is_top_level_readme(&self) -> bool {
        self.path.eq_ignore_ascii_case("readme.md")
    }
}

/// Format script documentation as a `## Scripts` block.
pub fn format_script_docs(docs: &ScriptDocs) -> Block {
    let content: String = docs
        .iter()
        .map(|(name, doc)| format!("- `{}`: {}\n", name, doc.description))
        .collect();
    Block::new(SCRIPTS.heading, content)
}

/// Format environment-variable documentation as an
/// `## Environment Variables` block.
pub fn format_env_docs(docs: &EnvDocs) -> Block {
    let content: String = docs
        .iter()
        .map(|(name, doc)| {
            format!(
                "- `{}`: {}\n  - Default Value: \"{}\"\n",
                name, doc.description, doc.default_value
            )
        })
        .collect();
    Block::new(crate::sections::ENV.heading, content)
}

/// Build a `## Getting Started` block linking to each markdown document,
/// grouped by directory. The top-level README itself is skipped.
pub fn doc_links_block(files: &[DocFile], introduction: &str) -> Block {
    let mut lines: Vec<String> = Vec::new();
    let mut last_directory = "";

    for file in files {
        if file.is_top_level_readme() {
            continue;
        }
        let Some(title) = file.title() else {
            debug!(path = %file.path, "skipping document without a heading");
            continue;
        };
        let directory = file.directory();
        if !directory.is_empty() && directory != last_directory {
            last_directory = directory;
            lines.push(format!("- {}", directory));
        }
        debug!(path = %file.path, "linking document");
        lines.push(format!("  - [{}]({})", title, file.path));
    }

    let mut content = String::new();
    if !introduction.is_empty() {
        content.push_str(introduction);
        content.push('\n');
    }
    for line in &lines {
        content.push_str(line);
        content.push('\n');
    }
    Block::new(GETTING_STARTED.heading, content)
}

/// The stock `## License` block.
pub fn license_block() -> Block {
    Block::new(LICENSE.heading, "See [License](./LICENSE)\n")
}
