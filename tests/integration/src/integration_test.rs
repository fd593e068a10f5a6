//! Workspace integration tests: the full parse, edit, standardize,
//! export pipeline across readme-core and readme-standardize.

use pretty_assertions::assert_eq;
use readme_core::{Block, Document};
use readme_standardize::{ManifestDocs, StandardizeOptions, standardize};
use regex::Regex;

const PROJECT_README: &str = "\
# Demo Repo

A repository used to exercise the full pipeline.

## Getting Started

stale links

## Purpose

State the purpose.

```bash
# this heading-looking line lives in a fence
make demo
```

## Authors

- Someone
";

const MANIFEST_JSON: &str = r#"{
    "name": "demo-repo",
    "scriptsDocumentation": {
        "build": { "description": "Compile everything" },
        "release": { "description": "Cut a release" }
    },
    "envDocumentation": {
        "LOG_LEVEL": { "description": "Minimum level to log", "defaultValue": "info" }
    }
}"#;

fn options_from_manifest() -> StandardizeOptions {
    let manifest = ManifestDocs::from_json(MANIFEST_JSON).unwrap();
    let mut opts = StandardizeOptions::new(manifest.name.unwrap());
    opts.script_docs = manifest.scripts_documentation;
    opts.env_docs = manifest.env_documentation;
    opts
}

#[test]
fn unmodified_documents_round_trip_through_the_model() {
    let doc = Document::parse(PROJECT_README);
    assert_eq!(doc.export(), PROJECT_README);
    assert!(!doc.is_modified());
}

#[test]
fn edits_then_standardization_produce_a_stable_document() {
    let mut doc = Document::parse(PROJECT_README);

    // A batch edit a tooling script would make before standardizing.
    doc.insert_after(
        "## Purpose",
        Block::new("## Contributing", "Open a PR.\n"),
        false,
    );
    doc.set_section(
        Regex::new(r"^## Authors").unwrap(),
        "- Someone\n- Someone Else\n",
    );

    let output = standardize(&doc.export(), &options_from_manifest());

    let standardized = Document::parse(&output);
    assert_eq!(standardized.blocks()[1].header(), "# Demo Repo");
    assert_eq!(standardized.blocks()[2].header(), "## Table of Contents");
    for heading in [
        "## Scripts",
        "## Environment Variables",
        "## License",
        "## Contributing",
    ] {
        assert!(
            standardized.section(heading, true).is_some(),
            "missing section {heading}"
        );
    }

    // The fenced pseudo-heading never becomes a section.
    assert!(
        standardized
            .section("this heading-looking line", false)
            .is_none()
    );
    assert!(output.contains("# this heading-looking line lives in a fence"));

    // The ToC links every section without listing itself.
    let toc = standardized
        .section("## Table of Contents", true)
        .unwrap()
        .content();
    assert!(toc.contains("+ [Purpose](#purpose)"));
    assert!(toc.contains("+ [Contributing](#contributing)"));
    assert!(!toc.contains("[Table of Contents]"));

    // Standardizing its own output changes nothing.
    assert_eq!(standardize(&output, &options_from_manifest()), output);
}

#[test]
fn standardizing_an_empty_document_builds_a_skeleton() {
    let output = standardize("", &options_from_manifest());
    let doc = Document::parse(&output);

    assert_eq!(doc.blocks()[1].header(), "# demo-repo");
    assert!(doc.section("## Scripts", true).is_some());
    assert!(doc.section("## License", true).is_some());
    assert_eq!(standardize(&output, &options_from_manifest()), output);
}
