//! Table-of-contents generation against a realistic document.

use pretty_assertions::assert_eq;
use readme_core::document::TOC_HEADER;
use readme_core::{DEFAULT_TOC_INDENT, DEFAULT_TOC_START, Document};

const MISSING_TOC: &str = "\
# Demo Repo

Intro.

## Header with a `tag in it`

Content.

## Sub-purpose section

### Sub-sub purpose section

#### `yarn` scripts

## Authors

## Contributing

## License
";

#[test]
fn default_start_skips_root_and_top_level_heading() {
    let doc = Document::parse(MISSING_TOC);
    let toc = doc.toc_block(DEFAULT_TOC_START, DEFAULT_TOC_INDENT);

    assert_eq!(toc.header(), TOC_HEADER);
    let expected = [
        "  + [Header with a `tag in it`](#header-with-a-tag-in-it)",
        "  + [Sub-purpose section](#sub-purpose-section)",
        "    + [Sub-sub purpose section](#sub-sub-purpose-section)",
        "      + [`yarn` scripts](#yarn-scripts)",
        "  + [Authors](#authors)",
        "  + [Contributing](#contributing)",
        "  + [License](#license)",
    ]
    .join("\n");
    assert_eq!(toc.content(), expected);
}

#[test]
fn start_of_zero_includes_the_top_level_heading() {
    let doc = Document::parse(MISSING_TOC);
    let toc = doc.toc_block(0, DEFAULT_TOC_INDENT);

    assert!(toc.content().starts_with("+ [Demo Repo](#demo-repo)\n"));
    assert_eq!(toc.content().lines().count(), 8);
}

#[test]
fn nesting_follows_heading_depth() {
    let doc = Document::parse("# Demo Repo\n## Section A\n### Subsection\n");
    assert_eq!(
        doc.toc(0, "  "),
        "+ [Demo Repo](#demo-repo)\n  + [Section A](#section-a)\n    + [Subsection](#subsection)"
    );
}

#[test]
fn start_past_the_end_yields_an_empty_list() {
    let doc = Document::parse(MISSING_TOC);
    assert_eq!(doc.toc(1000, DEFAULT_TOC_INDENT), "");
    assert_eq!(doc.toc_block(1000, DEFAULT_TOC_INDENT).content(), "");
}
