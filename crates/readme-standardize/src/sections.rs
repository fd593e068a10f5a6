//! The well-known README sections.
//!
//! Each section carries the literal heading used when inserting it and a
//! lookup pattern tolerant of heading-level and spacing variations in
//! existing documents.

use regex::Regex;
use std::sync::LazyLock;

use readme_core::Query;

/// A known section: insertion heading plus lookup pattern.
pub struct SectionSpec {
    pub heading: &'static str,
    pattern: LazyLock<Regex>,
}

impl SectionSpec {
    /// Lookup query for this section.
    pub fn query(&self) -> Query {
        Query::from(&*self.pattern)
    }
}

pub static TOC: SectionSpec = SectionSpec {
    heading: "## Table of Contents",
    pattern: LazyLock::new(|| {
        Regex::new(r"^ *#+ *Table of Contents").expect("Invalid ToC pattern")
    }),
};

pub static GETTING_STARTED: SectionSpec = SectionSpec {
    heading: "## Getting Started",
    pattern: LazyLock::new(|| {
        Regex::new(r"^ *#+ *Getting Started").expect("Invalid Getting Started pattern")
    }),
};

pub static SCRIPTS: SectionSpec = SectionSpec {
    heading: "## Scripts",
    pattern: LazyLock::new(|| Regex::new(r"^ *#+ *Scripts").expect("Invalid Scripts pattern")),
};

pub static ENV: SectionSpec = SectionSpec {
    heading: "## Environment Variables",
    pattern: LazyLock::new(|| {
        Regex::new(r"^ *#+ *Environment Variables").expect("Invalid Environment pattern")
    }),
};

pub static LICENSE: SectionSpec = SectionSpec {
    heading: "## License",
    pattern: LazyLock::new(|| Regex::new(r"^ *#+ *License").expect("Invalid License pattern")),
};

static MAIN_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ *# ").expect("Invalid main header pattern"));

/// Query matching the document's top-level H1 heading.
pub fn main_header_query() -> Query {
    Query::from(&*MAIN_HEADER)
}
