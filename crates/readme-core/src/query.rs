//! Header queries: literal text or regular expression

use regex::Regex;

/// A query against block headers.
///
/// Text queries match by substring containment, or by exact equality in
/// strict mode. Pattern queries match wherever the regex matches; the
/// strict flag has no effect on them.
#[derive(Debug, Clone)]
pub enum Query {
    Text(String),
    Pattern(Regex),
}

impl Query {
    pub fn matches(&self, header: &str, strict: bool) -> bool {
        match self {
            Query::Text(text) => {
                if strict {
                    header == text
                } else {
                    header.contains(text.as_str())
                }
            }
            Query::Pattern(pattern) => pattern.is_match(header),
        }
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Query::Text(text.to_string())
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Query::Text(text)
    }
}

impl From<Regex> for Query {
    fn from(pattern: Regex) -> Self {
        Query::Pattern(pattern)
    }
}

impl From<&Regex> for Query {
    fn from(pattern: &Regex) -> Self {
        Query::Pattern(pattern.clone())
    }
}
