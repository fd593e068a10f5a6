//! Error types for readme-core

/// Result type for readme-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in readme-core operations.
///
/// Query misses and unmatched mutation targets are not errors; they
/// surface as `Option`/`bool` results. The only hard failure is an
/// out-of-range section index, which always propagates to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Section index out of range: {index} (document has {len} content sections)")]
    IndexOutOfRange { index: usize, len: usize },
}
