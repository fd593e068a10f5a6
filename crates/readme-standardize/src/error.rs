//! Error types for readme-standardize

/// Result type for readme-standardize operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing standardization inputs.
///
/// Standardization itself is total over well-formed strings; only the
/// metadata parsing step can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse docs metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}
