//! Error types for `didoc-json-ld` crate
use didoc_core::FormatError;
use thiserror::Error;

/// Error type for `didoc-json-ld`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Missing context
    #[error("Missing context")]
    MissingContext,
    /// Context array without entries
    #[error("Empty context")]
    EmptyContext,
    /// Context entry that is neither a URI nor an object
    #[error("Invalid context: {0}")]
    InvalidContext(#[from] FormatError),
}
