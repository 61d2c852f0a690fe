//! Error types for `didoc-dids` crate
use didoc_core::FormatError;
use serde_json::Error as SerdeJSONError;
use thiserror::Error;

/// Error type for `didoc-dids`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Input text is not valid JSON
    #[error(transparent)]
    Parse(#[from] SerdeJSONError),
    /// Input is valid JSON but not a well-formed DID document
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A value cannot be read as its expected type
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl From<Error> for String {
    fn from(err: Error) -> String {
        err.to_string()
    }
}

/// Malformed DID document.
///
/// Carries the offending document, serialized as JSON, for audit logs.
#[derive(Error, Debug, Clone)]
#[error("Malformed DID document ({cause}): {document}")]
pub struct ValidationError {
    document: String,
    #[source]
    cause: InvalidDocument,
}

impl ValidationError {
    pub fn new(document: String, cause: InvalidDocument) -> Self {
        Self { document, cause }
    }

    /// The rejected document, as JSON text.
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn cause(&self) -> &InvalidDocument {
        &self.cause
    }
}

/// Reason a DID document was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidDocument {
    /// Expected object
    #[error("Expected object")]
    ExpectedObject,
    /// Missing or malformed `@context`
    #[error(transparent)]
    Context(#[from] didoc_json_ld::Error),
    /// First context is not one of the accepted contexts
    #[error("Unknown context `{0}`")]
    UnknownContext(String),
    /// Missing document ID
    #[error("Missing document ID")]
    MissingDocumentId,
    /// Document ID is not a URI
    #[error("Invalid document ID: {0}")]
    InvalidDocumentId(#[source] FormatError),
    /// Missing `verificationMethod` property
    #[error("Missing verificationMethod")]
    MissingVerificationMethod,
    /// A verification method cannot be decoded
    #[error("Invalid verification method at index {index}: {source}")]
    InvalidVerificationMethod {
        index: usize,
        #[source]
        source: FormatError,
    },
}
