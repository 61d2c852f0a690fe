//! Error raised when a value cannot be read as its expected type.
use thiserror::Error;

/// A field value cannot be coerced to its expected semantic type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// The value is not an absolute URI.
    #[error("Invalid URI `{0}`")]
    InvalidURI(String),
    /// Expected a string for the named property.
    #[error("Expected string for {0}")]
    ExpectedString(&'static str),
    /// Expected an object for the named property.
    #[error("Expected object for {0}")]
    ExpectedObject(&'static str),
    /// A required property is absent.
    #[error("Missing property {0}")]
    MissingProperty(&'static str),
}

impl From<FormatError> for String {
    fn from(err: FormatError) -> String {
        err.to_string()
    }
}
