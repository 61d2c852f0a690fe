use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::FormatError;

/// An absolute URI (or IRI), checked when constructed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
#[serde(untagged)]
pub enum URI {
    String(String),
}

impl From<URI> for String {
    fn from(uri: URI) -> String {
        let URI::String(string) = uri;
        string
    }
}

impl TryFrom<String> for URI {
    type Error = FormatError;
    fn try_from(uri: String) -> Result<Self, Self::Error> {
        if is_uri(&uri) {
            Ok(URI::String(uri))
        } else {
            Err(FormatError::InvalidURI(uri))
        }
    }
}

impl TryFrom<&str> for URI {
    type Error = FormatError;
    fn try_from(uri: &str) -> Result<Self, Self::Error> {
        URI::try_from(uri.to_string())
    }
}

impl URI {
    /// Return the URI as a string slice
    pub fn as_str(&self) -> &str {
        match self {
            URI::String(string) => string.as_str(),
        }
    }

    /// The URI with its fragment (if any) removed.
    pub fn without_fragment(&self) -> &str {
        match self.as_str().split_once('#') {
            Some((base, _)) => base,
            None => self.as_str(),
        }
    }
}

fn is_uri(string: &str) -> bool {
    iref::IriBuf::new(string).is_ok()
}

impl FromStr for URI {
    type Err = FormatError;
    fn from_str(uri: &str) -> Result<Self, Self::Err> {
        URI::try_from(uri)
    }
}

impl std::fmt::Display for URI {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::String(ref string) => write!(f, "{}", string),
        }
    }
}

impl PartialEq<str> for URI {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<'a> PartialEq<&'a str> for URI {
    fn eq(&self, other: &&'a str) -> bool {
        self.as_str() == *other
    }
}
