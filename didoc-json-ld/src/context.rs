use std::ops::Deref;

use didoc_core::{FormatError, OneOrMany, URI};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, CONTEXT_KEY};

/// One entry of a `@context` property.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Context {
    URI(URI),
    Object(Map<String, Value>),
}

impl Context {
    pub fn as_uri(&self) -> Option<&URI> {
        match self {
            Self::URI(uri) => Some(uri),
            Self::Object(_) => None,
        }
    }
}

impl TryFrom<&Value> for Context {
    type Error = FormatError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(string) => Ok(Self::URI(URI::try_from(string.as_str())?)),
            Value::Object(object) => Ok(Self::Object(object.clone())),
            _ => Err(FormatError::ExpectedString(CONTEXT_KEY)),
        }
    }
}

/// Non-empty `@context` value.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct Contexts(OneOrMany<Context>);

impl Contexts {
    /// Reads the value of a `@context` property.
    ///
    /// `null` counts as a missing context.
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let contexts = match value {
            Value::Null => return Err(Error::MissingContext),
            Value::Array(entries) if entries.is_empty() => return Err(Error::EmptyContext),
            Value::Array(entries) => OneOrMany::Many(
                entries
                    .iter()
                    .map(Context::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            value => OneOrMany::One(Context::try_from(value)?),
        };
        Ok(Self(contexts))
    }

    /// First context, if it is a URI.
    pub fn first_uri(&self) -> Option<&URI> {
        self.0.first().and_then(Context::as_uri)
    }

    pub fn contains_uri(&self, uri: &str) -> bool {
        self.0
            .any(|context| context.as_uri().map_or(false, |u| u.as_str() == uri))
    }
}

impl Deref for Contexts {
    type Target = OneOrMany<Context>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Contexts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}
