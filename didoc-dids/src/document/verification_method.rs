use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use didoc_core::{FormatError, URI};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::InvalidDocument;

const ID: &str = "id";
const TYPE: &str = "type";
const CONTROLLER: &str = "controller";

/// Identifier of a verification method: an absolute URI, or a fragment
/// relative to the DID document subject (`#key-1`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Reference {
    Absolute(URI),
    Relative(String),
}

impl Reference {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Absolute(uri) => uri.as_str(),
            Self::Relative(fragment) => fragment,
        }
    }

    /// Resolves the reference against the DID document subject.
    pub fn resolve(&self, base: &URI) -> String {
        match self {
            Self::Absolute(uri) => uri.to_string(),
            Self::Relative(fragment) => format!("{}{}", base.without_fragment(), fragment),
        }
    }
}

impl FromStr for Reference {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > 1 && s.starts_with('#') {
            Ok(Self::Relative(s.to_string()))
        } else {
            Ok(Self::Absolute(URI::from_str(s)?))
        }
    }
}

impl TryFrom<String> for Reference {
    type Error = FormatError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str(&s)
    }
}

impl From<Reference> for String {
    fn from(reference: Reference) -> String {
        match reference {
            Reference::Absolute(uri) => uri.into(),
            Reference::Relative(fragment) => fragment,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verification method decoded from one entry of a DID document.
///
/// Only `id` is required. Key material properties (`publicKeyJwk`,
/// `publicKeyMultibase`, ...) are kept as-is in `properties`; nothing here
/// interprets them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(try_from = "Map<String, Value>")]
pub struct VerificationMethod {
    /// Verification method identifier.
    pub id: Reference,

    /// type [property](https://www.w3.org/TR/did-core/#dfn-did-urls) of a verification method map.
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// [controller](https://w3c-ccg.github.io/ld-proofs/#controller) property of a verification
    /// method map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<URI>,

    /// Verification methods properties.
    #[serde(flatten)]
    pub properties: BTreeMap<String, Value>,
}

impl VerificationMethod {
    pub fn new(id: Reference) -> Self {
        Self {
            id,
            type_: None,
            controller: None,
            properties: BTreeMap::new(),
        }
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

impl TryFrom<Map<String, Value>> for VerificationMethod {
    type Error = FormatError;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = match map.remove(ID) {
            Some(Value::String(id)) => Reference::try_from(id)?,
            Some(Value::Null) | None => return Err(FormatError::MissingProperty(ID)),
            Some(_) => return Err(FormatError::ExpectedString(ID)),
        };
        let type_ = match map.remove(TYPE) {
            Some(Value::String(type_)) => Some(type_),
            Some(Value::Null) | None => None,
            Some(_) => return Err(FormatError::ExpectedString(TYPE)),
        };
        let controller = match map.remove(CONTROLLER) {
            Some(Value::String(controller)) => Some(URI::try_from(controller)?),
            Some(Value::Null) | None => None,
            Some(_) => return Err(FormatError::ExpectedString(CONTROLLER)),
        };
        Ok(Self {
            id,
            type_,
            controller,
            properties: map.into_iter().collect(),
        })
    }
}

impl TryFrom<&Map<String, Value>> for VerificationMethod {
    type Error = FormatError;

    fn try_from(map: &Map<String, Value>) -> Result<Self, Self::Error> {
        Self::try_from(map.clone())
    }
}

/// Shape of a `verificationMethod` value as found in the source document.
enum VerificationMethodSet<'a> {
    One(&'a Map<String, Value>),
    Many(&'a [Value]),
    Unsupported,
}

impl<'a> From<&'a Value> for VerificationMethodSet<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Self::One(map),
            Value::Array(values) => Self::Many(values),
            _ => Self::Unsupported,
        }
    }
}

/// Decodes a `verificationMethod` value into an ordered list.
///
/// A single object gives one method, an array gives one method per entry in
/// source order. Any other shape gives an empty list. One bad entry fails
/// the whole list.
pub(crate) fn decode(value: &Value) -> Result<Vec<VerificationMethod>, InvalidDocument> {
    let invalid = |index: usize, source: FormatError| InvalidDocument::InvalidVerificationMethod {
        index,
        source,
    };
    match VerificationMethodSet::from(value) {
        VerificationMethodSet::One(map) => Ok(vec![
            VerificationMethod::try_from(map).map_err(|e| invalid(0, e))?
        ]),
        VerificationMethodSet::Many(values) => values
            .iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::Object(map) => {
                    VerificationMethod::try_from(map).map_err(|e| invalid(index, e))
                }
                _ => Err(invalid(index, FormatError::ExpectedObject("verificationMethod"))),
            })
            .collect(),
        VerificationMethodSet::Unsupported => {
            log::warn!(
                "Ignoring verificationMethod value that is neither an object nor an array: {}",
                value
            );
            Ok(Vec::new())
        }
    }
}

/// Reference to, or value of, a verification method.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
#[allow(clippy::large_enum_variant)]
pub enum ValueOrReference {
    Reference(Reference),
    /// Embedded verification method.
    Value(VerificationMethod),
}

impl ValueOrReference {
    pub fn id(&self) -> &Reference {
        match self {
            Self::Reference(r) => r,
            Self::Value(v) => &v.id,
        }
    }
}

impl TryFrom<&Value> for ValueOrReference {
    type Error = FormatError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(r) => Ok(Self::Reference(Reference::from_str(r)?)),
            Value::Object(map) => Ok(Self::Value(VerificationMethod::try_from(map)?)),
            _ => Err(FormatError::ExpectedObject("authentication")),
        }
    }
}
