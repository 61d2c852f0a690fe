//! DID document data model.
//!
//! See: <https://www.w3.org/TR/did-core/#did-documents>
use std::fmt;
use std::str::FromStr;

use didoc_core::{FormatError, URI};
use didoc_json_ld::{Contexts, InvalidObject, JsonLdObject, LinkedDataObject};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, InvalidDocument, ValidationError};

mod options;
pub mod verification_method;

pub use options::{ValidationOptions, ValidationOptionsBuilder};
pub use verification_method::{Reference, ValueOrReference, VerificationMethod};

pub const ID: &str = "id";
pub const VERIFICATION_METHOD: &str = "verificationMethod";
pub const AUTHENTICATION: &str = "authentication";

/// A DID document that passed structural validation.
///
/// The subject identifier and the verification methods are decoded once,
/// when the document is constructed. Every other property stays in the
/// backing JSON-LD object, untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct DIDDocument {
    object: JsonLdObject,
    id: URI,
    verification_method: Vec<VerificationMethod>,
}

impl DIDDocument {
    /// Validates a DID document mapping with the default options.
    pub fn new(map: Map<String, Value>) -> Result<Self, Error> {
        Self::new_with_options(map, &ValidationOptions::default())
    }

    pub fn new_with_options(
        map: Map<String, Value>,
        options: &ValidationOptions,
    ) -> Result<Self, Error> {
        let object = JsonLdObject::try_from_map(map)
            .map_err(|InvalidObject(map, e)| invalid(&map, InvalidDocument::Context(e)))?;
        Self::from_json_ld_with_options(object, options)
    }

    /// Validates a DID document from an already checked JSON-LD object.
    pub fn from_json_ld(object: JsonLdObject) -> Result<Self, Error> {
        Self::from_json_ld_with_options(object, &ValidationOptions::default())
    }

    pub fn from_json_ld_with_options(
        object: JsonLdObject,
        options: &ValidationOptions,
    ) -> Result<Self, Error> {
        match decode(&object, options) {
            Ok((id, verification_method)) => {
                log::debug!(
                    "Validated DID document {} with {} verification method(s)",
                    id,
                    verification_method.len()
                );
                Ok(Self {
                    object,
                    id,
                    verification_method,
                })
            }
            Err(cause) => Err(invalid(object.as_map(), cause)),
        }
    }

    /// Construct a DID document from JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Construct a DID document from JSON bytes.
    pub fn from_json_bytes(json: &[u8]) -> Result<Self, Error> {
        Self::from_value(serde_json::from_slice(json)?)
    }

    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(map) => Self::new(map),
            value => {
                let document = value.to_string();
                Err(ValidationError::new(document, InvalidDocument::ExpectedObject).into())
            }
        }
    }

    /// DID subject.
    pub fn id(&self) -> &URI {
        &self.id
    }

    /// Verification methods, in document order.
    pub fn verification_methods(&self) -> &[VerificationMethod] {
        &self.verification_method
    }

    /// Finds a verification method by its absolute id, or by a `#fragment`
    /// relative to the document subject.
    pub fn find_verification_method(&self, id: &str) -> Option<&VerificationMethod> {
        let id = match Reference::from_str(id).ok()? {
            r @ Reference::Relative(_) => r.resolve(&self.id),
            Reference::Absolute(uri) => uri.into(),
        };
        self.verification_method
            .iter()
            .find(|vm| vm.id.resolve(&self.id) == id)
    }

    /// Raw `authentication` property.
    pub fn authentication(&self) -> Option<&Value> {
        self.object.get(AUTHENTICATION)
    }

    /// Reads the `authentication` property.
    ///
    /// This property is not checked when the document is constructed, so
    /// reading it can fail with [`Error::Format`].
    pub fn authentication_methods(&self) -> Result<Vec<ValueOrReference>, Error> {
        let methods = match self.authentication() {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries
                .iter()
                .map(ValueOrReference::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            Some(value) => vec![ValueOrReference::try_from(value)?],
        };
        Ok(methods)
    }

    pub fn as_json_ld(&self) -> &JsonLdObject {
        &self.object
    }

    pub fn into_json_ld(self) -> JsonLdObject {
        self.object
    }

    /// Document as JSON text, with the original properties and shapes.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.object)?)
    }
}

fn decode(
    object: &JsonLdObject,
    options: &ValidationOptions,
) -> Result<(URI, Vec<VerificationMethod>), InvalidDocument> {
    options.check_context(object.context())?;
    let id = match object.get(ID) {
        None | Some(Value::Null) => return Err(InvalidDocument::MissingDocumentId),
        Some(Value::String(id)) if id.is_empty() => {
            return Err(InvalidDocument::MissingDocumentId)
        }
        Some(Value::String(id)) => URI::from_str(id).map_err(InvalidDocument::InvalidDocumentId)?,
        Some(_) => {
            let source = FormatError::ExpectedString(ID);
            return Err(InvalidDocument::InvalidDocumentId(source));
        }
    };
    let verification_method = match object.get(VERIFICATION_METHOD) {
        Some(value) => verification_method::decode(value)?,
        None => return Err(InvalidDocument::MissingVerificationMethod),
    };
    Ok((id, verification_method))
}

fn invalid(map: &Map<String, Value>, cause: InvalidDocument) -> Error {
    log::debug!("Rejected DID document: {}", cause);
    let document = serde_json::to_string(map).unwrap_or_default();
    ValidationError::new(document, cause).into()
}

impl LinkedDataObject for DIDDocument {
    fn context(&self) -> &Contexts {
        self.object.context()
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.object.get(key)
    }
}

impl TryFrom<Map<String, Value>> for DIDDocument {
    type Error = Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::new(map)
    }
}

impl TryFrom<JsonLdObject> for DIDDocument {
    type Error = Error;

    fn try_from(object: JsonLdObject) -> Result<Self, Self::Error> {
        Self::from_json_ld(object)
    }
}

impl FromStr for DIDDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl fmt::Display for DIDDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.object).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl Serialize for DIDDocument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.object.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DIDDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::new(map).map_err(serde::de::Error::custom)
    }
}
