use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Contexts, Error, CONTEXT_KEY};

/// Read access to a JSON-LD node: its context and raw properties.
pub trait LinkedDataObject {
    fn context(&self) -> &Contexts;

    fn get(&self, key: &str) -> Option<&Value>;

    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// String-keyed JSON mapping with a valid `@context`.
///
/// Immutable once built. Properties other than `@context` are neither
/// interpreted nor modified.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonLdObject {
    context: Contexts,
    map: Map<String, Value>,
}

/// Error raised when a mapping is not a valid JSON-LD object.
///
/// Gives the mapping back to the caller.
#[derive(Debug, thiserror::Error)]
#[error("invalid JSON-LD object: {1}")]
pub struct InvalidObject<T>(pub T, pub Error);

impl JsonLdObject {
    pub fn new(map: Map<String, Value>) -> Result<Self, Error> {
        Self::try_from_map(map).map_err(|InvalidObject(_, e)| e)
    }

    /// Same as [`JsonLdObject::new`], but returns the mapping on failure.
    pub fn try_from_map(
        map: Map<String, Value>,
    ) -> Result<Self, InvalidObject<Map<String, Value>>> {
        let context = match map.get(CONTEXT_KEY) {
            Some(value) => Contexts::from_value(value),
            None => Err(Error::MissingContext),
        };
        match context {
            Ok(context) => Ok(Self { context, map }),
            Err(e) => Err(InvalidObject(map, e)),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.map
    }
}

impl LinkedDataObject for JsonLdObject {
    fn context(&self) -> &Contexts {
        &self.context
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }
}

impl TryFrom<Map<String, Value>> for JsonLdObject {
    type Error = Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::new(map)
    }
}

impl From<JsonLdObject> for Map<String, Value> {
    fn from(object: JsonLdObject) -> Self {
        object.map
    }
}

impl Serialize for JsonLdObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for JsonLdObject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::new(map).map_err(serde::de::Error::custom)
    }
}
