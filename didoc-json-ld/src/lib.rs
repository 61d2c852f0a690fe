//! Generic JSON-LD objects.
//!
//! A [`JsonLdObject`] is a string-keyed JSON mapping carrying a valid
//! `@context`. It performs no expansion or compaction, and no remote
//! context is ever loaded.
mod context;
pub mod error;
mod object;

pub use context::{Context, Contexts};
pub use error::Error;
pub use object::{InvalidObject, JsonLdObject, LinkedDataObject};

/// Key of the JSON-LD context property.
pub const CONTEXT_KEY: &str = "@context";

pub const DID_V1_CONTEXT: &str = "https://www.w3.org/ns/did/v1";
pub const DID_V1_CONTEXT_NO_WWW: &str = "https://w3.org/ns/did/v1";
pub const W3ID_DID_V1_CONTEXT: &str = "https://w3id.org/did/v1";
// v0.11 context used by universal resolver
pub const V0_11_CONTEXT: &str = "https://w3id.org/did/v0.11";
