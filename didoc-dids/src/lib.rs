//! # DID Documents
//!
//! Structural validation of [DID documents][did-core] received from an
//! untrusted source, before any cryptographic material they declare is used.
//!
//! A [`DIDDocument`] is checked once, when it is constructed: it always has a
//! context, a subject identifier that is a URI, and a (possibly empty) list
//! of decoded verification methods. It cannot be modified afterwards.
//!
//! ```
//! use didoc_dids::DIDDocument;
//!
//! let doc = DIDDocument::from_json(r#"{
//!     "@context": "https://www.w3.org/ns/did/v1",
//!     "id": "did:example:123",
//!     "verificationMethod": { "id": "did:example:123#key-1" }
//! }"#).unwrap();
//!
//! assert_eq!(doc.id(), "did:example:123");
//! assert_eq!(doc.verification_methods().len(), 1);
//! ```
//!
//! [did-core]: https://www.w3.org/TR/did-core/
pub mod document;
pub mod error;
#[cfg(feature = "example")]
pub mod example;

pub use didoc_json_ld::{LinkedDataObject, DID_V1_CONTEXT as DEFAULT_CONTEXT};
pub use document::{
    DIDDocument, Reference, ValidationOptions, ValidationOptionsBuilder, ValueOrReference,
    VerificationMethod,
};
pub use error::{Error, InvalidDocument, ValidationError};
