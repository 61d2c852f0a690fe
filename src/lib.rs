//! DID documents with structural validation.
//!
//! A [`DIDDocument`] is built from a JSON-LD mapping and checked once, at
//! construction: it must carry an `@context`, an `id` that is a URI and a
//! `verificationMethod` property. Other properties are kept untouched and
//! serialized back as-is.
//!
//! ```
//! use didoc::DIDDocument;
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
#![cfg_attr(docsrs, feature(doc_auto_cfg), feature(doc_cfg))]

// Re-export core functions and types.
#[doc(hidden)]
pub use didoc_core::*;

/// JSON-LD objects and contexts.
#[doc(inline)]
pub use didoc_json_ld as json_ld;

/// Decentralized Identifiers (DIDs) documents.
///
/// See: <https://www.w3.org/TR/did-core/>
#[doc(inline)]
pub use didoc_dids as dids;

#[doc(inline)]
pub use dids::{DIDDocument, Error, ValidationError, ValidationOptions, VerificationMethod};
