use derive_builder::Builder;
use didoc_json_ld::{
    Context, Contexts, DID_V1_CONTEXT, DID_V1_CONTEXT_NO_WWW, V0_11_CONTEXT, W3ID_DID_V1_CONTEXT,
};

use crate::InvalidDocument;

/// Options for [`DIDDocument`](crate::DIDDocument) validation.
///
/// ```
/// use didoc_dids::ValidationOptionsBuilder;
///
/// let options = ValidationOptionsBuilder::default()
///     .strict_context(true)
///     .build()
///     .unwrap();
/// assert!(options.known_contexts.iter().any(|c| c == "https://www.w3.org/ns/did/v1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), default)]
pub struct ValidationOptions {
    /// Reject documents whose first context is not in `known_contexts`.
    pub strict_context: bool,
    /// Contexts accepted as the first context when `strict_context` is set.
    pub known_contexts: Vec<String>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            strict_context: false,
            known_contexts: [
                DID_V1_CONTEXT,
                DID_V1_CONTEXT_NO_WWW,
                W3ID_DID_V1_CONTEXT,
                V0_11_CONTEXT,
            ]
            .iter()
            .map(|context| context.to_string())
            .collect(),
        }
    }
}

impl ValidationOptions {
    pub(crate) fn check_context(&self, contexts: &Contexts) -> Result<(), InvalidDocument> {
        if !self.strict_context {
            return Ok(());
        }
        match contexts.first() {
            Some(Context::URI(uri)) if self.known_contexts.iter().any(|c| uri == c.as_str()) => {
                Ok(())
            }
            Some(Context::URI(uri)) => Err(InvalidDocument::UnknownContext(uri.to_string())),
            Some(Context::Object(object)) => Err(InvalidDocument::UnknownContext(
                serde_json::to_string(object).unwrap_or_default(),
            )),
            // Contexts are never empty.
            None => Err(InvalidDocument::Context(didoc_json_ld::Error::EmptyContext)),
        }
    }
}
