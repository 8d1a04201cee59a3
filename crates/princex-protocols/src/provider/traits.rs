//! Explanation provider trait definition.

use async_trait::async_trait;

use super::{ProviderConfig, ProviderId};
use crate::error::ProviderError;
use crate::types::ExplanationRecord;

/// One vendor adapter: URL, auth and response-shape translation for a
/// single LLM API.
#[async_trait]
pub trait ExplanationProvider: Send + Sync {
    /// Returns the provider ID this adapter serves.
    fn id(&self) -> ProviderId;

    /// Ask the vendor for a structured explanation of `term`.
    ///
    /// Exactly one HTTP attempt is made.
    async fn explain(
        &self,
        term: &str,
        config: &ProviderConfig,
    ) -> Result<ExplanationRecord, ProviderError>;
}
