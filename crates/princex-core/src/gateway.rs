//! Provider gateway: routes an explanation request to the configured adapter.

use std::sync::Arc;

use tracing::debug;

use princex_protocols::error::ProviderError;
use princex_protocols::provider::ProviderConfig;
use princex_protocols::types::ExplanationRecord;

use crate::registry::ProviderRegistry;

/// Dispatches to the adapter registered for `config.provider`.
#[derive(Clone)]
pub struct ProviderGateway {
    registry: Arc<ProviderRegistry>,
}

impl ProviderGateway {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Ask the configured provider for an explanation. One attempt, no retry.
    pub async fn explain(
        &self,
        term: &str,
        config: &ProviderConfig,
    ) -> Result<ExplanationRecord, ProviderError> {
        config.require_api_key()?;

        let provider = self.registry.get(config.provider).ok_or_else(|| {
            ProviderError::ConfigurationMissing(format!(
                "no adapter registered for provider {}",
                config.provider
            ))
        })?;

        debug!(
            provider = %config.provider,
            model = config.model_or_default(),
            "Dispatching explanation request"
        );
        provider.explain(term, config).await
    }
}
