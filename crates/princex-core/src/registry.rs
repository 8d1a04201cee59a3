//! Provider registry: `ProviderId` → adapter.

use dashmap::DashMap;
use std::sync::Arc;

use princex_protocols::provider::{ExplanationProvider, ProviderId};

use crate::error::RegistryError;

/// Registry of explanation providers. Adding a vendor means registering one
/// more adapter here; call sites never branch on the provider ID.
pub struct ProviderRegistry {
    providers: DashMap<ProviderId, Arc<dyn ExplanationProvider>>,
}

impl ProviderRegistry {
    /// Create an empty provider registry.
    pub fn new() -> Self {
        Self {
            providers: DashMap::new(),
        }
    }

    /// Register a provider under the ID it reports.
    pub fn register(&self, provider: Arc<dyn ExplanationProvider>) -> Result<(), RegistryError> {
        let id = provider.id();

        if self.providers.contains_key(&id) {
            return Err(RegistryError::AlreadyRegistered(id));
        }

        self.providers.insert(id, provider);
        Ok(())
    }

    /// Unregister a provider.
    pub fn unregister(&self, id: ProviderId) -> Result<(), RegistryError> {
        self.providers
            .remove(&id)
            .ok_or(RegistryError::NotFound(id))?;
        Ok(())
    }

    /// Get a provider by ID.
    pub fn get(&self, id: ProviderId) -> Option<Arc<dyn ExplanationProvider>> {
        self.providers.get(&id).map(|p| p.clone())
    }

    /// List registered provider IDs in a stable order.
    pub fn list_ids(&self) -> Vec<ProviderId> {
        ProviderId::ALL
            .into_iter()
            .filter(|id| self.providers.contains_key(id))
            .collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use princex_protocols::error::ProviderError;
    use princex_protocols::provider::ProviderConfig;
    use princex_protocols::types::ExplanationRecord;

    struct MockProvider {
        id: ProviderId,
    }

    #[async_trait]
    impl ExplanationProvider for MockProvider {
        fn id(&self) -> ProviderId {
            self.id
        }

        async fn explain(
            &self,
            _term: &str,
            _config: &ProviderConfig,
        ) -> Result<ExplanationRecord, ProviderError> {
            unimplemented!()
        }
    }

    fn mock(id: ProviderId) -> Arc<dyn ExplanationProvider> {
        Arc::new(MockProvider { id })
    }

    #[test]
    fn test_registry_creation() {
        let registry = ProviderRegistry::new();
        assert!(registry.list_ids().is_empty());
    }

    #[test]
    fn test_register_provider() {
        let registry = ProviderRegistry::default();
        assert!(registry.register(mock(ProviderId::Gemini)).is_ok());
        assert_eq!(registry.list_ids(), vec![ProviderId::Gemini]);
    }

    #[test]
    fn test_register_duplicate() {
        let registry = ProviderRegistry::new();
        registry.register(mock(ProviderId::OpenAI)).unwrap();
        assert_eq!(
            registry.register(mock(ProviderId::OpenAI)),
            Err(RegistryError::AlreadyRegistered(ProviderId::OpenAI))
        );
    }

    #[test]
    fn test_unregister_provider() {
        let registry = ProviderRegistry::new();
        registry.register(mock(ProviderId::Anthropic)).unwrap();
        assert!(registry.unregister(ProviderId::Anthropic).is_ok());
        assert!(registry.list_ids().is_empty());
    }

    #[test]
    fn test_unregister_nonexistent() {
        let registry = ProviderRegistry::new();
        assert_eq!(
            registry.unregister(ProviderId::Gemini),
            Err(RegistryError::NotFound(ProviderId::Gemini))
        );
    }

    #[test]
    fn test_get_provider() {
        let registry = ProviderRegistry::new();
        registry.register(mock(ProviderId::Anthropic)).unwrap();
        assert_eq!(registry.get(ProviderId::Anthropic).unwrap().id(), ProviderId::Anthropic);
        assert!(registry.get(ProviderId::OpenAI).is_none());
    }

    #[test]
    fn test_list_ids_is_ordered() {
        let registry = ProviderRegistry::new();
        registry.register(mock(ProviderId::Gemini)).unwrap();
        registry.register(mock(ProviderId::OpenAI)).unwrap();
        registry.register(mock(ProviderId::Anthropic)).unwrap();
        assert_eq!(registry.list_ids(), ProviderId::ALL.to_vec());
    }
}
