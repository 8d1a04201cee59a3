//! Provider registration and pipeline assembly.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use princex_config::FileSettingsStore;
use princex_core::{ProviderGateway, ProviderRegistry, TermResolver};
use princex_protocols::ExplanationProvider;
use princex_provider_anthropic::AnthropicProvider;
use princex_provider_gemini::GeminiProvider;
use princex_provider_openai::OpenAIProvider;

/// Register every built-in vendor adapter. API keys come from settings at
/// call time, so adapters are registered unconditionally.
pub(crate) fn create_provider_registry() -> Arc<ProviderRegistry> {
    let registry = Arc::new(ProviderRegistry::new());

    let providers: Vec<Arc<dyn ExplanationProvider>> = vec![
        Arc::new(OpenAIProvider::new()),
        Arc::new(AnthropicProvider::new()),
        Arc::new(GeminiProvider::new()),
    ];

    for provider in providers {
        let id = provider.id();
        match registry.register(provider) {
            Ok(()) => debug!("Registered {} provider", id),
            Err(e) => warn!("Failed to register {} provider: {}", id, e),
        }
    }

    registry
}

/// Build a resolver reading settings from `settings_path` on every lookup.
pub(crate) fn create_resolver(settings_path: &Path) -> Arc<TermResolver> {
    let gateway = ProviderGateway::new(create_provider_registry());
    let store = Arc::new(FileSettingsStore::new(settings_path));
    Arc::new(TermResolver::new(gateway, store))
}
