//! Term resolution: knowledge base first, then the provider gateway, then
//! the generic fallback. Resolution always produces a record.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use princex_config::SettingsStore;
use princex_protocols::provider::ProviderId;
use princex_protocols::types::{ExplanationRecord, Term};

use crate::gateway::ProviderGateway;
use crate::knowledge::{fallback_record, KnowledgeBase};

/// Where a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    KnowledgeBase,
    Provider(ProviderId),
    Fallback,
}

/// The outcome of resolving one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The term as selected (trimmed, original casing).
    pub term: String,
    pub record: ExplanationRecord,
    pub source: ResolutionSource,
}

impl Resolution {
    fn fallback(term: &Term) -> Self {
        Self {
            term: term.display().to_string(),
            record: fallback_record(term.display()),
            source: ResolutionSource::Fallback,
        }
    }
}

/// Resolves terms into explanation records.
pub struct TermResolver {
    knowledge: &'static KnowledgeBase,
    gateway: ProviderGateway,
    settings: Arc<dyn SettingsStore>,
}

impl TermResolver {
    pub fn new(gateway: ProviderGateway, settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            knowledge: KnowledgeBase::builtin(),
            gateway,
            settings,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        self.knowledge
    }

    /// Resolve a raw string. Never fails: provider and settings errors are
    /// logged and replaced by the fallback record.
    pub async fn resolve(&self, raw: &str) -> Resolution {
        let term = Term::new(raw);

        if let Some(record) = self.knowledge.lookup(term.normalized()) {
            debug!(term = term.normalized(), "Knowledge base hit");
            return Resolution {
                term: term.display().to_string(),
                record: record.clone(),
                source: ResolutionSource::KnowledgeBase,
            };
        }

        let settings = match self.settings.load().await {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to read settings, AI explanations disabled: {}", e);
                return Resolution::fallback(&term);
            }
        };

        let config = settings.provider_config();
        if !config.is_ready() {
            debug!(
                enabled = config.enabled,
                "AI explanations not configured, using generic explanation"
            );
            return Resolution::fallback(&term);
        }

        match self.gateway.explain(term.display(), &config).await {
            Ok(record) => Resolution {
                term: term.display().to_string(),
                record,
                source: ResolutionSource::Provider(config.provider),
            },
            Err(e) => {
                warn!(
                    provider = %config.provider,
                    kind = ?e.kind(),
                    "AI explanation failed: {}",
                    e
                );
                Resolution::fallback(&term)
            }
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
