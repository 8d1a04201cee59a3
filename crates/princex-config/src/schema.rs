//! Settings schema.

use serde::{Deserialize, Serialize};

use princex_protocols::{ProviderConfig, ProviderId};

/// User preferences written by the settings command and read before every
/// AI resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_enable_ai")]
    pub enable_ai: bool,

    #[serde(default)]
    pub api_provider: ProviderId,

    #[serde(default)]
    pub api_key: String,

    /// Empty means the provider's default model.
    #[serde(default)]
    pub model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_ai: default_enable_ai(),
            api_provider: ProviderId::default(),
            api_key: String::new(),
            model: String::new(),
        }
    }
}

fn default_enable_ai() -> bool {
    true
}

impl Settings {
    /// Snapshot handed to the provider gateway.
    pub fn provider_config(&self) -> ProviderConfig {
        let key = self.api_key.trim();
        ProviderConfig {
            enabled: self.enable_ai,
            provider: self.api_provider,
            api_key: (!key.is_empty()).then(|| key.to_string()),
            model: self.model.trim().to_string(),
        }
    }

    /// AI lookup is switched on and has a key.
    pub fn ai_configured(&self) -> bool {
        self.provider_config().is_ready()
    }

    /// The model that will actually be requested.
    pub fn effective_model(&self) -> &str {
        let model = self.model.trim();
        if model.is_empty() {
            self.api_provider.default_model()
        } else {
            model
        }
    }

    /// API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let key = self.api_key.trim();
        if key.is_empty() {
            return "(not set)".to_string();
        }
        let chars: Vec<char> = key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), tail)
    }
}
