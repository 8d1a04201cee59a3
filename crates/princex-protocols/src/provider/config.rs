//! Provider selection and credentials.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Supported LLM vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    #[serde(rename = "openai")]
    OpenAI,
    Anthropic,
    Gemini,
}

impl ProviderId {
    pub const ALL: [ProviderId; 3] = [Self::OpenAI, Self::Anthropic, Self::Gemini];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Anthropic => "anthropic",
            Self::Gemini => "gemini",
        }
    }
}

impl Default for ProviderId {
    fn default() -> Self {
        Self::OpenAI
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAI),
            "anthropic" => Ok(Self::Anthropic),
            "gemini" => Ok(Self::Gemini),
            other => Err(ProviderError::ConfigurationMissing(format!(
                "Unsupported AI provider: {}",
                other
            ))),
        }
    }
}

/// Snapshot of the AI settings used for one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProviderConfig {
    pub enabled: bool,
    pub provider: ProviderId,
    pub api_key: Option<String>,
    /// Empty means "use the provider default".
    pub model: String,
}

impl ProviderConfig {
    pub fn new(provider: ProviderId, api_key: impl Into<String>) -> Self {
        Self {
            enabled: true,
            provider,
            api_key: Some(api_key.into()),
            model: String::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The API key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }

    pub fn require_api_key(&self) -> Result<&str, ProviderError> {
        self.api_key().ok_or_else(|| {
            ProviderError::ConfigurationMissing(format!("no API key set for {}", self.provider))
        })
    }

    /// AI lookup is both switched on and has a key.
    pub fn is_ready(&self) -> bool {
        self.enabled && self.api_key().is_some()
    }

    pub fn model_or_default(&self) -> &str {
        let model = self.model.trim();
        if model.is_empty() {
            self.provider.default_model()
        } else {
            model
        }
    }
}
