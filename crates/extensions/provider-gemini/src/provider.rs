//! Gemini provider implementation.

use async_trait::async_trait;

use princex_protocols::error::ProviderError;
use princex_protocols::provider::{
    build_prompt, parse_fenced_record, ExplanationProvider, ProviderConfig, ProviderId,
    JSON_ONLY_SUFFIX, MAX_OUTPUT_TOKENS, TEMPERATURE,
};
use princex_protocols::types::ExplanationRecord;

use crate::client::GeminiClient;
use crate::types::{Content, GenerateContentRequest, GenerationConfig, Part};

/// Google Gemini explanation provider.
pub struct GeminiProvider {
    client: GeminiClient,
}

impl GeminiProvider {
    pub fn new() -> Self {
        Self {
            client: GeminiClient::new(),
        }
    }

    /// Create provider against a custom API root (e.g. a proxy).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: GeminiClient::with_base_url(base_url),
        }
    }

    fn build_request(&self, term: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part::text(format!("{}{}", build_prompt(term), JSON_ONLY_SUFFIX))],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(TEMPERATURE),
                max_output_tokens: Some(MAX_OUTPUT_TOKENS),
            }),
        }
    }
}

impl Default for GeminiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExplanationProvider for GeminiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    async fn explain(
        &self,
        term: &str,
        config: &ProviderConfig,
    ) -> Result<ExplanationRecord, ProviderError> {
        let api_key = config.require_api_key()?;
        let request = self.build_request(term);
        let response = self
            .client
            .generate_content(config.model_or_default(), api_key, &request)
            .await?;

        let text = response
            .first_text()
            .ok_or_else(|| ProviderError::Parse("Gemini response has no candidate text".to_string()))?;

        parse_fenced_record(text)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
