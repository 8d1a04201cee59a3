//! Anthropic provider implementation.

use async_trait::async_trait;
use tracing::debug;

use princex_protocols::error::ProviderError;
use princex_protocols::provider::{
    build_prompt, parse_fenced_record, ExplanationProvider, ProviderConfig, ProviderId,
    JSON_ONLY_SUFFIX, MAX_OUTPUT_TOKENS,
};
use princex_protocols::types::ExplanationRecord;

use crate::api::{ApiMessage, ApiRequest, ApiResponse};

const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

/// Anthropic explanation provider.
pub struct AnthropicProvider {
    api_url: String,
    client: reqwest::Client,
}

impl AnthropicProvider {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_API_URL.to_string())
    }

    /// Create provider with custom API URL.
    pub fn with_url(api_url: String) -> Self {
        Self {
            api_url,
            client: reqwest::Client::new(),
        }
    }

    fn build_request(&self, term: &str, model: &str) -> ApiRequest {
        ApiRequest {
            model: model.to_string(),
            messages: vec![ApiMessage {
                role: "user".to_string(),
                content: format!("{}{}", build_prompt(term), JSON_ONLY_SUFFIX),
            }],
            max_tokens: MAX_OUTPUT_TOKENS,
        }
    }

    async fn send_request(
        &self,
        api_key: &str,
        api_request: &ApiRequest,
    ) -> Result<ApiResponse, ProviderError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(api_request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.without_url().to_string()))?;

        if !status.is_success() {
            // Anthropic error JSON: {"error": {"message": "...", "type": "..."}}
            return Err(ProviderError::from_api_response(status.as_u16(), body));
        }

        serde_json::from_str(&body)
            .map_err(|e| ProviderError::Parse(format!("unexpected Anthropic response: {}", e)))
    }
}

impl Default for AnthropicProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExplanationProvider for AnthropicProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Anthropic
    }

    async fn explain(
        &self,
        term: &str,
        config: &ProviderConfig,
    ) -> Result<ExplanationRecord, ProviderError> {
        let api_key = config.require_api_key()?;
        let model = config.model_or_default();
        debug!("Anthropic explain: model={}", model);

        let api_request = self.build_request(term, model);
        let api_response = self.send_request(api_key, &api_request).await?;
        let text = api_response
            .first_text()
            .ok_or_else(|| ProviderError::Parse("Anthropic response has no text block".to_string()))?;

        // Claude tends to wrap JSON in ```json fences.
        parse_fenced_record(text)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
