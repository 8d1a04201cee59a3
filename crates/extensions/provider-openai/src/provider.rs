//! OpenAI provider implementation.

use async_trait::async_trait;
use tracing::debug;

use princex_protocols::error::ProviderError;
use princex_protocols::provider::{
    build_prompt, parse_record, ExplanationProvider, ProviderConfig, ProviderId, SYSTEM_MESSAGE,
    TEMPERATURE,
};
use princex_protocols::types::ExplanationRecord;

use crate::api::{ApiMessage, ApiRequest, ApiResponse, ResponseFormat};

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI explanation provider.
pub struct OpenAIProvider {
    api_url: String,
    client: reqwest::Client,
}

impl OpenAIProvider {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_API_URL.to_string())
    }

    /// Create provider with custom API URL (for OpenAI-compatible APIs).
    pub fn with_url(api_url: String) -> Self {
        Self {
            api_url,
            client: reqwest::Client::new(),
        }
    }

    fn build_request(&self, term: &str, model: &str) -> ApiRequest {
        ApiRequest {
            model: model.to_string(),
            messages: vec![
                ApiMessage::system(SYSTEM_MESSAGE),
                ApiMessage::user(build_prompt(term)),
            ],
            temperature: Some(TEMPERATURE),
            response_format: Some(ResponseFormat::json_object()),
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
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
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
            return Err(ProviderError::from_api_response(status.as_u16(), body));
        }

        serde_json::from_str(&body)
            .map_err(|e| ProviderError::Parse(format!("unexpected OpenAI response: {}", e)))
    }
}

impl Default for OpenAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExplanationProvider for OpenAIProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenAI
    }

    async fn explain(
        &self,
        term: &str,
        config: &ProviderConfig,
    ) -> Result<ExplanationRecord, ProviderError> {
        let api_key = config.require_api_key()?;
        let model = config.model_or_default();
        debug!("OpenAI explain: model={}", model);

        let api_request = self.build_request(term, model);
        let api_response = self.send_request(api_key, &api_request).await?;
        let content = api_response
            .first_content()
            .ok_or_else(|| ProviderError::Parse("OpenAI response has no message content".to_string()))?;

        // JSON mode is on, so the content is parsed as-is.
        parse_record(content)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
