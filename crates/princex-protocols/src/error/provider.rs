//! Explanation provider errors.

use thiserror::Error;

/// Coarse classification of a [`ProviderError`].
///
/// The term resolver treats every kind the same way; the kind exists for
/// diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    HttpError,
    ParseError,
    ConfigurationMissing,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API error: {status} - {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse explanation: {0}")]
    Parse(String),

    #[error("Provider not configured: {0}")]
    ConfigurationMissing(String),
}

impl ProviderError {
    pub fn kind(&self) -> ProviderErrorKind {
        match self {
            Self::Http { .. } | Self::Network(_) => ProviderErrorKind::HttpError,
            Self::Parse(_) => ProviderErrorKind::ParseError,
            Self::ConfigurationMissing(_) => ProviderErrorKind::ConfigurationMissing,
        }
    }

    /// Build an HTTP error from a non-success response, pulling the vendor's
    /// `error.message` out of a JSON body when there is one.
    pub fn from_api_response(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(String::from))
            .unwrap_or(body);
        Self::Http { status, message }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
