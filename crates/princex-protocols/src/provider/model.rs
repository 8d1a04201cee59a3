//! Model catalog offered per provider.

use serde::Serialize;

use super::ProviderId;

/// A selectable model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelOption {
    pub id: &'static str,
    pub label: &'static str,
}

const OPENAI_MODELS: &[ModelOption] = &[
    ModelOption {
        id: "gpt-4o-mini",
        label: "GPT-4o Mini (Faster, Cheaper)",
    },
    ModelOption {
        id: "gpt-4o",
        label: "GPT-4o (Best Quality)",
    },
    ModelOption {
        id: "gpt-3.5-turbo",
        label: "GPT-3.5 Turbo (Budget)",
    },
];

const ANTHROPIC_MODELS: &[ModelOption] = &[
    ModelOption {
        id: "claude-3-haiku-20240307",
        label: "Claude 3 Haiku (Fastest)",
    },
    ModelOption {
        id: "claude-3-sonnet-20240229",
        label: "Claude 3 Sonnet (Balanced)",
    },
    ModelOption {
        id: "claude-3-opus-20240229",
        label: "Claude 3 Opus (Best)",
    },
];

const GEMINI_MODELS: &[ModelOption] = &[
    ModelOption {
        id: "gemini-pro",
        label: "Gemini Pro",
    },
    ModelOption {
        id: "gemini-1.5-flash",
        label: "Gemini 1.5 Flash (Faster)",
    },
];

impl ProviderId {
    /// Models offered for this provider.
    pub fn models(&self) -> &'static [ModelOption] {
        match self {
            Self::OpenAI => OPENAI_MODELS,
            Self::Anthropic => ANTHROPIC_MODELS,
            Self::Gemini => GEMINI_MODELS,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAI => "gpt-4o-mini",
            Self::Anthropic => "claude-3-haiku-20240307",
            Self::Gemini => "gemini-1.5-flash",
        }
    }

    pub fn offers_model(&self, model: &str) -> bool {
        self.models().iter().any(|m| m.id == model)
    }
}
