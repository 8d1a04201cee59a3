//! Anthropic explanation provider for PrinceX.

mod api;
mod provider;

pub use provider::AnthropicProvider;
