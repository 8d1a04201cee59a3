//! # PrinceX Provider - Gemini
//!
//! Google Gemini explanation provider for PrinceX.

mod client;
mod provider;
mod types;

pub use client::GeminiClient;
pub use provider::GeminiProvider;
pub use types::*;
