//! Explanation provider protocol definitions.
//!
//! Providers connect to LLM APIs (OpenAI, Anthropic, Gemini) and turn a term
//! into an [`ExplanationRecord`](crate::types::ExplanationRecord).

mod config;
mod model;
mod payload;
mod prompt;
mod traits;

pub use config::*;
pub use model::*;
pub use payload::*;
pub use prompt::*;
pub use traits::*;
