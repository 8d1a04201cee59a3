//! # PrinceX Protocols
//!
//! Shared contracts for the PrinceX term explainer: the canonical
//! [`ExplanationRecord`], the [`ExplanationProvider`] trait every vendor
//! adapter implements, and the error types that cross crate boundaries.

pub mod error;
pub mod provider;
pub mod types;

pub use error::{ProviderError, ProviderErrorKind, TermError};
pub use provider::{ExplanationProvider, ModelOption, ProviderConfig, ProviderId};
pub use types::*;
