//! # PrinceX Core
//!
//! The explanation pipeline: a built-in [`KnowledgeBase`], the
//! [`ProviderGateway`] dispatching to registered vendor adapters, the
//! [`TermResolver`] tying them together with the generic fallback, the
//! [`presenter`] rendering records, and the explain-[`panel`] lifecycle.

pub mod error;
pub mod gateway;
pub mod knowledge;
pub mod panel;
pub mod presenter;
pub mod registry;
pub mod resolver;

pub use error::{PanelError, RegistryError};
pub use gateway::ProviderGateway;
pub use knowledge::{fallback_record, KnowledgeBase};
pub use panel::{PanelEvent, PanelHandle, PanelMachine, PanelSession, PanelState};
pub use registry::ProviderRegistry;
pub use resolver::{Resolution, ResolutionSource, TermResolver};
