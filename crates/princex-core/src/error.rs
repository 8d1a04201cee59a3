//! Core errors.

use thiserror::Error;

use princex_protocols::ProviderId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Provider already registered: {0}")]
    AlreadyRegistered(ProviderId),

    #[error("Provider not registered: {0}")]
    NotFound(ProviderId),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PanelError {
    #[error("Panel session has shut down")]
    SessionClosed,
}
