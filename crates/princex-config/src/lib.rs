//! # PrinceX Config
//!
//! User settings for PrinceX: schema, TOML loader, validation and the
//! settings stores the term resolver reads from.

mod error;
mod loader;
mod schema;
mod store;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::Settings;
pub use store::{FileSettingsStore, SettingsStore, StaticSettingsStore};
pub use validator::{SettingsValidator, ValidationError, ValidationResult, ValidationWarning};
