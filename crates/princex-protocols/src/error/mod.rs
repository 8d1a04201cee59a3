//! Error types for the PrinceX protocol layer.

mod provider;
mod term;

pub use provider::*;
pub use term::*;
