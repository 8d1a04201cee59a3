//! Common types shared by every PrinceX crate.

mod record;
mod term;

pub use record::*;
pub use term::*;
