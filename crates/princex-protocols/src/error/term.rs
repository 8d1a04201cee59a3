//! Selection / term errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TermError {
    #[error("Selection is empty")]
    Empty,

    #[error("Selection too long: {len} characters (limit {max})")]
    TooLong { len: usize, max: usize },
}
