//! Selected terms.

use crate::error::TermError;

/// Selections must be strictly shorter than this many characters.
pub const MAX_SELECTION_CHARS: usize = 200;

/// Lookup key for a term: trimmed and lower-cased.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A term to explain, keeping the casing the user selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    display: String,
    normalized: String,
}

impl Term {
    /// Build a term from any string without length checks.
    pub fn new(raw: &str) -> Self {
        Self {
            display: raw.trim().to_string(),
            normalized: normalize(raw),
        }
    }

    /// Build a term from a text selection, enforcing the 1–199 character
    /// window the trigger button accepts.
    pub fn from_selection(raw: &str) -> Result<Self, TermError> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if len == 0 {
            return Err(TermError::Empty);
        }
        if len >= MAX_SELECTION_CHARS {
            return Err(TermError::TooLong {
                len,
                max: MAX_SELECTION_CHARS - 1,
            });
        }
        Ok(Self::new(trimmed))
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}
