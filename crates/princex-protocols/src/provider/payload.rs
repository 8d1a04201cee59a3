//! Turning vendor reply text into an [`ExplanationRecord`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ProviderError;
use crate::types::ExplanationRecord;

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\A```(?:json)?[ \t]*\r?\n?|\r?\n?```\z").expect("valid code fence regex")
});

/// Remove an opening (```` ```json ```` or ```` ``` ````) and a closing
/// code-fence marker wrapping the reply, plus surrounding whitespace. Fences
/// inside the payload are left alone.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text.trim(), "").trim().to_string()
}

/// Parse reply text as a record, validating field presence and types.
pub fn parse_record(text: &str) -> Result<ExplanationRecord, ProviderError> {
    serde_json::from_str(text).map_err(|e| ProviderError::Parse(e.to_string()))
}

/// Strip code fences, then parse.
pub fn parse_fenced_record(text: &str) -> Result<ExplanationRecord, ProviderError> {
    parse_record(&strip_code_fences(text))
}
