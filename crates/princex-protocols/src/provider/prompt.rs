//! The provider-agnostic instruction prompt.

/// System message for chat-style APIs that take one.
pub const SYSTEM_MESSAGE: &str =
    "You are a helpful CS professor. Always respond with valid JSON only, no markdown or extra text.";

/// Appended to the prompt for APIs without a JSON response mode.
pub const JSON_ONLY_SUFFIX: &str = "\n\nRespond with ONLY valid JSON, no other text.";

/// Sampling temperature used by every adapter.
pub const TEMPERATURE: f32 = 0.7;

/// Output budget for APIs that require one.
pub const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Build the instruction asking for an explanation record of `term`.
pub fn build_prompt(term: &str) -> String {
    format!(
        r#"You are PrinceX, an expert Computer Science professor and software engineer.

Explain the concept: "{term}"

Provide a structured explanation in JSON format with these exact fields:

{{
  "subject": "DSA|OS|CN|DBMS|OOP|null (choose the most relevant CS subject, or null if not CS-specific)",
  "definition": "2-3 simple lines explaining what this is",
  "analogy": "A real-life analogy that's easy to understand",
  "technical": "Clear but concise technical explanation with complexity/properties if applicable",
  "diagram": "Description of a simple text-based diagram using boxes/arrows/text",
  "code": "A clear code example in the most suitable language (C/C++/Java/Python)",
  "mistakes": ["mistake1", "mistake2", "mistake3"],
  "tip": "1-2 line exam/interview tip"
}}

Rules:
- Keep language simple and clear
- Avoid unnecessary theory
- Focus on practical understanding
- If it's not a CS concept, still provide helpful context and relate to technology
- Code should be functional and well-commented"#
    )
}
