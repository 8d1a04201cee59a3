//! The canonical explanation shape every resolution path converges on.

use serde::{Deserialize, Deserializer, Serialize};

/// Computer-science subject tag shown next to an explanation title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subject {
    Dsa,
    Os,
    Cn,
    Dbms,
    Oop,
    /// Any other label a provider chose.
    Other(String),
}

impl Subject {
    /// Parse a subject label. Returns `None` for blank input and for the
    /// literal `"null"` some models emit instead of JSON null.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case("null") {
            return None;
        }
        let subject = match label.to_ascii_uppercase().as_str() {
            "DSA" | "DATA STRUCTURES" | "DATA STRUCTURES AND ALGORITHMS" => Self::Dsa,
            "OS" | "OPERATING SYSTEMS" | "OPERATING SYSTEM" => Self::Os,
            "CN" | "COMPUTER NETWORKS" | "NETWORKING" => Self::Cn,
            "DBMS" | "DATABASES" => Self::Dbms,
            "OOP" | "OBJECT-ORIENTED PROGRAMMING" => Self::Oop,
            _ => Self::Other(label.to_string()),
        };
        Some(subject)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Dsa => "DSA",
            Self::Os => "OS",
            Self::Cn => "CN",
            Self::Dbms => "DBMS",
            Self::Oop => "OOP",
            Self::Other(label) => label,
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Subject {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

fn deserialize_subject<'de, D>(deserializer: D) -> Result<Option<Subject>, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(Subject::parse))
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = Option::deserialize(deserializer)?;
    Ok(text.filter(|t| !t.trim().is_empty()))
}

/// Structured explanation of a single term.
///
/// Deserialization doubles as payload validation for provider replies:
/// `definition`, `analogy`, `technical`, `tip` and `mistakes` are required
/// and must have the right JSON type. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationRecord {
    #[serde(default, deserialize_with = "deserialize_subject")]
    pub subject: Option<Subject>,
    pub definition: String,
    pub analogy: String,
    pub technical: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub diagram: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub code: Option<String>,
    pub mistakes: Vec<String>,
    pub tip: String,
}
