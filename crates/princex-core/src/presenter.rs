//! Rendering explanation records into the fixed-section layout.

use princex_protocols::types::ExplanationRecord;

use crate::resolver::Resolution;

/// Longest term shown verbatim in a popup header.
pub const HEADER_TERM_CHARS: usize = 50;

/// Body of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody<'a> {
    Paragraph(&'a str),
    /// Whitespace-significant text; `class` names the HTML style hook.
    Preformatted { class: &'static str, text: &'a str },
    List(&'a [String]),
}

/// A titled section of an explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub title: &'static str,
    pub body: SectionBody<'a>,
}

/// Sections in display order. Diagram and code are left out when the record
/// has none.
pub fn sections(record: &ExplanationRecord) -> Vec<Section<'_>> {
    let mut sections = vec![
        Section {
            title: "Short Definition",
            body: SectionBody::Paragraph(&record.definition),
        },
        Section {
            title: "Real-Life Analogy",
            body: SectionBody::Paragraph(&record.analogy),
        },
        Section {
            title: "Technical Explanation",
            body: SectionBody::Paragraph(&record.technical),
        },
    ];
    if let Some(diagram) = record.diagram.as_deref() {
        sections.push(Section {
            title: "Visual Diagram",
            body: SectionBody::Preformatted {
                class: "diagram",
                text: diagram,
            },
        });
    }
    if let Some(code) = record.code.as_deref() {
        sections.push(Section {
            title: "Code Example",
            body: SectionBody::Preformatted {
                class: "code-example",
                text: code,
            },
        });
    }
    sections.push(Section {
        title: "Common Mistakes",
        body: SectionBody::List(&record.mistakes),
    });
    sections.push(Section {
        title: "Exam / Interview Tip",
        body: SectionBody::Paragraph(&record.tip),
    });
    sections
}

/// Escape HTML special characters.
///
/// Replaces: & < > " '
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Shorten a term for a header line: `HEADER_TERM_CHARS` characters plus
/// `...` when longer.
pub fn truncate_term(term: &str) -> String {
    if term.chars().count() > HEADER_TERM_CHARS {
        let head: String = term.chars().take(HEADER_TERM_CHARS).collect();
        format!("{}...", head)
    } else {
        term.to_string()
    }
}

/// Render an explanation as an HTML fragment. Every field is escaped.
pub fn render_html(term: &str, record: &ExplanationRecord) -> String {
    let mut html = String::new();

    let badge = record
        .subject
        .as_ref()
        .map(|s| format!(" <span class=\"subject-badge\">{}</span>", escape_html(s.as_str())))
        .unwrap_or_default();
    html.push_str("<div class=\"explanation-section\">\n");
    html.push_str(&format!(
        "  <h2 class=\"term-title\">{}{}</h2>\n",
        escape_html(term),
        badge
    ));
    html.push_str("</div>\n");

    for section in sections(record) {
        let class = if section.title == "Exam / Interview Tip" {
            "explanation-section tip-section"
        } else {
            "explanation-section"
        };
        html.push_str(&format!("<div class=\"{}\">\n", class));
        html.push_str(&format!("  <h3>{}</h3>\n", section.title));
        match section.body {
            SectionBody::Paragraph(text) => {
                html.push_str(&format!("  <p>{}</p>\n", escape_html(text)));
            }
            SectionBody::Preformatted { class, text } => {
                html.push_str(&format!(
                    "  <pre class=\"{}\">{}</pre>\n",
                    class,
                    escape_html(text)
                ));
            }
            SectionBody::List(items) => {
                html.push_str("  <ul class=\"mistakes-list\">");
                for item in items {
                    html.push_str(&format!("<li>{}</li>", escape_html(item)));
                }
                html.push_str("</ul>\n");
            }
        }
        html.push_str("</div>\n");
    }

    html
}

/// Render an explanation for a terminal.
pub fn render_text(term: &str, record: &ExplanationRecord) -> String {
    let mut out = String::new();

    match &record.subject {
        Some(subject) => out.push_str(&format!("{} [{}]\n", term, subject)),
        None => out.push_str(&format!("{}\n", term)),
    }
    out.push_str(&"=".repeat(term.chars().count().max(8)));
    out.push('\n');

    for section in sections(record) {
        out.push('\n');
        out.push_str(section.title);
        out.push('\n');
        out.push_str(&"-".repeat(section.title.len()));
        out.push('\n');
        match section.body {
            SectionBody::Paragraph(text) => {
                out.push_str(text);
                out.push('\n');
            }
            SectionBody::Preformatted { text, .. } => {
                for line in text.lines() {
                    out.push_str("    ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            SectionBody::List(items) => {
                for item in items {
                    out.push_str("  - ");
                    out.push_str(item);
                    out.push('\n');
                }
            }
        }
    }

    out
}

/// Render a resolution (term, source and record) as pretty JSON.
pub fn render_json(resolution: &Resolution) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(resolution)
}

#[cfg(test)]
#[path = "presenter_tests.rs"]
mod tests;
