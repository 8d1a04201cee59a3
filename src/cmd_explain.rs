//! Explain, popup and concepts subcommand handlers.

use std::path::Path;

use tokio::io::AsyncReadExt;
use tracing::{debug, warn};

use princex_config::{FileSettingsStore, SettingsStore};
use princex_core::presenter::{escape_html, render_html, render_json, render_text, truncate_term};
use princex_core::{KnowledgeBase, Resolution, TermResolver};
use princex_protocols::TermError;

use crate::cli::OutputFormat;

/// Resolve and print one term.
pub(crate) async fn handle_explain(
    resolver: &TermResolver,
    words: &[String],
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let term = words.join(" ");
    if term.trim().is_empty() {
        return Err(TermError::Empty.into());
    }

    let resolution = resolver.resolve(&term).await;
    print!("{}", render(&resolution, format)?);
    Ok(())
}

/// Read the selection from stdin and explain it, or show the welcome view.
pub(crate) async fn handle_popup(
    resolver: &TermResolver,
    settings_path: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut selection = String::new();
    tokio::io::stdin().read_to_string(&mut selection).await?;
    let selection = selection.trim();

    if selection.is_empty() {
        let ai_configured = match FileSettingsStore::new(settings_path).load().await {
            Ok(settings) => settings.ai_configured(),
            Err(e) => {
                warn!("Failed to read settings: {}", e);
                false
            }
        };
        print!("{}", default_view(ai_configured, format)?);
        return Ok(());
    }

    debug!(len = selection.chars().count(), "Explaining selection from stdin");
    let resolution = resolver.resolve(selection).await;
    print!("{}", popup_view(&resolution, format)?);
    Ok(())
}

/// List the concepts the knowledge base answers.
pub(crate) fn handle_concepts() {
    let knowledge = KnowledgeBase::builtin();
    println!("Free concepts (no API key needed):");
    for term in knowledge.terms() {
        let subject = knowledge
            .lookup(term)
            .and_then(|record| record.subject.as_ref())
            .map(|s| format!(" [{}]", s))
            .unwrap_or_default();
        println!("  {}{}", title_case(term), subject);
    }
}

fn render(resolution: &Resolution, format: OutputFormat) -> Result<String, serde_json::Error> {
    Ok(match format {
        OutputFormat::Text => render_text(&resolution.term, &resolution.record),
        OutputFormat::Html => render_html(&resolution.term, &resolution.record),
        OutputFormat::Json => format!("{}\n", render_json(resolution)?),
    })
}

fn popup_view(resolution: &Resolution, format: OutputFormat) -> Result<String, serde_json::Error> {
    let header = truncate_term(&resolution.term);
    let body = render(resolution, format)?;
    Ok(match format {
        OutputFormat::Text => format!("PrinceX  \"{}\"\n\n{}", header, body),
        OutputFormat::Html => format!(
            "<div class=\"explanation-header\">\n  <div class=\"logo-small\">PrinceX</div>\n  <div class=\"selected-term\">&quot;{}&quot;</div>\n</div>\n<div class=\"explanation-body\">\n{}</div>\n",
            escape_html(&header),
            body
        ),
        OutputFormat::Json => body,
    })
}

fn free_concepts() -> Vec<String> {
    KnowledgeBase::builtin()
        .terms()
        .into_iter()
        .map(title_case)
        .collect()
}

fn default_view(ai_configured: bool, format: OutputFormat) -> Result<String, serde_json::Error> {
    let concepts = free_concepts();

    if format == OutputFormat::Json {
        let view = serde_json::json!({
            "ai_configured": ai_configured,
            "free_concepts": concepts,
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&view)?));
    }

    let (status, detail) = if ai_configured {
        (
            "AI Configured",
            "You can now explain ANY concept! Select text and run `princex popup`.",
        )
    } else {
        (
            "Setup Required",
            "To explain ANY concept, you need an API key. Run `princex settings set --api-key <KEY>`.",
        )
    };
    let usage = [
        "Select any text on the page",
        "Pipe it to `princex popup`, or run `princex explain <TERM>`",
        "Get an instant explanation",
    ];

    Ok(match format {
        OutputFormat::Html => {
            let steps: String = usage
                .iter()
                .map(|step| format!("<li>{}</li>", escape_html(step)))
                .collect();
            format!(
                "<div class=\"logo\">PrinceX</div>\n<div class=\"tagline\">Your CS Concept Companion</div>\n\
                 <div class=\"info-box {}\">\n  <h3>{}</h3>\n  <p>{}</p>\n</div>\n\
                 <div class=\"info-box\">\n  <h3>How to Use</h3>\n  <ul class=\"steps\">{}</ul>\n</div>\n\
                 <div class=\"info-box\">\n  <h3>Free Concepts (No API needed)</h3>\n  <p>{}</p>\n</div>\n",
                if ai_configured { "success" } else { "warning" },
                status,
                escape_html(detail),
                steps,
                escape_html(&concepts.join(", "))
            )
        }
        _ => {
            let mut out = String::from("PrinceX\nYour CS Concept Companion\n\n");
            out.push_str(&format!("{}\n  {}\n\nHow to Use\n", status, detail));
            for step in usage {
                out.push_str(&format!("  - {}\n", step));
            }
            out.push_str(&format!(
                "\nFree Concepts (No API needed)\n  {}\n",
                concepts.join(", ")
            ));
            out
        }
    })
}

fn title_case(term: &str) -> String {
    term.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
