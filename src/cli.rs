//! CLI definitions for PrinceX.

use clap::{Parser, Subcommand, ValueEnum};

use princex_protocols::ProviderId;

/// PrinceX CLI.
#[derive(Parser)]
#[command(name = "princex")]
#[command(about = "Your CS concept companion: explain any selected term")]
#[command(version)]
pub(crate) struct Cli {
    /// Settings file path (default: ~/.princex/settings.toml)
    #[arg(short, long, env = "PRINCEX_SETTINGS", global = true)]
    pub settings: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// How explanations are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Explain a term
    Explain {
        /// Term to explain
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Explain the selection read from stdin, or show the welcome view when
    /// nothing is selected
    Popup {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Drive the explain panel interactively from stdin
    Panel,

    /// List concepts explained without an API key
    Concepts,

    /// List the models each provider offers
    Models {
        /// Only this provider (openai, anthropic, gemini)
        #[arg(short, long)]
        provider: Option<ProviderId>,
    },

    /// Settings management commands
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum SettingsAction {
    /// Show current settings (API key masked)
    Show,

    /// Update and save settings
    Set {
        /// Enable or disable AI explanations
        #[arg(long)]
        enable_ai: Option<bool>,

        /// AI provider (openai, anthropic, gemini)
        #[arg(long)]
        provider: Option<ProviderId>,

        /// API key for the provider
        #[arg(long)]
        api_key: Option<String>,

        /// Model name (empty for the provider default)
        #[arg(long)]
        model: Option<String>,
    },

    /// Check the settings file
    Validate,
}
