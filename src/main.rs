//! PrinceX - explain any selected computer-science term.
//!
//! Main entry point for the PrinceX CLI.

mod cli;
mod cmd_explain;
mod cmd_panel;
mod cmd_settings;
mod register;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::debug;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use princex_config::ConfigLoader;

use crate::cli::{Cli, Commands};
use crate::cmd_explain::{handle_concepts, handle_explain, handle_popup};
use crate::cmd_panel::handle_panel;
use crate::cmd_settings::{handle_models, handle_settings_command};
use crate::register::create_resolver;

/// Daily rolling log file in `log_dir` (normally `~/.princex/logs`).
fn file_appender(log_dir: &Path) -> Result<RollingFileAppender, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(log_dir)?;

    Ok(RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("princex")
        .filename_suffix("log")
        .max_log_files(7)
        .build(log_dir)?)
}

/// Initialize tracing with a stderr layer and, when the log directory is
/// usable, a daily rolling log file.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let appender = ConfigLoader::princex_dir()
        .map_err(Box::<dyn std::error::Error>::from)
        .and_then(|dir| file_appender(&dir.join("logs")));
    let (file_layer, file_error) = match appender {
        Ok(appender) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);

            // Keeps the writer flushing until exit.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
            (Some(layer), None)
        }
        Err(e) => (None, Some(e.to_string())),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        debug!("File logging disabled: {}", e);
    }
}

fn settings_path(explicit: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match explicit {
        Some(path) => Ok(ConfigLoader::expand_path(path)),
        None => Ok(ConfigLoader::default_path()?),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Explain { term, format } => {
            let resolver = create_resolver(&settings_path(cli.settings.as_deref())?);
            handle_explain(&resolver, &term, format).await
        }
        Commands::Popup { format } => {
            let path = settings_path(cli.settings.as_deref())?;
            let resolver = create_resolver(&path);
            handle_popup(&resolver, &path, format).await
        }
        Commands::Panel => {
            let resolver = create_resolver(&settings_path(cli.settings.as_deref())?);
            handle_panel(resolver).await
        }
        Commands::Concepts => {
            handle_concepts();
            Ok(())
        }
        Commands::Models { provider } => {
            handle_models(provider);
            Ok(())
        }
        Commands::Settings { action } => {
            handle_settings_command(action, &settings_path(cli.settings.as_deref())?).await
        }
    }
}
