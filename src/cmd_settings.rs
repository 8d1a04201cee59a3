//! Settings and models subcommand handlers.

use std::path::Path;

use tracing::info;

use princex_config::{ConfigLoader, Settings, SettingsValidator, ValidationResult};
use princex_protocols::ProviderId;

use crate::cli::SettingsAction;

/// Field changes requested by `settings set`.
#[derive(Debug, Default)]
pub(crate) struct SettingsUpdate {
    pub enable_ai: Option<bool>,
    pub provider: Option<ProviderId>,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

/// Handle settings subcommands.
pub(crate) async fn handle_settings_command(
    action: SettingsAction,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SettingsAction::Show => settings_show(path),
        SettingsAction::Set {
            enable_ai,
            provider,
            api_key,
            model,
        } => {
            let update = SettingsUpdate {
                enable_ai,
                provider,
                api_key,
                model,
            };
            settings_set(path, update)
        }
        SettingsAction::Validate => settings_validate(path),
    }
}

/// Print the model catalog.
pub(crate) fn handle_models(provider: Option<ProviderId>) {
    let providers = match provider {
        Some(id) => vec![id],
        None => ProviderId::ALL.to_vec(),
    };

    for id in providers {
        println!("{}:", id);
        for model in id.models() {
            let marker = if model.id == id.default_model() {
                " (default)"
            } else {
                ""
            };
            println!("  {:<28} {}{}", model.id, model.label, marker);
        }
    }
}

fn settings_show(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let settings = ConfigLoader::load_or_default(path)?;

    println!("Settings file: {}", path.display());
    println!("  enable_ai:    {}", settings.enable_ai);
    println!("  api_provider: {}", settings.api_provider);
    if settings.model.trim().is_empty() {
        println!("  model:        {} (default)", settings.effective_model());
    } else {
        println!("  model:        {}", settings.effective_model());
    }
    println!("  api_key:      {}", settings.masked_api_key());

    print_validation(&SettingsValidator::validate(&settings));
    Ok(())
}

fn settings_set(path: &Path, update: SettingsUpdate) -> Result<(), Box<dyn std::error::Error>> {
    // `${VAR}` references stay unexpanded so secrets never land in the file.
    let current = ConfigLoader::load_raw_or_default(path)?;
    let updated = apply_update(current, update);

    let result = SettingsValidator::validate(&updated);
    print_validation(&result);
    if !result.is_valid() {
        return Err("Settings not saved".into());
    }

    ConfigLoader::save(path, &updated)?;
    info!(path = %path.display(), provider = %updated.api_provider, "Settings saved");
    println!("Settings saved to {}", path.display());
    Ok(())
}

fn settings_validate(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let settings = ConfigLoader::load_or_default(path)?;
    let result = SettingsValidator::validate(&settings);
    print_validation(&result);

    if result.is_valid() {
        println!("Settings are valid");
        Ok(())
    } else {
        Err(format!("{} error(s) in {}", result.errors.len(), path.display()).into())
    }
}

/// Apply requested changes. Switching provider drops a model the new
/// provider does not offer, so the new provider's default applies.
pub(crate) fn apply_update(mut settings: Settings, update: SettingsUpdate) -> Settings {
    if let Some(enable_ai) = update.enable_ai {
        settings.enable_ai = enable_ai;
    }
    if let Some(provider) = update.provider {
        if provider != settings.api_provider && !provider.offers_model(settings.model.trim()) {
            settings.model.clear();
        }
        settings.api_provider = provider;
    }
    if let Some(api_key) = update.api_key {
        settings.api_key = api_key;
    }
    if let Some(model) = update.model {
        settings.model = model;
    }
    settings
}

fn print_validation(result: &ValidationResult) {
    for error in &result.errors {
        eprintln!("error: {}: {}", error.path, error.message);
    }
    for warning in &result.warnings {
        eprintln!("warning: {}: {}", warning.path, warning.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn configured() -> Settings {
        Settings {
            enable_ai: true,
            api_provider: ProviderId::OpenAI,
            api_key: "sk-test".to_string(),
            model: "gpt-4o".to_string(),
        }
    }

    #[test]
    fn test_apply_update_fields() {
        let updated = apply_update(
            Settings::default(),
            SettingsUpdate {
                enable_ai: Some(false),
                api_key: Some("sk-new".to_string()),
                model: Some("gpt-4o".to_string()),
                ..Default::default()
            },
        );
        assert!(!updated.enable_ai);
        assert_eq!(updated.api_key, "sk-new");
        assert_eq!(updated.model, "gpt-4o");
        assert_eq!(updated.api_provider, ProviderId::OpenAI);
    }

    #[test]
    fn test_switching_provider_resets_foreign_model() {
        let updated = apply_update(
            configured(),
            SettingsUpdate {
                provider: Some(ProviderId::Gemini),
                ..Default::default()
            },
        );
        assert_eq!(updated.api_provider, ProviderId::Gemini);
        assert!(updated.model.is_empty());
        assert_eq!(updated.effective_model(), "gemini-1.5-flash");
    }

    #[test]
    fn test_switching_provider_with_explicit_model() {
        let updated = apply_update(
            configured(),
            SettingsUpdate {
                provider: Some(ProviderId::Anthropic),
                model: Some("claude-3-opus-20240229".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(updated.model, "claude-3-opus-20240229");
    }

    #[test]
    fn test_set_rejects_enabled_without_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");

        let result = settings_set(
            &path,
            SettingsUpdate {
                enable_ai: Some(true),
                ..Default::default()
            },
        );
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_set_saves_and_validates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        settings_set(
            &path,
            SettingsUpdate {
                provider: Some(ProviderId::Anthropic),
                api_key: Some("sk-ant".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let saved = ConfigLoader::load(&path).unwrap();
        assert_eq!(saved.api_provider, ProviderId::Anthropic);
        assert_eq!(saved.api_key, "sk-ant");
        assert!(settings_validate(&path).is_ok());
    }

    #[test]
    fn test_set_preserves_env_reference() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "api_key = \"${PRINCEX_SET_TEST_KEY}\"\n").unwrap();
        // SAFETY: unique test-only env var
        unsafe {
            std::env::set_var("PRINCEX_SET_TEST_KEY", "sk-real-secret");
        }

        settings_set(
            &path,
            SettingsUpdate {
                model: Some("gpt-4o".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("${PRINCEX_SET_TEST_KEY}"));
        assert!(!written.contains("sk-real-secret"));
        assert_eq!(ConfigLoader::load(&path).unwrap().api_key, "sk-real-secret");
    }

    #[test]
    fn test_set_with_unset_env_reference() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "api_key = \"${PRINCEX_SET_TEST_UNSET_KEY}\"\n").unwrap();

        settings_set(
            &path,
            SettingsUpdate {
                enable_ai: Some(false),
                ..Default::default()
            },
        )
        .unwrap();

        let raw = ConfigLoader::load_raw_or_default(&path).unwrap();
        assert!(!raw.enable_ai);
        assert_eq!(raw.api_key, "${PRINCEX_SET_TEST_UNSET_KEY}");
    }
}
